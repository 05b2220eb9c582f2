/// `s` concatenated with itself `count` times. Non-positive counts give "".
pub fn repeat(s: &str, count: i64) -> String {
    match usize::try_from(count) {
        Ok(count) => s.repeat(count),
        Err(_) => String::new(),
    }
}
