pub mod factorial;
pub mod repeat;

pub use factorial::{checked_factorial, factorial};
pub use repeat::repeat;
