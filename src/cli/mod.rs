pub mod cli;
pub mod run;

pub use cli::{Cli, Commands};
pub use run::run;
