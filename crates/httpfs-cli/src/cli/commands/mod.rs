//! CLI command handlers, one file per command.

mod cat;
mod exists;
mod stat;
mod visibility;

pub use cat::run_cat;
pub use exists::{run_dir_exists, run_exists};
pub use stat::run_stat;
pub use visibility::run_visibility;
