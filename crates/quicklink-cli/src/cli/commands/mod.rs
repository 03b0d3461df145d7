//! CLI command handlers. Each writes its result to the given writer so the
//! interactive shell can reuse them.

mod delete;
mod docs;
mod list;
mod retrieve;
mod shell;
mod shorten;

pub use delete::run_delete;
pub use docs::{run_completions, run_man};
pub use list::run_list;
pub use retrieve::run_retrieve;
pub use shell::run_shell;
pub use shorten::run_shorten;
