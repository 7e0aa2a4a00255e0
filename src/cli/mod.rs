pub mod core;
pub mod menus;
pub mod output;
pub mod prompts;
mod shell;
pub mod shell_context;
pub mod ui;

pub use shell::{run_cli, run_session};
pub use shell_context::ShellContext;
