use std::io;

use crate::cli::{
    core::{CliError, CommandError, LoopControl},
    menus::main_menu,
    prompts::{Prompter, ScriptPrompter, TerminalPrompter},
    ShellContext,
};
use crate::config::{CliMode, Config};

pub fn run_cli() -> Result<(), CliError> {
    let config = Config::from_env();
    colored::control::set_override(config.color);
    tracing::debug!(
        path = %config.store_path.display(),
        color = config.color,
        mode = ?config.mode,
        "starting session"
    );

    let mut context = ShellContext::new(&config)?;

    match config.mode {
        CliMode::Interactive => {
            let mut prompter = TerminalPrompter::new(config.color)?;
            run_session(&mut context, &mut prompter)?;
        }
        CliMode::Script => {
            let stdin = io::stdin();
            let mut prompter = ScriptPrompter::new(stdin.lock());
            run_session(&mut context, &mut prompter)?;
        }
    }
    Ok(())
}

/// Runs the main menu until the user exits, leaves the prompt blank or input
/// ends.
pub fn run_session(
    context: &mut ShellContext,
    prompter: &mut dyn Prompter,
) -> Result<(), CommandError> {
    loop {
        match main_menu::step(context, prompter)? {
            LoopControl::Continue => {}
            LoopControl::Exit => break,
        }
    }
    tracing::debug!("session finished");
    Ok(())
}
