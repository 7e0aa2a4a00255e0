//! Error and control-flow types shared by the menu loop.

use std::io;

use crate::errors::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Failures of the terminal itself. User-input mistakes are reported as
/// warnings and never reach this type.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
}

/// Errors surfaced by the `pb` binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to load catalog: {0}")]
    Store(#[from] StoreError),
    #[error(transparent)]
    Command(#[from] CommandError),
}
