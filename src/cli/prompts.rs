//! Line input behind a [`Prompter`] so menus run the same against a terminal
//! or a script.

use std::io::{self, BufRead};

use dialoguer::{
    theme::{ColorfulTheme, SimpleTheme, Theme},
    Input,
};
use rustyline::{error::ReadlineError, history::DefaultHistory, Editor};

use crate::cli::core::CommandError;

pub type PromptResult<T> = Result<T, CommandError>;

/// Source of user answers. `Ok(None)` means the input ended or was
/// interrupted; callers treat it as a cancel.
pub trait Prompter {
    /// Reads a menu selection.
    fn choice(&mut self, prompt: &str) -> PromptResult<Option<String>>;
    /// Reads a free-text field, which may be left empty.
    fn text(&mut self, prompt: &str) -> PromptResult<Option<String>>;
    /// Blocks until the user acknowledges `prompt`.
    fn pause(&mut self, prompt: &str) -> PromptResult<()>;
}

/// Interactive prompter: `rustyline` for menu choices (with history) and
/// `dialoguer` for field input.
pub struct TerminalPrompter {
    editor: Editor<(), DefaultHistory>,
    theme: Box<dyn Theme>,
}

impl TerminalPrompter {
    pub fn new(color: bool) -> PromptResult<Self> {
        let theme: Box<dyn Theme> = if color {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };
        Ok(Self {
            editor: Editor::new()?,
            theme,
        })
    }

    fn readline(&mut self, prompt: &str) -> PromptResult<Option<String>> {
        match self.editor.readline(&format!("{prompt} ")) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

impl Prompter for TerminalPrompter {
    fn choice(&mut self, prompt: &str) -> PromptResult<Option<String>> {
        let line = self.readline(prompt)?;
        if let Some(entry) = line.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
            self.editor.add_history_entry(entry).ok();
        }
        Ok(line)
    }

    fn text(&mut self, prompt: &str) -> PromptResult<Option<String>> {
        let prompt = prompt.trim_end().trim_end_matches(':');
        let answer = Input::<String>::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();
        match answer {
            Ok(value) => Ok(Some(value)),
            Err(dialoguer::Error::IO(err)) if is_cancel(&err) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn pause(&mut self, prompt: &str) -> PromptResult<()> {
        self.readline(prompt).map(|_| ())
    }
}

fn is_cancel(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof
    )
}

/// Reads one answer per line from any buffered reader. Used for
/// `PB_CLI_SCRIPT` mode and tests; prompts are not echoed.
pub struct ScriptPrompter<R> {
    reader: R,
}

impl<R: BufRead> ScriptPrompter<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn next_line(&mut self) -> PromptResult<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

impl<R: BufRead> Prompter for ScriptPrompter<R> {
    fn choice(&mut self, _prompt: &str) -> PromptResult<Option<String>> {
        self.next_line()
    }

    fn text(&mut self, _prompt: &str) -> PromptResult<Option<String>> {
        self.next_line()
    }

    fn pause(&mut self, _prompt: &str) -> PromptResult<()> {
        self.next_line().map(|_| ())
    }
}
