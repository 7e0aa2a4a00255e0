use colored::Colorize;
use std::fmt;

/// Message categories used by the CLI output helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

/// Status-line printer. Styling is decided once, from configuration.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    color: bool,
}

fn build_label(kind: MessageKind) -> (&'static str, &'static str) {
    match kind {
        MessageKind::Success => ("OK:", "✔"),
        MessageKind::Warning => ("WARNING:", "⚠"),
        MessageKind::Error => ("ERROR:", "✖"),
        MessageKind::Info | MessageKind::Section => ("", ""),
    }
}

impl Output {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn format(&self, kind: MessageKind, message: impl fmt::Display) -> String {
        let text = message.to_string();
        match kind {
            MessageKind::Info => text,
            MessageKind::Section => {
                if self.color {
                    text.bold().cyan().to_string()
                } else {
                    text
                }
            }
            _ => {
                let (label, icon) = build_label(kind);
                if !self.color {
                    return format!("{label} {text}");
                }
                let base = format!("{icon} {text}");
                match kind {
                    MessageKind::Success => base.green().to_string(),
                    MessageKind::Warning => base.yellow().to_string(),
                    _ => base.red().to_string(),
                }
            }
        }
    }

    pub fn print(&self, kind: MessageKind, message: impl fmt::Display) {
        let formatted = self.format(kind, message);
        match kind {
            MessageKind::Section => println!("\n{formatted}"),
            _ => println!("{formatted}"),
        }
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.print(MessageKind::Info, message);
    }

    pub fn success(&self, message: impl fmt::Display) {
        self.print(MessageKind::Success, message);
    }

    pub fn warning(&self, message: impl fmt::Display) {
        self.print(MessageKind::Warning, message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.print(MessageKind::Error, message);
    }

    pub fn section(&self, title: impl fmt::Display) {
        self.print(MessageKind::Section, title);
    }

    /// `  key → name` row used whenever categories are listed.
    pub fn category_row(&self, key: &str, name: &str) -> String {
        if self.color {
            format!("  {} → {}", key.bold().magenta(), name.cyan())
        } else {
            format!("  {key} → {name}")
        }
    }

    /// `  n. code` row for 1-indexed item listings.
    pub fn item_row(&self, number: usize, code: &str) -> String {
        if self.color {
            format!("  {number}. {}", code.green())
        } else {
            format!("  {number}. {code}")
        }
    }

    pub fn hint(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }
}
