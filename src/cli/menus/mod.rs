//! Numbered text menus dispatched through command enums.

pub mod category_menu;
pub mod items_menu;
pub mod main_menu;

use strsim::levenshtein;

use crate::cli::{core::CommandError, prompts::Prompter, ShellContext};

const SUGGESTION_DISTANCE: usize = 2;

/// One selectable row: typed by number or by name.
pub struct MenuEntry<C> {
    pub command: C,
    pub name: &'static str,
    pub label: &'static str,
}

impl<C> MenuEntry<C> {
    pub const fn new(command: C, name: &'static str, label: &'static str) -> Self {
        Self {
            command,
            name,
            label,
        }
    }
}

/// A command enum backed by a static entry table. Entries are numbered from 1
/// in table order.
pub trait MenuCommand: Copy + 'static {
    fn entries() -> &'static [MenuEntry<Self>];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<C> {
    Command(C),
    /// Blank input or end of input.
    Cancel,
    Invalid { suggestion: Option<&'static str> },
}

/// Matches `input` against an entry number or a case-insensitive name.
pub fn resolve<C: MenuCommand>(input: Option<&str>) -> Selection<C> {
    let Some(raw) = input.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Selection::Cancel;
    };
    let entries = C::entries();

    if let Ok(number) = raw.parse::<usize>() {
        return match number.checked_sub(1).and_then(|index| entries.get(index)) {
            Some(entry) => Selection::Command(entry.command),
            None => Selection::Invalid { suggestion: None },
        };
    }

    let needle = raw.to_lowercase();
    if let Some(entry) = entries.iter().find(|entry| entry.name == needle) {
        return Selection::Command(entry.command);
    }

    let suggestion = entries
        .iter()
        .map(|entry| (levenshtein(&needle, entry.name), entry.name))
        .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, name)| name);
    Selection::Invalid { suggestion }
}

pub fn render<C: MenuCommand>(context: &ShellContext, title: &str) {
    context.output.section(title);
    for (index, entry) in C::entries().iter().enumerate() {
        context.output.info(format!("{}. {}", index + 1, entry.label));
    }
}

/// Renders the menu and reads one selection.
pub fn prompt<C: MenuCommand>(
    context: &ShellContext,
    prompter: &mut dyn Prompter,
    title: &str,
    question: &str,
) -> Result<Selection<C>, CommandError> {
    render::<C>(context, title);
    let answer = prompter.choice(question)?;
    Ok(resolve(answer.as_deref()))
}

pub fn warn_invalid(context: &ShellContext, suggestion: Option<&str>) {
    match suggestion {
        Some(name) => context
            .output
            .warning(format!("Invalid choice. Did you mean `{name}`?")),
        None => context.output.warning("Invalid choice."),
    }
}
