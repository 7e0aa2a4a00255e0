use crate::cli::{
    core::{CommandError, LoopControl},
    prompts::Prompter,
    ui::screen,
    ShellContext,
};
use crate::config::CliMode;
use crate::storage::to_yaml;

use super::{category_menu, items_menu, MenuCommand, MenuEntry, Selection};

const TITLE: &str = "=== personal-belongings manager ===";
const SHOW_TITLE: &str = "=== items (yaml) ===";
const RETURN_HINT: &str = "Press Enter to return to menu...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainCommand {
    Items,
    Categories,
    Show,
    Exit,
}

static ENTRIES: [MenuEntry<MainCommand>; 4] = [
    MenuEntry::new(MainCommand::Items, "items", "Items"),
    MenuEntry::new(MainCommand::Categories, "categories", "Categories"),
    MenuEntry::new(MainCommand::Show, "show", "Show items"),
    MenuEntry::new(MainCommand::Exit, "exit", "Exit"),
];

impl MenuCommand for MainCommand {
    fn entries() -> &'static [MenuEntry<Self>] {
        &ENTRIES
    }
}

impl MainCommand {
    /// Commands whose sub-menus may change the catalog; the catalog is saved
    /// after each of them.
    pub fn mutates(self) -> bool {
        matches!(self, MainCommand::Items | MainCommand::Categories)
    }
}

/// Shows the main menu once and runs the selected command.
pub fn step(
    context: &mut ShellContext,
    prompter: &mut dyn Prompter,
) -> Result<LoopControl, CommandError> {
    match super::prompt::<MainCommand>(context, prompter, TITLE, "Choose option:")? {
        Selection::Cancel => Ok(LoopControl::Exit),
        Selection::Invalid { suggestion } => {
            super::warn_invalid(context, suggestion);
            Ok(LoopControl::Continue)
        }
        Selection::Command(command) => dispatch(context, prompter, command),
    }
}

pub fn dispatch(
    context: &mut ShellContext,
    prompter: &mut dyn Prompter,
    command: MainCommand,
) -> Result<LoopControl, CommandError> {
    tracing::debug!(?command, "main menu command");
    match command {
        MainCommand::Items => items_menu::show(context, prompter)?,
        MainCommand::Categories => category_menu::show(context, prompter)?,
        MainCommand::Show => show_catalog(context, prompter)?,
        MainCommand::Exit => return Ok(LoopControl::Exit),
    }
    if command.mutates() {
        context.persist();
    }
    Ok(LoopControl::Continue)
}

fn show_catalog(context: &ShellContext, prompter: &mut dyn Prompter) -> Result<(), CommandError> {
    if context.mode == CliMode::Interactive {
        screen::clear()?;
    }
    context.output.section(SHOW_TITLE);
    match to_yaml(&context.catalog) {
        Ok(text) => context.output.info(context.colorizer.colorize(text.trim_end())),
        Err(err) => context.output.error(format!("Failed to render catalog: {err}")),
    }
    prompter.pause(&context.output.hint(RETURN_HINT))
}
