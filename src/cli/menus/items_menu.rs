use crate::cli::{core::CommandResult, prompts::Prompter, ShellContext};
use crate::core::services::ItemService;
use crate::domain::{item_code::SEASONS, ItemCodeSpec, DEFAULT_SEASON};

use super::{MenuCommand, MenuEntry, Selection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemsCommand {
    Add,
    Manage,
}

static ENTRIES: [MenuEntry<ItemsCommand>; 2] = [
    MenuEntry::new(ItemsCommand::Add, "add", "Add item"),
    MenuEntry::new(ItemsCommand::Manage, "manage", "Manage existing items"),
];

impl MenuCommand for ItemsCommand {
    fn entries() -> &'static [MenuEntry<Self>] {
        &ENTRIES
    }
}

/// What to do with one selected item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemAction {
    Edit,
    Move,
    Delete,
}

static ACTIONS: [MenuEntry<ItemAction>; 3] = [
    MenuEntry::new(ItemAction::Edit, "edit", "Edit code"),
    MenuEntry::new(ItemAction::Move, "move", "Move to another category"),
    MenuEntry::new(ItemAction::Delete, "delete", "Delete item"),
];

impl MenuCommand for ItemAction {
    fn entries() -> &'static [MenuEntry<Self>] {
        &ACTIONS
    }
}

pub fn show(context: &mut ShellContext, prompter: &mut dyn Prompter) -> CommandResult {
    match super::prompt::<ItemsCommand>(context, prompter, "Items:", "Choose option (Enter to cancel):")? {
        Selection::Cancel => Ok(()),
        Selection::Invalid { suggestion } => {
            super::warn_invalid(context, suggestion);
            Ok(())
        }
        Selection::Command(ItemsCommand::Add) => add_item(context, prompter),
        Selection::Command(ItemsCommand::Manage) => manage_items(context, prompter),
    }
}

fn add_item(context: &mut ShellContext, prompter: &mut dyn Prompter) -> CommandResult {
    let Some(key) = context.choose_category(prompter)? else {
        context.output.warning("No category chosen.");
        return Ok(());
    };

    let Some(name) = prompter.text("Item name (e.g. laptop, toothbrush):")? else {
        return Ok(());
    };
    let mut spec = ItemCodeSpec::new(key, name);
    if spec.item_name().is_empty() {
        context.output.warning("Item name required.");
        return Ok(());
    }

    let Some(details) = prompter.text("Details (e.g. mb, ios) [Enter = none]:")? else {
        return Ok(());
    };
    let Some(season) = prompter.text(&season_prompt())? else {
        return Ok(());
    };
    let Some(index) = prompter.text("Index (a, b, c...) [Enter = none]:")? else {
        return Ok(());
    };
    spec = spec.with_details(details).with_season(season).with_index(index);

    let result = ItemService::add(&mut context.catalog, &spec);
    if let Some(code) = context.report(result) {
        context.output.success(format!("Added: {code}"));
    }
    Ok(())
}

fn season_prompt() -> String {
    let choices = SEASONS
        .iter()
        .map(|(code, label)| format!("{code}={label}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Season ({choices}) [default={DEFAULT_SEASON}]:")
}

fn manage_items(context: &mut ShellContext, prompter: &mut dyn Prompter) -> CommandResult {
    let Some(key) = context.choose_category(prompter)? else {
        context.output.warning("No category chosen.");
        return Ok(());
    };
    let name = context.catalog.category_name(&key).unwrap_or_default().to_string();
    let items = match context.report(ItemService::list(&context.catalog, &key)) {
        Some(items) => items.to_vec(),
        None => return Ok(()),
    };
    if items.is_empty() {
        context.output.warning(format!("No items in '{name}'."));
        return Ok(());
    }

    context.output.section(format!("Items in {name}:"));
    for (index, code) in items.iter().enumerate() {
        context.output.info(context.output.item_row(index + 1, code));
    }

    let Some(raw) = prompter.text("Choose item number to modify (Enter to cancel):")? else {
        return Ok(());
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(());
    }
    let Some(position) = parse_position(raw, items.len()) else {
        context.output.warning("Invalid selection.");
        return Ok(());
    };
    let code = &items[position];

    let title = format!("Modify item: {code}");
    match super::prompt::<ItemAction>(context, prompter, &title, "Choose action:")? {
        Selection::Cancel => Ok(()),
        Selection::Invalid { .. } => {
            context.output.warning("Unknown action.");
            Ok(())
        }
        Selection::Command(action) => run_action(context, prompter, &key, position, action),
    }
}

fn run_action(
    context: &mut ShellContext,
    prompter: &mut dyn Prompter,
    key: &str,
    position: usize,
    action: ItemAction,
) -> CommandResult {
    match action {
        ItemAction::Edit => {
            let replacement = prompter
                .text("New code (Enter to keep current):")?
                .unwrap_or_default();
            if replacement.trim().is_empty() {
                context.output.warning("No changes made.");
                return Ok(());
            }
            let result = ItemService::edit(&mut context.catalog, key, position, &replacement);
            if context.report(result).is_some() {
                context.output.success("Item updated.");
            }
        }
        ItemAction::Move => {
            let Some(destination) = context.choose_category(prompter)? else {
                context.output.warning("No category chosen.");
                return Ok(());
            };
            let result = ItemService::relocate(&mut context.catalog, key, position, &destination);
            if let Some(code) = context.report(result) {
                let name = context.catalog.category_name(&destination).unwrap_or_default();
                context.output.success(format!("Moved to {name} as {code}."));
            }
        }
        ItemAction::Delete => {
            let result = ItemService::remove(&mut context.catalog, key, position);
            if context.report(result).is_some() {
                context.output.success("Item deleted.");
            }
        }
    }
    Ok(())
}

/// Converts a 1-indexed selection into a list position.
fn parse_position(raw: &str, len: usize) -> Option<usize> {
    raw.parse::<usize>()
        .ok()
        .filter(|number| (1..=len).contains(number))
        .map(|number| number - 1)
}
