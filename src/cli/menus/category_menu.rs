use crate::cli::{core::CommandResult, prompts::Prompter, ShellContext};
use crate::core::services::CategoryService;

use super::{MenuCommand, MenuEntry, Selection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryCommand {
    Add,
    Delete,
    Modify,
}

static ENTRIES: [MenuEntry<CategoryCommand>; 3] = [
    MenuEntry::new(CategoryCommand::Add, "add", "Add category"),
    MenuEntry::new(CategoryCommand::Delete, "delete", "Delete category"),
    MenuEntry::new(CategoryCommand::Modify, "modify", "Modify category"),
];

impl MenuCommand for CategoryCommand {
    fn entries() -> &'static [MenuEntry<Self>] {
        &ENTRIES
    }
}

pub fn show(context: &mut ShellContext, prompter: &mut dyn Prompter) -> CommandResult {
    let selection = super::prompt::<CategoryCommand>(
        context,
        prompter,
        "Categories:",
        "Choose option (Enter to cancel):",
    )?;
    match selection {
        Selection::Cancel => Ok(()),
        Selection::Invalid { suggestion } => {
            super::warn_invalid(context, suggestion);
            Ok(())
        }
        Selection::Command(CategoryCommand::Add) => add_category(context, prompter),
        Selection::Command(CategoryCommand::Delete) => delete_category(context, prompter),
        Selection::Command(CategoryCommand::Modify) => modify_category(context, prompter),
    }
}

fn add_category(context: &mut ShellContext, prompter: &mut dyn Prompter) -> CommandResult {
    let Some(key) = prompter.text("Category key (one letter):")? else {
        return Ok(());
    };
    let Some(name) = prompter.text("Category name:")? else {
        return Ok(());
    };
    let result = CategoryService::add(&mut context.catalog, &key, &name);
    if context.report(result).is_some() {
        let key = key.trim().to_lowercase();
        let name = context.catalog.category_name(&key).unwrap_or_default();
        context
            .output
            .success(format!("Category added: {key} → {name}"));
    }
    Ok(())
}

fn delete_category(context: &mut ShellContext, prompter: &mut dyn Prompter) -> CommandResult {
    let Some(key) = context.choose_category(prompter)? else {
        context.output.warning("No category chosen.");
        return Ok(());
    };
    let result = CategoryService::remove(&mut context.catalog, &key);
    if let Some((name, purged)) = context.report(result) {
        context
            .output
            .success(format!("Category {key} → {name} deleted."));
        if purged > 0 {
            context.output.info(format!("Removed {purged} item(s)."));
        }
    }
    Ok(())
}

fn modify_category(context: &mut ShellContext, prompter: &mut dyn Prompter) -> CommandResult {
    let Some(old_key) = context.choose_category(prompter)? else {
        context.output.warning("No category chosen.");
        return Ok(());
    };
    let old_name = context
        .catalog
        .category_name(&old_key)
        .unwrap_or_default()
        .to_string();
    context
        .output
        .section(format!("Modify category {old_key} → {old_name}"));

    let Some(new_key) = prompter.text(&format!("New key (Enter to keep '{old_key}'):"))? else {
        return Ok(());
    };
    let Some(new_name) = prompter.text(&format!("New name (Enter to keep '{old_name}'):"))? else {
        return Ok(());
    };

    let result = CategoryService::modify(
        &mut context.catalog,
        &old_key,
        Some(new_key.as_str()),
        Some(new_name.as_str()),
    );
    if let Some(change) = context.report(result) {
        context.output.success("Category modified.");
        if change.rewritten_codes > 0 {
            context.output.info(format!(
                "Updated {} item code(s) to prefix `{}`.",
                change.rewritten_codes, change.key
            ));
        }
    }
    Ok(())
}
