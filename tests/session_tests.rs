mod common;

use belongings_core::domain::Catalog;

use common::{run_script, seeded_catalog, seeded_store, temp_store_path};

#[test]
fn add_category_then_item() {
    let path = temp_store_path();
    let catalog = run_script(
        &path,
        "2\n1\nE\nelectronics\n1\n1\ne\nLaptop\n\nw\n\n\n",
    );
    assert_eq!(catalog.category_name("e"), Some("electronics"));
    assert_eq!(catalog.items["electronics"], vec!["e-laptop-w".to_string()]);
}

#[test]
fn item_with_all_fields_and_default_season() {
    let path = seeded_store();
    let catalog = run_script(&path, "1\n1\nc\nscarf\nwool\n\nb\n4\n");
    assert_eq!(
        catalog.items["clothes"],
        vec!["c-coat-w".to_string(), "c-scarf-wool-n-b".to_string()]
    );
}

#[test]
fn move_item_between_categories() {
    let path = seeded_store();
    let catalog = run_script(&path, "1\n2\ne\n1\n2\nc\n\n");
    assert_eq!(catalog.items["electronics"], vec!["e-phone-ios-n-a".to_string()]);
    assert_eq!(
        catalog.items["clothes"],
        vec!["c-coat-w".to_string(), "c-laptop-mb-w".to_string()]
    );
}

#[test]
fn edit_and_delete_items() {
    let path = seeded_store();
    let catalog = run_script(&path, "1\n2\ne\n2\nedit\ne-tablet-n\n1\n2\nc\n1\n3\n\n");
    assert_eq!(
        catalog.items["electronics"],
        vec!["e-laptop-mb-w".to_string(), "e-tablet-n".to_string()]
    );
    assert!(catalog.items["clothes"].is_empty());
}

#[test]
fn modify_category_key_rewrites_codes() {
    let path = seeded_store();
    let catalog = run_script(&path, "2\n3\ne\nx\n\n\n");
    assert!(catalog.category_name("e").is_none());
    assert_eq!(catalog.category_name("x"), Some("electronics"));
    assert_eq!(
        catalog.items["electronics"],
        vec!["x-laptop-mb-w".to_string(), "x-phone-ios-n-a".to_string()]
    );
}

#[test]
fn delete_category_by_name_command() {
    let path = seeded_store();
    let catalog = run_script(&path, "categories\ndelete\nc\nexit\n");
    assert!(catalog.category_name("c").is_none());
    assert!(!catalog.items.contains_key("clothes"));
}

#[test]
fn invalid_input_changes_nothing() {
    let path = seeded_store();
    let catalog = run_script(
        &path,
        "9\nitmes\n1\n1\nz\n1\n2\ne\n7\n2\n1\n\nname\n2\n3\ne\nc\n\n3\n\n4\n",
    );
    assert_eq!(catalog, seeded_catalog());
}

#[test]
fn end_of_input_inside_submenu_exits_cleanly() {
    let path = temp_store_path();
    let catalog = run_script(&path, "2\n1\ne");
    assert_eq!(catalog, Catalog::default());
}

#[test]
fn show_does_not_save() {
    let path = temp_store_path();
    run_script(&path, "3\n\n\n");
    assert!(!path.exists());
}
