#![allow(dead_code)]

use std::{io::Cursor, path::PathBuf, sync::Mutex};

use belongings_core::{
    cli::{prompts::ScriptPrompter, run_session, ShellContext},
    config::{CliMode, Config},
    domain::Catalog,
    storage::{CatalogStore, YamlStorage},
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Returns a catalog path inside a fresh temporary directory.
pub fn temp_store_path() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("pb.yaml");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

pub fn script_config(path: PathBuf) -> Config {
    Config {
        store_path: path,
        color: false,
        mode: CliMode::Script,
    }
}

/// Runs a whole menu session against `path`, feeding `input` line by line,
/// and returns what ended up on disk.
pub fn run_script(path: &PathBuf, input: &str) -> Catalog {
    let config = script_config(path.clone());
    let mut context = ShellContext::new(&config).expect("load catalog");
    let mut prompter = ScriptPrompter::new(Cursor::new(input.to_string()));
    run_session(&mut context, &mut prompter).expect("session runs");
    YamlStorage::new(path.clone()).load().expect("reload catalog")
}

pub fn seeded_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.categories.insert("e".into(), "electronics".into());
    catalog.categories.insert("c".into(), "clothes".into());
    catalog.items.insert(
        "electronics".into(),
        vec!["e-laptop-mb-w".into(), "e-phone-ios-n-a".into()],
    );
    catalog.items.insert("clothes".into(), vec!["c-coat-w".into()]);
    catalog
}

pub fn seeded_store() -> PathBuf {
    let path = temp_store_path();
    YamlStorage::new(path.clone())
        .save(&seeded_catalog())
        .expect("seed catalog");
    path
}
