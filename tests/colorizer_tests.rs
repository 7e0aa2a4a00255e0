mod common;

use belongings_core::{
    cli::ui::colorizer::{classify_line, LineKind, Token, ValueKind},
    storage::to_yaml,
};

use common::seeded_catalog;

#[test]
fn serialized_catalog_classifies_line_by_line() {
    let yaml = to_yaml(&seeded_catalog()).unwrap();
    let lines: Vec<_> = yaml.lines().map(classify_line).collect();

    let header = &lines[0];
    assert_eq!(header.kind, LineKind::KeyValue);
    assert_eq!(header.text_of(Token::TopLevelKey), Some("categories"));

    let mapping = lines
        .iter()
        .find(|line| line.text_of(Token::Key) == Some("e"))
        .expect("nested category key");
    assert_eq!(mapping.value_kind(), Some(ValueKind::Text));

    let items: Vec<_> = lines
        .iter()
        .filter(|line| line.kind == LineKind::ListItem)
        .collect();
    assert_eq!(items.len(), 3);
    assert!(items
        .iter()
        .all(|line| line.text_of(Token::ListMarker).is_some()));
}

#[test]
fn value_shapes_on_single_lines() {
    assert_eq!(classify_line("key: 42").value_kind(), Some(ValueKind::Number));
    assert_eq!(classify_line("key: \"abc\"").value_kind(), Some(ValueKind::Quoted));
    assert_eq!(classify_line("- x").spans[0].token, Token::ListMarker);
    assert_eq!(classify_line("flag: true").value_kind(), Some(ValueKind::Boolean));
    assert_eq!(classify_line("empty: {}").value_kind(), Some(ValueKind::Punctuation));
    assert_eq!(classify_line("gone: null").value_kind(), Some(ValueKind::Null));
    assert_eq!(classify_line("# comment").kind, LineKind::Comment);
}
