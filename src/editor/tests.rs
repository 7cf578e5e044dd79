use super::*;

fn editor_with(text: &str) -> QueryEditor {
    QueryEditor::new(text, EditorConfig::default())
}

fn type_str(editor: &mut QueryEditor, text: &str) {
    for ch in text.chars() {
        editor.handle_key(Key::Char(ch));
    }
}

#[test]
fn test_default_config_matches_widget_contract() {
    let config = EditorConfig::default();
    assert_eq!(config.language, "sql");
    assert_eq!(config.indent_unit, 4);
    assert!(config.indent_with_tabs);
    assert!(config.line_numbers);
    assert!(config.match_brackets);
    assert!(config.smart_indent);
    assert_eq!(config.completion_key, Key::Ctrl(' '));
}

#[test]
fn test_initial_value_preserved() {
    let editor = editor_with("SELECT * FROM Movie");
    assert_eq!(editor.value(), "SELECT * FROM Movie");
}

#[test]
fn test_typing_updates_value() {
    let mut editor = editor_with("");
    type_str(&mut editor, "SELECT 1");
    assert_eq!(editor.value(), "SELECT 1");
}

#[test]
fn test_set_value_replaces_content() {
    let mut editor = editor_with("old");
    editor.set_value("new");
    assert_eq!(editor.value(), "new");
}

#[test]
fn test_tab_inserts_tab_character() {
    let mut editor = editor_with("");
    editor.handle_key(Key::Tab);
    assert_eq!(editor.value(), "\t");
}

#[test]
fn test_tab_inserts_spaces_when_configured() {
    let config = EditorConfig {
        indent_with_tabs: false,
        ..EditorConfig::default()
    };
    let mut editor = QueryEditor::new("", config);
    editor.handle_key(Key::Tab);
    assert_eq!(editor.value(), "    ");
}

#[test]
fn test_backtab_removes_leading_indent() {
    let mut editor = editor_with("\tSELECT");
    editor.handle_key(Key::BackTab);
    assert_eq!(editor.value(), "SELECT");
}

#[test]
fn test_smart_indent_carries_leading_whitespace() {
    let mut editor = editor_with("\tSELECT *");
    editor.handle_key(Key::End);
    editor.handle_key(Key::Enter);
    assert_eq!(editor.value(), "\tSELECT *\n\t");
}

#[test]
fn test_smart_indent_deepens_after_open_paren() {
    let mut editor = editor_with("WHERE mID IN (");
    editor.handle_key(Key::End);
    editor.handle_key(Key::Enter);
    assert_eq!(editor.value(), "WHERE mID IN (\n\t");
}

#[test]
fn test_plain_newline_without_smart_indent() {
    let config = EditorConfig {
        smart_indent: false,
        ..EditorConfig::default()
    };
    let mut editor = QueryEditor::new("\tSELECT", config);
    editor.handle_key(Key::End);
    editor.handle_key(Key::Enter);
    assert_eq!(editor.value(), "\tSELECT\n");
}

#[test]
fn test_completion_opens_on_trigger_key() {
    let mut editor = editor_with("SEL");
    editor.handle_key(Key::End);
    editor.handle_key(Key::Ctrl(' '));
    let menu = editor.completion().expect("completion open");
    assert!(menu.items().contains(&"SELECT"));
}

#[test]
fn test_completion_accept_inserts_suffix() {
    let mut editor = editor_with("SEL");
    editor.handle_key(Key::End);
    editor.handle_key(Key::Ctrl(' '));
    editor.handle_key(Key::Enter);
    assert_eq!(editor.value(), "SELECT");
    assert!(editor.completion().is_none());
}

#[test]
fn test_completion_escape_dismisses() {
    let mut editor = editor_with("SEL");
    editor.handle_key(Key::End);
    editor.handle_key(Key::Ctrl(' '));
    editor.handle_key(Key::Escape);
    assert!(editor.completion().is_none());
    assert_eq!(editor.value(), "SEL");
}

#[test]
fn test_completion_narrows_as_user_types() {
    let mut editor = editor_with("S");
    editor.handle_key(Key::End);
    editor.handle_key(Key::Ctrl(' '));
    let before = editor.completion().expect("open").items().len();

    editor.handle_key(Key::Char('E'));
    let after = editor.completion().expect("still open").items().len();
    assert!(after < before);
    assert_eq!(editor.value(), "SE");
}

#[test]
fn test_completion_no_match_closes_popup() {
    let mut editor = editor_with("zzz");
    editor.handle_key(Key::End);
    editor.handle_key(Key::Ctrl(' '));
    assert!(editor.completion().is_none());
}

#[test]
fn test_unhandled_keys_are_ignored() {
    let mut editor = editor_with("x");
    assert!(matches!(
        editor.handle_key(Key::CtrlEnter),
        EventResult::Ignored
    ));
    assert!(matches!(editor.handle_key(Key::F(5)), EventResult::Ignored));
    assert_eq!(editor.value(), "x");
}

#[test]
fn test_bracket_match_exposed_when_enabled() {
    let mut editor = editor_with("count(x)");
    for _ in 0..5 {
        editor.handle_key(Key::ArrowRight);
    }
    assert!(editor.bracket_match().is_some());
}

#[test]
fn test_bracket_match_disabled_by_config() {
    let config = EditorConfig {
        match_brackets: false,
        ..EditorConfig::default()
    };
    let mut editor = QueryEditor::new("count(x)", config);
    for _ in 0..5 {
        editor.handle_key(Key::ArrowRight);
    }
    assert!(editor.bracket_match().is_none());
}
