use super::*;
use crate::color::Color;
use crate::test_utils::MockTerminal;

#[test]
fn test_new_screen_is_blank() {
    let screen = Screen::new(4, 10);
    assert_eq!(screen.rows(), 4);
    assert_eq!(screen.cols(), 10);
    for row in 0..4 {
        assert_eq!(screen.row_text(row), "");
    }
}

#[test]
fn test_put_str_writes_cells() {
    let mut screen = Screen::new(2, 20);
    screen.put_str(0, 0, "hello", Style::default());
    assert_eq!(screen.row_text(0), "hello");
    assert_eq!(screen.get_cell(0, 1).unwrap().symbol, 'e');
}

#[test]
fn test_put_str_clips_at_max_col() {
    let mut screen = Screen::new(2, 20);
    let end = screen.put_str_clipped(0, 0, "hello world", Style::default(), 5);
    assert_eq!(end, 5);
    assert_eq!(screen.row_text(0), "hello");
}

#[test]
fn test_put_str_replaces_control_chars() {
    let mut screen = Screen::new(2, 20);
    screen.put_str(0, 0, "a\tb", Style::default());
    assert_eq!(screen.row_text(0), "a b");
}

#[test]
fn test_wide_char_takes_two_columns() {
    let mut screen = Screen::new(2, 20);
    let end = screen.put_str(0, 0, "日本", Style::default());
    assert_eq!(end, 4);
    assert!(screen.get_cell(0, 1).unwrap().continuation);
    // Readback skips the continuation cells
    assert_eq!(screen.row_text(0), "日本");
}

#[test]
fn test_wide_char_does_not_straddle_clip_boundary() {
    let mut screen = Screen::new(2, 20);
    let end = screen.put_str_clipped(0, 0, "a日", Style::default(), 2);
    // The wide char would need columns 1-2; only 1 remains
    assert_eq!(end, 1);
    assert_eq!(screen.row_text(0), "a");
}

#[test]
fn test_out_of_bounds_writes_ignored() {
    let mut screen = Screen::new(2, 5);
    screen.set_cell(10, 10, Cell::new('x'));
    screen.put_str(5, 0, "nope", Style::default());
    assert_eq!(screen.row_text(0), "");
}

#[test]
fn test_first_flush_is_full_redraw() {
    let mut screen = Screen::new(2, 5);
    let mut term = MockTerminal::new(2, 5);
    let stats = screen.flush(&mut term).unwrap();
    assert!(stats.full_redraw);
    assert_eq!(term.clear_screen_calls, 1);
    assert_eq!(stats.total_cells, 10);
}

#[test]
fn test_second_flush_only_writes_changes() {
    let mut screen = Screen::new(2, 5);
    let mut term = MockTerminal::new(2, 5);
    screen.flush(&mut term).unwrap();

    screen.put_str(1, 0, "ab", Style::default());
    let stats = screen.flush(&mut term).unwrap();
    assert!(!stats.full_redraw);
    assert_eq!(stats.changed_cells, 2);
    assert!(term.written_string().contains("ab"));
}

#[test]
fn test_unchanged_flush_writes_nothing() {
    let mut screen = Screen::new(2, 5);
    let mut term = MockTerminal::new(2, 5);
    screen.put_str(0, 0, "x", Style::default());
    screen.flush(&mut term).unwrap();

    screen.clear();
    screen.put_str(0, 0, "x", Style::default());
    let stats = screen.flush(&mut term).unwrap();
    assert_eq!(stats.changed_cells, 0);
}

#[test]
fn test_resize_forces_full_redraw() {
    let mut screen = Screen::new(2, 5);
    let mut term = MockTerminal::new(2, 5);
    screen.flush(&mut term).unwrap();

    screen.resize(3, 6);
    assert_eq!(screen.rows(), 3);
    assert_eq!(screen.cols(), 6);
    let stats = screen.flush(&mut term).unwrap();
    assert!(stats.full_redraw);
}

#[test]
fn test_invalidate_forces_full_redraw() {
    let mut screen = Screen::new(2, 5);
    let mut term = MockTerminal::new(2, 5);
    screen.flush(&mut term).unwrap();
    screen.invalidate();
    let stats = screen.flush(&mut term).unwrap();
    assert!(stats.full_redraw);
}

#[test]
fn test_styled_cells_emit_color_sequences() {
    let mut screen = Screen::new(1, 5);
    let mut term = MockTerminal::new(1, 5);
    screen.put_str(0, 0, "E", Style::fg(Color::Red).bold());
    screen.flush(&mut term).unwrap();

    let written = term.written_string();
    assert!(written.contains('E'));
    // Some escape sequence was emitted for the styled cell
    assert!(written.contains('\x1b'));
}

#[test]
fn test_fill_row_paints_background() {
    let mut screen = Screen::new(2, 4);
    let style = Style::new(Color::Black, Color::Grey);
    screen.fill_row(1, style);
    for col in 0..4 {
        assert_eq!(screen.get_cell(1, col).unwrap().style.bg, Some(Color::Grey));
    }
}
