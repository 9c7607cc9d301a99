//! Tests for palette view states, grouping and selection.

use folio::palette::view::{rows, Row, GENERAL_HEADING, GO_TO_HEADING};
use folio::palette::{builtin_commands, filter, sections, Command, PaletteView, ViewState};
use pretty_assertions::assert_eq;
use std::time::{Duration, Instant};

fn ids(result: &[&Command]) -> Vec<String> {
    result.iter().map(|c| c.id.clone()).collect()
}

#[test]
fn test_all_builtins_split_three_and_two() {
    let results = filter("", builtin_commands());
    let grouped = sections(&results);

    assert_eq!(ids(grouped.general), ["home", "about", "projects"]);
    assert_eq!(
        grouped.go_to.map(ids),
        Some(vec!["send-email".to_string(), "view-source".to_string()])
    );
}

#[test]
fn test_go_to_absent_with_three_or_fewer_results() {
    let results = filter("p", builtin_commands());
    let grouped = sections(&results);

    assert_eq!(ids(grouped.general), ["home", "projects"]);
    assert_eq!(grouped.go_to, None);
}

#[test]
fn test_rows_layout_matches_sections() {
    assert_eq!(
        rows(5),
        vec![
            Row::Heading(GENERAL_HEADING),
            Row::Option(0),
            Row::Option(1),
            Row::Option(2),
            Row::Spacer,
            Row::Heading(GO_TO_HEADING),
            Row::Option(3),
            Row::Option(4),
        ]
    );
    assert_eq!(rows(1), vec![Row::Heading(GENERAL_HEADING), Row::Option(0)]);
    assert!(rows(0).is_empty());
}

#[test]
fn test_view_states_from_builtins() {
    let all = builtin_commands();
    let state = |open: bool, q: &str| ViewState::resolve(open, q, filter(q, all).len());

    assert_eq!(state(false, ""), ViewState::Closed);
    assert_eq!(state(true, ""), ViewState::OpenEmpty);
    assert_eq!(state(true, "email"), ViewState::OpenFiltered);
    assert_eq!(state(true, "xyz123"), ViewState::OpenNoResults);
}

#[test]
fn test_deferred_focus() {
    let mut view = PaletteView::new(Duration::from_millis(100));
    view.on_open();
    assert!(view.focus_pending());
    assert!(!view.is_input_focused());

    view.tick(Instant::now());
    assert!(!view.is_input_focused());

    view.tick(Instant::now() + Duration::from_millis(150));
    assert!(view.is_input_focused());
    assert!(!view.focus_pending());
}

#[test]
fn test_close_cancels_pending_focus() {
    let mut view = PaletteView::new(Duration::from_millis(100));
    view.on_open();
    view.on_close();
    view.tick(Instant::now() + Duration::from_secs(1));
    assert!(!view.is_input_focused());
}

#[test]
fn test_selection_is_clamped() {
    let mut view = PaletteView::new(Duration::ZERO);
    view.move_up(5);
    assert_eq!(view.active(5), Some(0));

    for _ in 0..10 {
        view.move_down(5);
    }
    assert_eq!(view.active(5), Some(4));

    // Fewer results after a query change clamps the stale index
    assert_eq!(view.active(2), Some(1));
    assert_eq!(view.active(0), None);

    view.on_query_changed();
    assert_eq!(view.active(5), Some(0));
}
