//! Palette view state: which screen is showing, grouping, selection and focus.

use super::command::Command;
use std::time::{Duration, Instant};

/// Number of results shown under the "general" heading.
pub const GENERAL_LEN: usize = 3;

pub const GENERAL_HEADING: &str = "GENERAL";
pub const GO_TO_HEADING: &str = "GO TO";
pub const NO_RESULTS: &str = "No commands found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Closed,
    /// Open with an empty query
    OpenEmpty,
    OpenFiltered,
    OpenNoResults,
}

impl ViewState {
    pub fn resolve(is_open: bool, query: &str, result_count: usize) -> Self {
        if !is_open {
            ViewState::Closed
        } else if query.is_empty() {
            ViewState::OpenEmpty
        } else if result_count == 0 {
            ViewState::OpenNoResults
        } else {
            ViewState::OpenFiltered
        }
    }

    pub fn is_open(self) -> bool {
        !matches!(self, ViewState::Closed)
    }
}

/// Filtered results split under the two headings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sections<'a> {
    pub general: &'a [&'a Command],
    /// Absent when there are no more than `GENERAL_LEN` results
    pub go_to: Option<&'a [&'a Command]>,
}

pub fn sections<'a>(results: &'a [&'a Command]) -> Sections<'a> {
    let split = results.len().min(GENERAL_LEN);
    let (general, rest) = results.split_at(split);
    Sections {
        general,
        go_to: if rest.is_empty() { None } else { Some(rest) },
    }
}

/// One line of the results list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Heading(&'static str),
    Spacer,
    /// Index into the filtered results
    Option(usize),
}

/// Lay out the list for `result_count` results. Rendering and mouse hit-testing both
/// read from this, so a clicked row always maps to the option drawn there.
pub fn rows(result_count: usize) -> Vec<Row> {
    if result_count == 0 {
        return Vec::new();
    }
    let mut rows = vec![Row::Heading(GENERAL_HEADING)];
    rows.extend((0..result_count.min(GENERAL_LEN)).map(Row::Option));
    if result_count > GENERAL_LEN {
        rows.push(Row::Spacer);
        rows.push(Row::Heading(GO_TO_HEADING));
        rows.extend((GENERAL_LEN..result_count).map(Row::Option));
    }
    rows
}

/// Per-shell view state that is not shared with the store.
#[derive(Debug, Clone)]
pub struct PaletteView {
    active: usize,
    focus_delay: Duration,
    focus_at: Option<Instant>,
    input_focused: bool,
}

impl PaletteView {
    pub fn new(focus_delay: Duration) -> Self {
        Self {
            active: 0,
            focus_delay,
            focus_at: None,
            input_focused: false,
        }
    }

    /// Arm the one-shot deferred focus.
    pub fn on_open(&mut self) {
        self.active = 0;
        self.input_focused = false;
        self.focus_at = Some(Instant::now() + self.focus_delay);
    }

    pub fn on_close(&mut self) {
        self.active = 0;
        self.input_focused = false;
        self.focus_at = None;
    }

    /// Focus the input once the deferred focus is due.
    pub fn tick(&mut self, now: Instant) {
        if let Some(at) = self.focus_at {
            if now >= at {
                self.focus_at = None;
                self.input_focused = true;
            }
        }
    }

    pub fn is_input_focused(&self) -> bool {
        self.input_focused
    }

    pub fn focus_pending(&self) -> bool {
        self.focus_at.is_some()
    }

    /// The query changed; the first result becomes active.
    pub fn on_query_changed(&mut self) {
        self.active = 0;
    }

    /// Active option index, clamped to the current results.
    pub fn active(&self, result_count: usize) -> Option<usize> {
        if result_count == 0 {
            None
        } else {
            Some(self.active.min(result_count - 1))
        }
    }

    pub fn move_down(&mut self, result_count: usize) {
        if result_count > 0 {
            self.active = (self.active + 1).min(result_count - 1);
        }
    }

    pub fn move_up(&mut self, result_count: usize) {
        self.active = self.active.min(result_count.saturating_sub(1)).saturating_sub(1);
    }

    pub fn set_active(&mut self, idx: usize) {
        self.active = idx;
    }
}
