//! Layout calculations and text utilities for the TUI.
//!
//! Anything the mouse handler needs to hit-test is computed here from the frame area
//! alone, so input and rendering always agree on where things are.

use crate::palette::view::Row;
use once_cell::sync::Lazy;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Pre-computed padding strings to avoid repeated " ".repeat(n) allocations.
static PADDING: Lazy<Vec<String>> = Lazy::new(|| (0..=100).map(|n| " ".repeat(n)).collect());

#[inline]
fn get_padding(width: usize) -> &'static str {
    &PADDING[width.min(100)]
}

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 1;
pub const PAGE_MARGIN: u16 = 2;

/// Lines above the list inside the palette: input and separator.
pub const PALETTE_INPUT_LINES: u16 = 2;
/// Height of the "No commands found." body.
pub const NO_RESULTS_LINES: u16 = 3;
const PALETTE_MIN_WIDTH: u16 = 44;
const PALETTE_MAX_WIDTH: u16 = 80;

/// Header, page body and footer.
pub struct PageLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn page_layout(area: Rect) -> PageLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);
    PageLayout {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

/// Page body with horizontal margins.
pub fn content_rect(area: Rect) -> Rect {
    let body = page_layout(area).body;
    Rect {
        x: body.x + PAGE_MARGIN,
        y: body.y + 1,
        width: body.width.saturating_sub(PAGE_MARGIN * 2),
        height: body.height.saturating_sub(1),
    }
}

/// Line offsets of the landing page body.
pub const LANDING_NAME_LINE: u16 = 2;
pub const LANDING_TAGLINE_LINE: u16 = 4;
pub const LANDING_HINT_LINE: u16 = 7;

/// Where the keyboard hint sits on the landing page.
pub fn landing_hint_rect(area: Rect, hint_width: u16) -> Rect {
    let content = content_rect(area);
    if content.height <= LANDING_HINT_LINE {
        return Rect::new(content.x, content.y, 0, 0);
    }
    Rect {
        x: content.x,
        y: content.y + LANDING_HINT_LINE,
        width: hint_width.min(content.width),
        height: 1,
    }
}

/// Palette panel for a list of `row_count` rows (0 means the no-results body).
pub fn palette_rect(area: Rect, row_count: usize, show_no_results: bool) -> Rect {
    let width = (area.width.saturating_mul(60) / 100)
        .clamp(PALETTE_MIN_WIDTH, PALETTE_MAX_WIDTH)
        .min(area.width.saturating_sub(2).max(1));

    let body = if show_no_results {
        NO_RESULTS_LINES
    } else {
        row_count as u16
    };
    // Borders + input + separator + body
    let height = (2 + PALETTE_INPUT_LINES + body).min(area.height.saturating_sub(2).max(1));

    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + (area.height / 6).min(area.height.saturating_sub(height));

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Area of the results list inside the palette panel.
pub fn palette_list_rect(panel: Rect) -> Rect {
    let inner_x = panel.x + 1;
    let inner_y = panel.y + 1;
    let inner_w = panel.width.saturating_sub(2);
    let inner_h = panel.height.saturating_sub(2);
    Rect {
        x: inner_x,
        y: inner_y + PALETTE_INPUT_LINES,
        width: inner_w,
        height: inner_h.saturating_sub(PALETTE_INPUT_LINES),
    }
}

/// Result of hit-testing a click against the open palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteHit {
    /// On an option row (index into the filtered results)
    Option(usize),
    /// Inside the panel but not on an option
    Panel,
    /// On the backdrop
    Outside,
}

pub fn palette_hit(panel: Rect, rows: &[Row], column: u16, row: u16) -> PaletteHit {
    if !contains(panel, column, row) {
        return PaletteHit::Outside;
    }
    let list = palette_list_rect(panel);
    if !contains(list, column, row) {
        return PaletteHit::Panel;
    }
    match rows.get((row - list.y) as usize) {
        Some(Row::Option(idx)) => PaletteHit::Option(*idx),
        _ => PaletteHit::Panel,
    }
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Calculate the display width of text (accounting for Unicode).
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Truncate text to a maximum display width.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > max_width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out
}

/// Truncate with a trailing "..." when the text does not fit.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    if display_width(s) <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return truncate_to_width(s, max_len);
    }
    let truncated = truncate_to_width(s, max_len.saturating_sub(3));
    format!("{truncated}...")
}

/// Pad (or truncate) text to exactly `width` display columns.
pub fn pad_to_width(text: &str, width: usize, alignment: Alignment) -> String {
    let text = truncate_to_width(text, width);
    let gap = width.saturating_sub(display_width(&text));
    match alignment {
        Alignment::Left => format!("{}{}", text, get_padding(gap)),
        Alignment::Right => format!("{}{}", get_padding(gap), text),
        Alignment::Center => {
            let left = gap / 2;
            format!("{}{}{}", get_padding(left), text, get_padding(gap - left))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::view::rows;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hello", 0), "");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("ab", 4, Alignment::Left), "ab  ");
        assert_eq!(pad_to_width("ab", 4, Alignment::Right), "  ab");
        assert_eq!(pad_to_width("abcdef", 3, Alignment::Left), "abc");
    }

    #[test]
    fn test_palette_hit_maps_rows() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = rows(5);
        let panel = palette_rect(area, layout.len(), false);
        let list = palette_list_rect(panel);

        // Row 0 is the GENERAL heading, row 1 the first option
        assert_eq!(palette_hit(panel, &layout, list.x + 1, list.y), PaletteHit::Panel);
        assert_eq!(palette_hit(panel, &layout, list.x + 1, list.y + 1), PaletteHit::Option(0));
        // After spacer and GO TO heading
        assert_eq!(palette_hit(panel, &layout, list.x + 1, list.y + 6), PaletteHit::Option(3));
        assert_eq!(palette_hit(panel, &layout, 0, 0), PaletteHit::Outside);
    }

    #[test]
    fn test_landing_hint_rect_inside_content() {
        let area = Rect::new(0, 0, 80, 24);
        let hint = landing_hint_rect(area, 20);
        let content = content_rect(area);
        assert_eq!(hint.y, content.y + LANDING_HINT_LINE);
        assert_eq!(hint.width, 20);
    }
}
