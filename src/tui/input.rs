//! Input dispatch layer for Elm Architecture (TEA) pattern.
//!
//! Maps key and mouse events to messages based on the current mode. The open chord
//! never reaches this layer: document listeners see every key first.

use super::ui::layout::{contains, palette_hit, PaletteHit};
use super::ui::{page, palette};
use super::{App, Message};
use crate::palette::view::rows;
use crate::site::NAV_ROUTES;
use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Modes the input layer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Reading a page
    Page,
    /// Palette open, input not yet focused
    PaletteOpening,
    /// Palette open and accepting typed text
    Palette,
}

pub fn current_mode(app: &App) -> Result<Mode> {
    let mode = if !app.palette()?.is_open() {
        Mode::Page
    } else if app.view.is_input_focused() {
        Mode::Palette
    } else {
        Mode::PaletteOpening
    };
    Ok(mode)
}

/// Map key events to messages based on current app mode.
pub fn dispatch(app: &App, key: KeyEvent) -> Result<Message> {
    if key.kind == KeyEventKind::Release {
        return Ok(Message::None);
    }
    let msg = match current_mode(app)? {
        Mode::Page => dispatch_page(key),
        Mode::PaletteOpening => dispatch_palette(key, false),
        Mode::Palette => dispatch_palette(key, true),
    };
    Ok(msg)
}

// ─────────────────────────────────────────────────────────────────────────────
// Mode-specific dispatch functions
// ─────────────────────────────────────────────────────────────────────────────

/// Handle keys while reading a page.
fn dispatch_page(key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Message::Quit,
        KeyCode::Char('q') => Message::Quit,
        KeyCode::Char('j') | KeyCode::Down => Message::ScrollPage(1),
        KeyCode::Char('k') | KeyCode::Up => Message::ScrollPage(-1),
        KeyCode::PageDown => Message::ScrollPage(10),
        KeyCode::PageUp => Message::ScrollPage(-10),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Backspace => Message::NavigateBack,
        KeyCode::Char(c) if ('1'..='3').contains(&c) => {
            let idx = (c as u8 - b'1') as usize;
            Message::Navigate(NAV_ROUTES[idx].1.to_string())
        }
        _ => Message::None,
    }
}

/// Handle keys while the palette is open. Text is only accepted once focused.
fn dispatch_palette(key: KeyEvent, focused: bool) -> Message {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Message::ClosePalette,
        KeyCode::Enter => Message::PaletteConfirm,
        KeyCode::Down => Message::PaletteDown,
        KeyCode::Up => Message::PaletteUp,
        KeyCode::Char('n') if ctrl => Message::PaletteDown,
        KeyCode::Char('p') if ctrl => Message::PaletteUp,
        KeyCode::Char('u') if ctrl && focused => Message::PaletteClear,
        KeyCode::Backspace if focused => Message::PaletteBackspace,
        KeyCode::Char(c) if focused && !ctrl => Message::PaletteInput(c),
        _ => Message::None,
    }
}

/// Map mouse events to messages.
pub fn dispatch_mouse(app: &App, mouse: MouseEvent) -> Result<Message> {
    let area = app.area;
    let mode = current_mode(app)?;
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {}
        MouseEventKind::ScrollDown if mode == Mode::Page => return Ok(Message::ScrollPage(1)),
        MouseEventKind::ScrollUp if mode == Mode::Page => return Ok(Message::ScrollPage(-1)),
        _ => return Ok(Message::None),
    }

    if mode == Mode::Page {
        let msg = match page::tap_target(app, area) {
            Some(rect) if contains(rect, mouse.column, mouse.row) => Message::OpenPalette,
            _ => Message::None,
        };
        return Ok(msg);
    }

    let snapshot = app.palette_snapshot()?;
    let panel = palette::panel_rect(&snapshot, area);
    let layout = rows(snapshot.results.len());
    let msg = match palette_hit(panel, &layout, mouse.column, mouse.row) {
        PaletteHit::Option(idx) => Message::PaletteSelect(idx),
        PaletteHit::Outside => Message::ClosePalette,
        PaletteHit::Panel => Message::None,
    };
    Ok(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn test_page_mode_keys() {
        assert_eq!(dispatch_page(key_event(KeyCode::Char('q'))), Message::Quit);
        assert_eq!(dispatch_page(key_event(KeyCode::Char('j'))), Message::ScrollPage(1));
        assert_eq!(
            dispatch_page(key_event(KeyCode::Char('2'))),
            Message::Navigate("/about".to_string())
        );
        assert_eq!(dispatch_page(key_event(KeyCode::Left)), Message::NavigateBack);
    }

    #[test]
    fn test_palette_text_requires_focus() {
        assert_eq!(
            dispatch_palette(key_event(KeyCode::Char('a')), true),
            Message::PaletteInput('a')
        );
        assert_eq!(dispatch_palette(key_event(KeyCode::Char('a')), false), Message::None);
        assert_eq!(dispatch_palette(key_event(KeyCode::Backspace), false), Message::None);
        // Escape and navigation work before focus lands
        assert_eq!(dispatch_palette(key_event(KeyCode::Esc), false), Message::ClosePalette);
        assert_eq!(dispatch_palette(key_event(KeyCode::Down), false), Message::PaletteDown);
    }

    #[test]
    fn test_palette_ctrl_keys() {
        let ctrl = |c| dispatch_palette(key_event_ctrl(KeyCode::Char(c)), true);
        assert_eq!(ctrl('n'), Message::PaletteDown);
        assert_eq!(ctrl('p'), Message::PaletteUp);
        assert_eq!(ctrl('u'), Message::PaletteClear);
        assert_eq!(ctrl('x'), Message::None);
    }
}
