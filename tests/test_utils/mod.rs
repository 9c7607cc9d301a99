//! Test utilities and fixtures for folio tests

#![allow(dead_code)]

use anyhow::{bail, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use folio::config::Config;
use folio::palette::{Host, PaletteStore};
use folio::tui::host::Environment;
use std::cell::RefCell;
use std::rc::Rc;

/// A host capability call, with the palette session as it was at call time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostCall {
    pub call: Call,
    pub was_open: bool,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Clipboard(String),
    Open(String),
    Navigate(String),
}

/// Host that records every capability call.
pub struct RecordingHost {
    pub store: PaletteStore,
    pub url: String,
    pub calls: Vec<HostCall>,
    pub fail_clipboard: bool,
    pub fail_open: bool,
}

impl RecordingHost {
    pub fn new(store: PaletteStore) -> Self {
        Self {
            store,
            url: "https://example.com/about".to_string(),
            calls: Vec::new(),
            fail_clipboard: false,
            fail_open: false,
        }
    }

    fn record(&mut self, call: Call) {
        self.calls.push(HostCall {
            call,
            was_open: self.store.is_open(),
            query: self.store.query(),
        });
    }
}

impl Host for RecordingHost {
    fn current_url(&self) -> String {
        self.url.clone()
    }

    fn write_clipboard(&mut self, text: &str) -> Result<()> {
        self.record(Call::Clipboard(text.to_string()));
        if self.fail_clipboard {
            bail!("clipboard denied");
        }
        Ok(())
    }

    fn open_in_new_context(&mut self, uri: &str) -> Result<()> {
        self.record(Call::Open(uri.to_string()));
        if self.fail_open {
            bail!("no opener");
        }
        Ok(())
    }

    fn navigate_to(&mut self, path: &str) {
        self.record(Call::Navigate(path.to_string()));
    }
}

/// Environment whose calls can be inspected after being moved into an `App`.
#[derive(Clone, Default)]
pub struct RecordingEnvironment {
    pub calls: Rc<RefCell<Vec<Call>>>,
    pub fail_clipboard: bool,
}

impl RecordingEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_clipboard() -> Self {
        Self {
            fail_clipboard: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl Environment for RecordingEnvironment {
    fn write_clipboard(&mut self, text: &str) -> Result<()> {
        self.calls.borrow_mut().push(Call::Clipboard(text.to_string()));
        if self.fail_clipboard {
            bail!("clipboard denied");
        }
        Ok(())
    }

    fn open_in_new_context(&mut self, uri: &str) -> Result<()> {
        self.calls.borrow_mut().push(Call::Open(uri.to_string()));
        Ok(())
    }
}

/// Default config with the deferred focus disabled so one tick focuses the input.
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.ui.focus_delay_ms = 0;
    config
}

pub fn key_event(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn key_event_ctrl(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn key_event_super(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::SUPER,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}
