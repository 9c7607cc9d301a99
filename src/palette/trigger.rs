//! Document-level key listeners and the chord that opens the palette.

use super::store::PaletteStore;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Host platform, as far as the primary modifier and its glyph are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Apple,
    Other,
}

impl Platform {
    pub fn detect() -> Self {
        if cfg!(any(target_os = "macos", target_os = "ios")) {
            Platform::Apple
        } else {
            Platform::Other
        }
    }

    pub fn primary_modifier(self) -> KeyModifiers {
        match self {
            Platform::Apple => KeyModifiers::SUPER,
            Platform::Other => KeyModifiers::CONTROL,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Platform::Apple => "⌘",
            Platform::Other => "Ctrl",
        }
    }
}

/// Whether a listener consumed the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    /// Default handling must be skipped
    Prevented,
}

/// Identifies one installed listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&KeyEvent) -> Propagation>;

#[derive(Default)]
struct ListenerSet {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

/// Key listeners registered on the whole document, ahead of per-mode input handling.
///
/// Listeners must not add or remove listeners from inside their callback.
#[derive(Clone, Default)]
pub struct KeyListeners {
    inner: Rc<RefCell<ListenerSet>>,
}

impl KeyListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, listener: impl FnMut(&KeyEvent) -> Propagation + 'static) -> ListenerId {
        let mut set = self.inner.borrow_mut();
        let id = ListenerId(set.next_id);
        set.next_id += 1;
        set.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false when it was already gone.
    pub fn remove(&self, id: ListenerId) -> bool {
        let mut set = self.inner.borrow_mut();
        let before = set.listeners.len();
        set.listeners.retain(|(lid, _)| *lid != id);
        set.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run every listener in install order.
    pub fn dispatch(&self, key: &KeyEvent) -> Propagation {
        let mut set = self.inner.borrow_mut();
        let mut result = Propagation::Continue;
        for (_, listener) in set.listeners.iter_mut() {
            if listener(key) == Propagation::Prevented {
                result = Propagation::Prevented;
            }
        }
        result
    }

    fn downgrade(&self) -> Weak<RefCell<ListenerSet>> {
        Rc::downgrade(&self.inner)
    }
}

/// Removes its listener when dropped.
pub struct TriggerGuard {
    listeners: Weak<RefCell<ListenerSet>>,
    id: ListenerId,
}

impl Drop for TriggerGuard {
    fn drop(&mut self) {
        if let Some(inner) = self.listeners.upgrade() {
            KeyListeners { inner }.remove(self.id);
        }
    }
}

/// True for `k` (either case) held with Ctrl or Cmd. Release events never match.
pub fn is_open_chord(key: &KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    let primary = Platform::Apple.primary_modifier() | Platform::Other.primary_modifier();
    matches!(key.code, KeyCode::Char('k' | 'K')) && key.modifiers.intersects(primary)
}

/// Install the listener that opens the palette on the chord.
pub fn install_open_trigger(listeners: &KeyListeners, store: PaletteStore) -> TriggerGuard {
    let id = listeners.add(move |key| {
        if is_open_chord(key) {
            store.open();
            Propagation::Prevented
        } else {
            Propagation::Continue
        }
    });
    tracing::debug!(?id, "installed palette trigger");
    TriggerGuard {
        listeners: listeners.downgrade(),
        id,
    }
}

/// What the keyboard hint shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintMode {
    /// "Press <glyph> K to start"
    Chord { glyph: &'static str },
    /// "Tap to start", opens the palette on click
    Tap,
}

/// The "press to start" hint shown on the landing page.
#[derive(Debug, Clone)]
pub struct KeyboardHint {
    platform: Option<Platform>,
    touch_enabled: bool,
    compact: bool,
}

impl KeyboardHint {
    pub fn new(touch_enabled: bool) -> Self {
        Self {
            platform: None,
            touch_enabled,
            compact: false,
        }
    }

    /// Record the detected platform. Until then the Apple glyph is shown.
    pub fn detect(&mut self, platform: Platform) {
        self.platform = Some(platform);
    }

    pub fn is_detected(&self) -> bool {
        self.platform.is_some()
    }

    pub fn glyph(&self) -> &'static str {
        self.platform.unwrap_or(Platform::Apple).glyph()
    }

    /// Re-classify the viewport.
    pub fn on_resize(&mut self, width: u16, compact_width: u16) {
        self.compact = width < compact_width;
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    pub fn mode(&self) -> HintMode {
        if self.touch_enabled && self.compact {
            HintMode::Tap
        } else {
            HintMode::Chord { glyph: self.glyph() }
        }
    }
}
