//! Command palette: registry, shared state, chord trigger, filter, dispatcher and view.
//!
//! Flow: the chord listener (or a tap) opens the store, keystrokes edit the query,
//! `filter` narrows the registry, and `dispatch` closes the store before running the
//! selected command's effect.

pub mod command;
pub mod dispatch;
pub mod filter;
pub mod store;
pub mod trigger;
pub mod view;

pub use command::{builtin_commands, Action, Command, Icon, Registry};
pub use dispatch::{dispatch, Effect, Host};
pub use filter::filter;
pub use store::{PaletteStore, ShellContext};
pub use trigger::{install_open_trigger, KeyListeners, KeyboardHint, Platform, TriggerGuard};
pub use view::{sections, PaletteView, Sections, ViewState};
