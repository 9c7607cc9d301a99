//! Resolve a selected command into its effect.

use super::command::{Action, Command};
use super::store::PaletteStore;
use anyhow::Result;

/// Capabilities the dispatcher needs from whatever hosts the palette.
pub trait Host {
    /// Absolute URL of the page currently shown.
    fn current_url(&self) -> String;
    fn write_clipboard(&mut self, text: &str) -> Result<()>;
    /// Open `uri` somewhere that is not the current page.
    fn open_in_new_context(&mut self, uri: &str) -> Result<()>;
    /// Client-side route change within the site.
    fn navigate_to(&mut self, path: &str);
}

/// The effect a dispatch performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    CopyLink { url: String },
    OpenExternal { uri: String },
    Navigate { path: String },
}

/// Close the palette, then run the command's effect.
///
/// `None` leaves the palette untouched. Clipboard and opener failures are logged and
/// dropped; the palette stays closed either way.
pub fn dispatch(
    store: &PaletteStore,
    host: &mut dyn Host,
    command: Option<&Command>,
) -> Option<Effect> {
    let command = command?;

    store.close();

    let effect = match &command.action {
        Action::CopyLink => {
            let url = host.current_url();
            if let Err(e) = host.write_clipboard(&url) {
                tracing::debug!("Clipboard write failed: {}", e);
            }
            Effect::CopyLink { url }
        }
        Action::External(uri) => {
            if let Err(e) = host.open_in_new_context(uri) {
                tracing::warn!("Failed to open {}: {}", uri, e);
            }
            Effect::OpenExternal { uri: uri.clone() }
        }
        Action::Route(path) => {
            host.navigate_to(path);
            Effect::Navigate { path: path.clone() }
        }
    };

    tracing::info!(command = %command.id, ?effect, "dispatched command");
    Some(effect)
}
