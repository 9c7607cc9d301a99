//! TUI rendering module.
//!
//! - `icons` - Nerd Font icons used throughout the UI
//! - `layout` - Layout calculations, hit-testing and text utilities
//! - `page` - Header, footer and page bodies
//! - `palette` - Command palette overlay

pub mod icons;
pub mod layout;
pub mod page;
pub mod palette;

// Re-export the main draw function
pub use self::draw::draw;

mod draw {
    use super::page::draw_page;
    use super::palette::draw_palette;
    use crate::tui::{App, PaletteSnapshot};
    use ratatui::Frame;

    /// Main draw function - renders the entire TUI.
    pub fn draw(f: &mut Frame, app: &App, palette: &PaletteSnapshot) {
        draw_page(f, app);

        // Overlay
        draw_palette(f, app, palette);
    }
}
