//! Message enum for Elm Architecture (TEA) pattern.
//!
//! All user actions in the shell are represented as messages, produced by the input
//! layer and applied by `App::update()`.

/// All possible user actions in the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────────────────────
    // App lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────────────────────
    // Page navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Go to a site path
    Navigate(String),
    /// Go back in route history
    NavigateBack,
    /// Scroll the page by delta lines
    ScrollPage(i32),

    // ─────────────────────────────────────────────────────────────────────────
    // Palette
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the command palette
    OpenPalette,
    /// Dismiss the palette without running anything
    ClosePalette,
    /// Add a character to the palette query
    PaletteInput(char),
    /// Remove the last character of the palette query
    PaletteBackspace,
    /// Clear the palette query
    PaletteClear,
    /// Move the active option down
    PaletteDown,
    /// Move the active option up
    PaletteUp,
    /// Run the active option
    PaletteConfirm,
    /// Run the option at the given result index
    PaletteSelect(usize),

    // ─────────────────────────────────────────────────────────────────────────
    // No-op
    // ─────────────────────────────────────────────────────────────────────────
    /// No operation (for unhandled keys)
    None,
}
