//! Host capabilities backing the palette dispatcher.

use crate::palette::Host;
use crate::site::{page_url, Router};
use anyhow::{Context, Result};

/// Operating-system side effects: clipboard and external opener.
pub trait Environment {
    fn write_clipboard(&mut self, text: &str) -> Result<()>;
    fn open_in_new_context(&mut self, uri: &str) -> Result<()>;
}

/// The real environment. The clipboard is opened lazily on first use.
#[derive(Default)]
pub struct SystemEnvironment {
    clipboard: Option<arboard::Clipboard>,
}

impl SystemEnvironment {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Environment for SystemEnvironment {
    fn write_clipboard(&mut self, text: &str) -> Result<()> {
        if self.clipboard.is_none() {
            self.clipboard = Some(arboard::Clipboard::new().context("Clipboard unavailable")?);
        }
        if let Some(clipboard) = self.clipboard.as_mut() {
            clipboard
                .set_text(text.to_owned())
                .context("Failed to write clipboard")?;
        }
        Ok(())
    }

    fn open_in_new_context(&mut self, uri: &str) -> Result<()> {
        open_url(uri)
    }
}

#[cfg(target_os = "macos")]
fn open_url(url: &str) -> Result<()> {
    std::process::Command::new("open")
        .arg(url)
        .spawn()
        .with_context(|| format!("Failed to open {}", url))?;
    Ok(())
}

#[cfg(not(target_os = "macos"))]
fn open_url(url: &str) -> Result<()> {
    // xdg-open on Linux; wslview covers WSL without a desktop opener
    std::process::Command::new("xdg-open")
        .arg(url)
        .spawn()
        .or_else(|_| std::process::Command::new("wslview").arg(url).spawn())
        .with_context(|| format!("Failed to open {}", url))?;
    Ok(())
}

/// Binds the router and environment of one shell into a dispatcher `Host`.
pub struct ShellHost<'a> {
    pub base_url: &'a str,
    pub router: &'a mut Router,
    pub env: &'a mut dyn Environment,
}

impl Host for ShellHost<'_> {
    fn current_url(&self) -> String {
        page_url(self.base_url, self.router.current_path())
    }

    fn write_clipboard(&mut self, text: &str) -> Result<()> {
        self.env.write_clipboard(text)
    }

    fn open_in_new_context(&mut self, uri: &str) -> Result<()> {
        self.env.open_in_new_context(uri)
    }

    fn navigate_to(&mut self, path: &str) {
        self.router.navigate_to(path);
    }
}
