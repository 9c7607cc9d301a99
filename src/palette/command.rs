//! Command registry: the ordered list of entries the palette can launch.

use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Sentinel action that copies the current page URL.
pub const COPY_LINK: &str = "copy-link";

/// URI prefixes that open in a new context instead of routing in-app.
pub const EXTERNAL_SCHEMES: [&str; 2] = ["mailto:", "https://"];

/// Glyph carried by a command. Opaque to the palette logic; only the renderer looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Home,
    User,
    Briefcase,
    Link,
    Envelope,
    DocumentText,
}

/// What selecting a command does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Copy the current page URL to the clipboard
    CopyLink,
    /// Open an external URI in a new context
    External(String),
    /// Navigate to a path inside the site
    Route(String),
}

impl Action {
    pub fn parse(raw: &str) -> Self {
        if raw == COPY_LINK {
            Action::CopyLink
        } else if EXTERNAL_SCHEMES.iter().any(|s| raw.starts_with(s)) {
            Action::External(raw.to_string())
        } else {
            Action::Route(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Action::CopyLink => COPY_LINK,
            Action::External(uri) => uri,
            Action::Route(path) => path,
        }
    }
}

impl Serialize for Action {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Action::parse(&raw))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub icon: Icon,
    pub action: Action,
    /// Key labels shown as a hint next to the entry. Not bound to any listener.
    #[serde(default)]
    pub shortcut: Vec<String>,
}

impl Command {
    pub fn new(
        id: &str,
        title: &str,
        subtitle: &str,
        icon: Icon,
        action: &str,
        shortcut: &[&str],
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            icon,
            action: Action::parse(action),
            shortcut: shortcut.iter().map(|k| k.to_string()).collect(),
        }
    }
}

static BUILTIN: Lazy<Vec<Command>> = Lazy::new(|| {
    vec![
        Command::new("home", "Home", "Go to main portfolio", Icon::Home, "/home", &["G", "H"]),
        Command::new("about", "About", "Learn more about me", Icon::User, "/about", &["G", "A"]),
        Command::new(
            "projects",
            "Projects",
            "View my work and projects",
            Icon::Briefcase,
            "/projects",
            &["G", "P"],
        ),
        Command::new(
            "send-email",
            "Send Email",
            "Contact me via email",
            Icon::Envelope,
            "mailto:me@gbeltrami.com",
            &["E"],
        ),
        Command::new(
            "view-source",
            "View Source",
            "See the code on GitHub",
            Icon::DocumentText,
            "https://github.com/g-beltrami/personal-website",
            &["S"],
        ),
    ]
});

/// The five commands every shell starts with.
pub fn builtin_commands() -> &'static [Command] {
    &BUILTIN
}

/// Ordered, id-unique command list. Order is the display order before filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    commands: Vec<Command>,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            commands: builtin_commands().to_vec(),
        }
    }
}

impl Registry {
    /// Build a registry from an explicit list, rejecting duplicate ids.
    pub fn from_commands(commands: Vec<Command>) -> Result<Self> {
        let mut seen = HashSet::new();
        for command in &commands {
            if !seen.insert(command.id.as_str()) {
                bail!("duplicate command id '{}'", command.id);
            }
        }
        Ok(Self { commands })
    }

    /// Built-in commands followed by `extra`.
    pub fn with_extra(extra: &[Command]) -> Result<Self> {
        let mut commands = builtin_commands().to_vec();
        commands.extend_from_slice(extra);
        Self::from_commands(commands)
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
