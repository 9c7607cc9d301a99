//! Case-insensitive substring filter over command fields.
//!
//! Despite the palette calling it "search", there is no scoring: matches keep
//! registry order.

use super::command::Command;

/// Filter `commands` by `query`.
///
/// An empty query returns every command in order. Otherwise a command is kept when
/// the lower-cased query is a substring of its title, its subtitle, its shortcut keys
/// joined without separators, or any single shortcut key.
pub fn filter<'a>(query: &str, commands: &'a [Command]) -> Vec<&'a Command> {
    if query.is_empty() {
        return commands.iter().collect();
    }

    let needle = query.to_lowercase();
    commands
        .iter()
        .filter(|command| matches(command, &needle))
        .collect()
}

/// `needle` must already be lower-cased.
fn matches(command: &Command, needle: &str) -> bool {
    if command.title.to_lowercase().contains(needle)
        || command.subtitle.to_lowercase().contains(needle)
    {
        return true;
    }

    let joined = command.shortcut.concat().to_lowercase();
    if joined.contains(needle) {
        return true;
    }

    command
        .shortcut
        .iter()
        .any(|key| key.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::command::builtin_commands;

    fn ids(result: &[&Command]) -> Vec<String> {
        result.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let all = builtin_commands();
        assert_eq!(filter("", all).len(), all.len());
    }

    #[test]
    fn test_title_match() {
        assert_eq!(ids(&filter("source", builtin_commands())), ["view-source"]);
    }

    #[test]
    fn test_joined_shortcut_match() {
        // "gh" only appears as the joined shortcut of Home ("G" + "H")
        assert_eq!(ids(&filter("gh", builtin_commands())), ["home"]);
    }

    #[test]
    fn test_whitespace_is_literal() {
        assert_eq!(ids(&filter("send email", builtin_commands())), ["send-email"]);
        assert!(filter("  ", builtin_commands()).is_empty());
    }
}
