//! Nerd Font icons used throughout the UI.

use crate::palette::Icon;
use crate::site::pages::Social;

pub const HOME: &str = "󰋜"; // nf-md-home
pub const USER: &str = "󰀄"; // nf-md-account
pub const BRIEFCASE: &str = "󰃖"; // nf-md-briefcase
pub const LINK: &str = "󰌷"; // nf-md-link
pub const ENVELOPE: &str = "󰇮"; // nf-md-email
pub const DOCUMENT_TEXT: &str = "󰈙"; // nf-md-file_document

pub const LINKEDIN: &str = "󰌻"; // nf-md-linkedin
pub const GITHUB: &str = "󰊤"; // nf-md-github
pub const INSTAGRAM: &str = "󰋾"; // nf-md-instagram

pub const SEARCH: &str = "󰍉"; // nf-md-magnify
pub const ARROW_RIGHT: &str = "→";

pub fn command_icon(icon: Icon) -> &'static str {
    match icon {
        Icon::Home => HOME,
        Icon::User => USER,
        Icon::Briefcase => BRIEFCASE,
        Icon::Link => LINK,
        Icon::Envelope => ENVELOPE,
        Icon::DocumentText => DOCUMENT_TEXT,
    }
}

pub fn social_icon(social: Social) -> &'static str {
    match social {
        Social::LinkedIn => LINKEDIN,
        Social::GitHub => GITHUB,
        Social::Instagram => INSTAGRAM,
        Social::Email => ENVELOPE,
    }
}
