//! Child-facing fixed strings, shared so the TUI and web shells stay
//! in sync.

/// Header greeting.
pub const HEADER_TITLE: &str = "Hei! 👋 La oss lære sammen!";

/// Input placeholder.
pub const INPUT_PLACEHOLDER: &str = "Skriv din melding her...";

/// Footer helper lines.
pub const FOOTER_PRIMARY: &str = "Du kan spørre meg om hva som helst!";
pub const FOOTER_SECONDARY: &str = "(You can ask me anything!)";

/// Shown in the chat feed while canned replies are outstanding.
pub const TYPING_INDICATOR: &str = "skriver...";
