// ABOUTME: Version, banner, and prompt constants for the REPL.
// ABOUTME: Centralized here rather than inlined in main for readability.

pub const VERSION: &str = "0.0.1";

pub const BANNER: &str = "Lispy Version 0.0.1";
pub const BANNER_FOOTER: &str = "Press Ctrl+c to Exit";

pub const PROMPT: &str = "lispy> ";

/// REPL history is persisted across sessions in a dotfile in the working
/// directory.
pub const HISTORY_FILE: &str = "lispy_history.txt";
