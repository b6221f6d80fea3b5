/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Deadline still ahead → green, already passed → red.
pub fn color_for_deadline(open: bool) -> &'static str {
    if open { GREEN } else { RED }
}

/// Greys out the "no times available" placeholder, keeps real slots cyan.
pub fn colorize_slot(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        format!("{CYAN}{value}{RESET}")
    }
}
