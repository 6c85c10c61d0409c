//! Result formatting

pub mod console;
pub mod formatter;

/// Turn colored terminal output on or off for the whole process
pub fn set_color(enabled: bool) {
    if enabled {
        colored::control::unset_override();
    } else {
        colored::control::set_override(false);
    }
}
