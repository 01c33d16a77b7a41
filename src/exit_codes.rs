//! Process exit codes of the `tentmark` binary.

/// Invalid configuration, unreadable input or any other tool failure
pub const TOOL_ERROR: i32 = 2;

pub mod exit {
    use super::TOOL_ERROR;

    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR)
    }
}
