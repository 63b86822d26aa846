//! Exit codes for the CLI

/// Success
pub const SUCCESS: i32 = 0;

/// General error: missing changelogs, unknown module, channel lookup failure
pub const ERROR: i32 = 1;
