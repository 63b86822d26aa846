//! Relnotes - changelog announcement and translation tools
//!
//! Two binaries share this library:
//!
//! - `get-changelog` prints the newest local changelog version and, given a
//!   channel and module, announces every version newer than the one the
//!   channel currently runs
//! - `translate-changelog` translates the newest localized changelog that has
//!   no default-language counterpart yet

pub mod cli;
pub mod exit_codes;
pub mod logging;
