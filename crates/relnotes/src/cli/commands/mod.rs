//! CLI commands

mod compare;
mod translate;

pub use compare::GetChangelogCommand;
pub use translate::TranslateChangelogCommand;
