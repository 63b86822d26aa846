//! translate-changelog - translate the newest untranslated changelog

use clap::Parser;

use relnotes::cli::TranslateChangelogCommand;
use relnotes::exit_codes;
use relnotes::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let guard = init_tracing("translate-changelog");

    let cmd = TranslateChangelogCommand::parse();
    let code = cmd.execute()?;
    if code != exit_codes::SUCCESS {
        drop(guard);
        std::process::exit(code);
    }
    Ok(())
}
