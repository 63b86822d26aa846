//! get-changelog - announce module changelogs newer than a channel's version

use clap::Parser;

use relnotes::cli::GetChangelogCommand;
use relnotes::exit_codes;
use relnotes::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let guard = init_tracing("get-changelog");

    let cmd = GetChangelogCommand::parse();
    let code = cmd.execute()?;
    if code != exit_codes::SUCCESS {
        // process::exit skips destructors; flush the file log first.
        drop(guard);
        std::process::exit(code);
    }
    Ok(())
}
