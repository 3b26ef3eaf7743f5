use std::io::{self, Write};
use std::process::ExitCode;

use rufind::cli;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(parsed) = cli::parse(&args) else {
        eprintln!("{}", cli::USAGE);
        return ExitCode::FAILURE;
    };

    // A walk that fails outright is logged and reported as "nothing found" —
    // the finder's contract is a best-effort listing, not a hard failure.
    let results = match rufind::find().rules(parsed.rules).run(&parsed.base) {
        Ok(results) => results,
        Err(e) => {
            log::error!("search of {} failed: {e}", parsed.base.display());
            Vec::new()
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = cli::report(&mut stdout, &results) {
        log::error!("could not write results: {e}");
        return ExitCode::FAILURE;
    }
    let _ = stdout.flush();
    ExitCode::SUCCESS
}
