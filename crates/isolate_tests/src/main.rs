use anyhow::Result;
use clap::Parser;

use isolate_tests::logging::init_logging;
use isolate_tests::{run, Cli};
use scan_markers::DOCS_MODE_ARG;

fn main() -> Result<()> {
    let Some(config) = Cli::parse().into_config() else {
        println!(
            "Usage: isolate_tests path-to-file-or-folder-to-extract-code-from [{}]",
            DOCS_MODE_ARG
        );
        std::process::exit(1);
    };

    init_logging(config.verbose);

    let summary = run(&config)?;
    println!(
        "Wrote {} case(s) from {} file(s)",
        summary.cases_written, summary.files_scanned
    );
    Ok(())
}
