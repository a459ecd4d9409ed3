// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use anyhow::Result;
use application::{BrowserLauncher, BrowserOutcome, GeneratedPage, MapGenerator, PageWriter};
use domain::RequestDefaults;
use infrastructure::{FilePageWriter, SystemBrowser};
use ports::Prompter;
use tracing::debug;
use crate::cli::args::Args;

pub fn run(args: Args) -> Result<()> {
    let stdin = io::stdin();
    run_with(
        &args,
        stdin.lock(),
        io::stdout().lock(),
        FilePageWriter::new(),
        SystemBrowser::new(),
        constants::OUTPUT_FILE_NAME,
    )?;
    Ok(())
}

/// Interactive session over arbitrary console streams and adapters.
///
/// Prompts, the result report and the `--json` dump all go to `output`.
pub fn run_with<R, W, P, B>(
    args: &Args,
    input: R,
    mut output: W,
    writer: P,
    browser: B,
    output_path: impl Into<PathBuf>,
) -> Result<GeneratedPage>
where
    R: BufRead,
    W: Write,
    P: PageWriter,
    B: BrowserLauncher,
{
    debug!(?args, "Starting mapview with arguments");

    writeln!(output, "=== mapview ===")?;
    writeln!(output, "Leave a field empty and press Enter to use the default value.\n")?;

    let mut generator = MapGenerator::new(writer, browser, output_path);
    if args.no_browser {
        generator = generator.without_browser();
    }

    let page = {
        let mut prompter = Prompter::new(input, &mut output);
        generator.run(&mut prompter, &RequestDefaults::default())?
    };

    writeln!(output, "\nMap written to: {}", page.path.display())?;
    match &page.browser {
        BrowserOutcome::Opened => writeln!(output, "Opening the map in your browser...")?,
        BrowserOutcome::Skipped => writeln!(output, "Browser launch skipped.")?,
        BrowserOutcome::Failed(reason) => writeln!(
            output,
            "Warning: could not open the browser automatically: {reason}"
        )?,
    }

    if args.json {
        serde_json::to_writer_pretty(&mut output, &page.request)?;
        writeln!(output)?;
    }
    output.flush()?;

    Ok(page)
}
