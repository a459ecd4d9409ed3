// src/cli/args.rs
use clap::Parser;

/// Generate an interactive Leaflet map page and open it in the browser.
///
/// The map parameters are asked for interactively; press Enter to accept the
/// default shown in each prompt.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
pub struct Args {
    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write the page without opening a browser
    #[arg(long)]
    pub no_browser: bool,

    /// Print the resolved map parameters as JSON after writing the page
    #[arg(long)]
    pub json: bool,
}
