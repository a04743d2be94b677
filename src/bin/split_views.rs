//! Split an HTML file into EJS views on disk.
//!
//! ```text
//! split_views page.html --out views
//! ```
//!
//! writes `views/index.ejs` and `views/partials/<name>.ejs`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rs_partials::{split_bytes_with_options, write_views_with_options, Options};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "split_views", version, about = "Split an HTML page into EJS partials")]
struct Cli {
    /// HTML file to split.
    input: PathBuf,

    /// Output directory for `index.ejs` and the partials directory.
    #[arg(short, long, default_value = "views")]
    out: PathBuf,

    /// Subdirectory for partials, also used in include paths.
    #[arg(long, default_value = "partials")]
    partials_dir: String,

    /// Keep the main template unformatted.
    #[arg(long)]
    no_format: bool,

    /// Pretty-print partial bodies too.
    #[arg(long)]
    format_partials: bool,

    /// Debug logging.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Errors only.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            format_output: !self.no_format,
            format_partials: self.format_partials,
            partials_dir: self.partials_dir.clone(),
            ..Options::default()
        }
    }
}

fn init_tracing(quiet: bool, verbose: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_env("RS_PARTIALS_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("failed to initialize tracing subscriber: {err}");
    }
}

fn run(cli: &Cli) -> rs_partials::Result<()> {
    let html = std::fs::read(&cli.input)?;
    let options = cli.options();

    let result = split_bytes_with_options(&html, &options)?;
    for warning in &result.warnings {
        tracing::warn!("{warning}");
    }

    let written = write_views_with_options(&result, &cli.out, &options)?;
    tracing::info!(
        partials = result.partials.len(),
        files = written.len(),
        "split {}",
        cli.input.display()
    );
    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("split_views error: {err}");
            ExitCode::FAILURE
        }
    }
}
