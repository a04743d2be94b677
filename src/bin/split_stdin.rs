//! Simple CLI that reads HTML from stdin and writes the split result as JSON
//! to stdout.
//!
//! Logging goes to stderr and is controlled with `RS_PARTIALS_LOG`.

use std::io::{self, Read};

use rs_partials::split_bytes;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("RS_PARTIALS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        eprintln!("failed to initialize tracing subscriber: {err}");
    }
}

fn main() {
    init_tracing();

    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let result = match split_bytes(&html) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("split failed: {err}");
            std::process::exit(1);
        }
    };

    match serde_json::to_string(&result) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("Failed to serialize result: {err}");
            std::process::exit(1);
        }
    }
}
