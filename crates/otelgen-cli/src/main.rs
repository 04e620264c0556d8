//! # otelgen: collector builder manifest generator
//!
//! Reads one or more collector pipeline configurations, resolves every
//! component they use against the upstream catalog, and writes the builder
//! manifest for a custom collector binary.

mod args;
mod generate;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::args::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);
    generate::execute(cli)
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
