//! svg-transformer-rs: SVG icon library generator.

mod cli;
mod config;
mod orchestrator;

use clap::Parser;
use cli::Args;
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match orchestrator::run(args).await {
        Ok(_) => Ok(()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
