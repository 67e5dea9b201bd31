use crate::{pkg::server::listen, prelude::Result};
use clap::{Parser, Subcommand};

mod portfolio;

#[derive(Parser)]
#[command(about = "student portfolio intake service")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// Serve the application form, listing and detail pages
    Listen,
    /// Print the document database portfolio collection as JSON
    Portfolio,
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Listen) => {
            listen().await?;
        }
        Some(SubCommandType::Portfolio) => {
            portfolio::dump().await?;
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}
