use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "catalog", version, about = "Book catalog manager with Open Library lookup")]
pub struct Cli {
    /// Resolve ISBNs from an empty in-memory table instead of Open Library.
    #[arg(long, global = true)]
    pub offline: bool,

    /// Without a subcommand, asks which mode to start.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the interactive terminal menu.
    Terminal {
        /// Catalog file (overrides CATALOG_PATH).
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Run the REST API server.
    Serve {
        /// Catalog file (overrides CATALOG_PATH).
        #[arg(long)]
        file: Option<PathBuf>,

        /// Port to listen on (overrides PORT).
        #[arg(long)]
        port: Option<u16>,
    },
}
