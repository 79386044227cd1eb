use clap::{Parser, Subcommand};
use strindex::config::ServerConfig;

#[derive(Parser, Debug)]
#[command(name = "strindex")]
#[command(version)]
#[command(about = "Analyze, store and query text strings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServerConfig),

    /// Print the derived properties of a string
    #[command(alias = "a")]
    Analyze {
        /// The string to analyze
        value: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Translate a natural-language query into a filter
    #[command(alias = "t")]
    Translate {
        /// The query, e.g. "single word palindromes longer than 3"
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}
