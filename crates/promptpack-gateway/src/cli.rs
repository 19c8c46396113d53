use clap::{Parser, Subcommand};

/// Match requests to agent/skill documents and assemble instruction bundles
#[derive(Debug, Parser)]
#[command(name = "promptpack", version, about)]
pub struct Cli {
    /// Corpus root directory, overriding configuration
    #[arg(long, global = true)]
    pub corpus: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every document in the corpus
    List,

    /// Rank agent and skill documents against a free-text request
    Match {
        /// The request to match
        request: String,

        /// Maximum number of results
        #[arg(long)]
        top_k: Option<usize>,
    },

    /// Assemble an instruction bundle from explicit seed documents
    Assemble {
        /// Store paths of the seed documents, in precedence order
        #[arg(required = true)]
        paths: Vec<String>,

        /// Cap on included documents
        #[arg(long)]
        max_documents: Option<usize>,

        /// Cap on included body bytes
        #[arg(long)]
        max_bytes: Option<usize>,

        /// Print the full bundle report as JSON instead of the bundle text
        #[arg(long)]
        json: bool,
    },

    /// Match a request, then assemble a bundle from the top result
    Ask {
        /// The request to resolve
        request: String,

        /// Print the full bundle report as JSON instead of the bundle text
        #[arg(long)]
        json: bool,
    },
}
