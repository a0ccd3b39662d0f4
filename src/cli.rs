use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "newsrank",
    about = "Search and rank article snapshots from the command line",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a JSON article snapshot
    Search {
        /// Free-text query
        query: String,

        /// Path to the article snapshot (JSON)
        #[arg(short, long)]
        articles: String,

        /// Restrict results to one category
        #[arg(short, long)]
        category: Option<String>,

        /// Sort mode: relevance, date, or views
        #[arg(short, long, default_value = "relevance")]
        sort: String,

        /// Print at most this many results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Show the per-rule score breakdown for each result
        #[arg(long)]
        explain: bool,

        /// Record the query in this recent-searches file
        #[arg(long)]
        recent_file: Option<String>,
    },

    /// Show the most viewed articles in a snapshot
    Trending {
        /// Path to the article snapshot (JSON)
        #[arg(short, long)]
        articles: String,

        /// How many articles to show
        #[arg(short, long, default_value_t = 5)]
        count: usize,
    },

    /// Show the recent-searches list
    Recent {
        /// Path to the recent-searches file
        #[arg(long)]
        recent_file: String,
    },
}
