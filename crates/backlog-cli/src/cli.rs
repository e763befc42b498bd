use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "backlog")]
#[command(about = "A terminal backlog tracker with a kanban board view", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Directory holding items.json and archive.json (or set BACKLOG_DIR env var)
    #[arg(long, global = true, value_name = "DIR", env = "BACKLOG_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Print JSON responses instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new backlog item
    Add(AddArgs),
    /// List all backlog items in a three-column board
    List {
        /// Open the interactive board
        #[arg(short, long)]
        interactive: bool,
    },
    /// Update a backlog item by ID prefix
    Update(UpdateArgs),
    /// Delete a backlog item by ID prefix
    Delete {
        /// ID or leading part of an ID
        id: String,
    },
    /// Search titles, descriptions and tags
    Search {
        keyword: String,
    },
    /// Move every done item to the archive
    Archive,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct AddArgs {
    pub title: String,
    /// Description of the item
    #[arg(long)]
    pub desc: Option<String>,
    /// Due date in DD-MM-YYYY format
    #[arg(long)]
    pub due: Option<String>,
    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// ID or leading part of an ID
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub desc: Option<String>,
    /// New due date in DD-MM-YYYY format
    #[arg(long)]
    pub due: Option<String>,
    /// New comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,
    /// New status (todo, in-progress, done)
    #[arg(long)]
    pub status: Option<String>,
}
