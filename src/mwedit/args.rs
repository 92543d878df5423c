use clap::{Parser, Subcommand};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("GIT_COMMIT_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "mwedit")]
#[command(about = "Read, edit, diff, and browse Mediawiki articles from the command line")]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Buffer file to operate on
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Config file path (default: ~/.write.conf)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch an article into the buffer
    #[command(alias = "r")]
    Read {
        /// Article title (falls back to the buffer's remembered article)
        article: Option<String>,
    },

    /// Save the buffer back to the wiki
    #[command(alias = "w")]
    Write {
        /// Article title (falls back to the buffer's remembered article)
        article: Option<String>,
    },

    /// Diff the buffer against the live article
    #[command(alias = "d")]
    Diff {
        /// Article title (falls back to the buffer's remembered article)
        article: Option<String>,
    },

    /// Open the article in a browser
    #[command(alias = "b")]
    Browse {
        /// Article title (falls back to the buffer's remembered article)
        article: Option<String>,
    },
}
