use thiserror::Error;

pub type Result<T> = std::result::Result<T, MwError>;

/// Everything that can go wrong between the buffer and the wiki.
#[derive(Error, Debug)]
pub enum MwError {
    /// No explicit article argument and no remembered article on the buffer.
    #[error("No article specified.")]
    NoArticle,

    #[error("missing '{0}' in the [wiki] section of the config file")]
    MissingKey(&'static str),

    #[error("login failed: {0}")]
    Login(String),

    #[error("failed to edit {article}: {reason}")]
    Save { article: String, reason: String },

    #[error("could not read config file {path}: {message}")]
    Config { path: String, message: String },

    /// The wiki answered with something other than what was asked for.
    #[error("wiki API error: {0}")]
    Api(String),

    /// A host-side facility (prompt, opener, diff renderer) failed.
    #[error("{0}")]
    Host(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
