//! # Host editor boundary
//!
//! Everything the commands know about the editor they run inside goes
//! through the [`EditorHost`] trait: buffers and their metadata, vertical
//! splits, session variables, interactive prompts, and URL opening.
//!
//! ## Implementations
//!
//! - [`term::TermHost`]: production terminal host
//!   - buffers are in-memory line vectors, optionally backed by a file
//!   - prompts via `console`, diffs via the system `diff`, URLs via a
//!     probed opener command
//!
//! - [`mem::MemHost`]: in-memory host for testing
//!   - scripted prompt answers, recorded prompts and opened URLs
//!
//! Buffer lifecycle stays with the host. Commands create splits and mutate
//! buffer content and metadata, but never destroy a buffer.

use crate::error::Result;

pub mod mem;
pub mod term;

/// Identifies one buffer within a host. Never reused within a process.
pub type BufferId = usize;

/// Filetype assigned to buffers holding wiki markup.
pub const WIKI_FILETYPE: &str = "mediawiki";

/// Per-buffer variable remembering which article the buffer holds.
pub const ARTICLE_NAME_VAR: &str = "article_name";

pub trait EditorHost {
    /// The buffer user commands operate on.
    fn current(&self) -> BufferId;

    fn lines(&self, buf: BufferId) -> &[String];
    fn set_lines(&mut self, buf: BufferId, lines: Vec<String>);

    /// Display name of a buffer, as shown by the host.
    fn set_name(&mut self, buf: BufferId, name: &str);
    fn set_filetype(&mut self, buf: BufferId, filetype: &str);

    fn buffer_var(&self, buf: BufferId, key: &str) -> Option<String>;
    fn set_buffer_var(&mut self, buf: BufferId, key: &str, value: &str);

    /// Session-scoped variables, shared across buffers for the process
    /// lifetime.
    fn var(&self, key: &str) -> Option<String>;
    fn set_var(&mut self, key: &str, value: &str);

    /// Open a new empty buffer in a vertical split and make it current.
    fn split_vertical(&mut self) -> BufferId;

    /// Open a named buffer in a left-hand vertical split and make it
    /// current.
    fn split_vertical_named(&mut self, name: &str) -> BufferId;

    /// Turn a buffer into a scratch buffer: not backed by a file, unlisted,
    /// content discarded when hidden.
    fn mark_scratch(&mut self, buf: BufferId);

    fn set_readonly(&mut self, buf: BufferId);

    /// Include the buffer in the host's diff view.
    fn enable_diff(&mut self, buf: BufferId);

    /// Blocking interactive prompt. Hosts return the raw answer; callers
    /// decide what an empty answer means.
    fn prompt(&mut self, message: &str, default: &str) -> Result<String>;

    /// Open a URL with whatever browsing helper the host provides.
    fn open_url(&mut self, url: &str) -> Result<()>;
}

/// True when the buffer holds no content: no lines, or only empty lines
/// (hosts commonly represent a fresh buffer as a single empty line).
pub fn buffer_is_empty<H: EditorHost + ?Sized>(host: &H, buf: BufferId) -> bool {
    host.lines(buf).iter().all(|line| line.is_empty())
}
