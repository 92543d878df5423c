//! Terminal host adapter.
//!
//! Buffers are in-memory line vectors for the duration of one command,
//! optionally backed by a file given on the command line. After a
//! successful command, [`TermHost::flush`] writes modified buffers back to
//! disk and renders any pending diff view through the system `diff`.

use super::{BufferId, EditorHost, ARTICLE_NAME_VAR, WIKI_FILETYPE};
use crate::error::{MwError, Result};
use colored::Colorize;
use console::Term;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Default)]
struct TermBuffer {
    name: Option<String>,
    lines: Vec<String>,
    filetype: Option<String>,
    vars: HashMap<String, String>,
    backing: Option<PathBuf>,
    scratch: bool,
    readonly: bool,
    diff: bool,
}

impl TermBuffer {
    fn text(&self) -> String {
        let mut text = self.lines.join("\n");
        if !text.ends_with('\n') {
            text.push('\n');
        }
        text
    }

    /// Where the buffer gets written on flush: its backing file, or a path
    /// derived from its name and filetype. Nameless unbacked buffers are
    /// not persisted.
    fn target_path(&self) -> Option<PathBuf> {
        if let Some(backing) = &self.backing {
            return Some(backing.clone());
        }
        let name = self.name.as_deref()?;
        let ext = match self.filetype.as_deref() {
            Some(WIKI_FILETYPE) => "wiki",
            _ => "txt",
        };
        Some(unique_path(&format!("{}.{}", sanitize(name), ext)))
    }
}

/// File names must not smuggle in path separators (wiki titles may contain
/// slashes, e.g. subpages).
fn sanitize(name: &str) -> String {
    name.replace(['/', '\\'], "_")
}

/// Avoid clobbering an unrelated file that happens to carry the article's
/// name: fall back to `name (2).ext`, `name (3).ext`, ...
fn unique_path(candidate: &str) -> PathBuf {
    let path = PathBuf::from(candidate);
    if !path.exists() {
        return path;
    }
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("buffer");
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("txt");
    for n in 2.. {
        let next = PathBuf::from(format!("{} ({}).{}", stem, n, ext));
        if !next.exists() {
            return next;
        }
    }
    unreachable!()
}

pub struct TermHost {
    term: Term,
    buffers: Vec<TermBuffer>,
    current: BufferId,
    vars: HashMap<String, String>,
}

impl Default for TermHost {
    fn default() -> Self {
        Self::new()
    }
}

impl TermHost {
    /// A host with a single empty, unnamed buffer.
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            buffers: vec![TermBuffer::default()],
            current: 0,
            vars: HashMap::new(),
        }
    }

    /// A host whose current buffer is backed by `path`. A missing file is
    /// an empty buffer that will be created on flush. The file stem seeds
    /// the buffer's remembered article name.
    pub fn open(path: &Path) -> Result<Self> {
        let mut buffer = TermBuffer {
            name: Some(path.display().to_string()),
            backing: Some(path.to_path_buf()),
            ..TermBuffer::default()
        };
        if path.exists() {
            let text = fs::read_to_string(path)?;
            buffer.lines = text.split('\n').map(str::to_string).collect();
            // A trailing newline is file formatting, not an extra buffer line.
            if buffer.lines.last().is_some_and(|l| l.is_empty()) {
                buffer.lines.pop();
            }
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            buffer
                .vars
                .insert(ARTICLE_NAME_VAR.to_string(), stem.to_string());
        }
        Ok(Self {
            term: Term::stderr(),
            buffers: vec![buffer],
            current: 0,
            vars: HashMap::new(),
        })
    }

    /// Write buffers back to disk and render any pending diff view. Called
    /// once after a successful command.
    pub fn flush(&mut self) -> Result<()> {
        self.render_diff()?;
        for buffer in &self.buffers {
            if buffer.scratch || buffer.readonly {
                continue;
            }
            let Some(path) = buffer.target_path() else {
                continue;
            };
            fs::write(&path, buffer.text())?;
        }
        Ok(())
    }

    /// Side-by-side diffing is an editor luxury; here, two diff-enabled
    /// buffers are handed to the system `diff` and the result is printed.
    fn render_diff(&self) -> Result<()> {
        let parties: Vec<&TermBuffer> = self.buffers.iter().filter(|b| b.diff).collect();
        if parties.len() < 2 {
            return Ok(());
        }
        let (local, remote) = (parties[0], parties[1]);

        let dir = env::temp_dir();
        let left = dir.join("mwedit-diff-local.wiki");
        let right = dir.join("mwedit-diff-remote.wiki");
        fs::write(&left, local.text())?;
        fs::write(&right, remote.text())?;

        let output = Command::new("diff")
            .arg("-u")
            .args(["--label", local.name.as_deref().unwrap_or("local")])
            .args(["--label", remote.name.as_deref().unwrap_or("remote")])
            .arg(&left)
            .arg(&right)
            .output()
            .map_err(|e| MwError::Host(format!("could not run diff: {}", e)));

        let _ = fs::remove_file(&left);
        let _ = fs::remove_file(&right);
        let output = output?;

        if output.stdout.is_empty() {
            println!("No differences.");
            return Ok(());
        }
        for line in String::from_utf8_lossy(&output.stdout).lines() {
            if line.starts_with("@@") {
                println!("{}", line.cyan());
            } else if line.starts_with('+') {
                println!("{}", line.green());
            } else if line.starts_with('-') {
                println!("{}", line.red());
            } else {
                println!("{}", line);
            }
        }
        Ok(())
    }
}

impl EditorHost for TermHost {
    fn current(&self) -> BufferId {
        self.current
    }

    fn lines(&self, buf: BufferId) -> &[String] {
        &self.buffers[buf].lines
    }

    fn set_lines(&mut self, buf: BufferId, lines: Vec<String>) {
        self.buffers[buf].lines = lines;
    }

    fn set_name(&mut self, buf: BufferId, name: &str) {
        self.buffers[buf].name = Some(name.to_string());
    }

    fn set_filetype(&mut self, buf: BufferId, filetype: &str) {
        self.buffers[buf].filetype = Some(filetype.to_string());
    }

    fn buffer_var(&self, buf: BufferId, key: &str) -> Option<String> {
        self.buffers[buf].vars.get(key).cloned()
    }

    fn set_buffer_var(&mut self, buf: BufferId, key: &str, value: &str) {
        self.buffers[buf]
            .vars
            .insert(key.to_string(), value.to_string());
    }

    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set_var(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }

    fn split_vertical(&mut self) -> BufferId {
        self.buffers.push(TermBuffer::default());
        self.current = self.buffers.len() - 1;
        self.current
    }

    fn split_vertical_named(&mut self, name: &str) -> BufferId {
        let buf = self.split_vertical();
        self.buffers[buf].name = Some(name.to_string());
        buf
    }

    fn mark_scratch(&mut self, buf: BufferId) {
        self.buffers[buf].scratch = true;
    }

    fn set_readonly(&mut self, buf: BufferId) {
        self.buffers[buf].readonly = true;
    }

    fn enable_diff(&mut self, buf: BufferId) {
        self.buffers[buf].diff = true;
    }

    fn prompt(&mut self, message: &str, default: &str) -> Result<String> {
        let shown = if default.is_empty() {
            message.to_string()
        } else {
            format!("{}[{}] ", message, default)
        };
        self.term.write_str(&shown)?;
        let answer = self.term.read_line()?;
        Ok(answer.trim().to_string())
    }

    /// Probe the available opener commands in preference order.
    fn open_url(&mut self, url: &str) -> Result<()> {
        for opener in ["xdg-open", "open"] {
            match Command::new(opener).arg(url).spawn() {
                Ok(mut child) => {
                    let _ = child.wait();
                    return Ok(());
                }
                Err(_) => continue,
            }
        }
        Err(MwError::Host(
            "no URL opener found (tried xdg-open and open)".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_path_separators() {
        assert_eq!(sanitize("Cat/Subpage"), "Cat_Subpage");
        assert_eq!(sanitize("Cat"), "Cat");
    }

    #[test]
    fn test_target_path_prefers_backing_file() {
        let buffer = TermBuffer {
            name: Some("Cat".to_string()),
            backing: Some(PathBuf::from("draft.wiki")),
            ..TermBuffer::default()
        };
        assert_eq!(buffer.target_path(), Some(PathBuf::from("draft.wiki")));
    }

    #[test]
    fn test_target_path_from_name_and_filetype() {
        let buffer = TermBuffer {
            name: Some("Cat".to_string()),
            filetype: Some(WIKI_FILETYPE.to_string()),
            ..TermBuffer::default()
        };
        assert_eq!(buffer.target_path(), Some(PathBuf::from("Cat.wiki")));
    }

    #[test]
    fn test_nameless_buffer_is_not_persisted() {
        let buffer = TermBuffer::default();
        assert_eq!(buffer.target_path(), None);
    }

    #[test]
    fn test_buffer_text_has_single_trailing_newline() {
        let buffer = TermBuffer {
            lines: vec!["a".to_string(), "b".to_string(), String::new()],
            ..TermBuffer::default()
        };
        assert_eq!(buffer.text(), "a\nb\n");
    }

    #[test]
    fn test_open_seeds_article_name_from_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Cat.wiki");
        fs::write(&path, "Felis catus\n").unwrap();

        let host = TermHost::open(&path).unwrap();
        assert_eq!(host.lines(0), ["Felis catus".to_string()]);
        assert_eq!(
            host.buffer_var(0, ARTICLE_NAME_VAR).as_deref(),
            Some("Cat")
        );
    }

    #[test]
    fn test_open_missing_file_is_empty_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let host = TermHost::open(&dir.path().join("New.wiki")).unwrap();
        assert!(host.lines(0).is_empty());
    }
}
