use super::{BufferId, EditorHost};
use crate::error::{MwError, Result};
use std::collections::{HashMap, VecDeque};

/// One buffer of a [`MemHost`], with all metadata exposed for assertions.
#[derive(Debug, Default)]
pub struct MemBuffer {
    pub name: Option<String>,
    pub lines: Vec<String>,
    pub filetype: Option<String>,
    pub vars: HashMap<String, String>,
    pub scratch: bool,
    pub readonly: bool,
    pub diff: bool,
}

/// In-memory host with scripted prompt answers.
///
/// Prompts consume queued answers in order; an un-queued prompt is an
/// error, which doubles as the assertion that a code path never prompts.
#[derive(Debug, Default)]
pub struct MemHost {
    pub buffers: Vec<MemBuffer>,
    current: BufferId,
    vars: HashMap<String, String>,
    answers: VecDeque<String>,
    /// Every prompt message asked, in order.
    pub prompts: Vec<String>,
    /// Every URL passed to `open_url`, in order.
    pub opened_urls: Vec<String>,
}

impl MemHost {
    /// A host with a single empty, unnamed buffer.
    pub fn new() -> Self {
        Self {
            buffers: vec![MemBuffer::default()],
            ..Self::default()
        }
    }

    /// Queue an answer for the next interactive prompt.
    pub fn answer(mut self, answer: &str) -> Self {
        self.answers.push_back(answer.to_string());
        self
    }

    /// Seed the current buffer with content.
    pub fn with_lines(mut self, lines: &[&str]) -> Self {
        self.buffers[self.current].lines = lines.iter().map(|l| l.to_string()).collect();
        self
    }

    pub fn buffer(&self, buf: BufferId) -> &MemBuffer {
        &self.buffers[buf]
    }

    pub fn current_buffer(&self) -> &MemBuffer {
        &self.buffers[self.current]
    }
}

impl EditorHost for MemHost {
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
        self.buffers.push(MemBuffer::default());
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

    fn prompt(&mut self, message: &str, _default: &str) -> Result<String> {
        self.prompts.push(message.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| MwError::Host(format!("unexpected prompt: {}", message)))
    }

    fn open_url(&mut self, url: &str) -> Result<()> {
        self.opened_urls.push(url.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_switches_current() {
        let mut host = MemHost::new();
        assert_eq!(host.current(), 0);
        let buf = host.split_vertical();
        assert_eq!(buf, 1);
        assert_eq!(host.current(), 1);
    }

    #[test]
    fn test_unqueued_prompt_is_an_error() {
        let mut host = MemHost::new();
        assert!(host.prompt("URL: ", "").is_err());
        assert_eq!(host.prompts, vec!["URL: "]);
    }
}
