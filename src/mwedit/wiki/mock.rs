//! Scripted wiki double for tests: canned pages, recorded calls, and
//! failures on demand. State is behind a shared handle so tests can keep
//! inspecting it after the connector moves into a session manager.

use super::{Connector, SaveOutcome, SiteParams, WikiClient};
use crate::error::{MwError, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
pub struct MockState {
    pub pages: HashMap<String, String>,
    /// Fail this many logins before letting one succeed.
    pub fail_logins: u32,
    /// Reason to fail every save with, when set.
    pub fail_save: Option<String>,
    /// Canonical title reported by saves (defaults to the requested title).
    pub canonical_title: Option<String>,
    pub connects: Vec<SiteParams>,
    pub logins: Vec<(String, String)>,
    pub saves: Vec<SaveRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub title: String,
    pub text: String,
    pub summary: String,
    pub minor: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MockConnector {
    state: Arc<Mutex<MockState>>,
}

impl MockConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, title: &str, text: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .pages
            .insert(title.to_string(), text.to_string());
        self
    }

    pub fn failing_logins(self, count: u32) -> Self {
        self.state.lock().unwrap().fail_logins = count;
        self
    }

    pub fn failing_saves(self, reason: &str) -> Self {
        self.state.lock().unwrap().fail_save = Some(reason.to_string());
        self
    }

    pub fn canonical_title(self, title: &str) -> Self {
        self.state.lock().unwrap().canonical_title = Some(title.to_string());
        self
    }

    /// Handle for inspecting recorded calls after the connector has been
    /// handed off.
    pub fn state(&self) -> Arc<Mutex<MockState>> {
        Arc::clone(&self.state)
    }
}

impl Connector for MockConnector {
    type Site = MockSite;

    fn connect(&self, params: &SiteParams) -> Result<MockSite> {
        self.state.lock().unwrap().connects.push(params.clone());
        Ok(MockSite {
            state: Arc::clone(&self.state),
        })
    }
}

#[derive(Debug)]
pub struct MockSite {
    state: Arc<Mutex<MockState>>,
}

impl WikiClient for MockSite {
    fn login(&mut self, user: &str, pass: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.logins.push((user.to_string(), pass.to_string()));
        if state.fail_logins > 0 {
            state.fail_logins -= 1;
            return Err(MwError::Login(
                "Incorrect username or password entered.".to_string(),
            ));
        }
        Ok(())
    }

    fn page_text(&self, title: &str) -> Result<String> {
        let state = self.state.lock().unwrap();
        Ok(state.pages.get(title).cloned().unwrap_or_default())
    }

    fn save_page(
        &self,
        title: &str,
        text: &str,
        summary: &str,
        minor: bool,
    ) -> Result<SaveOutcome> {
        let mut state = self.state.lock().unwrap();
        if let Some(reason) = &state.fail_save {
            return Err(MwError::Save {
                article: title.to_string(),
                reason: reason.clone(),
            });
        }
        state.saves.push(SaveRequest {
            title: title.to_string(),
            text: text.to_string(),
            summary: summary.to_string(),
            minor,
        });
        state.pages.insert(title.to_string(), text.to_string());
        Ok(SaveOutcome {
            title: state
                .canonical_title
                .clone()
                .unwrap_or_else(|| title.to_string()),
        })
    }
}
