//! # API Facade
//!
//! The single entry point for all mwedit operations, regardless of the UI
//! driving them. `EditorApi` owns the host adapter, the session manager,
//! and the loaded config, and injects all three into the command modules;
//! commands never reach for globals.
//!
//! Generic over both boundaries:
//! - Production: `EditorApi<TermHost, HttpConnector>`
//! - Testing: `EditorApi<MemHost, MockConnector>`

use crate::commands;
use crate::config::WriteConf;
use crate::error::Result;
use crate::host::EditorHost;
use crate::session::SessionManager;
use crate::wiki::Connector;

pub struct EditorApi<H: EditorHost, C: Connector> {
    host: H,
    session: SessionManager<C>,
    conf: WriteConf,
}

impl<H: EditorHost, C: Connector> EditorApi<H, C> {
    pub fn new(host: H, connector: C, conf: WriteConf) -> Self {
        Self {
            host,
            session: SessionManager::new(connector),
            conf,
        }
    }

    /// Fetch an article into the current buffer (or a fresh split).
    pub fn read(&mut self, article: Option<&str>) -> Result<commands::CmdResult> {
        commands::fetch::run(&mut self.host, &mut self.session, &self.conf, article)
    }

    /// Save the current buffer back to the wiki.
    pub fn write(&mut self, article: Option<&str>) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.host, &mut self.session, &self.conf, article)
    }

    /// Diff the current buffer against the live article.
    pub fn diff(&mut self, article: Option<&str>) -> Result<commands::CmdResult> {
        commands::diff::run(&mut self.host, &mut self.session, &self.conf, article)
    }

    /// Open the article's public page in a browser.
    pub fn browse(&mut self, article: Option<&str>) -> Result<commands::CmdResult> {
        commands::browse::run(&mut self.host, &self.conf, article)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn session(&self) -> &SessionManager<C> {
        &self.session
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
