//! The one wiki connection a process gets.
//!
//! Connection parameters come from host variables, the config file, and
//! interactive prompts, in that order; prompt answers are cached as host
//! variables, so a retry after a failed login re-resolves without asking
//! anything twice.

use crate::config::{self, WriteConf};
use crate::error::Result;
use crate::host::EditorHost;
use crate::wiki::{Connector, Scheme, SiteParams, WikiClient};

const PATH_PROMPT: &str = "Mediawiki Script Path: ";

/// Lazily connects and then memoizes the authenticated site. Handlers get
/// one of these injected; there is no process-wide singleton.
pub struct SessionManager<C: Connector> {
    connector: C,
    site: Option<C::Site>,
}

impl<C: Connector> SessionManager<C> {
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            site: None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.site.is_some()
    }

    /// The authenticated site, connecting and logging in on first use.
    ///
    /// A failed connect or login caches nothing; the next call starts the
    /// resolution over.
    pub fn get_or_connect<H: EditorHost>(
        &mut self,
        host: &mut H,
        conf: &WriteConf,
    ) -> Result<&mut C::Site> {
        let site = match self.site.take() {
            Some(site) => site,
            None => self.connect(host, conf)?,
        };
        Ok(self.site.insert(site))
    }

    fn connect<H: EditorHost>(&self, host: &mut H, conf: &WriteConf) -> Result<C::Site> {
        // Scheme is config-only and silently falls back to https on
        // anything unrecognized.
        let scheme = config::resolve_setting(host, conf, "uri_scheme")
            .and_then(|s| s.parse::<Scheme>().ok())
            .unwrap_or_default();
        let url = config::base_url(host, conf)?;
        let path = config::resolve(host, conf, "path", PATH_PROMPT, "/w/")?;

        let params = SiteParams {
            scheme,
            host: url,
            path,
            auth_user: conf.require("auth_user")?,
            auth_pass: conf.require("auth_pass")?,
        };

        let mut site = self.connector.connect(&params)?;
        site.login(&conf.require("user")?, &conf.require("pass")?)?;
        Ok(site)
    }
}
