//! # Wiki client boundary
//!
//! The commands talk to the wiki through two traits: a [`Connector`] builds
//! a site connection from resolved parameters, and the resulting
//! [`WikiClient`] performs the page operations. One production
//! implementation ([`http::HttpConnector`], Mediawiki action API over HTTP)
//! and one test double ([`mock::MockConnector`], canned pages and scripted
//! failures).

use crate::error::Result;
use std::fmt;
use std::str::FromStr;

pub mod http;
pub mod mock;

/// URI scheme for the wiki connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    Http,
    #[default]
    Https,
}

impl FromStr for Scheme {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, ()> {
        match s {
            "http" => Ok(Scheme::Http),
            "https" => Ok(Scheme::Https),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Http => write!(f, "http"),
            Scheme::Https => write!(f, "https"),
        }
    }
}

/// Everything needed to construct a wiki connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteParams {
    pub scheme: Scheme,
    /// Host name, e.g. `en.wikipedia.org`.
    pub host: String,
    /// Script path the API lives under, e.g. `/w/`.
    pub path: String,
    /// HTTP basic auth, sent with every request.
    pub auth_user: String,
    pub auth_pass: String,
}

/// Result of a successful page save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    /// Canonical title as reported by the wiki (the API may normalize the
    /// requested one).
    pub title: String,
}

/// One connection to a wiki site.
pub trait WikiClient {
    /// Log in with wiki credentials. Called once, before page operations.
    fn login(&mut self, user: &str, pass: &str) -> Result<()>;

    /// Current text of a page. Missing pages read as empty.
    fn page_text(&self, title: &str) -> Result<String>;

    /// Replace a page's content.
    fn save_page(&self, title: &str, text: &str, summary: &str, minor: bool)
        -> Result<SaveOutcome>;
}

/// Builds [`WikiClient`] instances from resolved connection parameters.
pub trait Connector {
    type Site: WikiClient;

    fn connect(&self, params: &SiteParams) -> Result<Self::Site>;
}
