//! Mediawiki action API client over blocking HTTP.
//!
//! Login is the token dance the API requires: fetch a login token, post
//! `action=login`, and let the cookie jar carry the session from there.
//! Edits fetch a csrf token per save. HTTP basic auth rides on every
//! request, for wikis that sit behind an auth proxy.

use super::{Connector, SaveOutcome, SiteParams, WikiClient};
use crate::error::{MwError, Result};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

const USER_AGENT: &str = concat!("mwedit/", env!("CARGO_PKG_VERSION"));

pub struct HttpConnector;

impl Connector for HttpConnector {
    type Site = HttpSite;

    fn connect(&self, params: &SiteParams) -> Result<HttpSite> {
        HttpSite::new(params)
    }
}

pub struct HttpSite {
    client: Client,
    api_url: String,
    auth_user: String,
    auth_pass: String,
}

impl HttpSite {
    fn new(params: &SiteParams) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            api_url: api_url(params),
            auth_user: params.auth_user.clone(),
            auth_pass: params.auth_pass.clone(),
        })
    }

    fn get(&self, params: &[(&str, &str)]) -> Result<serde_json::Value> {
        let value = self
            .client
            .get(&self.api_url)
            .query(&[("format", "json"), ("formatversion", "2")])
            .query(params)
            .basic_auth(&self.auth_user, Some(&self.auth_pass))
            .send()?
            .error_for_status()?
            .json()?;
        check_api_error(value)
    }

    fn post(&self, form: &[(&str, &str)]) -> Result<serde_json::Value> {
        let value = self
            .client
            .post(&self.api_url)
            .query(&[("format", "json"), ("formatversion", "2")])
            .form(form)
            .basic_auth(&self.auth_user, Some(&self.auth_pass))
            .send()?
            .error_for_status()?
            .json()?;
        check_api_error(value)
    }
}

impl WikiClient for HttpSite {
    fn login(&mut self, user: &str, pass: &str) -> Result<()> {
        let tokens: TokenResponse = decode(self.get(&[
            ("action", "query"),
            ("meta", "tokens"),
            ("type", "login"),
        ])?)?;
        let token = tokens
            .query
            .tokens
            .logintoken
            .ok_or_else(|| MwError::Api("no login token in response".to_string()))?;

        let response: LoginResponse = decode(self.post(&[
            ("action", "login"),
            ("lgname", user),
            ("lgpassword", pass),
            ("lgtoken", &token),
        ])?)?;
        if response.login.result != "Success" {
            return Err(MwError::Login(
                response.login.reason.unwrap_or(response.login.result),
            ));
        }
        Ok(())
    }

    fn page_text(&self, title: &str) -> Result<String> {
        let response: PageQueryResponse = decode(self.get(&[
            ("action", "query"),
            ("prop", "revisions"),
            ("rvprop", "content"),
            ("rvslots", "main"),
            ("titles", title),
        ])?)?;
        Ok(first_page_text(response))
    }

    fn save_page(
        &self,
        title: &str,
        text: &str,
        summary: &str,
        minor: bool,
    ) -> Result<SaveOutcome> {
        let tokens: TokenResponse =
            decode(self.get(&[("action", "query"), ("meta", "tokens")])?)?;
        let token = tokens
            .query
            .tokens
            .csrftoken
            .ok_or_else(|| MwError::Api("no csrf token in response".to_string()))?;

        let mut form = vec![
            ("action", "edit"),
            ("title", title),
            ("text", text),
            ("summary", summary),
            ("token", token.as_str()),
        ];
        if minor {
            form.push(("minor", "1"));
        }

        // An edit rejection arrives as a top-level API error; keep the
        // attempted article in the report.
        let response: EditResponse =
            decode(self.post(&form).map_err(|e| save_error(title, e))?)?;
        if response.edit.result != "Success" {
            return Err(MwError::Save {
                article: title.to_string(),
                reason: response.edit.result,
            });
        }
        Ok(SaveOutcome {
            title: response.edit.title.unwrap_or_else(|| title.to_string()),
        })
    }
}

fn api_url(params: &SiteParams) -> String {
    let path = if params.path.ends_with('/') {
        params.path.clone()
    } else {
        format!("{}/", params.path)
    };
    format!("{}://{}{}api.php", params.scheme, params.host, path)
}

fn check_api_error(value: serde_json::Value) -> Result<serde_json::Value> {
    if let Some(info) = value.pointer("/error/info").and_then(|v| v.as_str()) {
        return Err(MwError::Api(info.to_string()));
    }
    Ok(value)
}

fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| MwError::Api(format!("unexpected API response: {}", e)))
}

fn save_error(title: &str, error: MwError) -> MwError {
    match error {
        MwError::Api(reason) => MwError::Save {
            article: title.to_string(),
            reason,
        },
        other => other,
    }
}

fn first_page_text(response: PageQueryResponse) -> String {
    response
        .query
        .pages
        .into_iter()
        .next()
        .filter(|page| !page.missing)
        .and_then(|page| page.revisions.into_iter().next())
        .map(|revision| revision.slots.main.content)
        .unwrap_or_default()
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    query: TokenQuery,
}

#[derive(Debug, Deserialize)]
struct TokenQuery {
    tokens: TokenSet,
}

#[derive(Debug, Deserialize)]
struct TokenSet {
    logintoken: Option<String>,
    csrftoken: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    login: LoginOutcome,
}

#[derive(Debug, Deserialize)]
struct LoginOutcome {
    result: String,
    reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PageQueryResponse {
    query: PageQuery,
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    revisions: Vec<Revision>,
}

#[derive(Debug, Deserialize)]
struct Revision {
    slots: Slots,
}

#[derive(Debug, Deserialize)]
struct Slots {
    main: Slot,
}

#[derive(Debug, Deserialize)]
struct Slot {
    content: String,
}

#[derive(Debug, Deserialize)]
struct EditResponse {
    edit: EditOutcome,
}

#[derive(Debug, Deserialize)]
struct EditOutcome {
    result: String,
    title: Option<String>,
}
