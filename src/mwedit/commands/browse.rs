use super::{helpers, CmdMessage, CmdResult};
use crate::config::{self, WriteConf};
use crate::error::Result;
use crate::host::EditorHost;

/// Open the article's public page in a browser.
///
/// The URL scheme is always `https`, even when `uri_scheme=http` is
/// configured for the API session. The session construction honors the
/// configured scheme and this path never did; that discrepancy is kept
/// as-is rather than silently fixed.
pub fn run<H: EditorHost>(
    host: &mut H,
    conf: &WriteConf,
    article: Option<&str>,
) -> Result<CmdResult> {
    let article = helpers::resolve_article(host, article)?;
    let base = config::base_url(host, conf)?;

    let url = format!("https://{}/wiki/{}", base, article);
    host.open_url(&url)?;

    Ok(CmdResult::default().with_message(CmdMessage::info(format!("Opening {}", url))))
}
