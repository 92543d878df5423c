use super::{helpers, CmdResult};
use crate::config::WriteConf;
use crate::error::Result;
use crate::host::{EditorHost, WIKI_FILETYPE};
use crate::session::SessionManager;
use crate::wiki::{Connector, WikiClient};

/// Compare the current buffer against the live article: the remote text
/// goes into a left-hand scratch split, both buffers enter the host's diff
/// view, and the remote side ends up read-only.
pub fn run<H: EditorHost, C: Connector>(
    host: &mut H,
    session: &mut SessionManager<C>,
    conf: &WriteConf,
    article: Option<&str>,
) -> Result<CmdResult> {
    let article = helpers::resolve_article(host, article)?;
    let site = session.get_or_connect(host, conf)?;

    let local = host.current();
    host.enable_diff(local);
    let remote = host.split_vertical_named(&format!("{} - REMOTE", article));
    host.mark_scratch(remote);
    host.set_filetype(remote, WIKI_FILETYPE);

    let text = site.page_text(&article)?;
    host.set_lines(remote, helpers::split_lines(&text));
    host.enable_diff(remote);
    host.set_readonly(remote);

    Ok(CmdResult::default())
}
