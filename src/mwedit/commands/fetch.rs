use super::{helpers, CmdResult};
use crate::config::WriteConf;
use crate::error::Result;
use crate::host::{buffer_is_empty, EditorHost, ARTICLE_NAME_VAR, WIKI_FILETYPE};
use crate::session::SessionManager;
use crate::wiki::{Connector, WikiClient};

/// Fetch an article into the current buffer. A buffer that already holds
/// content is never clobbered: the fetch goes into a new vertical split
/// instead.
pub fn run<H: EditorHost, C: Connector>(
    host: &mut H,
    session: &mut SessionManager<C>,
    conf: &WriteConf,
    article: Option<&str>,
) -> Result<CmdResult> {
    let article = helpers::resolve_article(host, article)?;
    let site = session.get_or_connect(host, conf)?;

    let mut target = host.current();
    if !buffer_is_empty(host, target) {
        target = host.split_vertical();
    }

    let text = site.page_text(&article)?;
    host.set_lines(target, helpers::split_lines(&text));
    host.set_name(target, &article);
    host.set_filetype(target, WIKI_FILETYPE);
    host.set_buffer_var(target, ARTICLE_NAME_VAR, &article);

    Ok(CmdResult::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::mem::MemHost;
    use crate::wiki::mock::MockConnector;

    fn conf() -> WriteConf {
        WriteConf::empty()
    }

    fn ready_session() -> (SessionManager<MockConnector>, MemHost) {
        let connector = MockConnector::new().with_page("Cat", "Felis catus\nA small cat.");
        let session = SessionManager::new(connector);
        // url and path resolve via prompt on first use
        let host = MemHost::new().answer("en.wikipedia.org").answer("");
        (session, host)
    }

    fn creds() -> WriteConf {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("write.conf");
        std::fs::write(
            &path,
            "[wiki]\nauth_user = a\nauth_pass = b\nuser = u\npass = p\n",
        )
        .unwrap();
        WriteConf::load(&path).unwrap()
    }

    #[test]
    fn test_fetch_into_empty_buffer_reuses_it() {
        let (mut session, mut host) = ready_session();
        run(&mut host, &mut session, &creds(), Some("Cat")).unwrap();

        assert_eq!(host.buffers.len(), 1);
        let buffer = host.buffer(0);
        assert_eq!(buffer.lines, vec!["Felis catus", "A small cat."]);
        assert_eq!(buffer.name.as_deref(), Some("Cat"));
        assert_eq!(buffer.filetype.as_deref(), Some(WIKI_FILETYPE));
        assert_eq!(buffer.vars.get(ARTICLE_NAME_VAR).map(String::as_str), Some("Cat"));
    }

    #[test]
    fn test_fetch_into_nonempty_buffer_opens_split() {
        let (mut session, host) = ready_session();
        let mut host = host.with_lines(&["my draft"]);
        run(&mut host, &mut session, &creds(), Some("Cat")).unwrap();

        assert_eq!(host.buffers.len(), 2);
        // original untouched
        assert_eq!(host.buffer(0).lines, vec!["my draft"]);
        assert!(host.buffer(0).name.is_none());
        // split holds the article
        assert_eq!(host.buffer(1).lines, vec!["Felis catus", "A small cat."]);
        assert_eq!(host.buffer(1).name.as_deref(), Some("Cat"));
    }

    #[test]
    fn test_buffer_with_single_empty_line_counts_as_empty() {
        let (mut session, host) = ready_session();
        let mut host = host.with_lines(&[""]);
        run(&mut host, &mut session, &creds(), Some("Cat")).unwrap();
        assert_eq!(host.buffers.len(), 1);
    }

    #[test]
    fn test_missing_page_fetches_empty_text() {
        let (mut session, mut host) = ready_session();
        run(&mut host, &mut session, &creds(), Some("Nope")).unwrap();
        assert_eq!(host.buffer(0).lines, vec![""]);
        assert_eq!(host.buffer(0).name.as_deref(), Some("Nope"));
    }

    #[test]
    fn test_no_article_aborts_before_network() {
        let connector = MockConnector::new();
        let state = connector.state();
        let mut session = SessionManager::new(connector);
        let mut host = MemHost::new();

        assert!(run(&mut host, &mut session, &conf(), None).is_err());
        assert!(state.lock().unwrap().connects.is_empty());
        assert!(host.prompts.is_empty());
    }
}
