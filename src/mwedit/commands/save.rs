use super::{helpers, CmdMessage, CmdResult};
use crate::config::{self, WriteConf};
use crate::error::Result;
use crate::host::EditorHost;
use crate::session::SessionManager;
use crate::wiki::{Connector, WikiClient};

const SUMMARY_PROMPT: &str = "Edit summary: ";

/// Save the current buffer back to the wiki. The summary is prompted every
/// time (an empty answer submits an empty summary); the minor flag comes
/// from configuration only and is never prompted.
pub fn run<H: EditorHost, C: Connector>(
    host: &mut H,
    session: &mut SessionManager<C>,
    conf: &WriteConf,
    article: Option<&str>,
) -> Result<CmdResult> {
    let article = helpers::resolve_article(host, article)?;
    let site = session.get_or_connect(host, conf)?;

    let summary = host.prompt(SUMMARY_PROMPT, "")?;
    let minor = config::resolve_setting(host, conf, "minor_edit")
        .map(|value| is_truthy(&value))
        .unwrap_or(false);

    let text = host.lines(host.current()).join("\n");
    let outcome = site.save_page(&article, &text, &summary, minor)?;

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Successfully edited {}.",
        outcome.title
    ))))
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MwError;
    use crate::host::mem::MemHost;
    use crate::host::ARTICLE_NAME_VAR;
    use crate::wiki::mock::MockConnector;

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

    fn host_with_buffer() -> MemHost {
        MemHost::new()
            .with_lines(&["Felis catus", "", "A small cat."])
            .answer("en.wikipedia.org")
            .answer("") // script path -> default
            .answer("tidy up") // edit summary
    }

    #[test]
    fn test_save_joins_lines_and_reports_title() {
        let connector = MockConnector::new();
        let state = connector.state();
        let mut session = SessionManager::new(connector);
        let mut host = host_with_buffer();

        let result = run(&mut host, &mut session, &creds(), Some("Cat")).unwrap();

        let state = state.lock().unwrap();
        assert_eq!(state.saves.len(), 1);
        assert_eq!(state.saves[0].title, "Cat");
        assert_eq!(state.saves[0].text, "Felis catus\n\nA small cat.");
        assert_eq!(state.saves[0].summary, "tidy up");
        assert!(!state.saves[0].minor);
        assert_eq!(result.messages[0].content, "Successfully edited Cat.");
    }

    #[test]
    fn test_empty_summary_is_submitted_not_an_error() {
        let connector = MockConnector::new();
        let state = connector.state();
        let mut session = SessionManager::new(connector);
        let mut host = MemHost::new()
            .with_lines(&["text"])
            .answer("en.wikipedia.org")
            .answer("")
            .answer(""); // empty edit summary

        run(&mut host, &mut session, &creds(), Some("Cat")).unwrap();
        assert_eq!(state.lock().unwrap().saves[0].summary, "");
    }

    #[test]
    fn test_minor_flag_from_host_var() {
        let connector = MockConnector::new();
        let state = connector.state();
        let mut session = SessionManager::new(connector);
        let mut host = host_with_buffer();
        host.set_var("mediawiki_editor_minor_edit", "1");

        run(&mut host, &mut session, &creds(), Some("Cat")).unwrap();
        assert!(state.lock().unwrap().saves[0].minor);
    }

    #[test]
    fn test_canonical_title_in_confirmation() {
        let connector = MockConnector::new().canonical_title("Felis catus");
        let mut session = SessionManager::new(connector);
        let mut host = host_with_buffer();

        let result = run(&mut host, &mut session, &creds(), Some("Felis_catus")).unwrap();
        assert_eq!(result.messages[0].content, "Successfully edited Felis catus.");
    }

    #[test]
    fn test_save_failure_names_article() {
        let connector = MockConnector::new().failing_saves("protected page");
        let mut session = SessionManager::new(connector);
        let mut host = host_with_buffer();

        let err = run(&mut host, &mut session, &creds(), Some("Cat")).unwrap_err();
        assert!(matches!(err, MwError::Save { article, .. } if article == "Cat"));
    }

    #[test]
    fn test_article_from_buffer_default() {
        let connector = MockConnector::new();
        let state = connector.state();
        let mut session = SessionManager::new(connector);
        let mut host = host_with_buffer();
        host.set_buffer_var(0, ARTICLE_NAME_VAR, "Cat");

        run(&mut host, &mut session, &creds(), None).unwrap();
        assert_eq!(state.lock().unwrap().saves[0].title, "Cat");
    }

    #[test]
    fn test_no_article_aborts_before_prompting() {
        let connector = MockConnector::new();
        let state = connector.state();
        let mut session = SessionManager::new(connector);
        let mut host = MemHost::new().with_lines(&["text"]);

        let err = run(&mut host, &mut session, &WriteConf::empty(), None).unwrap_err();
        assert!(matches!(err, MwError::NoArticle));
        assert!(state.lock().unwrap().connects.is_empty());
        assert!(host.prompts.is_empty());
    }
}
