use crate::error::{MwError, Result};
use crate::host::{EditorHost, ARTICLE_NAME_VAR};

/// The article every command operates on: an explicit argument wins,
/// otherwise the current buffer's remembered article. Neither yields a
/// non-empty name → `NoArticle`, before any session or network use.
pub fn resolve_article<H: EditorHost>(host: &H, explicit: Option<&str>) -> Result<String> {
    let name = match explicit {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => host
            .buffer_var(host.current(), ARTICLE_NAME_VAR)
            .unwrap_or_default(),
    };
    if name.is_empty() {
        return Err(MwError::NoArticle);
    }
    Ok(name)
}

/// Article text → buffer lines. Splitting keeps empty segments, so a
/// trailing newline in the page text shows up as a trailing empty line,
/// the way an editor buffer would show it.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::mem::MemHost;

    #[test]
    fn test_explicit_argument_wins() {
        let mut host = MemHost::new();
        host.set_buffer_var(0, ARTICLE_NAME_VAR, "Dog");
        assert_eq!(resolve_article(&host, Some("Cat")).unwrap(), "Cat");
    }

    #[test]
    fn test_buffer_default_fallback() {
        let mut host = MemHost::new();
        host.set_buffer_var(0, ARTICLE_NAME_VAR, "Dog");
        assert_eq!(resolve_article(&host, None).unwrap(), "Dog");
        assert_eq!(resolve_article(&host, Some("")).unwrap(), "Dog");
    }

    #[test]
    fn test_no_article_anywhere() {
        let host = MemHost::new();
        assert!(matches!(
            resolve_article(&host, None),
            Err(MwError::NoArticle)
        ));
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
        assert_eq!(split_lines(""), vec![""]);
    }
}
