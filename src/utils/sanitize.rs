//! Sanitizing terminal markup before it reaches `inner_html`.

use std::collections::HashSet;

use ammonia::Builder;

use crate::config::{MARKUP_ATTRIBUTES, MARKUP_TAGS};

/// Strip everything but the whitelisted inline markup.
///
/// Disallowed tags are removed with their text kept; stray `<`, `>` and `&`
/// come back escaped so literal file content still displays verbatim.
pub fn sanitize_markup(html: &str) -> String {
    Builder::empty()
        .tags(MARKUP_TAGS.iter().copied().collect::<HashSet<_>>())
        .generic_attributes(MARKUP_ATTRIBUTES.iter().copied().collect::<HashSet<_>>())
        .clean_content_tags(HashSet::from(["script", "style"]))
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_whitelist() {
        assert_eq!(sanitize_markup("a<br>b"), "a<br>b");
        assert_eq!(
            sanitize_markup("<span class=\"text-accent\">ls</span>"),
            "<span class=\"text-accent\">ls</span>"
        );
    }

    #[test]
    fn test_strips_scripts_and_handlers() {
        assert_eq!(sanitize_markup("<script>alert(1)</script>x"), "x");
        assert_eq!(
            sanitize_markup("<span onclick=\"x()\">hi</span>"),
            "<span>hi</span>"
        );
    }

    #[test]
    fn test_literal_braces_survive() {
        assert_eq!(
            sanitize_markup("[<br>  { name: 'SnakeC2' }<br>]"),
            "[<br>  { name: 'SnakeC2' }<br>]"
        );
    }
}
