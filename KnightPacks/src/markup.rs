//! Markdown descriptions to compendium HTML
//!
//! Rule-book descriptions come as GitHub-flavored Markdown. Links point at
//! the vendor site and are meaningless inside the tabletop client, so every
//! rendered anchor is turned into an emphasis. Bare `https://` and `www.`
//! URLs are autolinked first, as GitHub does, so they end up emphasized too.

use pulldown_cmark::{
    CowStr, Event, LinkType, Options, Parser, Tag, TagEnd, TextMergeStream, html,
};
use regex::Regex;

lazy_static::lazy_static! {
    /// Matches a whole anchor element, across newlines, case-insensitively.
    static ref ANCHOR_RE: Regex =
        Regex::new(r"(?is)<a\s.*?>(.*?)</a>").expect("valid anchor pattern");

    /// Bare URL preceded by the start of the text, whitespace or `*_~(`.
    static ref URL_RE: Regex =
        Regex::new(r"(?i)(?:^|[\s*_~(])((?:https?://|www\.)[\p{L}\p{N}-][^\s<]*)")
            .expect("valid URL pattern");
}

/// Markdown rendering collaborator.
pub trait MarkdownRenderer {
    /// Render Markdown to an HTML fragment.
    fn render(&self, markdown: &str) -> String;
}

/// CommonMark renderer with the GitHub extensions enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonMarkRenderer;

impl MarkdownRenderer for CommonMarkRenderer {
    fn render(&self, markdown: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_GFM);

        let parser = TextMergeStream::new(Parser::new_ext(markdown, options));
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, autolink(parser).into_iter());
        out
    }
}

// ============================================================================
// Autolinks
// ============================================================================

/// Turn bare URLs in text events into links.
///
/// Text inside links, images and code blocks is left alone; inline code
/// arrives as `Event::Code` and is never touched.
fn autolink<'a>(events: impl Iterator<Item = Event<'a>>) -> Vec<Event<'a>> {
    let mut out = Vec::new();
    let mut link_depth = 0usize;
    let mut in_code_block = false;

    for event in events {
        match &event {
            Event::Start(Tag::Link { .. } | Tag::Image { .. }) => link_depth += 1,
            Event::End(TagEnd::Link | TagEnd::Image) => link_depth = link_depth.saturating_sub(1),
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => in_code_block = false,
            Event::Text(text) if link_depth == 0 && !in_code_block && URL_RE.is_match(text) => {
                push_linked_text(text, &mut out);
                continue;
            }
            _ => {}
        }
        out.push(event);
    }

    out
}

fn push_linked_text<'a>(text: &str, out: &mut Vec<Event<'a>>) {
    let mut last = 0;
    for captures in URL_RE.captures_iter(text) {
        let Some(found) = captures.get(1) else {
            continue;
        };
        let url = trim_url(found.as_str());
        let start = found.start();

        if start > last {
            out.push(Event::Text(text[last..start].to_string().into()));
        }
        let dest = if has_www_prefix(url) {
            format!("http://{url}")
        } else {
            url.to_string()
        };
        out.push(Event::Start(Tag::Link {
            link_type: LinkType::Autolink,
            dest_url: dest.into(),
            title: CowStr::Borrowed(""),
            id: CowStr::Borrowed(""),
        }));
        out.push(Event::Text(url.to_string().into()));
        out.push(Event::End(TagEnd::Link));
        last = start + url.len();
    }

    if last < text.len() {
        out.push(Event::Text(text[last..].to_string().into()));
    }
}

fn has_www_prefix(url: &str) -> bool {
    url.get(..4).is_some_and(|prefix| prefix.eq_ignore_ascii_case("www."))
}

/// Drop trailing punctuation and unbalanced closing parentheses.
fn trim_url(mut url: &str) -> &str {
    while let Some(last) = url.chars().next_back() {
        let trailing = match last {
            '?' | '!' | '.' | ',' | ':' | ';' | '*' | '_' | '~' | '\'' | '"' => true,
            ')' => url.matches(')').count() > url.matches('(').count(),
            _ => false,
        };
        if !trailing {
            break;
        }
        url = &url[..url.len() - last.len_utf8()];
    }
    url
}

/// Replace `<a ...>text</a>` with `<em>text</em>`.
#[must_use]
pub fn strip_links(html: &str) -> String {
    ANCHOR_RE.replace_all(html, "<em>$1</em>").into_owned()
}

/// Render a description and strip its links.
#[must_use]
pub fn clean_description(renderer: &dyn MarkdownRenderer, markdown: &str) -> String {
    strip_links(&renderer.render(markdown))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_links() {
        assert_eq!(
            strip_links(r#"<p>Voir <a href="https://x.y/z" title="t">Ghost</a>.</p>"#),
            "<p>Voir <em>Ghost</em>.</p>"
        );
        // Non-greedy: two anchors stay two emphases
        assert_eq!(
            strip_links(r#"<a href="1">A</a> et <a href="2">B</a>"#),
            "<em>A</em> et <em>B</em>"
        );
        // Case-insensitive and spanning newlines
        assert_eq!(strip_links("<A\nhref=\"x\">multi\nline</A>"), "<em>multi\nline</em>");
    }

    #[test]
    fn test_strip_links_keeps_other_tags() {
        assert_eq!(strip_links("<abbr>PJ</abbr>"), "<abbr>PJ</abbr>");
    }

    #[test]
    fn test_clean_description() {
        let html = clean_description(&CommonMarkRenderer, "Le **Ghost** [voir ici](https://example.com)");
        assert_eq!(html, "<p>Le <strong>Ghost</strong> <em>voir ici</em></p>\n");
    }

    #[test]
    fn test_clean_description_bare_urls() {
        assert_eq!(
            clean_description(&CommonMarkRenderer, "Voir https://example.com/regles pour le détail."),
            "<p>Voir <em>https://example.com/regles</em> pour le détail.</p>\n"
        );
        assert_eq!(
            clean_description(&CommonMarkRenderer, "Voir www.knight-jdr.fr."),
            "<p>Voir <em>www.knight-jdr.fr</em>.</p>\n"
        );
    }

    #[test]
    fn test_autolink_targets() {
        let html = CommonMarkRenderer.render("Site : www.knight-jdr.fr (ou https://example.com/a_(b)).");
        assert!(html.contains(r#"<a href="http://www.knight-jdr.fr">www.knight-jdr.fr</a>"#));
        assert!(html.contains(">https://example.com/a_(b)</a>)."));
    }

    #[test]
    fn test_autolink_skips_links_and_code() {
        assert_eq!(
            CommonMarkRenderer.render("[site](https://example.com)"),
            "<p><a href=\"https://example.com\">site</a></p>\n"
        );
        assert_eq!(
            CommonMarkRenderer.render("<https://example.com>"),
            "<p><a href=\"https://example.com\">https://example.com</a></p>\n"
        );
        assert_eq!(
            CommonMarkRenderer.render("`https://example.com`"),
            "<p><code>https://example.com</code></p>\n"
        );
        assert_eq!(
            CommonMarkRenderer.render("```\nwww.example.com\n```\n"),
            "<pre><code>www.example.com\n</code></pre>\n"
        );
    }

    #[test]
    fn test_trim_url() {
        assert_eq!(trim_url("https://example.com/a."), "https://example.com/a");
        assert_eq!(trim_url("www.example.com),"), "www.example.com");
        assert_eq!(trim_url("https://example.com/a_(b)"), "https://example.com/a_(b)");
    }

    #[test]
    fn test_render_gfm_table() {
        let html = CommonMarkRenderer.render("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }
}
