use scraper::{ElementRef, Html};

/// A hyperlink read from an export document.
///
/// Username matching only depends on this trait, so it can be driven by any
/// HTML tree (or by plain structs in tests).
pub trait Anchor {
    /// Visible text of the link, including text of nested elements.
    fn text(&self) -> String;

    /// The raw `href` attribute, if present.
    fn href(&self) -> Option<&str>;
}

impl Anchor for ElementRef<'_> {
    fn text(&self) -> String {
        ElementRef::text(self).collect()
    }

    fn href(&self) -> Option<&str> {
        self.value().attr("href")
    }
}

/// Parses markup leniently. html5ever recovers from malformed input, so this
/// never fails; garbage simply produces a tree without anchors.
pub fn parse_document(markup: &str) -> Html {
    Html::parse_document(markup)
}

/// All `<a>` elements of the document, in document order.
pub fn anchors(document: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|element| element.value().name() == "a")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_nested_anchor_text() {
        let document = parse_document(r#"<div><a href="/x"><span>ali</span>ce</a></div>"#);
        let found: Vec<String> = anchors(&document).map(|a| Anchor::text(&a)).collect();
        assert_eq!(found, vec!["alice"]);
    }

    #[test]
    fn test_href_is_optional() {
        let document = parse_document(r#"<a>no target</a><a href="https://example.com/">t</a>"#);
        let hrefs: Vec<Option<&str>> = anchors(&document).map(|a| a.value().attr("href")).collect();
        assert_eq!(hrefs, vec![None, Some("https://example.com/")]);
    }

    #[test]
    fn test_malformed_markup_does_not_fail() {
        let document = parse_document("<div><a href='https://instagram.com/bob'>bob</a><p>open <b>tags</div");
        assert_eq!(anchors(&document).count(), 1);

        let garbage = parse_document("\u{0}\u{1}not html at all <<<");
        assert_eq!(anchors(&garbage).count(), 0);
    }
}
