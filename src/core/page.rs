//! Read-only queries over a downloaded HTML page.
//!
//! The portal scraper only needs a handful of lookups: by id, by tag and
//! class, and "the next `<tag>` after this element" in document order.

use crate::error::{Result, SwtError};
use scraper::{ElementRef, Html};

#[derive(Debug)]
pub struct Page {
    document: Html,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.document.tree.root().descendants().filter_map(ElementRef::wrap)
    }

    pub fn find_by_id(&self, id: &str) -> Option<ElementRef<'_>> {
        self.elements().find(|el| el.value().id() == Some(id))
    }

    pub fn find_first(&self, tag: &str) -> Option<ElementRef<'_>> {
        self.elements().find(|el| el.value().name() == tag)
    }

    pub fn find_with_class(&self, tag: &str, class: &str) -> Option<ElementRef<'_>> {
        self.elements()
            .find(|el| el.value().name() == tag && el.value().classes().any(|c| c == class))
    }

    /// First `<tag>` whose `attribute` equals `value`, ignoring ASCII case.
    pub fn find_with_attr(&self, tag: &str, attribute: &str, value: &str) -> Option<ElementRef<'_>> {
        self.elements().find(|el| {
            el.value().name() == tag
                && el
                    .value()
                    .attr(attribute)
                    .is_some_and(|v| v.eq_ignore_ascii_case(value))
        })
    }

    /// Every `<a>` carrying an `href`, in document order.
    pub fn links(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.elements()
            .filter(|el| el.value().name() == "a" && el.value().attr("href").is_some())
    }

    /// Elements named `tag` that come after `from` in document order.
    /// Descendants of `from` count as coming after it.
    pub fn find_all_next<'a>(
        &'a self,
        from: ElementRef<'a>,
        tag: &'a str,
    ) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        let start = from.id();
        self.document
            .tree
            .root()
            .descendants()
            .skip_while(move |node| node.id() != start)
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(move |el| el.value().name() == tag)
    }

    pub fn find_next<'a>(&'a self, from: ElementRef<'a>, tag: &'a str) -> Option<ElementRef<'a>> {
        self.find_all_next(from, tag).next()
    }
}

pub fn text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

pub fn required_attr(element: ElementRef<'_>, attribute: &str) -> Result<String> {
    element
        .value()
        .attr(attribute)
        .map(str::to_string)
        .ok_or_else(|| SwtError::AttributeNotFound {
            element: element.value().name().to_string(),
            attribute: attribute.to_string(),
        })
}
