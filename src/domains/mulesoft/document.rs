//! Navigable HTML document built from a fetched page body.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use super::error::ScrapeError;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector must parse")
}

static TABLE: LazyLock<Selector> = LazyLock::new(|| selector("table"));
static ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr"));
static DATA_CELL: LazyLock<Selector> = LazyLock::new(|| selector("td"));
static HEADER_CELL: LazyLock<Selector> = LazyLock::new(|| selector("th, td"));
static HEADING: LazyLock<Selector> = LazyLock::new(|| selector("h2, h3, h4"));
static LINK: LazyLock<Selector> = LazyLock::new(|| selector("a[href]"));
static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| selector("p"));

/// Tag names that open a new section.
pub const SECTION_HEADINGS: [&str; 3] = ["h2", "h3", "h4"];

/// A parsed HTML page.
#[derive(Debug)]
pub struct ParsedDocument {
    html: Html,
}

impl ParsedDocument {
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// Select elements with an arbitrary CSS selector.
    ///
    /// Supports everything `scraper` does: tag names, `[attr]` presence and
    /// `[attr="value"]` equality among others.
    pub fn select(&self, css: &str) -> Result<Vec<ElementRef<'_>>, ScrapeError> {
        let sel = Selector::parse(css)
            .map_err(|e| ScrapeError::parse(format!("invalid selector '{css}': {e}")))?;
        Ok(self.html.select(&sel).collect())
    }

    pub fn tables(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html.select(&TABLE)
    }

    pub fn headings(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html.select(&HEADING)
    }

    /// Anchors carrying an `href`, in document order.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        self.html.select(&LINK).filter_map(|a| {
            a.value().attr("href").map(|href| Link {
                text: element_text(&a),
                href: href.to_string(),
            })
        })
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html.select(&PARAGRAPH)
    }

    /// Raw concatenated text of the whole page.
    pub fn text(&self) -> String {
        self.html.root_element().text().collect()
    }
}

/// An `<a href>` element reduced to what link matching needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    pub href: String,
}

/// Whitespace-normalized text content of an element.
///
/// Text fragments are trimmed, empty ones dropped and the rest joined with
/// single spaces.
pub fn element_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// All `<tr>` rows of a table.
pub fn table_rows<'a>(table: &ElementRef<'a>) -> Vec<ElementRef<'a>> {
    table.select(&ROW).collect()
}

/// Text of every `<td>` in a row.
pub fn data_cells(row: &ElementRef<'_>) -> Vec<String> {
    row.select(&DATA_CELL).map(|c| element_text(&c)).collect()
}

/// Text of every `<th>`/`<td>` in a row.
pub fn header_cells(row: &ElementRef<'_>) -> Vec<String> {
    row.select(&HEADER_CELL).map(|c| element_text(&c)).collect()
}

/// Element siblings following `element` up to the next section heading.
pub fn section_siblings<'a>(element: &ElementRef<'a>) -> Vec<ElementRef<'a>> {
    element
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .take_while(|sib| !SECTION_HEADINGS.contains(&sib.value().name()))
        .collect()
}
