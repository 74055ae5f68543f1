//! Best-effort extraction of tables and heading sections.
//!
//! Documentation pages have no fixed schema. Everything here is permissive:
//! rows that do not fit are skipped, sections are capped, and an empty
//! result is a valid outcome.

use super::document::{
    ParsedDocument, data_cells, element_text, header_cells, section_siblings, table_rows,
};
use super::model::JavaCompatibilityMap;
use super::versions::{contains_version, extract_version_number, is_version_like};

/// Which tables a row scan is allowed to look at, judged by the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFilter {
    /// Every table qualifies.
    Any,
    /// Some lower-cased header cell contains one of the keywords.
    AnyCellContains(&'static [&'static str]),
    /// Every keyword equals some lower-cased header cell.
    HasAllCells(&'static [&'static str]),
}

impl HeaderFilter {
    pub fn accepts(&self, header: &[String]) -> bool {
        let lowered: Vec<String> = header.iter().map(|h| h.to_lowercase()).collect();
        match self {
            Self::Any => true,
            Self::AnyCellContains(keywords) => lowered
                .iter()
                .any(|cell| keywords.iter().any(|k| cell.contains(k))),
            Self::HasAllCells(keywords) => keywords
                .iter()
                .all(|k| lowered.iter().any(|cell| cell == k)),
        }
    }
}

/// Shape of the rows a scan accepts.
#[derive(Debug, Clone, Copy)]
pub struct RowScan {
    /// Rows with fewer `<td>` cells are skipped.
    pub min_cells: usize,
    /// Cell positions that must look like version numbers.
    pub version_cells: &'static [usize],
    pub header: HeaderFilter,
}

impl RowScan {
    /// Version / release date / JDK rows of the release cadence page.
    pub const RELEASE_CADENCE: Self = Self {
        min_cells: 3,
        version_cells: &[0],
        header: HeaderFilter::Any,
    };

    /// Version / JDK support rows of the Java support page.
    pub const JAVA_SUPPORT: Self = Self {
        min_cells: 2,
        version_cells: &[0],
        header: HeaderFilter::Any,
    };

    /// Mule version / DataWeave version rows.
    pub const DATAWEAVE: Self = Self {
        min_cells: 2,
        version_cells: &[0, 1],
        header: HeaderFilter::AnyCellContains(&["mule", "runtime"]),
    };

    fn accepts_row(&self, cells: &[String]) -> bool {
        cells.len() >= self.min_cells
            && self
                .version_cells
                .iter()
                .all(|&i| cells.get(i).is_some_and(|c| is_version_like(c)))
    }
}

/// A table whose header row passed a [`HeaderFilter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Tables with at least `min_rows` rows whose header passes `filter`.
///
/// Row 0 is taken as the header; `rows` holds the `<td>` texts of the rest.
pub fn matching_tables(
    doc: &ParsedDocument,
    filter: HeaderFilter,
    min_rows: usize,
) -> Vec<MatchedTable> {
    doc.tables()
        .filter_map(|table| {
            let rows = table_rows(&table);
            if rows.len() < min_rows.max(1) {
                return None;
            }
            let header = header_cells(&rows[0]);
            if !filter.accepts(&header) {
                return None;
            }
            Some(MatchedTable {
                header,
                rows: rows[1..].iter().map(data_cells).collect(),
            })
        })
        .collect()
}

/// Scan every qualifying table and keep the rows matching `scan`.
///
/// Only tables with more than one row are considered.
pub fn scan_rows(doc: &ParsedDocument, scan: RowScan) -> Vec<Vec<String>> {
    matching_tables(doc, scan.header, 2)
        .into_iter()
        .flat_map(|table| table.rows)
        .filter(|cells| scan.accepts_row(cells))
        .collect()
}

/// Build the Java compatibility map from a Java support page.
pub fn java_compatibility(doc: &ParsedDocument) -> JavaCompatibilityMap {
    let mut map = JavaCompatibilityMap::default();
    for cells in scan_rows(doc, RowScan::JAVA_SUPPORT) {
        map.insert(&cells[0], &cells[1]);
    }
    map
}

/// A heading and the non-empty text blocks that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub body: Vec<String>,
}

/// Every `<h2>`–`<h4>` section of the page, in document order.
pub fn sections(doc: &ParsedDocument) -> Vec<Section> {
    doc.headings()
        .map(|heading| Section {
            heading: element_text(&heading),
            body: section_siblings(&heading)
                .iter()
                .map(element_text)
                .filter(|text| !text.is_empty())
                .collect(),
        })
        .collect()
}

/// Version numbers named by headings, in document order.
pub fn heading_versions(doc: &ParsedDocument) -> Vec<String> {
    doc.headings()
        .map(|h| element_text(&h))
        .filter(|text| contains_version(text))
        .map(|text| extract_version_number(&text))
        .collect()
}
