//! HTML table parsing for the release feed

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};

use super::{FeedSection, ReleaseFeedSnapshot};
use crate::error::FeedError;

/// Header label that opens the modules section
const MODULES_MARKER: &str = "Модули";

/// Header label that opens the helper modules section
const HELPER_MODULES_MARKER: &str = "Вспомогательные модули";

fn selector(css: &str) -> Result<Selector, FeedError> {
    Selector::parse(css).map_err(|e| FeedError::InvalidSelector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

/// Text content with every fragment trimmed and empty fragments dropped
fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn is_section_label(label: &str) -> bool {
    label == MODULES_MARKER || label.contains(HELPER_MODULES_MARKER)
}

/// Section opened by a header row, if it is a section marker
fn section_marker(head: ElementRef<'_>) -> Option<FeedSection> {
    let text: String = head.text().collect();
    if text.contains(HELPER_MODULES_MARKER) {
        Some(FeedSection::HelperModules)
    } else if text.contains(MODULES_MARKER) {
        Some(FeedSection::Modules)
    } else {
        None
    }
}

struct Selectors {
    th: Selector,
    tr: Selector,
    td: Selector,
    div: Selector,
    span: Selector,
}

impl Selectors {
    fn new() -> Result<Self, FeedError> {
        Ok(Self {
            th: selector("th")?,
            tr: selector("tr")?,
            td: selector("td")?,
            div: selector("div")?,
            span: selector("span")?,
        })
    }

    /// Value shown in a cell: the first `div`, else the first `span`, else the cell text
    fn cell_value(&self, cell: ElementRef<'_>) -> String {
        let inner = cell
            .select(&self.div)
            .next()
            .or_else(|| cell.select(&self.span).next())
            .unwrap_or(cell);
        stripped_text(inner)
    }
}

/// Parse the release feed page into per-section channel versions.
///
/// Column labels come from the first header row; the first label names the
/// component column. Every later header row whose text carries a section
/// marker switches the section that following body rows are filed under.
#[instrument(skip_all, fields(html_len = html.len()))]
pub fn parse_release_feed(html: &str) -> Result<ReleaseFeedSnapshot, FeedError> {
    let document = Html::parse_document(html);
    let selectors = Selectors::new()?;

    let table = document
        .select(&selector("table")?)
        .next()
        .ok_or(FeedError::TableNotFound)?;

    let heads: Vec<ElementRef<'_>> = table
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name() == "thead")
        .collect();
    let first_head = heads.first().ok_or(FeedError::HeaderNotFound)?;

    let labels: Vec<String> = first_head
        .select(&selectors.th)
        .map(stripped_text)
        .filter(|label| !label.is_empty() && !is_section_label(label))
        .collect();
    let channels = labels.get(1..).unwrap_or_default();
    debug!(?channels, "parsed channel columns");

    let mut snapshot = ReleaseFeedSnapshot::default();
    let mut section = FeedSection::Platform;
    let mut seen_head = false;

    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "thead" => {
                if seen_head {
                    if let Some(next) = section_marker(child) {
                        section = next;
                    }
                }
                seen_head = true;
            }
            "tbody" => {
                for row in child.select(&selectors.tr) {
                    let cells: Vec<ElementRef<'_>> = row.select(&selectors.td).collect();
                    let Some((name_cell, value_cells)) = cells.split_first() else {
                        continue;
                    };

                    let name = stripped_text(*name_cell);
                    let versions = channels
                        .iter()
                        .cloned()
                        .zip(value_cells.iter().map(|cell| selectors.cell_value(*cell)))
                        .collect();
                    snapshot.section_mut(section).insert(name, versions);
                }
            }
            _ => {}
        }
    }

    debug!(
        platform = snapshot.platform.len(),
        modules = snapshot.modules.len(),
        helper_modules = snapshot.helper_modules.len(),
        "release feed parsed"
    );
    Ok(snapshot)
}
