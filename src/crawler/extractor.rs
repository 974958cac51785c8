//! Post extraction from listing pages
//!
//! Field extraction is deliberately soft: a row missing a link or carrying
//! a non-numeric cell still produces a record, with the affected fields
//! zero-valued. Rows are never dropped and a bad field never fails the
//! page. This mirrors the listing's own looseness, where pinned notices and
//! decorated titles break individual cells without invalidating the row.

use scraper::{ElementRef, Html, Selector};

/// One extracted listing entry
///
/// `number` is the board's own post number: monotonically increasing,
/// globally unique, with gaps where posts were deleted. Posts are never
/// mutated after extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// The board's post number
    pub number: u64,
    /// Post title, trimmed, with nested badge markup excluded
    pub title: String,
    /// Author name
    pub author: String,
    /// View count, parsed from thousands-separated text
    pub views: u64,
    /// Reference to the detail page, absolute or relative
    pub link: String,
}

/// Extracts all posts from a fetched listing page, in document order
pub fn extract_posts(document: &Html) -> Vec<Post> {
    let mut posts = Vec::new();

    if let Ok(row_selector) = Selector::parse("div.board-list table tbody tr") {
        for row in document.select(&row_selector) {
            posts.push(extract_post(&row));
        }
    }

    posts
}

/// Extracts a single post from a listing row
fn extract_post(row: &ElementRef) -> Post {
    let anchor = Selector::parse("td.tit div div a")
        .ok()
        .and_then(|selector| row.select(&selector).next());

    let title = anchor.map(direct_text).unwrap_or_default();

    let link = anchor
        .and_then(|a| a.value().attr("href"))
        .unwrap_or_default()
        .to_string();

    let number = text_of(row, "td.num span")
        .and_then(|text| text.parse().ok())
        .unwrap_or(0);

    let author = text_of(row, "td.user span").unwrap_or_default();

    let views = text_of(row, "td.view")
        .and_then(|text| text.replace(',', "").parse().ok())
        .unwrap_or(0);

    Post {
        number,
        title,
        author,
        views,
        link,
    }
}

/// Extracts the trimmed text of the first element matching a selector
fn text_of(element: &ElementRef, css: &str) -> Option<String> {
    let selector = Selector::parse(css).ok()?;
    element
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Collects only the element's own text nodes, skipping nested markup
///
/// Title anchors embed comment-count and badge spans; taking the direct
/// text nodes keeps the visible title and nothing else.
fn direct_text(element: ElementRef) -> String {
    let mut text = String::new();
    for child in element.children() {
        if let Some(fragment) = child.value().as_text() {
            text.push_str(&fragment.text);
        }
    }
    text.trim().to_string()
}
