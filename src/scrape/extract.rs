//! HTML extraction for the catalog listing and the video detail page.
//!
//! Pure text-in data-out; all network handling lives in the callers.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::models::CatalogEntry;

static CARD: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".video-list .video-item").unwrap());
static CARD_LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a.video-link").unwrap());
static CARD_THUMB: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img.thumb").unwrap());
static CARD_QUALITY: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".quality").unwrap());
static CARD_DURATION: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".duration").unwrap());
static CARD_CODE: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".video-code").unwrap());
static CARD_TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a.title").unwrap());
static PLAYER: LazyLock<Selector> = LazyLock::new(|| Selector::parse("#player").unwrap());

/// Video IDs are the digits in `/video/<id>/` hrefs.
static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/video/(\d+)/").unwrap());

/// Extract catalog entries from the listing page markup.
///
/// Cards without a usable video link are skipped with a debug log; all other
/// missing pieces degrade to empty strings. Output preserves document order
/// and is not deduplicated.
pub fn catalog(html: &str) -> Vec<CatalogEntry> {
    let document = Html::parse_document(html);
    let mut entries = Vec::new();

    for card in document.select(&CARD) {
        match parse_card(card) {
            Some(entry) => entries.push(entry),
            None => tracing::debug!("skipping catalog card without a usable video link"),
        }
    }

    entries
}

/// Pull the csrf token the player element carries on video detail pages.
/// There is no fallback source for the token.
pub fn csrf_token(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    document
        .select(&PLAYER)
        .next()
        .and_then(|el| el.value().attr("data-csrf-token"))
        .map(|token| token.to_string())
}

fn parse_card(card: ElementRef) -> Option<CatalogEntry> {
    let link = card.select(&CARD_LINK).next()?;
    let href = link.value().attr("href")?;
    let id = VIDEO_ID_RE.captures(href)?.get(1)?.as_str().to_string();

    let thumbnail = card
        .select(&CARD_THUMB)
        .next()
        .and_then(|img| {
            // Lazy-load attribute first; eager src is usually a placeholder.
            img.value()
                .attr("data-src")
                .or_else(|| img.value().attr("src"))
        })
        .unwrap_or_default()
        .to_string();

    let quality = first_text(card, &CARD_QUALITY);
    let duration = first_text(card, &CARD_DURATION);
    let code = first_text(card, &CARD_CODE);

    let title = card
        .select(&CARD_TITLE)
        .next()
        .map(|el| match el.value().attr("title") {
            Some(title) => title.to_string(),
            None => el.text().collect::<String>().trim().to_string(),
        })
        .unwrap_or_default();

    Some(CatalogEntry {
        id,
        code,
        title,
        thumbnail,
        duration,
        quality,
    })
}

/// Trimmed text of the first element matching `selector`, or empty.
fn first_text(card: ElementRef, selector: &Selector) -> String {
    card.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}
