#[cfg(test)]
#[path = "coinmarketcap_test.rs"]
mod tests;

use scraper::Html;
use scraper::Selector;

use super::dom;
use crate::domain::models::Reading;

pub const VOLUME_URL: &str = "https://coinmarketcap.com/currencies/bitcoin/";
pub const RSI_URL: &str = "https://coinmarketcap.com/currencies/bitcoin/technical-indicators/";

pub fn extract_volume(body: &str) -> Reading {
    let document = Html::parse_document(body);
    return dom::first_text(&document, "div.statsValue___2iaoZ");
}

/// The RSI value sits in the first span following the span labelled `RSI`.
/// Spans nested inside the label are part of the label, not the value.
pub fn extract_rsi(body: &str) -> Reading {
    let document = Html::parse_document(body);
    let selector = match Selector::parse("span") {
        Ok(selector) => selector,
        Err(_) => return Reading::Unavailable,
    };

    let mut spans = document.select(&selector);
    let label = match spans
        .by_ref()
        .find(|span| return dom::element_text(span).trim() == "RSI")
    {
        Some(label) => label,
        None => return Reading::Unavailable,
    };

    if let Some(value) =
        spans.find(|span| return !span.ancestors().any(|node| return node.id() == label.id()))
    {
        return Reading::from_text(&dom::element_text(&value));
    }

    return Reading::Unavailable;
}
