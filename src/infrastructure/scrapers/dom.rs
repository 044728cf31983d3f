use scraper::ElementRef;
use scraper::Html;
use scraper::Selector;

use crate::domain::models::Reading;

pub fn element_text(element: &ElementRef) -> String {
    return element.text().collect::<String>();
}

/// Text of the first element matching `selector`, or unavailable when nothing
/// matches.
pub fn first_text(document: &Html, selector: &str) -> Reading {
    let selector = match Selector::parse(selector) {
        Ok(selector) => selector,
        Err(_) => return Reading::Unavailable,
    };

    if let Some(element) = document.select(&selector).next() {
        return Reading::from_text(&element_text(&element));
    }

    return Reading::Unavailable;
}
