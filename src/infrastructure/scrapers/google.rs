#[cfg(test)]
#[path = "google_test.rs"]
mod tests;

use scraper::Html;

use super::dom;
use crate::domain::models::PriceRange;
use crate::domain::models::Reading;

pub const URL: &str = "https://www.google.com/search?q=bitcoin+price";

pub fn extract_price_range(body: &str) -> PriceRange {
    let document = Html::parse_document(body);

    match dom::first_text(&document, "div.range") {
        Reading::Available(text) => return PriceRange::parse(&text),
        Reading::Unavailable => return PriceRange::default(),
    }
}
