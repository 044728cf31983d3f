#[cfg(test)]
#[path = "mempool_test.rs"]
mod tests;

use scraper::Html;

use super::dom;
use crate::domain::models::BlockchainStats;

pub const URL: &str = "https://mempool.space/";

pub fn extract_blockchain_stats(body: &str) -> BlockchainStats {
    let document = Html::parse_document(body);

    return BlockchainStats {
        price: dom::first_text(&document, "span.text-xl.font-bold"),
        block_height: dom::first_text(&document, r#"a[href^="/block/"]"#),
    };
}
