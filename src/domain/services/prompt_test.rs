use super::PromptComposer;
use crate::domain::models::ConversationHistory;
use crate::domain::models::MarketSnapshot;
use crate::domain::models::PriceRange;
use crate::domain::models::Reading;
use crate::domain::models::RetrievedPassage;

fn snapshot() -> MarketSnapshot {
    let range = PriceRange::parse("30000 - 32000");
    return MarketSnapshot {
        price: Reading::from_text("$67,412"),
        block_height: Reading::from_text("851234"),
        volume: Reading::from_text("28.9B"),
        rsi: Reading::from_text("58.21"),
        min_price: range.min,
        max_price: range.max,
        sources: vec!["https://mempool.example".to_string()],
    };
}

fn passages() -> Vec<RetrievedPassage> {
    return vec![
        RetrievedPassage::new("ETF inflows hit a record.", "https://news.example/etf"),
        RetrievedPassage::new("Miners are selling.", "https://news.example/miners"),
    ];
}

#[test]
fn it_joins_passages_with_blank_lines() {
    insta::assert_snapshot!(PromptComposer::format_passages(&passages()), @r###"
    ETF inflows hit a record.

    Miners are selling.
    "###);
}

#[test]
fn it_formats_no_passages_as_empty() {
    assert_eq!(PromptComposer::format_passages(&[]), "");
}

#[test]
fn it_composes_identical_prompts_for_identical_inputs() {
    let mut history = ConversationHistory::new();
    history.record("Is it a good time to buy?", "Nobody knows.");

    let first = PromptComposer::compose(&history, "And next month?", &passages(), &snapshot());
    let second = PromptComposer::compose(&history, "And next month?", &passages(), &snapshot());

    assert_eq!(first, second);
}

#[test]
fn it_fills_every_slot() {
    let mut history = ConversationHistory::new();
    history.record("Is it a good time to buy?", "Nobody knows.");

    let prompt = PromptComposer::compose(&history, "And next month?", &passages(), &snapshot());

    assert!(prompt.starts_with(
        "Previous conversation:\nUser: Is it a good time to buy?\nAssistant: Nobody knows.\n"
    ));
    assert!(prompt.contains("* **Current price:** $67,412\n"));
    assert!(prompt.contains("* **Latest block height:** 851234\n"));
    assert!(prompt.contains("* **24 hour trading volume:** $28.9B\n"));
    assert!(prompt.contains("* **RSI:** 58.21\n"));
    assert!(prompt.contains("between a low of $30000 and a high of $32000."));
    assert!(prompt.contains(
        "Context:\nETF inflows hit a record.\n\nMiners are selling.\n\nQuestion:\nAnd next month?\n"
    ));
    assert!(!prompt.contains("https://news.example"));
}

#[test]
fn it_lists_the_factors_in_order() {
    let prompt = PromptComposer::compose(
        &ConversationHistory::new(),
        "Up or down?",
        &[],
        &snapshot(),
    );

    let factors = [
        "1. **Summary first:**",
        "2. **Supply and demand:**",
        "3. **Global economic conditions:**",
        "4. **Regulatory changes:**",
        "5. **Market sentiment:**",
        "6. **Technical analysis:**",
        "7. **War and political instability:**",
        "8. **Conclusion:**",
    ];

    let positions = factors
        .iter()
        .map(|factor| return prompt.find(factor).unwrap())
        .collect::<Vec<usize>>();
    let mut sorted = positions.clone();
    sorted.sort();

    assert_eq!(positions, sorted);
}

#[test]
fn it_renders_sentinels_for_an_unavailable_snapshot() {
    let prompt = PromptComposer::compose(
        &ConversationHistory::new(),
        "What is the bitcoin outlook for next month?",
        &[],
        &MarketSnapshot::unavailable(),
    );

    assert!(prompt.starts_with("Previous conversation:\n(none)\n"));
    assert!(prompt.contains("* **Current price:** N/A\n"));
    assert!(prompt.contains("* **Latest block height:** N/A\n"));
    assert!(prompt.contains("* **24 hour trading volume:** N/A\n"));
    assert!(prompt.contains("* **RSI:** N/A\n"));
    assert!(prompt.contains("between a low of N/A and a high of N/A."));
    assert!(prompt.ends_with(
        "Context:\n\n\nQuestion:\nWhat is the bitcoin outlook for next month?\n"
    ));
}

#[test]
fn it_does_not_interpret_placeholders_in_the_question() {
    let prompt = PromptComposer::compose(
        &ConversationHistory::new(),
        "What about {context} and {price}?",
        &passages(),
        &snapshot(),
    );

    assert!(prompt.ends_with("Question:\nWhat about {context} and {price}?\n"));
}
