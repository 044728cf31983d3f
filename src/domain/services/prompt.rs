#[cfg(test)]
#[path = "prompt_test.rs"]
mod tests;

use crate::domain::models::ConversationHistory;
use crate::domain::models::MarketSnapshot;
use crate::domain::models::Reading;
use crate::domain::models::RetrievedPassage;

fn dollars(reading: &Reading) -> String {
    match reading {
        Reading::Available(text) if text.starts_with('$') => return text.to_string(),
        Reading::Available(text) => return format!("${text}"),
        Reading::Unavailable => return reading.to_string(),
    }
}

pub struct PromptComposer {}

impl PromptComposer {
    /// Passage bodies separated by blank lines. URLs are left out here and
    /// cited separately.
    pub fn format_passages(passages: &[RetrievedPassage]) -> String {
        return passages
            .iter()
            .map(|passage| return passage.text.as_str())
            .collect::<Vec<&str>>()
            .join("\n\n");
    }

    pub fn compose(
        history: &ConversationHistory,
        question: &str,
        passages: &[RetrievedPassage],
        snapshot: &MarketSnapshot,
    ) -> String {
        let chat_history = if history.is_empty() {
            "(none)".to_string()
        } else {
            history.transcript()
        };

        return format!(
            r#"Previous conversation:
{chat_history}

When answering, use the context below and cite the source URLs you relied on.
Any question about the Bitcoin price must reference the "Bitcoin Information" section and cover every point listed under it, in order.
Always quote prices in US dollars and put a $ sign in front of every price so the currency is never ambiguous.

## Bitcoin Information:

* **Current price:** {price}
* **Latest block height:** {block_height}
* **24 hour trading volume:** {volume}
* **RSI:** {rsi}

## Factors to consider when forecasting the Bitcoin price:

**Write the answer in exactly this order.**

1. **Summary first:** Next month the Bitcoin price will rise/fall compared to today, for the reasons below.
2. **Supply and demand:** Bitcoin issuance is capped, so shifts in demand move the price.
    * Example: Growing institutional demand for Bitcoin points to a higher price.
3. **Global economic conditions:** Inflation, interest rates and other macroeconomic factors affect the Bitcoin price.
    * Example: Rate hikes by the US Federal Reserve dampen risk appetite and can push the price down.
4. **Regulatory changes:** Changes in each country's crypto regulation have a large effect on the price.
    * Example: China's ban on crypto trading caused a sharp drop in the Bitcoin price.
5. **Market sentiment:** Investor psychology and expectations play a major role in price swings.
    * Example: A single tweet from a prominent figure has moved the Bitcoin price sharply.
6. **Technical analysis:** Chart patterns, volume, moving averages and other indicators help anticipate price moves.
    * Example: A break above the 200 day moving average often signals a turn to a bull market.
7. **War and political instability:** Wars, trade wars and political conflict between countries shift the value of currencies and move the Bitcoin price.
    * Example: Flight to safe assets during the Russia-Ukraine war lifted both gold and Bitcoin.
8. **Conclusion:** Based on the above, next month the Bitcoin price is expected to rise/fall from its current level to between a low of {min_price} and a high of {max_price}.

## Additional information:

* Forecasts are for reference only and every investment decision is the user's own responsibility.
* Crypto markets are extremely volatile, so invest with care.

Context:
{context}

Question:
{question}
"#,
            price = dollars(&snapshot.price),
            block_height = snapshot.block_height,
            volume = dollars(&snapshot.volume),
            rsi = snapshot.rsi,
            min_price = dollars(&snapshot.min_price),
            max_price = dollars(&snapshot.max_price),
            context = PromptComposer::format_passages(passages),
        );
    }
}
