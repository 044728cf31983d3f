use std::time::Duration;

use anyhow::Result;
use test_utils::coinmarketcap_rsi_fixture;
use test_utils::coinmarketcap_volume_fixture;
use test_utils::google_range_fixture;
use test_utils::mempool_fixture;

use super::http_client;
use super::WebScrapers;
use crate::domain::models::MarketPage;
use crate::domain::models::MarketSnapshot;
use crate::domain::models::MarketSource;
use crate::domain::models::MarketSourceBox;
use crate::domain::models::Reading;

impl WebScrapers {
    fn with_url(url: String) -> Result<WebScrapers> {
        let client = http_client(Duration::from_millis(500))?;
        return Ok(WebScrapers {
            client,
            mempool_url: format!("{url}/mempool"),
            google_url: format!("{url}/search?q=bitcoin+price"),
            volume_url: format!("{url}/currencies/bitcoin/"),
            rsi_url: format!("{url}/currencies/bitcoin/technical-indicators/"),
        });
    }
}

#[tokio::test]
async fn it_scrapes_every_page() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mempool = server
        .mock("GET", "/mempool")
        .with_status(200)
        .with_body(mempool_fixture())
        .create_async()
        .await;
    let google = server
        .mock("GET", "/search?q=bitcoin+price")
        .with_status(200)
        .with_body(google_range_fixture())
        .create_async()
        .await;
    let volume = server
        .mock("GET", "/currencies/bitcoin/")
        .with_status(200)
        .with_body(coinmarketcap_volume_fixture())
        .create_async()
        .await;
    let rsi = server
        .mock("GET", "/currencies/bitcoin/technical-indicators/")
        .with_status(200)
        .with_body(coinmarketcap_rsi_fixture())
        .create_async()
        .await;

    let source: MarketSourceBox = Box::new(WebScrapers::with_url(server.url())?);
    let snapshot = MarketSnapshot::collect(&source).await;

    mempool.assert_async().await;
    google.assert_async().await;
    volume.assert_async().await;
    rsi.assert_async().await;

    assert_eq!(snapshot.price.to_string(), "$67,412");
    assert_eq!(snapshot.block_height.to_string(), "851234");
    assert_eq!(snapshot.min_price.to_string(), "30000");
    assert_eq!(snapshot.max_price.to_string(), "32000");
    assert_eq!(snapshot.volume.to_string(), "$28,914,771,204");
    assert_eq!(snapshot.rsi.to_string(), "58.21");
    assert_eq!(
        snapshot.sources,
        vec![
            format!("{}/mempool", server.url()),
            format!("{}/search?q=bitcoin+price", server.url()),
            format!("{}/currencies/bitcoin/", server.url()),
            format!("{}/currencies/bitcoin/technical-indicators/", server.url()),
        ]
    );

    return Ok(());
}

#[tokio::test]
async fn it_fetches_each_page_once_per_snapshot() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mempool = server
        .mock("GET", "/mempool")
        .with_status(200)
        .with_body(mempool_fixture())
        .expect(1)
        .create_async()
        .await;

    let source: MarketSourceBox = Box::new(WebScrapers::with_url(server.url())?);
    let snapshot = MarketSnapshot::collect(&source).await;

    mempool.assert_async().await;
    assert_eq!(snapshot.price.to_string(), "$67,412");

    return Ok(());
}

#[tokio::test]
async fn it_returns_sentinels_on_server_errors() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/currencies/bitcoin/")
        .with_status(500)
        .with_body(coinmarketcap_volume_fixture())
        .create_async()
        .await;

    let scrapers = WebScrapers::with_url(server.url())?;
    let volume = scrapers.volume().await;

    mock.assert_async().await;
    assert_eq!(volume, Reading::Unavailable);

    return Ok(());
}

#[tokio::test]
async fn it_returns_sentinels_when_unreachable() -> Result<()> {
    let scrapers = WebScrapers::with_url("http://127.0.0.1:1".to_string())?;
    let snapshot = MarketSnapshot::collect(&(Box::new(scrapers) as MarketSourceBox)).await;

    assert_eq!(snapshot.available_count(), 0);
    assert_eq!(snapshot.sources, vec!["http://127.0.0.1:1/mempool".to_string()]);

    return Ok(());
}

#[tokio::test]
async fn it_returns_sentinels_for_pages_without_the_elements() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/currencies/bitcoin/technical-indicators/")
        .with_status(200)
        .with_body("<html><body><span>Moving averages</span></body></html>")
        .create_async()
        .await;

    let scrapers = WebScrapers::with_url(server.url())?;
    let rsi = scrapers.rsi().await;

    mock.assert_async().await;
    assert_eq!(rsi.to_string(), "N/A");

    return Ok(());
}

#[test]
fn it_cites_the_production_pages() -> Result<()> {
    let scrapers = WebScrapers::new(http_client(Duration::from_millis(500))?);

    assert_eq!(scrapers.page_url(MarketPage::BlockchainStats), "https://mempool.space/");
    assert_eq!(
        scrapers.page_url(MarketPage::Rsi),
        "https://coinmarketcap.com/currencies/bitcoin/technical-indicators/"
    );

    return Ok(());
}
