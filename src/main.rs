#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]

mod application;
mod configuration;
mod domain;
mod infrastructure;

use std::env;
use std::process;

use anyhow::anyhow;
use anyhow::Error;
use anyhow::Result;
use domain::models::BackendName;
use domain::services::ChatSession;
use domain::services::HistoryStore;
use domain::services::QueryDispatcher;
use infrastructure::backends::BackendManager;
use infrastructure::scrapers::WebScrapers;
use infrastructure::search::tavily::Tavily;
use owo_colors::OwoColorize;

use crate::application::cli;
use crate::application::ui;
use crate::configuration::Config;
use crate::configuration::ConfigKey;

fn handle_error(err: Error) {
    eprintln!(
        "{}",
        format!(
            "Oh no! btc-outlook has failed with the following app version and error.\n\nVersion: {}\nError: {:#}",
            env!("CARGO_PKG_VERSION"),
            err
        )
        .red()
    );

    let backtrace = err.backtrace();
    if backtrace.to_string() == "disabled backtrace" {
        let args = env::args().collect::<Vec<String>>().join(" ");
        eprintln!("\nRunning the following can help explain further what the issue is:");
        eprintln!("\nRUST_BACKTRACE=1 {args}");
    } else {
        eprintln!("\n{}", backtrace);
    }

    process::exit(1);
}

async fn start_chat() -> Result<()> {
    let backend_name = BackendName::parse(Config::get(ConfigKey::Backend))
        .ok_or_else(|| return anyhow!("Unknown backend {}", Config::get(ConfigKey::Backend)))?;

    let dispatcher = QueryDispatcher::new(
        Box::<Tavily>::default(),
        Box::new(WebScrapers::from_config()?),
        BackendManager::get(backend_name)?,
        Config::get_number(ConfigKey::SearchResults) as usize,
    );
    dispatcher.health_check().await?;

    let session = ChatSession::open(HistoryStore::default()).await?;
    tracing::info!(
        turns = session.history().len(),
        history_file = ?session.store().file_path,
        "Chat started"
    );

    return ui::start(dispatcher, session).await;
}

#[tokio::main]
async fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    // A missing .env is fine, keys can come from the environment or flags.
    let _ = dotenvy::dotenv();

    let debug_log_dir = env::var("BTC_OUTLOOK_LOG_DIR").unwrap_or_else(|_| {
        return dirs::cache_dir()
            .unwrap_or_else(|| return env::temp_dir())
            .join("btc-outlook")
            .to_string_lossy()
            .to_string();
    });

    let file_appender = tracing_appender::rolling::never(debug_log_dir, "debug.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    if env::var("RUST_LOG")
        .unwrap_or_else(|_| return "".to_string())
        .contains("btc_outlook")
    {
        tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(writer)
            .init();
    }

    match cli::parse().await {
        Ok(true) => {}
        Ok(false) => process::exit(0),
        Err(err) => {
            handle_error(err);
            return;
        }
    }

    if let Err(err) = start_chat().await {
        handle_error(err);
    }

    process::exit(0);
}
