#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use owo_colors::OwoColorize;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::application::ui::format_history;
use crate::application::ui::help_text;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::BackendName;
use crate::domain::services::HistoryStore;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

async fn print_history() -> Result<()> {
    let history = HistoryStore::default().load().await?;
    if history.is_empty() {
        println!("There is no conversation history yet. You should ask your first question!");
    } else {
        println!("{}", format_history(&history));
    }

    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_history() -> Command {
    return Command::new("history")
        .about("Manage the saved conversation history.")
        .arg_required_else_help(true)
        .subcommand(Command::new("show").about("Print every question and answer saved so far."))
        .subcommand(Command::new("path").about("Print the path of the history file."))
        .subcommand(Command::new("clear").about("Delete the history file so the next chat starts fresh."));
}

fn subcommand_chat() -> Command {
    return Command::new("chat").about("Start chatting. This is the default when no subcommand is given.");
}

pub fn build() -> Command {
    let commands_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("COMMANDS:") {
                return format!("CHAT {line}").underline().bold().to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("btc-outlook")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_chat())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_history())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("BTC_OUTLOOK_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(
            Arg::new(ConfigKey::Backend.to_string())
                .short('b')
                .long(ConfigKey::Backend.to_string())
                .env("BTC_OUTLOOK_BACKEND")
                .num_args(1)
                .help(format!("The backend hosting the model that writes answers. [default: {}]", Config::default(ConfigKey::Backend)))
                .value_parser(PossibleValuesParser::new(BackendName::VARIANTS))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Model.to_string())
                .short('m')
                .long(ConfigKey::Model.to_string())
                .env("BTC_OUTLOOK_MODEL")
                .num_args(1)
                .help(format!("The model on the backend to consume. [default: {}]", Config::default(ConfigKey::Model)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::HistoryFile.to_string())
                .long(ConfigKey::HistoryFile.to_string())
                .env("BTC_OUTLOOK_HISTORY_FILE")
                .num_args(1)
                .help(format!("JSON file the conversation is saved to after every answer. [default: {}]", Config::default(ConfigKey::HistoryFile)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::SearchResults.to_string())
                .short('k')
                .long(ConfigKey::SearchResults.to_string())
                .env("BTC_OUTLOOK_SEARCH_RESULTS")
                .num_args(1)
                .help(format!("Maximum number of web search results used as context. [default: {}]", Config::default(ConfigKey::SearchResults)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::RequestTimeout.to_string())
                .long(ConfigKey::RequestTimeout.to_string())
                .env("BTC_OUTLOOK_REQUEST_TIMEOUT")
                .num_args(1)
                .help(format!("Time to wait in milliseconds for a scraped page or search before giving up on it. [default: {}]", Config::default(ConfigKey::RequestTimeout)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::TavilyURL.to_string())
                .long(ConfigKey::TavilyURL.to_string())
                .env("BTC_OUTLOOK_TAVILY_URL")
                .num_args(1)
                .help(format!("Tavily search API URL. [default: {}]", Config::default(ConfigKey::TavilyURL)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::TavilyToken.to_string())
                .long(ConfigKey::TavilyToken.to_string())
                .env("TAVILY_API_KEY")
                .num_args(1)
                .help("Tavily search API token.")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::OllamaURL.to_string())
                .long(ConfigKey::OllamaURL.to_string())
                .env("BTC_OUTLOOK_OLLAMA_URL")
                .num_args(1)
                .help(format!("Ollama API URL when using the Ollama backend. [default: {}]", Config::default(ConfigKey::OllamaURL)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::OpenAiURL.to_string())
                .long(ConfigKey::OpenAiURL.to_string())
                .env("BTC_OUTLOOK_OPENAI_URL")
                .num_args(1)
                .help(format!("OpenAI API URL when using the OpenAI backend. Can be swapped to a compatible proxy. [default: {}]", Config::default(ConfigKey::OpenAiURL)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::OpenAiToken.to_string())
                .long(ConfigKey::OpenAiToken.to_string())
                .env("OPENAI_API_KEY")
                .num_args(1)
                .help("OpenAI API token when using the OpenAI backend.")
                .global(true),
        );
}

/// Parses arguments and loads config. Returns false when a subcommand has
/// already done its work and the chat should not start.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("chat", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
            return Ok(false);
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("history", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            match subcmd_matches.subcommand() {
                Some(("show", _)) => {
                    print_history().await?;
                }
                Some(("path", _)) => {
                    let path = HistoryStore::default()
                        .file_path
                        .to_string_lossy()
                        .to_string();
                    println!("{path}");
                }
                Some(("clear", _)) => {
                    HistoryStore::default().delete().await?;
                    println!("Deleted conversation history");
                }
                _ => {
                    subcommand_history().print_long_help()?;
                }
            }
            return Ok(false);
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}
