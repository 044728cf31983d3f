#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::io;

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use owo_colors::OwoColorize;
use tokio::task;

use crate::domain::models::Answer;
use crate::domain::models::ConversationHistory;
use crate::domain::models::Role;
use crate::domain::models::SlashCommand;
use crate::domain::services::ChatSession;
use crate::domain::services::QueryDispatcher;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /history - Prints every question and answer in this conversation.
- /quit /exit (/q) - Exit.
- /help (/h) - Provides this help menu.

Anything else is sent as a question. Each question searches the web, scrapes the
current price, block height, 24 hour volume, RSI and price range, then asks the
model for a forecast with sources.
        "#;

    return text.trim().to_string();
}

pub fn format_history(history: &ConversationHistory) -> String {
    return history
        .turns()
        .iter()
        .map(|turn| {
            let speaker = match turn.role() {
                Role::User => "You",
                Role::Assistant => "Bot",
            };
            return format!("**{speaker}:** {}", turn.message());
        })
        .collect::<Vec<String>>()
        .join("\n");
}

pub fn format_answer(answer: &Answer) -> String {
    let sources = answer
        .sources
        .iter()
        .map(|source| return format!("- {source}"))
        .collect::<Vec<String>>()
        .join("\n");

    return format!("{}\n\n---\n**Sources**\n{sources}", answer.text);
}

fn print_history(history: &ConversationHistory) {
    println!("{}", "## Conversation".bold());
    if !history.is_empty() {
        println!("{}", format_history(history));
    }
    println!("---");
}

/// Ctrl-C and Ctrl-D at the prompt surface as these kinds.
fn is_exit_kind(kind: io::ErrorKind) -> bool {
    return matches!(kind, io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof);
}

/// Returns `None` when the user closes the prompt.
fn read_question() -> Result<Option<String>> {
    let res = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("Ask about Bitcoin")
        .allow_empty(true)
        .interact_text();

    match res {
        Ok(question) => return Ok(Some(question)),
        Err(dialoguer::Error::IO(err)) if is_exit_kind(err.kind()) => return Ok(None),
        Err(err) => return Err(err.into()),
    }
}

pub async fn start(dispatcher: QueryDispatcher, mut session: ChatSession) -> Result<()> {
    print_history(session.history());

    loop {
        let question = match task::spawn_blocking(read_question).await?? {
            Some(question) => question,
            None => break,
        };
        let question = question.trim();
        if question.is_empty() {
            continue;
        }

        if let Some(command) = SlashCommand::parse(question) {
            if command.is_quit() {
                break;
            }
            if command.is_help() {
                println!("{}", help_text());
                continue;
            }
            if command.is_history() {
                print_history(session.history());
                continue;
            }
        }

        println!("{}", "Researching...".dimmed());
        match dispatcher.ask(&mut session, question).await {
            Ok(answer) => {
                println!("\n{}\n", format_answer(&answer));
            }
            Err(err) => {
                tracing::error!(error = ?err, "Failed to answer question");
                eprintln!(
                    "{}",
                    format!("Could not answer that question: {err:#}").red()
                );
            }
        }
    }

    return Ok(());
}
