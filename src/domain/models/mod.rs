mod answer;
mod backend;
mod conversation;
mod market;
mod search;
mod slash_commands;

pub use answer::*;
pub use backend::*;
pub use conversation::*;
pub use market::*;
pub use search::*;
pub use slash_commands::*;
