mod chat_session;
mod dispatcher;
mod history;
mod prompt;

pub use chat_session::*;
pub use dispatcher::*;
pub use history::*;
pub use prompt::*;
