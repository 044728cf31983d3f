#[cfg(test)]
#[path = "slash_commands_test.rs"]
mod tests;

pub struct SlashCommand {
    command: String,
}

impl SlashCommand {
    pub fn parse(text: &str) -> Option<SlashCommand> {
        let prefix = text.trim().split(' ').next().unwrap_or_default();
        let cmd = SlashCommand {
            command: prefix.to_string(),
        };
        if cmd.is_quit() || cmd.is_help() || cmd.is_history() {
            return Some(cmd);
        }

        return None;
    }

    pub fn is_quit(&self) -> bool {
        return ["/q", "/quit", "/exit"].contains(&self.command.as_str());
    }

    pub fn is_help(&self) -> bool {
        return ["/h", "/help"].contains(&self.command.as_str());
    }

    pub fn is_history(&self) -> bool {
        return ["/history"].contains(&self.command.as_str());
    }
}
