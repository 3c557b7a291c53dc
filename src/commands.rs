//! Built-in bot commands — instant canned responses, no classification.

use codemedic_core::knowledge::KnowledgeBase;

/// Known bot commands.
pub enum Command {
    Start,
    Help,
}

impl Command {
    /// Parse a command from message text. Returns `None` for anything that
    /// is not a known `/` command (which passes through to the classifier).
    pub fn parse(text: &str) -> Option<Self> {
        let first = text.split_whitespace().next()?;
        // Strip @botname suffix (e.g. "/help@codemedic_bot" → "/help").
        let cmd = first.split('@').next().unwrap_or(first);
        match cmd {
            "/start" => Some(Self::Start),
            "/help" => Some(Self::Help),
            _ => None,
        }
    }
}

/// Handle a command and return the response text.
pub fn handle(cmd: Command, kb: &KnowledgeBase) -> String {
    match cmd {
        Command::Start => welcome_text(kb),
        Command::Help => help_text(kb),
    }
}

/// The `/start` onboarding message.
fn welcome_text(kb: &KnowledgeBase) -> String {
    format!(
        "Welcome to CodeMedic! 👨‍💻\n\
         You can send code or describe the problem, and I will try to help you solve it 🚀.\n\n\
         💡 **Currently supported languages:**\n\
         - {}\n\n\
         Just type the code or the problem, and I will start helping you!",
        kb.supported_languages().join(", ")
    )
}

/// The `/help` usage instructions.
fn help_text(kb: &KnowledgeBase) -> String {
    format!(
        "📚 **Usage Instructions:**\n\n\
         1. Send a message containing the code or programming error.\n\
         2. Mention the programming language in the message (e.g., Python, JavaScript, C++).\n\
         3. You will receive a clear and organized solution.\n\n\
         💡 The following languages are supported:\n\
         - {}\n\n\
         ❓ If you need further assistance, use the /start command.",
        kb.supported_languages().join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert!(matches!(Command::parse("/start"), Some(Command::Start)));
        assert!(matches!(Command::parse("/help"), Some(Command::Help)));
        assert!(matches!(Command::parse("/help please"), Some(Command::Help)));
    }

    #[test]
    fn test_parse_with_botname_suffix() {
        assert!(matches!(
            Command::parse("/start@codemedic_bot"),
            Some(Command::Start)
        ));
        assert!(matches!(
            Command::parse("/help@codemedic_bot"),
            Some(Command::Help)
        ));
    }

    #[test]
    fn test_unknown_commands_fall_through() {
        assert!(Command::parse("/status").is_none());
        assert!(Command::parse("python broke").is_none());
        assert!(Command::parse("").is_none());
    }

    #[test]
    fn test_texts_enumerate_languages_in_order() {
        let kb = KnowledgeBase::builtin();
        let welcome = handle(Command::Start, &kb);
        let help = handle(Command::Help, &kb);
        for text in [&welcome, &help] {
            assert!(text.contains("python, javascript, c++"));
        }
    }
}
