//! Stdin command parsing for headless mode

use panedock_app::message::Message;
use panedock_core::prelude::*;
use panedock_core::WidgetType;

/// One line of headless input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlessCommand {
    /// Add a panel; unknown type tags add a watcher
    Add(WidgetType),
    /// Click a panel's tab
    Activate(String),
    /// Click a panel's close glyph
    Close(String),
    /// Press the control inside a panel
    Press(String),
    /// Print a snapshot of the whole state
    State,
    Quit,
}

impl HeadlessCommand {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let arg = words.next();
        if words.next().is_some() {
            return Err(Error::unknown_command(line.trim()));
        }

        let command = match (verb, arg) {
            ("add", Some(tag)) => {
                Self::Add(WidgetType::resolve(tag))
            }
            ("activate", Some(id)) => Self::Activate(id.to_string()),
            ("close", Some(id)) => Self::Close(id.to_string()),
            ("press", Some(id)) => Self::Press(id.to_string()),
            ("state", None) => Self::State,
            ("q" | "quit", None) => Self::Quit,
            _ => return Err(Error::unknown_command(line.trim())),
        };
        Ok(Some(command))
    }

    /// The message this command sends into the engine, if any
    pub fn to_message(&self) -> Option<Message> {
        match self {
            Self::Add(kind) => Some(Message::AddPanel(*kind)),
            Self::Activate(id) => Some(Message::FocusTab { id: id.clone() }),
            Self::Close(id) => Some(Message::CloseTab { id: id.clone() }),
            Self::Press(id) => Some(Message::PressPanel { id: id.clone() }),
            Self::Quit => Some(Message::Quit),
            Self::State => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            HeadlessCommand::parse("add INCREMENTOR").unwrap(),
            Some(HeadlessCommand::Add(WidgetType::Incrementor))
        );
        assert_eq!(
            HeadlessCommand::parse("  close widget-2 ").unwrap(),
            Some(HeadlessCommand::Close("widget-2".into()))
        );
        assert_eq!(
            HeadlessCommand::parse("state").unwrap(),
            Some(HeadlessCommand::State)
        );
        assert_eq!(
            HeadlessCommand::parse("q").unwrap(),
            Some(HeadlessCommand::Quit)
        );
    }

    #[test]
    fn test_blank_line_is_ignored() {
        assert_eq!(HeadlessCommand::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_unknown_type_adds_watcher() {
        assert_eq!(
            HeadlessCommand::parse("add SPINNER").unwrap(),
            Some(HeadlessCommand::Add(WidgetType::Watcher))
        );
    }

    #[test]
    fn test_malformed_commands() {
        for line in ["zap", "close", "state now", "add a b", "press"] {
            let err = HeadlessCommand::parse(line).unwrap_err();
            assert!(err.is_recoverable(), "{line}");
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            HeadlessCommand::Activate("widget-1".into()).to_message(),
            Some(Message::FocusTab {
                id: "widget-1".into()
            })
        );
        assert_eq!(
            HeadlessCommand::Press("widget-1".into()).to_message(),
            Some(Message::PressPanel {
                id: "widget-1".into()
            })
        );
        assert_eq!(HeadlessCommand::State.to_message(), None);
    }
}
