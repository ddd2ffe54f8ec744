use crate::chat_message::{render_bubble, sender_style};
use crate::constants::{BOT_LABEL, TYPING_INDICATOR};
use crate::models::Sender;
use ratatui::{style::Modifier, text::Line};

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// The transient "Typing..." bubble shown under the conversation while a
/// reply is outstanding. It is never part of the message history.
#[derive(Debug, Default)]
pub struct StatusIndicator {
    thinking: bool,
    spinner_idx: usize,
}

impl StatusIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_thinking(&self) -> bool {
        self.thinking
    }

    pub fn set_thinking(&mut self, thinking: bool) {
        self.thinking = thinking;
        if !thinking {
            self.spinner_idx = 0;
        }
    }

    pub fn update_spinner(&mut self) {
        if self.thinking {
            self.spinner_idx = self.spinner_idx.wrapping_add(1);
        }
    }

    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        if !self.thinking {
            return Vec::new();
        }

        let frame = SPINNER_FRAMES[self.spinner_idx % SPINNER_FRAMES.len()];
        render_bubble(
            Sender::Bot,
            BOT_LABEL,
            &format!("{} {}", frame, TYPING_INDICATOR),
            width,
            sender_style(Sender::Bot).add_modifier(Modifier::DIM),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(indicator: &StatusIndicator) -> String {
        let lines = indicator.lines(40);
        lines[1].spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_hidden_when_idle() {
        let indicator = StatusIndicator::new();
        assert!(indicator.lines(40).is_empty());
    }

    #[test]
    fn test_spinner_advances_while_thinking() {
        let mut indicator = StatusIndicator::new();
        indicator.set_thinking(true);
        assert_eq!(body(&indicator), "│ ◐ Typing...");

        indicator.update_spinner();
        assert_eq!(body(&indicator), "│ ◓ Typing...");

        indicator.set_thinking(false);
        indicator.set_thinking(true);
        assert_eq!(body(&indicator), "│ ◐ Typing...");
    }
}
