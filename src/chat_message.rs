use crate::constants::{BOT_LABEL, USER_INDENT, USER_LABEL};
use crate::models::{Message, Sender};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

pub fn sender_style(sender: Sender) -> Style {
    Style::default().fg(match sender {
        Sender::User => Color::Rgb(255, 223, 128), // Warmer yellow
        Sender::Bot => Color::Rgb(144, 238, 144),  // Softer green
    })
}

fn indent_for(sender: Sender) -> &'static str {
    match sender {
        Sender::User => USER_INDENT,
        Sender::Bot => "",
    }
}

/// Renders one message as a labelled bubble wrapped to `width` columns.
pub fn render_message(message: &Message, width: u16) -> Vec<Line<'static>> {
    let sender = message.sender();
    let label = match sender {
        Sender::User => USER_LABEL,
        Sender::Bot => BOT_LABEL,
    };
    render_bubble(sender, label, message.text(), width, sender_style(sender))
}

pub(crate) fn render_bubble(
    sender: Sender,
    label: &str,
    text: &str,
    width: u16,
    style: Style,
) -> Vec<Line<'static>> {
    let indent = indent_for(sender);
    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("╭─ ".to_string(), style),
        Span::styled(label.to_string(), style.add_modifier(Modifier::BOLD)),
    ]));

    let wrap_width = (width as usize)
        .saturating_sub(indent.width() + 2)
        .max(1);

    let mut content_lines = 0;
    for paragraph in text.lines() {
        for wrapped_line in wrap(paragraph, wrap_width) {
            lines.push(content_line(indent, wrapped_line.into_owned(), style));
            content_lines += 1;
        }
    }
    if content_lines == 0 {
        lines.push(content_line(indent, String::new(), style));
    }

    lines.push(Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("╰─".to_string(), style),
    ]));

    lines
}

fn content_line(indent: &str, text: String, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("│ ".to_string(), style),
        Span::styled(text, style),
    ])
}
