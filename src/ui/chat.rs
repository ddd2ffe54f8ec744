use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::chat_message::render_message;
use crate::constants::INPUT_PLACEHOLDER;
use crate::App;

pub fn draw_chat(f: &mut Frame<'_>, area: Rect, app: &mut App) {
    // Split chat area into message view and input
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Messages
            Constraint::Length(3), // Input
        ])
        .split(area);

    draw_messages(f, chunks[0], app);
    draw_input(f, chunks[1], app);
}

fn draw_messages(f: &mut Frame<'_>, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for message in app.view.messages() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(render_message(message, inner.width));
    }

    let typing = app.status_indicator.lines(inner.width);
    if !typing.is_empty() {
        lines.push(Line::from(""));
        lines.extend(typing);
    }

    let offset = app.scroll.resolve(lines.len(), inner.height);
    f.render_widget(Paragraph::new(lines).scroll((offset, 0)), inner);
}

fn draw_input(f: &mut Frame<'_>, area: Rect, app: &App) {
    let loading = app.view.is_loading();
    let input = app.view.input();

    let border_style = if loading {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::LightYellow)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(if loading { " Input (waiting) " } else { " Input " })
        .title_top(Line::from(" Send [Enter] ").right_aligned());
    let inner = block.inner(area);

    let visible_width = inner.width.saturating_sub(1);
    let text_width = u16::try_from(input.width()).unwrap_or(u16::MAX);
    let scroll_offset = text_width.saturating_sub(visible_width);

    let line = if input.is_empty() {
        Line::from(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    } else if loading {
        Line::from(Span::styled(input, Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(Span::styled(input, Style::default().fg(Color::White)))
    };

    f.render_widget(
        Paragraph::new(line).block(block).scroll((0, scroll_offset)),
        area,
    );

    // No cursor while the input is disabled.
    if !loading {
        f.set_cursor_position((inner.x + text_width - scroll_offset, inner.y));
    }
}
