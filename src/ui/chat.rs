use crate::app::App;
use crate::chat::{Message, Sender};
use crate::constants::INPUT_PLACEHOLDER;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

pub fn draw_chat(f: &mut Frame<'_>, area: Rect, app: &App) {
    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)].as_ref())
        .margin(1)
        .split(area);

    let chat_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(horizontal_chunks[0]);

    draw_messages(f, app, chat_chunks[0]);
    app.status
        .render(f, chat_chunks[1], app.session.pending_replies());
    draw_input(f, app, chat_chunks[2]);
    draw_logs(f, app, horizontal_chunks[1]);
}

fn draw_messages(f: &mut Frame<'_>, app: &App, area: Rect) {
    let mut lines = Vec::new();
    for message in app.session.transcript() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(render_message(message, area));
    }

    let total_lines = lines.len() as u16;
    let max_scroll = total_lines.saturating_sub(area.height);
    let chat_scroll = app.chat_scroll.min(max_scroll);

    let msgs_para = Paragraph::new(lines)
        .block(Block::default())
        .wrap(Wrap { trim: false });
    f.render_widget(msgs_para.scroll((chat_scroll, 0)), area);
}

/// Renders one message as a bubble: timestamp header, wrapped body, closing
/// rule. User messages are indented and warm-toned, assistant messages sit
/// flush left in green.
fn render_message(message: &Message, area: Rect) -> Vec<Line<'static>> {
    let style = match message.sender {
        Sender::User => Style::default().fg(Color::Rgb(255, 223, 128)),
        Sender::Assistant => Style::default().fg(Color::Rgb(144, 238, 144)),
    };
    let indent = match message.sender {
        Sender::User => "  ",
        Sender::Assistant => "",
    };
    let label = match message.sender {
        Sender::User => "You",
        Sender::Assistant => "NyaySahayak",
    };

    let mut lines = Vec::new();

    let timestamp = message.sent_at.format("%H:%M").to_string();
    lines.push(Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("┌─".to_string(), style),
        Span::styled(format!("{} ", label), style.add_modifier(Modifier::BOLD)),
        Span::styled(timestamp, style.add_modifier(Modifier::DIM)),
    ]));

    let wrap_width = (area.width as usize).saturating_sub(4).max(8);
    for wrapped_line in wrap(&message.body, wrap_width) {
        lines.push(Line::from(vec![
            Span::styled(indent.to_string(), style),
            Span::styled("│ ".to_string(), style),
            Span::styled(wrapped_line.to_string(), style),
        ]));
    }

    lines.push(Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("╰─".to_string(), style),
    ]));

    lines
}

fn draw_input(f: &mut Frame<'_>, app: &App, area: Rect) {
    let separator = "─".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator.clone(),
            Style::default().fg(Color::DarkGray),
        ))),
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 1,
        },
    );

    let draft = app.session.draft();
    let input = if draft.is_empty() {
        Line::from(vec![
            Span::styled("→ ", Style::default().fg(Color::DarkGray)),
            Span::styled(INPUT_PLACEHOLDER, Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::styled("→ ", Style::default().fg(Color::DarkGray)),
            Span::styled(draft.to_string(), Style::default().fg(Color::White)),
        ])
    };

    let visible_width = area.width.saturating_sub(2);
    let text_width = UnicodeWidthStr::width(draft) as u16;
    let scroll_offset = text_width.saturating_sub(visible_width);

    f.render_widget(
        Paragraph::new(input).scroll((0, scroll_offset)),
        Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: 1,
        },
    );

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        ))),
        Rect {
            x: area.x,
            y: area.y + area.height - 1,
            width: area.width,
            height: 1,
        },
    );

    let cursor_x = area.x + 2 + text_width - scroll_offset;
    f.set_cursor_position((cursor_x, area.y + 1));
}

fn draw_logs(f: &mut Frame<'_>, app: &App, area: Rect) {
    let vsep = "│\n".repeat(area.height as usize);
    f.render_widget(
        Paragraph::new(vsep).style(Style::default().fg(Color::DarkGray)),
        Rect {
            x: area.x,
            y: area.y,
            width: 1,
            height: area.height,
        },
    );

    let log_area = Rect {
        x: area.x + 2,
        y: area.y,
        width: area.width.saturating_sub(2),
        height: area.height,
    };

    let log_lines: Vec<Line> = app
        .logs
        .entries
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::DarkGray)),
                Span::raw(entry.as_str()),
            ])
        })
        .collect();

    let total_lines = log_lines.len() as u16;
    let max_scroll = total_lines.saturating_sub(log_area.height);
    let logs_scroll = app.logs.scroll_offset.min(max_scroll);

    let logs_para = Paragraph::new(log_lines)
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
    f.render_widget(logs_para.scroll((logs_scroll, 0)), log_area);
}
