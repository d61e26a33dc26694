use crate::app::App;
use crate::constants::CONTACT_NOTICE;
use crate::contact::ContactField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const FIELDS: [ContactField; 3] = [
    ContactField::Name,
    ContactField::Email,
    ContactField::Message,
];

pub fn draw_contact(f: &mut Frame<'_>, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Contact (Demo)")
        .style(Style::default().fg(Color::Yellow).bg(Color::Black));
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(2),
            ]
            .as_ref(),
        )
        .split(area);

    for (i, field) in FIELDS.iter().enumerate() {
        let focused = app.contact.focus == *field;
        let value = match field {
            ContactField::Name => app.contact.name.as_str(),
            ContactField::Email => app.contact.email.as_str(),
            ContactField::Message => app.contact.message.as_str(),
        };

        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let input = Paragraph::new(value)
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(field.label())
                    .style(style),
            );
        f.render_widget(input, chunks[i]);

        if focused {
            let cursor_x = chunks[i].x + UnicodeWidthStr::width(value) as u16 + 1;
            f.set_cursor_position((cursor_x, chunks[i].y + 1));
        }
    }

    if app.contact.submitted {
        let notice = Paragraph::new(CONTACT_NOTICE)
            .style(Style::default().fg(Color::LightGreen))
            .wrap(Wrap { trim: true });
        f.render_widget(notice, chunks[3]);
    }
}
