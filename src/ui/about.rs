use crate::constants::BRAND_NAME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_about(f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("About {} (Demo)", BRAND_NAME))
        .style(Style::default().fg(Color::Yellow).bg(Color::Black));

    let lines = vec![
        Line::from(Span::styled(
            "NyaySahayak is an AI-driven assistant designed to simplify Indian legal \
documentation and awareness.",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "This terminal build is a scripted demo; no documents leave your machine and no \
real assistant is attached.",
            Style::default().fg(Color::Gray),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
