use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_modules(f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Modules (Demo)")
        .style(Style::default().fg(Color::Yellow).bg(Color::Black));

    let lines = vec![
        Line::from(Span::styled(
            "Explore key features — Bail Check, Summons Explainer, and Document Verification.",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "• Bail Check: bail eligibility rules with sample guidance.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "• Summons Explainer: plain-language summaries of notice text.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "• Document Verification: seals, signatures, and authenticity markers.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Try them in the chat demo (4).",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
