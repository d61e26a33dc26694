use crate::app::{App, AppScreen};
use crate::constants::{BRAND_NAME, BRAND_TAGLINE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const NAV_TABS: [(&str, AppScreen); 5] = [
    ("1 Home", AppScreen::Home),
    ("2 Modules", AppScreen::Modules),
    ("3 About", AppScreen::About),
    ("4 Chat Demo", AppScreen::Chat),
    ("5 Contact", AppScreen::Contact),
];

/// Brand block on the left, navigation tabs on the right, with the active
/// screen highlighted.
pub fn draw_header(f: &mut Frame<'_>, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .style(Style::default().fg(Color::Yellow).bg(Color::Black));
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)].as_ref())
        .split(area);

    let brand = Paragraph::new(vec![
        Line::from(Span::styled(
            BRAND_NAME,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            BRAND_TAGLINE,
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Left);
    f.render_widget(brand, chunks[0]);

    let mut tabs = Vec::new();
    for (label, screen) in NAV_TABS {
        if !tabs.is_empty() {
            tabs.push(Span::styled("  ", Style::default()));
        }
        let style = if screen == app.screen {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        tabs.push(Span::styled(format!(" {} ", label), style));
    }

    let nav = Paragraph::new(Line::from(tabs)).alignment(Alignment::Right);
    f.render_widget(nav, chunks[1]);
}
