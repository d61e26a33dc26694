use crate::app::App;
use crate::constants::BRAND_NAME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

const FEATURE_CARDS: [(&str, &str); 3] = [
    (
        "Bail Eligibility",
        "Check bail eligibility rules and view sample guidance.",
    ),
    (
        "Summons Explainer",
        "Upload or paste notice text and get a plain-language summary.",
    ),
    (
        "Document Verify",
        "Check authenticity of uploaded documents (visual).",
    ),
];

const HERO_TAGLINE: &str = "Simplifying Indian legal processes using AI. Upload documents, check \
bail eligibility, explain summons, and verify authenticity — all in one place.";

pub fn draw_home(f: &mut Frame<'_>, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(5),
                Constraint::Length(6),
                Constraint::Min(1),
            ]
            .as_ref(),
        )
        .split(area);

    draw_hero(f, chunks[0]);
    draw_feature_cards(f, chunks[1]);
    draw_menu(f, chunks[2], app);
}

fn draw_hero(f: &mut Frame<'_>, area: Rect) {
    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{} — AI Legal Assistant", BRAND_NAME),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            HERO_TAGLINE,
            Style::default().fg(Color::White),
        )),
    ])
    .alignment(Alignment::Left)
    .wrap(Wrap { trim: true });

    f.render_widget(hero, area);
}

fn draw_feature_cards(f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ]
            .as_ref(),
        )
        .split(area);

    for (i, (title, desc)) in FEATURE_CARDS.iter().enumerate() {
        let card = Paragraph::new(Span::styled(*desc, Style::default().fg(Color::Gray)))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(*title)
                    .style(Style::default().fg(Color::Yellow)),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(card, columns[i]);
    }
}

fn draw_menu(f: &mut Frame<'_>, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .home_items
        .iter()
        .enumerate()
        .map(|(i, &item)| {
            if i == app.selected_home_item {
                ListItem::new(item).style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(item).style(Style::default().fg(Color::White))
            }
        })
        .collect();

    let list = List::new(items)
        .block(Block::default())
        .highlight_symbol("➤ ");

    let list_area = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(1)].as_ref())
        .split(area)[0];

    f.render_widget(list, list_area);
}
