use crate::app::{App, AppScreen};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub mod about;
pub mod chat;
pub mod contact;
pub mod footer;
pub mod header;
pub mod home;
pub mod modules;
pub mod quit_confirm;

/// Top-level draw: persistent header and footer around the active screen.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(4),
                Constraint::Min(1),
                Constraint::Length(2),
            ]
            .as_ref(),
        )
        .split(f.area());

    header::draw_header(f, chunks[0], app);

    match app.screen {
        AppScreen::Home => home::draw_home(f, chunks[1], app),
        AppScreen::Chat => chat::draw_chat(f, chunks[1], app),
        AppScreen::Modules => modules::draw_modules(f, chunks[1]),
        AppScreen::About => about::draw_about(f, chunks[1]),
        AppScreen::Contact => contact::draw_contact(f, chunks[1], app),
        AppScreen::QuitConfirm | AppScreen::Quit => quit_confirm::draw_quit_confirm(f, chunks[1]),
    }

    footer::draw_footer(f, chunks[2], app);
}
