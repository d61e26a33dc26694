use crate::app::{App, AppScreen};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Draws the footer with dynamic instructions
pub fn draw_footer(f: &mut Frame<'_>, area: Rect, app: &App) {
    let instructions = match app.screen {
        AppScreen::Home => {
            "Up/Down to navigate, Enter to select, 1-5 to jump to a page, 'q' or Esc to quit."
        }
        AppScreen::Chat => {
            "Type your question and press Enter to send. PageUp/PageDown to scroll. Esc to leave the chat."
        }
        AppScreen::Contact => {
            "Tab to move between fields, Enter to send (demo). Esc to return home."
        }
        AppScreen::QuitConfirm => "Press 'y' to confirm quit or 'n' to cancel.",
        _ => "1-5 to jump to a page, Esc to return home, 'q' to quit.",
    };

    let footer = Paragraph::new(instructions)
        .style(Style::default().fg(Color::LightCyan))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(footer, area);
}
