use crate::constants::DEMO_DISCLAIMER;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// One-line status under the transcript: a spinner while replies are pending,
/// the demo disclaimer otherwise.
#[derive(Debug, Default)]
pub struct StatusIndicator {
    spinner_idx: usize,
}

impl StatusIndicator {
    pub fn new() -> Self {
        Self { spinner_idx: 0 }
    }

    pub fn update_spinner(&mut self) {
        self.spinner_idx = self.spinner_idx.wrapping_add(1);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, pending_replies: usize) {
        let (icon, text, color) = if pending_replies > 0 {
            (
                SPINNER_FRAMES[self.spinner_idx % SPINNER_FRAMES.len()],
                "NyaySahayak is typing...",
                Color::Yellow,
            )
        } else {
            (" ", DEMO_DISCLAIMER, Color::DarkGray)
        };

        let status = Line::from(vec![
            Span::styled(icon, Style::default().fg(Color::Gray)),
            Span::raw(" "),
            Span::styled(text, Style::default().fg(color)),
        ]);

        frame.render_widget(Paragraph::new(status), area);
    }
}
