use crate::config::get_config;
use crate::contact::ContactForm;
use crate::log_view::LogView;
use crate::responder::ReplyEvent;
use crate::session::ChatSession;
use crate::status_indicator::StatusIndicator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Home,
    Chat,
    Modules,
    About,
    Contact,
    QuitConfirm,
    Quit,
}

pub struct App {
    pub screen: AppScreen,
    pub home_items: Vec<&'static str>,
    pub selected_home_item: usize,
    pub session: ChatSession,
    pub chat_scroll: u16,
    pub logs: LogView,
    pub status: StatusIndicator,
    pub contact: ContactForm,
    generation: u64,
}

impl App {
    pub fn new() -> App {
        let config = get_config();

        App {
            screen: AppScreen::Home,
            home_items: vec![
                "💬 Try Demo Chat",
                "📚 Explore Modules",
                "ℹ️ About",
                "✉️ Contact",
                "🚪 Quit",
            ],
            selected_home_item: 0,
            session: ChatSession::new(),
            chat_scroll: 0,
            logs: LogView::new(config.activity_log_capacity),
            status: StatusIndicator::new(),
            contact: ContactForm::new(),
            generation: 0,
        }
    }

    /// Every visit to the chat screen starts a fresh session. Replies still in
    /// flight for an earlier visit carry an old generation stamp and are
    /// dropped on arrival.
    pub fn open_chat(&mut self) {
        self.generation += 1;
        self.session = ChatSession::new();
        self.chat_scroll = 0;
        self.screen = AppScreen::Chat;
        self.logs.add("chat session started");
        log::info!("chat session {} started", self.generation);
    }

    /// Leaving the chat screen discards the session; pending replies are
    /// invalidated, not cancelled.
    pub fn close_chat(&mut self) {
        self.generation += 1;
        self.screen = AppScreen::Home;
        log::info!("chat session closed");
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Applies a deferred reply if it belongs to the live session.
    pub fn apply_reply(&mut self, reply: ReplyEvent) {
        if reply.generation != self.generation {
            log::debug!(
                "dropping reply for discarded session {}",
                reply.generation
            );
            self.logs.add("stale reply discarded");
            return;
        }

        self.session.push_reply(reply.body);
        self.logs.add("assistant replied");
        self.follow_chat_bottom();
    }

    pub fn scroll_chat_up(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    pub fn scroll_chat_down(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_add(1);
    }

    /// Parks the scroll at the end; the draw pass clamps it to the last page.
    pub fn follow_chat_bottom(&mut self) {
        self.chat_scroll = u16::MAX;
    }

    pub fn home_select_next(&mut self) {
        self.selected_home_item = (self.selected_home_item + 1) % self.home_items.len();
    }

    pub fn home_select_prev(&mut self) {
        if self.selected_home_item == 0 {
            self.selected_home_item = self.home_items.len() - 1;
        } else {
            self.selected_home_item -= 1;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
