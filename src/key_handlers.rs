use crate::app::{App, AppScreen};
use crate::config::get_config;
use crate::responder::{self, ReplyEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

/// Routes a key event to the active screen. Returns true when the app should
/// exit.
pub fn handle_key(key: KeyEvent, app: &mut App, reply_tx: &mpsc::Sender<ReplyEvent>) -> bool {
    match app.screen {
        AppScreen::Home => handle_home_input(key, app),
        AppScreen::Chat => handle_chat_input(key, app, reply_tx),
        AppScreen::Modules | AppScreen::About => handle_static_page_input(key, app),
        AppScreen::Contact => handle_contact_input(key, app),
        AppScreen::QuitConfirm => handle_quit_confirm_input(key, app),
        AppScreen::Quit => {}
    }

    app.screen == AppScreen::Quit
}

/// Digit shortcuts mirror the header tabs. Only active on screens that do not
/// capture text input.
fn switch_screen(c: char, app: &mut App) -> bool {
    match c {
        '1' => app.screen = AppScreen::Home,
        '2' => app.screen = AppScreen::Modules,
        '3' => app.screen = AppScreen::About,
        '4' => app.open_chat(),
        '5' => app.screen = AppScreen::Contact,
        _ => return false,
    }
    true
}

fn handle_home_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Down => app.home_select_next(),
        KeyCode::Up => app.home_select_prev(),
        KeyCode::Enter => match app.selected_home_item {
            0 => app.open_chat(),
            1 => app.screen = AppScreen::Modules,
            2 => app.screen = AppScreen::About,
            3 => app.screen = AppScreen::Contact,
            _ => app.screen = AppScreen::QuitConfirm,
        },
        KeyCode::Esc | KeyCode::Char('q') => app.screen = AppScreen::QuitConfirm,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.screen = AppScreen::QuitConfirm;
        }
        KeyCode::Char(c) => {
            switch_screen(c, app);
        }
        _ => {}
    }
}

fn handle_chat_input(key: KeyEvent, app: &mut App, reply_tx: &mpsc::Sender<ReplyEvent>) {
    match key.code {
        KeyCode::Esc => app.close_chat(),
        KeyCode::Enter => {
            if let Some(text) = app.session.submit() {
                log::info!("user message submitted ({} chars)", text.len());
                app.logs.add("message sent");
                app.follow_chat_bottom();
                responder::schedule_reply(
                    reply_tx.clone(),
                    app.generation(),
                    text,
                    get_config().reply_delay(),
                );
            }
        }
        KeyCode::PageUp => app.scroll_chat_up(),
        KeyCode::PageDown => app.scroll_chat_down(),
        KeyCode::Backspace => app.session.pop_draft_char(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => app.screen = AppScreen::QuitConfirm,
                    'u' => app.scroll_chat_up(),
                    'd' => app.scroll_chat_down(),
                    'k' => app.logs.scroll_up(),
                    'j' => app.logs.scroll_down(),
                    _ => {}
                }
            } else {
                app.session.push_draft_char(c);
            }
        }
        _ => {}
    }
}

fn handle_static_page_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => app.screen = AppScreen::Home,
        KeyCode::Char('q') => app.screen = AppScreen::QuitConfirm,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.screen = AppScreen::QuitConfirm;
        }
        KeyCode::Char(c) => {
            switch_screen(c, app);
        }
        _ => {}
    }
}

fn handle_contact_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => app.screen = AppScreen::Home,
        KeyCode::Tab | KeyCode::Down => app.contact.focus_next(),
        KeyCode::Enter => {
            app.contact.submit();
            app.logs.add("contact form submitted (demo)");
        }
        KeyCode::Backspace => app.contact.pop_char(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                if c == 'c' {
                    app.screen = AppScreen::QuitConfirm;
                }
            } else {
                app.contact.push_char(c);
            }
        }
        _ => {}
    }
}

pub fn handle_quit_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => app.screen = AppScreen::Quit,
        KeyCode::Char('n') | KeyCode::Esc => app.screen = AppScreen::Home,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[tokio::test]
    async fn test_blank_chat_enter_schedules_nothing() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut app = App::new();
        app.open_chat();

        app.session.update_draft("   ");
        let quit = handle_key(key(KeyCode::Enter), &mut app, &tx);
        assert!(!quit);
        assert_eq!(app.session.transcript().len(), 1);
        assert!(rx.try_recv().is_err(), "no reply scheduled for blank input");
    }

    #[tokio::test]
    async fn test_digit_shortcuts_navigate_outside_typing_screens() {
        let (tx, _rx) = mpsc::channel(8);
        let mut app = App::new();

        handle_key(key(KeyCode::Char('2')), &mut app, &tx);
        assert_eq!(app.screen, AppScreen::Modules);
        handle_key(key(KeyCode::Char('3')), &mut app, &tx);
        assert_eq!(app.screen, AppScreen::About);
        handle_key(key(KeyCode::Char('4')), &mut app, &tx);
        assert_eq!(app.screen, AppScreen::Chat);

        // Inside the chat the digit is text, not navigation
        handle_key(key(KeyCode::Char('2')), &mut app, &tx);
        assert_eq!(app.screen, AppScreen::Chat);
        assert_eq!(app.session.draft(), "2");
    }

    #[tokio::test]
    async fn test_quit_confirm_round_trip() {
        let (tx, _rx) = mpsc::channel(8);
        let mut app = App::new();

        handle_key(key(KeyCode::Esc), &mut app, &tx);
        assert_eq!(app.screen, AppScreen::QuitConfirm);
        handle_key(key(KeyCode::Char('n')), &mut app, &tx);
        assert_eq!(app.screen, AppScreen::Home);
        handle_key(key(KeyCode::Char('q')), &mut app, &tx);
        let quit = handle_key(key(KeyCode::Char('y')), &mut app, &tx);
        assert!(quit);
        assert_eq!(app.screen, AppScreen::Quit);
    }
}
