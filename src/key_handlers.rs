use crate::constants::SCROLL_STEP;
use crate::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Applies a key press to the app. Returns the text to send when the key
/// started a submit.
pub fn handle_chat_input(key: KeyEvent, app: &mut App) -> Option<String> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Enter => {
            return app.view.on_enter_key();
        }
        KeyCode::PageUp => app.scroll.scroll_up(SCROLL_STEP),
        KeyCode::PageDown => app.scroll.scroll_down(SCROLL_STEP),
        KeyCode::Backspace => {
            let mut input = app.view.input().to_string();
            if input.pop().is_some() {
                app.view.update_input(input);
            }
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => app.should_quit = true,
                    'u' => app.scroll.scroll_up(SCROLL_STEP),
                    'd' => app.scroll.scroll_down(SCROLL_STEP),
                    _ => {}
                }
            } else {
                let mut input = app.view.input().to_string();
                input.push(c);
                app.view.update_input(input);
            }
        }
        _ => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat_view::ChatView;

    fn press(app: &mut App, code: KeyCode) -> Option<String> {
        handle_chat_input(KeyEvent::new(code, KeyModifiers::NONE), app)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_and_enter_submits() {
        let mut app = App::new(ChatView::new());
        type_text(&mut app, "Lyon");
        assert_eq!(app.view.input(), "Lyon");

        let outgoing = press(&mut app, KeyCode::Enter);
        assert_eq!(outgoing.as_deref(), Some("Lyon"));
        assert_eq!(app.view.input(), "");
        assert!(app.view.is_loading());
    }

    #[test]
    fn test_enter_on_blank_input_does_nothing() {
        let mut app = App::new(ChatView::new());
        type_text(&mut app, "  ");
        assert!(press(&mut app, KeyCode::Enter).is_none());
        assert_eq!(app.view.messages().len(), 1);
        assert_eq!(app.view.input(), "  ");
    }

    #[test]
    fn test_backspace_removes_last_char() {
        let mut app = App::new(ChatView::new());
        type_text(&mut app, "Nicé");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.view.input(), "Nic");
    }

    #[test]
    fn test_input_disabled_while_loading() {
        let mut app = App::new(ChatView::new());
        type_text(&mut app, "Rome");
        press(&mut app, KeyCode::Enter);

        type_text(&mut app, "Milan");
        assert_eq!(app.view.input(), "");
        assert!(press(&mut app, KeyCode::Enter).is_none());
        assert_eq!(app.view.messages().len(), 2);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(ChatView::new());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = App::new(ChatView::new());
        handle_chat_input(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut app,
        );
        assert!(app.should_quit);
        assert_eq!(app.view.input(), "");
    }

    #[test]
    fn test_page_up_releases_follow() {
        let mut app = App::new(ChatView::new());
        press(&mut app, KeyCode::PageUp);
        assert!(!app.scroll.is_following_latest());
    }
}
