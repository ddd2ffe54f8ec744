use crate::chat_view::{ChatView, ViewEvent};
use crate::scroll::ChatScroll;
use crate::status_indicator::StatusIndicator;
use tokio::sync::mpsc;

/// Terminal application state: the chat view model plus everything only the
/// renderer cares about.
pub struct App {
    pub view: ChatView,
    pub status_indicator: StatusIndicator,
    pub scroll: ChatScroll,
    pub should_quit: bool,
    view_events: mpsc::UnboundedReceiver<ViewEvent>,
}

impl App {
    pub fn new(mut view: ChatView) -> App {
        let view_events = view.subscribe();
        let mut status_indicator = StatusIndicator::new();
        status_indicator.set_thinking(view.is_loading());

        App {
            view,
            status_indicator,
            scroll: ChatScroll::new(),
            should_quit: false,
            view_events,
        }
    }

    /// Applies pending view-model notifications to the renderer state.
    pub fn process_view_events(&mut self) {
        while let Ok(event) = self.view_events.try_recv() {
            match event {
                ViewEvent::ScrollToLatest => self.scroll.scroll_to_latest(),
                ViewEvent::LoadingChanged(loading) => {
                    self.status_indicator.set_thinking(loading);
                    // The typing bubble is the last thing in the pane.
                    if loading {
                        self.scroll.scroll_to_latest();
                    }
                }
                ViewEvent::MessageAppended { index } => {
                    log::debug!("Message {} appended", index);
                }
                ViewEvent::InputChanged => {}
            }
        }
    }

    pub fn on_tick(&mut self) {
        self.status_indicator.update_spinner();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_drives_status_indicator() {
        let mut app = App::new(ChatView::new());
        app.view.begin_submit("Madrid");
        app.process_view_events();
        assert!(app.status_indicator.is_thinking());

        app.view.complete_submit(Ok("30°C".to_string()));
        app.process_view_events();
        assert!(!app.status_indicator.is_thinking());
    }

    #[test]
    fn test_new_message_resumes_following() {
        let mut app = App::new(ChatView::new());
        app.scroll.resolve(100, 10);
        app.scroll.scroll_up(30);
        assert!(!app.scroll.is_following_latest());

        app.view.begin_submit("Madrid");
        app.process_view_events();
        assert!(app.scroll.is_following_latest());
    }
}
