//! The chat view model.
//!
//! Holds the conversation, the input buffer and the loading flag, and tells
//! subscribers about every change. Renderers re-read the state after each
//! event; nothing here knows about the terminal.

use crate::api::ChatService;
use crate::constants::CONNECTION_ERROR_MESSAGE;
use crate::conversation::Conversation;
use crate::errors::ChatResult;
use crate::models::Message;
use tokio::sync::mpsc;

/// Change notifications emitted by [`ChatView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    MessageAppended { index: usize },
    InputChanged,
    LoadingChanged(bool),
    /// The message list changed; the renderer should bring the last message
    /// into view.
    ScrollToLatest,
}

#[derive(Debug, Default)]
pub struct ChatView {
    conversation: Conversation,
    input: String,
    loading: bool,
    subscribers: Vec<mpsc::UnboundedSender<ViewEvent>>,
}

impl ChatView {
    pub fn new() -> Self {
        Self::with_conversation(Conversation::new())
    }

    pub fn with_conversation(conversation: Conversation) -> Self {
        Self {
            conversation,
            input: String::new(),
            loading: false,
            subscribers: Vec::new(),
        }
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Registers a new observer. Events are delivered in mutation order.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<ViewEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Replaces the input buffer. Ignored while a request is outstanding,
    /// since the input control is disabled then.
    pub fn update_input(&mut self, text: impl Into<String>) {
        if self.loading {
            return;
        }
        self.input = text.into();
        self.notify(ViewEvent::InputChanged);
    }

    /// Submits the current input buffer.
    pub fn on_enter_key(&mut self) -> Option<String> {
        let text = self.input.clone();
        self.begin_submit(&text)
    }

    /// First half of a submit: records the user message, clears the input and
    /// raises the loading flag. Returns the text to send to the chat service,
    /// or `None` when the text is blank or a request is already in flight.
    pub fn begin_submit(&mut self, text: &str) -> Option<String> {
        if text.trim().is_empty() || self.loading {
            return None;
        }

        self.append(Message::user(text));

        self.input.clear();
        self.notify(ViewEvent::InputChanged);

        self.set_loading(true);
        Some(text.to_string())
    }

    /// Second half of a submit: appends the reply, or the fixed apology if the
    /// service failed, and clears the loading flag.
    pub fn complete_submit(&mut self, outcome: ChatResult<String>) {
        if !self.loading {
            log::warn!("Ignoring chat reply with no request outstanding");
            return;
        }

        let reply = match outcome {
            Ok(text) => Message::bot(text),
            Err(e) => {
                log::error!("Error sending message: {}", e);
                Message::bot(CONNECTION_ERROR_MESSAGE)
            }
        };
        self.append(reply);
        self.set_loading(false);
    }

    /// Full submit: begin, call the service, complete.
    pub async fn submit(&mut self, text: &str, service: &dyn ChatService) {
        if let Some(outgoing) = self.begin_submit(text) {
            let outcome = service.send_message(&outgoing).await;
            self.complete_submit(outcome);
        }
    }

    fn append(&mut self, message: Message) {
        let index = self.conversation.push(message);
        self.notify(ViewEvent::MessageAppended { index });
        self.notify(ViewEvent::ScrollToLatest);
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.notify(ViewEvent::LoadingChanged(loading));
    }

    fn notify(&mut self, event: ViewEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
