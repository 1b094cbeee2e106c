use futures::{FutureExt, StreamExt};
use lob_keymap::{conversion, message::KeymapMessage, MessageResolver};
use lob_session::{message::SessionMessage, model::FileId};
use tokio::{
    select,
    sync::mpsc::{self, Receiver},
};
use tokio_util::sync::CancellationToken;

use crate::{
    error::AppError,
    settings::Settings,
    task::{Task, TaskManager},
};

#[derive(Debug)]
pub struct Envelope {
    pub messages: Vec<Message>,
    pub source: MessageSource,
}

#[derive(Debug, Eq, PartialEq)]
pub enum MessageSource {
    Task,
    User,
}

#[derive(Debug, PartialEq)]
pub enum Message {
    Keymap(KeymapMessage),
    Error(String),
    PreviewLoaded(FileId, Preview),
    Resize(u16, u16),
    Session(SessionMessage),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Preview {
    Image { width: u32, height: u32 },
    None,
}

pub struct Emitter {
    bindings: Vec<(String, KeymapMessage)>,
    cancellation: CancellationToken,
    tasks: TaskManager,
    pub receiver: Receiver<Envelope>,
}

impl Emitter {
    pub fn start(settings: &Settings) -> Self {
        let (sender, receiver) = mpsc::channel(16);

        let resolver = MessageResolver::default();
        let bindings = resolver
            .bindings()
            .into_iter()
            .map(|(key, message)| (key, message.clone()))
            .collect();

        let cancellation = CancellationToken::new();
        start_crossterm_listener(cancellation.child_token(), resolver, sender.clone());

        Self {
            bindings,
            cancellation,
            tasks: TaskManager::new(sender, settings.tick, settings.failure_rate),
            receiver,
        }
    }

    pub fn bindings(&self) -> &[(String, KeymapMessage)] {
        &self.bindings
    }

    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.cancellation.cancel();
        self.tasks.finishing().await
    }

    pub fn run(&mut self, task: Task) {
        self.tasks.run(task);
    }

    pub fn abort(&mut self, id: &FileId) {
        self.tasks.abort(id);
    }
}

fn start_crossterm_listener(
    cancellation: CancellationToken,
    mut resolver: MessageResolver,
    sender: mpsc::Sender<Envelope>,
) {
    tokio::spawn(async move {
        let mut reader = crossterm::event::EventStream::new();

        loop {
            let crossterm_event = reader.next().fuse();

            select! {
                _ = cancellation.cancelled() => break,
                Some(Ok(event)) = crossterm_event => {
                    if let Some(envelope) = handle_crossterm_event(&mut resolver, event) {
                        if sender.send(envelope).await.is_err() {
                            tracing::debug!("receiver closed, stopping crossterm listener");
                            break;
                        }
                    }
                }
            }
        }
    });
}

fn handle_crossterm_event(
    resolver: &mut MessageResolver,
    event: crossterm::event::Event,
) -> Option<Envelope> {
    match event {
        crossterm::event::Event::Key(key) => {
            let message = conversion::to_key(&key).and_then(|key| resolver.add_key(key))?;
            Some(Envelope {
                messages: vec![Message::Keymap(message)],
                source: MessageSource::User,
            })
        }
        crossterm::event::Event::Resize(x, y) => Some(Envelope {
            messages: vec![Message::Resize(x, y)],
            source: MessageSource::User,
        }),
        crossterm::event::Event::FocusLost
        | crossterm::event::Event::FocusGained
        | crossterm::event::Event::Paste(_)
        | crossterm::event::Event::Mouse(_) => None,
    }
}

#[cfg(test)]
mod test {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
    use lob_keymap::{message::KeymapMessage, MessageResolver};

    use super::{handle_crossterm_event, Message, MessageSource};

    #[test]
    fn handle_crossterm_event_resolves_bound_key() {
        let mut resolver = MessageResolver::default();
        let event = Event::Key(KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT));

        let envelope = handle_crossterm_event(&mut resolver, event).expect("bound key");
        assert_eq!(MessageSource::User, envelope.source);
        assert_eq!(
            vec![Message::Keymap(KeymapMessage::StartAll)],
            envelope.messages
        );
    }

    #[test]
    fn handle_crossterm_event_skips_unbound_key() {
        let mut resolver = MessageResolver::default();
        let event = Event::Key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE));

        assert!(handle_crossterm_event(&mut resolver, event).is_none());
    }

    #[test]
    fn handle_crossterm_event_resolves_text_in_command_mode() {
        let mut resolver = MessageResolver::default();
        let events = [
            Event::Key(KeyEvent::new(KeyCode::Char(':'), KeyModifiers::SHIFT)),
            Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)),
            Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
        ];

        let messages = events
            .into_iter()
            .filter_map(|event| handle_crossterm_event(&mut resolver, event))
            .flat_map(|envelope| envelope.messages)
            .collect::<Vec<_>>();

        assert_eq!(
            vec![
                Message::Keymap(KeymapMessage::EnterCommand),
                Message::Keymap(KeymapMessage::InsertChar('a')),
                Message::Keymap(KeymapMessage::ExecuteCommand),
            ],
            messages
        );
    }

    #[test]
    fn handle_crossterm_event_forwards_resize() {
        let mut resolver = MessageResolver::default();
        let envelope =
            handle_crossterm_event(&mut resolver, Event::Resize(80, 24)).expect("resize event");

        assert_eq!(vec![Message::Resize(80, 24)], envelope.messages);
    }
}
