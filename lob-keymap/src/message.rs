use std::fmt::Display;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeymapMessage {
    Cancel,
    ClearRejected,
    DeleteChar,
    EnterCommand,
    ExecuteCommand,
    InsertChar(char),
    LeaveCommand,
    MoveCursor(CursorDirection),
    Pause,
    Quit,
    Remove,
    Resume,
    Retry,
    Start,
    StartAll,
}

impl Display for KeymapMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeymapMessage::Cancel => write!(f, "cancel"),
            KeymapMessage::ClearRejected => write!(f, "clear rejections"),
            KeymapMessage::DeleteChar => write!(f, "delete char"),
            KeymapMessage::EnterCommand => write!(f, "command"),
            KeymapMessage::ExecuteCommand => write!(f, "execute"),
            KeymapMessage::InsertChar(c) => write!(f, "insert {}", c),
            KeymapMessage::LeaveCommand => write!(f, "leave command"),
            KeymapMessage::MoveCursor(CursorDirection::Down) => write!(f, "next"),
            KeymapMessage::MoveCursor(CursorDirection::Up) => write!(f, "previous"),
            KeymapMessage::Pause => write!(f, "pause"),
            KeymapMessage::Quit => write!(f, "quit"),
            KeymapMessage::Remove => write!(f, "remove"),
            KeymapMessage::Resume => write!(f, "resume"),
            KeymapMessage::Retry => write!(f, "retry"),
            KeymapMessage::Start => write!(f, "start"),
            KeymapMessage::StartAll => write!(f, "start all"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CursorDirection {
    Down,
    Up,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    Command,
    #[default]
    Navigation,
}
