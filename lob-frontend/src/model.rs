use std::collections::HashMap;

use lob_session::model::{FileId, ManagedFile, Session};

use crate::{event::Preview, settings::Settings};

#[derive(Debug)]
pub struct Model {
    /// Text typed after `:` while the command line has focus.
    pub command: Option<String>,
    pub commandline: Option<String>,
    pub cursor: usize,
    pub help: String,
    pub previews: HashMap<FileId, Preview>,
    pub session: Session,
    pub settings: Settings,
}

impl Model {
    pub fn new(settings: Settings, help: String) -> Self {
        Self {
            command: None,
            commandline: None,
            cursor: 0,
            help,
            previews: HashMap::new(),
            session: Session::new(settings.validation.clone()),
            settings,
        }
    }

    pub fn selected(&self) -> Option<&ManagedFile> {
        self.session.files.get(self.cursor)
    }
}
