use lob_keymap::message::CursorDirection;

use crate::model::Model;

pub fn relocate(model: &mut Model, direction: &CursorDirection) {
    let count = model.session.files.len();
    model.cursor = match direction {
        CursorDirection::Down => (model.cursor + 1).min(count.saturating_sub(1)),
        CursorDirection::Up => model.cursor.saturating_sub(1),
    };
}

/// Keeps the cursor on an existing file after the file list shrank.
pub fn clamp(model: &mut Model) {
    let count = model.session.files.len();
    if model.cursor >= count {
        model.cursor = count.saturating_sub(1);
    }
}
