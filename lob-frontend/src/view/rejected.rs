use std::sync::Arc;

use lob_file::{format, validation::RejectedEntry, CandidateFile};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::Model;

pub fn view(model: &Model, frame: &mut Frame, rect: Rect) {
    if rect.height == 0 {
        return;
    }

    let lines = model
        .session
        .rejected
        .iter()
        .map(rejected_line)
        .collect::<Vec<_>>();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" rejected ({}) ", model.session.rejected.len()));

    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

fn rejected_line(entry: &RejectedEntry<Arc<CandidateFile>>) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!(
            "{} ({}): ",
            entry.file.name,
            format::format_size(entry.file.size)
        )),
        Span::styled(entry.errors.join("; "), Style::default().fg(Color::Red)),
    ])
}

#[cfg(test)]
mod test {
    use std::{path::Path, sync::Arc};

    use lob_file::{validation::RejectedEntry, CandidateFile, MIB};

    use super::rejected_line;

    #[test]
    fn rejected_line_shows_name_size_and_errors() {
        let entry = RejectedEntry {
            file: Arc::new(CandidateFile::new(
                "notes.txt",
                "text/plain",
                2 * MIB,
                Path::new("notes.txt"),
            )),
            errors: vec![
                "File type \"text/plain\" is not supported".to_owned(),
                "Too many files".to_owned(),
            ],
        };

        let text = rejected_line(&entry)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect::<String>();

        assert_eq!(
            "notes.txt (2 MB): File type \"text/plain\" is not supported; Too many files",
            text
        );
    }
}
