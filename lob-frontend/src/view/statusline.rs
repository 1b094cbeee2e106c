use lob_file::format;
use lob_session::model::UploadStatus;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::model::Model;

pub fn view(model: &Model, frame: &mut Frame, rect: Rect) {
    frame.render_widget(
        Block::default().style(Style::default().bg(Color::Black)),
        rect,
    );
    frame.render_widget(Paragraph::new(content(model)), rect);
}

fn content(model: &Model) -> Line<'static> {
    let session = &model.session;
    let mut spans = vec![Span::styled(
        format!(
            "{} files, {} ",
            session.files.len(),
            format::format_size(session.total_size())
        ),
        Style::default().fg(Color::Gray),
    )];

    for (status, color) in [
        (UploadStatus::Pending, Color::Gray),
        (UploadStatus::Uploading, Color::Blue),
        (UploadStatus::Paused, Color::Yellow),
        (UploadStatus::Completed, Color::Green),
        (UploadStatus::Error, Color::Red),
    ] {
        let count = session.count(status);
        if count > 0 {
            spans.push(Span::styled(
                format!(" {} {}", count, status),
                Style::default().fg(color),
            ));
        }
    }

    if session.can_start_all() {
        spans.push(Span::styled(
            " | S to start all",
            Style::default().fg(Color::DarkGray),
        ));
    }

    Line::from(spans)
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use lob_file::{CandidateFile, MIB};
    use lob_session::message::SessionMessage;

    use crate::{model::Model, settings::Settings, update::session};

    use super::content;

    fn text(model: &Model) -> String {
        content(model)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect()
    }

    #[test]
    fn content_counts_files_per_status() {
        let mut model = Model::new(Settings::default(), String::new());
        session::update(
            &mut model,
            &SessionMessage::AddCandidates(
                vec![
                    CandidateFile::new("a.pdf", "application/pdf", MIB, Path::new("a.pdf")),
                    CandidateFile::new("b.pdf", "application/pdf", MIB, Path::new("b.pdf")),
                ],
                Vec::new(),
            ),
        );
        assert_eq!("2 files, 2 MB  2 pending | S to start all", text(&model));

        let id = model.session.files[0].id.clone();
        session::update(&mut model, &SessionMessage::Start(id));
        assert_eq!(
            "2 files, 2 MB  1 pending 1 uploading | S to start all",
            text(&model)
        );
    }
}
