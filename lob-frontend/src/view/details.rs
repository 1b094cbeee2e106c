use lob_file::format;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::{event::Preview, model::Model};

pub fn view(model: &Model, frame: &mut Frame, rect: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" details ");
    frame.render_widget(Paragraph::new(lines(model)).block(block), rect);
}

fn lines(model: &Model) -> Vec<Line<'_>> {
    let Some(selected) = model.selected() else {
        return Vec::new();
    };

    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(selected.file.name.as_str()),
        Line::styled(selected.file.media_type.as_str(), label),
        Line::from(format::format_size(selected.file.size)),
        Line::from(selected.category().to_string()),
    ];

    if selected.has_preview {
        let preview = match model.previews.get(&selected.id) {
            Some(Preview::Image { width, height }) => format!("{}x{} px", width, height),
            Some(Preview::None) => "no preview".to_owned(),
            None => "loading preview".to_owned(),
        };
        lines.push(Line::from(preview));
    }

    lines
}

#[cfg(test)]
mod test {
    use std::{path::Path, sync::Arc};

    use lob_file::{CandidateFile, MIB};
    use lob_session::model::ManagedFile;

    use crate::{event::Preview, model::Model, settings::Settings};

    use super::lines;

    fn text(model: &Model) -> Vec<String> {
        lines(model)
            .iter()
            .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn lines_show_preview_dimensions_of_selected_image() {
        let mut model = Model::new(Settings::default(), String::new());
        let file = CandidateFile::new("a.png", "image/png", MIB, Path::new("a.png"));
        let mut managed = ManagedFile::new(Arc::new(file));
        managed.has_preview = true;

        let id = managed.id.clone();
        model.session.files.push(managed);
        assert_eq!("loading preview", text(&model)[4]);

        model.previews.insert(
            id,
            Preview::Image {
                width: 640,
                height: 480,
            },
        );
        assert_eq!(
            vec!["a.png", "image/png", "1 MB", "image", "640x480 px"],
            text(&model)
        );
    }

    #[test]
    fn lines_are_empty_without_selection() {
        let model = Model::new(Settings::default(), String::new());
        assert!(text(&model).is_empty());
    }
}
