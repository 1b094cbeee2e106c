use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::model::Model;

pub fn view(model: &Model, frame: &mut Frame, rect: Rect) {
    frame.render_widget(Paragraph::new(content(model)), rect);
}

fn content(model: &Model) -> Line<'_> {
    if let Some(command) = &model.command {
        return Line::from(format!(":{}", command));
    }

    match &model.commandline {
        Some(message) => Line::from(message.as_str()),
        None => Line::styled(model.help.as_str(), Style::default().fg(Color::DarkGray)),
    }
}
