use ratatui::{
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::{error::AppError, layout::AppLayout, model::Model, terminal::TerminalWrapper};

mod commandline;
mod details;
mod files;
mod rejected;
mod statusline;

const MAX_REJECTED_HEIGHT: u16 = 8;

pub fn render_model(terminal: &mut TerminalWrapper, model: &Model) -> Result<(), AppError> {
    terminal.draw(|frame| {
        let layout = AppLayout::new(
            frame.area(),
            rejected_height(model),
            u16::from(model.session.size_warning.is_some()),
        );

        files::view(model, frame, layout.files);
        details::view(model, frame, layout.details);
        rejected::view(model, frame, layout.rejected);

        if let Some(warning) = &model.session.size_warning {
            let style = Style::default().fg(Color::Yellow);
            frame.render_widget(
                Paragraph::new(Line::styled(warning.as_str(), style)),
                layout.warning,
            );
        }

        statusline::view(model, frame, layout.statusline);
        commandline::view(model, frame, layout.commandline);
    })
}

fn rejected_height(model: &Model) -> u16 {
    match model.session.rejected.len() {
        0 => 0,
        count => (count as u16).saturating_add(2).min(MAX_REJECTED_HEIGHT),
    }
}
