use lob_file::format;
use lob_session::{
    model::{ManagedFile, UploadStatus},
    view::{self, ProgressView},
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListState},
    Frame,
};

use crate::model::Model;

const BAR_WIDTH: usize = 20;
const NAME_WIDTH: usize = 28;

pub fn view(model: &Model, frame: &mut Frame, rect: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" files ");
    if model.session.files.is_empty() {
        frame.render_widget(block, rect);
        return;
    }

    let lines = model
        .session
        .files
        .iter()
        .map(file_line)
        .collect::<Vec<_>>();

    let list = List::new(lines)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default().with_selected(Some(model.cursor));
    frame.render_stateful_widget(list, rect, &mut state);
}

fn file_line(managed: &ManagedFile) -> Line<'_> {
    let progress = view::present(&managed.progress);
    let status_style = Style::default().fg(status_color(managed.status()));

    let mut spans = vec![
        Span::raw(format!("{:<width$} ", truncate(&managed.file.name), width = NAME_WIDTH)),
        Span::styled(
            format!("{:>10} ", format::format_size(managed.file.size)),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("{:<12} ", managed.category().to_string()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(progress_bar(progress.fill, BAR_WIDTH), status_style),
        Span::raw(format!(" {:>4} ", progress.percentage)),
        Span::styled(progress.status, status_style),
    ];

    spans.extend(transfer_spans(&progress));

    if let Some(error) = &managed.progress.error_message {
        spans.push(Span::styled(format!(" {}", error), Style::default().fg(Color::Red)));
    }

    Line::from(spans)
}

fn transfer_spans(progress: &ProgressView) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    if let Some(speed) = &progress.speed {
        spans.push(Span::raw(format!(" {}", speed)));
    }
    if let Some(eta) = &progress.eta {
        spans.push(Span::raw(format!(" {} left", eta)));
    }
    spans
}

fn status_color(status: UploadStatus) -> Color {
    match status {
        UploadStatus::Pending => Color::Gray,
        UploadStatus::Uploading => Color::Blue,
        UploadStatus::Paused => Color::Yellow,
        UploadStatus::Completed => Color::Green,
        UploadStatus::Error => Color::Red,
    }
}

fn truncate(name: &str) -> String {
    if name.chars().count() <= NAME_WIDTH {
        return name.to_owned();
    }

    let mut truncated = name.chars().take(NAME_WIDTH - 1).collect::<String>();
    truncated.push('…');
    truncated
}

fn progress_bar(fill: f64, width: usize) -> String {
    let filled = ((fill / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
