use ratatui::prelude::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Debug)]
pub struct AppLayout {
    pub files: Rect,
    pub details: Rect,
    pub rejected: Rect,
    pub warning: Rect,
    pub statusline: Rect,
    pub commandline: Rect,
}

impl AppLayout {
    pub fn new(rect: Rect, rejected_height: u16, warning_height: u16) -> Self {
        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(rejected_height),
                Constraint::Length(warning_height),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(rect);

        let files = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(Constraint::from_ratios([(3, 4), (1, 4)]))
            .split(main[0]);

        Self {
            files: files[0],
            details: files[1],
            rejected: main[1],
            warning: main[2],
            statusline: main[3],
            commandline: main[4],
        }
    }
}

#[cfg(test)]
mod test {
    use ratatui::layout::Rect;

    use super::AppLayout;

    #[test]
    fn new_collapses_empty_sections() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24), 0, 0);

        assert_eq!(0, layout.rejected.height);
        assert_eq!(0, layout.warning.height);
        assert_eq!(1, layout.statusline.height);
        assert_eq!(1, layout.commandline.height);
        assert_eq!(22, layout.files.height);
        assert_eq!(60, layout.files.width);
        assert_eq!(20, layout.details.width);
    }
}
