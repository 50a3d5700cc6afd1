use crate::styles::Theme;
use chrono::{DateTime, Local};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Common header: kiosk name, screen title and the wall clock
pub struct Header;

impl Header {
    pub const HEIGHT: u16 = 3;

    pub fn render(
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        kiosk_name: &str,
        title: &str,
        clock: DateTime<Local>,
    ) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let clock_text = clock.format("%a %d %b %Y  %H:%M").to_string();
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Min(0),
                Constraint::Length(clock_text.len() as u16 + 1),
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(format!(" {}", kiosk_name)).style(theme.muted_style()),
            chunks[0],
        );
        frame.render_widget(
            Paragraph::new(title)
                .style(theme.title_style())
                .alignment(Alignment::Center),
            chunks[1],
        );
        frame.render_widget(
            Paragraph::new(clock_text)
                .style(theme.text_style())
                .alignment(Alignment::Right),
            chunks[2],
        );
    }
}
