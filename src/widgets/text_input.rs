//! Bordered single-line field for a [`TextInput`].

use crate::styles::Theme;
use crate::utils::text_input::TextInput;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    theme: &'a Theme,
    title: &'a str,
    placeholder: &'a str,
    focused: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput, theme: &'a Theme) -> Self {
        Self {
            input,
            theme,
            title: "",
            placeholder: "",
            focused: false,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Terminal cursor position for a focused field drawn in `area`
    pub fn cursor_position(&self, area: Rect) -> Position {
        let inner_width = area.width.saturating_sub(3);
        let x = area.x + 1 + (self.input.cursor() as u16).min(inner_width);
        Position::new(x, area.y + 1)
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = self.theme;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                t.border_focused_style()
            } else {
                t.border_style()
            })
            .title(self.title)
            .title_style(t.title_style());

        let text = if self.input.text().is_empty() {
            Span::styled(self.placeholder, t.muted_style())
        } else {
            Span::styled(self.input.text(), t.text_style())
        };
        Paragraph::new(Line::from(text)).block(block).render(area, buf);
    }
}
