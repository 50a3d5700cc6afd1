//! Card menu widget.
//!
//! Options are drawn as 3-line cards so they read as touch targets on the
//! kiosk screen. The selected card gets a bar on its left edge.

use crate::styles::{Theme, HIGHLIGHT_SYMBOL};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

const CARD_HEIGHT: u16 = 3;

/// A single card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub icon: String,
    pub text: String,
    /// Dimmed suffix, e.g. an eligibility note
    pub info: Option<String>,
}

impl MenuItem {
    pub fn new(icon: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            text: text.into(),
            info: None,
        }
    }

    pub fn info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }
}

/// Selection state for [`Menu`]. Always points at a card when there is one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MenuState {
    selected: usize,
    len: usize,
}

impl MenuState {
    pub fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    pub fn selected(&self) -> Option<usize> {
        (self.len > 0).then_some(self.selected)
    }

    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.selected = index;
        }
    }

    /// Move up, wrapping to the last card
    pub fn previous(&mut self) {
        if self.len > 0 {
            self.selected = (self.selected + self.len - 1) % self.len;
        }
    }

    /// Move down, wrapping to the first card
    pub fn next(&mut self) {
        if self.len > 0 {
            self.selected = (self.selected + 1) % self.len;
        }
    }

    pub fn first(&mut self) {
        self.selected = 0;
    }

    pub fn last(&mut self) {
        self.selected = self.len.saturating_sub(1);
    }
}

#[derive(Debug, Clone)]
pub struct Menu<'a> {
    items: &'a [MenuItem],
    theme: &'a Theme,
}

impl<'a> Menu<'a> {
    pub fn new(items: &'a [MenuItem], theme: &'a Theme) -> Self {
        Self { items, theme }
    }

    /// Card rectangles that fit inside `area`, paired with their index
    pub fn clickable_areas(items: &[MenuItem], area: Rect) -> Vec<(Rect, usize)> {
        (0..items.len())
            .map(|i| (area.y + i as u16 * CARD_HEIGHT, i))
            .take_while(|(y, _)| y + CARD_HEIGHT <= area.y + area.height)
            .map(|(y, i)| (Rect::new(area.x, y, area.width, CARD_HEIGHT), i))
            .collect()
    }
}

impl StatefulWidget for Menu<'_> {
    type State = MenuState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let t = self.theme;
        let width = area.width as usize;

        for (card, i) in Self::clickable_areas(self.items, area) {
            let item = &self.items[i];
            let selected = state.selected() == Some(i);
            let style = if selected { t.highlight_style() } else { t.text_style() };
            let bar = Span::styled(
                if selected { HIGHLIGHT_SYMBOL } else { " " },
                t.border_focused_style().patch(Style::default().bg(t.highlight_bg_for(selected))),
            );

            let blank = Line::from(vec![bar.clone(), Span::styled(" ".repeat(width.saturating_sub(1)), style)]);
            blank.clone().render(Rect::new(card.x, card.y, card.width, 1), buf);
            blank.render(Rect::new(card.x, card.y + 2, card.width, 1), buf);

            let mut spans = vec![
                bar,
                Span::styled(format!(" {} ", item.icon), style),
                Span::styled(item.text.clone(), style),
            ];
            if let Some(info) = &item.info {
                spans.push(Span::styled(format!("  {}", info), t.muted_style().patch(Style::default().bg(t.highlight_bg_for(selected)))));
            }
            let used: usize = spans.iter().map(Span::width).sum();
            if used < width {
                spans.push(Span::styled(" ".repeat(width - used), style));
            }
            Line::from(spans).render(Rect::new(card.x, card.y + 1, card.width, 1), buf);
        }
    }
}
