//! Menu view: screen copy above a column of option cards.
//!
//! Serves the welcome screen, the branching screens and the plain detail
//! screens, which differ only in their catalog entries.

use super::options::OptionList;
use super::screen_trait::{RenderContext, View, ViewAction};
use super::{content_column, key_action};
use crate::catalog;
use crate::navigation::ScreenId;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

pub struct CardMenuView {
    screen: ScreenId,
    options: OptionList,
}

impl CardMenuView {
    pub fn new(screen: ScreenId) -> Self {
        Self {
            screen,
            options: OptionList::new(catalog::options(screen)),
        }
    }
}

impl View for CardMenuView {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let area = content_column(area);
        let t = ctx.theme;

        let mut lines: Vec<Line> = catalog::copy(self.screen)
            .body
            .lines()
            .map(|l| Line::styled(l, t.text_style()))
            .collect();
        if let Some(extra) = catalog::session_line(self.screen, ctx.state) {
            lines.push(Line::default());
            lines.push(Line::styled(extra, t.success_style()));
        }
        let body_height = lines.len() as u16 + 1;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(body_height), Constraint::Min(0)])
            .split(area);
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[0]);
        self.options.render(frame, chunks[1], ctx);
    }

    fn handle_event(&mut self, event: &Event, ctx: &RenderContext) -> ViewAction {
        match event {
            Event::Mouse(mouse) => self.options.handle_mouse(mouse),
            _ => match key_action(event, ctx) {
                Some(action) => self.options.handle_action(action),
                None => ViewAction::None,
            },
        }
    }
}
