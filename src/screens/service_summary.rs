//! Service details, confirmation and success: the selected service record
//! above the step's options.

use super::options::OptionList;
use super::screen_trait::{RenderContext, View, ViewAction};
use super::{content_column, key_action};
use crate::catalog;
use crate::navigation::ScreenId;
use crate::state::SelectedService;
use crate::styles::Theme;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

pub struct ServiceSummaryView {
    screen: ScreenId,
    options: OptionList,
}

impl ServiceSummaryView {
    pub fn new(screen: ScreenId) -> Self {
        Self {
            screen,
            options: OptionList::new(catalog::options(screen)),
        }
    }

    fn service_lines<'a>(&self, service: &'a SelectedService, t: &Theme) -> Vec<Line<'a>> {
        let mut lines = vec![
            Line::from(vec![
                Span::styled(format!("{} ", service.icon), t.title_style()),
                Span::styled(service.title.as_str(), t.title_style()),
                Span::styled(format!("  {}", service.category), t.muted_style()),
            ]),
            Line::default(),
            Line::styled(service.description.as_str(), t.text_style()),
        ];
        if self.screen != ScreenId::Success && !service.eligibility_requirements.is_empty() {
            lines.push(Line::default());
            lines.push(Line::styled("Requirements", t.muted_style()));
            lines.extend(
                service
                    .eligibility_requirements
                    .iter()
                    .map(|r| Line::styled(format!("  ✔ {}", r), t.success_style())),
            );
        }
        lines
    }
}

impl View for ServiceSummaryView {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let area = content_column(area);
        let t = ctx.theme;

        let mut lines = match &ctx.state.selected_service {
            Some(service) => self.service_lines(service, t),
            None => vec![Line::styled("No service selected.", t.warning_style())],
        };
        lines.insert(0, Line::default());
        lines.insert(0, Line::styled(catalog::copy(self.screen).body, t.text_style()));
        let card_height = lines.len() as u16 + 2;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(card_height),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(t.border_style()),
            ),
            chunks[0],
        );
        self.options.render(frame, chunks[2], ctx);
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
