//! Reference number entry for the application status lookup.

use super::options::OptionList;
use super::screen_trait::{RenderContext, View, ViewAction};
use super::{content_column, key_action};
use crate::catalog;
use crate::keymap::{Action, Keymap};
use crate::navigation::{Intent, Payload, ScreenId};
use crate::utils::text_input::TextInput;
use crate::widgets::TextInputWidget;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const MAX_REFERENCE_LEN: usize = 24;

pub struct ReferenceInputView {
    input: TextInput,
    options: OptionList,
    error: Option<&'static str>,
}

impl Default for ReferenceInputView {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceInputView {
    pub fn new() -> Self {
        Self {
            input: TextInput::with_limit(MAX_REFERENCE_LEN),
            options: OptionList::new(catalog::options(ScreenId::CheckApplicationInput)),
            error: None,
        }
    }

    pub fn text(&self) -> &str {
        self.input.text()
    }

    fn submit(&mut self) -> ViewAction {
        if self.input.is_empty() {
            self.error = Some("Enter a reference number first");
            return ViewAction::None;
        }
        ViewAction::Request(
            Intent::Submit,
            Some(Payload::Reference(self.input.text_trimmed().to_string())),
        )
    }

    /// Option cards send a bare Submit; attach the typed reference
    fn resolve(&mut self, action: ViewAction) -> ViewAction {
        match action {
            ViewAction::Request(Intent::Submit, _) => self.submit(),
            other => other,
        }
    }
}

impl View for ReferenceInputView {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let area = content_column(area);
        let t = ctx.theme;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(catalog::copy(ScreenId::CheckApplicationInput).body).style(t.text_style()),
            chunks[0],
        );
        let field = TextInputWidget::new(&self.input, t)
            .title(" Reference number ")
            .placeholder("e.g. APP-2024-000123")
            .focused(true);
        frame.set_cursor_position(field.cursor_position(chunks[1]));
        frame.render_widget(field, chunks[1]);
        if let Some(error) = self.error {
            frame.render_widget(Paragraph::new(error).style(t.error_style()), chunks[2]);
        }
        self.options.render(frame, chunks[3], ctx);
    }

    fn handle_event(&mut self, event: &Event, ctx: &RenderContext) -> ViewAction {
        if let Event::Mouse(mouse) = event {
            let action = self.options.handle_mouse(mouse);
            return self.resolve(action);
        }
        let Event::Key(key) = event else {
            return ViewAction::None;
        };
        if key.kind != KeyEventKind::Press {
            return ViewAction::None;
        }

        if let KeyCode::Char(c) = key.code {
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                self.input.insert_char(c.to_ascii_uppercase());
                self.error = None;
                return ViewAction::None;
            }
        }

        match key_action(event, ctx) {
            Some(Action::Back) => ViewAction::Request(Intent::Back, None),
            Some(action @ (Action::Confirm | Action::MoveUp | Action::MoveDown)) => {
                let action = self.options.handle_action(action);
                self.resolve(action)
            }
            Some(action) if self.input.handle_action(action) => ViewAction::None,
            _ => {
                self.input.handle_key(key.code);
                ViewAction::None
            }
        }
    }

    fn is_input_focused(&self) -> bool {
        true
    }

    fn footer(&self, keymap: &Keymap, _in_session: bool) -> String {
        format!(
            "Submit: {} | Back: {} | Log out: {}",
            keymap.key_for(Action::Confirm),
            keymap.key_for(Action::Back),
            keymap.key_for(Action::Logout)
        )
    }
}
