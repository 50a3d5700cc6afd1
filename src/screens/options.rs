//! Selectable option cards shared by the menu-style views.

use super::screen_trait::{RenderContext, ViewAction};
use crate::catalog::MenuOption;
use crate::keymap::Action;
use crate::navigation::Intent;
use crate::widgets::{Menu, MenuItem, MenuState};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use ratatui::Frame;

#[derive(Debug, Clone)]
pub struct OptionList {
    options: Vec<MenuOption>,
    items: Vec<MenuItem>,
    state: MenuState,
    /// Card rectangles from the last render, for mouse hits
    areas: Vec<(Rect, usize)>,
}

impl OptionList {
    pub fn new(options: Vec<MenuOption>) -> Self {
        let items = options.iter().map(|o| o.item.clone()).collect::<Vec<_>>();
        Self {
            state: MenuState::new(items.len()),
            options,
            items,
            areas: Vec::new(),
        }
    }

    fn activate(&self, index: usize) -> ViewAction {
        match self.options.get(index) {
            Some(option) => ViewAction::Request(option.intent, option.payload.clone()),
            None => ViewAction::None,
        }
    }

    /// Map a keymap action onto the list
    pub fn handle_action(&mut self, action: Action) -> ViewAction {
        match action {
            Action::MoveUp | Action::MoveLeft => self.state.previous(),
            Action::MoveDown | Action::MoveRight => self.state.next(),
            Action::Home => self.state.first(),
            Action::End => self.state.last(),
            Action::Confirm => {
                if let Some(i) = self.state.selected() {
                    return self.activate(i);
                }
            }
            Action::Back => {
                if self.options.iter().any(|o| o.intent == Intent::Back) {
                    return ViewAction::Request(Intent::Back, None);
                }
            }
            _ => {}
        }
        ViewAction::None
    }

    /// A press on a card selects and activates it
    pub fn handle_mouse(&mut self, mouse: &MouseEvent) -> ViewAction {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return ViewAction::None;
        }
        let hit = self
            .areas
            .iter()
            .find(|(rect, _)| rect.contains(Position::new(mouse.column, mouse.row)))
            .map(|(_, i)| *i);
        match hit {
            Some(i) => {
                self.state.select(i);
                self.activate(i)
            }
            None => ViewAction::None,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        self.areas = Menu::clickable_areas(&self.items, area);
        frame.render_stateful_widget(Menu::new(&self.items, ctx.theme), area, &mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::navigation::{Payload, ScreenId};
    use crate::state::LoginMethod;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_confirm_sends_selected_option() {
        let mut list = OptionList::new(catalog::options(ScreenId::Welcome));
        list.handle_action(Action::MoveDown);
        assert_eq!(
            list.handle_action(Action::Confirm),
            ViewAction::Request(
                Intent::StartLogin,
                Some(Payload::Login(LoginMethod::QuickResponseCode))
            )
        );
    }

    #[test]
    fn test_back_only_when_offered() {
        let mut welcome = OptionList::new(catalog::options(ScreenId::Welcome));
        assert_eq!(welcome.handle_action(Action::Back), ViewAction::None);

        let mut detail = OptionList::new(catalog::options(ScreenId::StudentDetail));
        assert_eq!(
            detail.handle_action(Action::Back),
            ViewAction::Request(Intent::Back, None)
        );
    }

    #[test]
    fn test_click_on_rendered_card() {
        let mut list = OptionList::new(catalog::options(ScreenId::Success));
        list.areas = Menu::clickable_areas(&list.items, Rect::new(0, 0, 40, 6));
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 5,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            list.handle_mouse(&click),
            ViewAction::Request(Intent::CheckOtherServices, None)
        );
    }
}
