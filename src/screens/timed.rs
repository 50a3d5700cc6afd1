//! Progress view for the screens that complete on their own.

use super::content_column;
use super::screen_trait::{RenderContext, View, ViewAction};
use crate::catalog;
use crate::keymap::{Action, Keymap};
use crate::navigation::{Intent, ScreenId};
use crate::state::LoginMethod;
use crate::timers::CompletionTimer;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::{Gauge, Paragraph};

pub struct TimedView {
    screen: ScreenId,
    timer: Option<CompletionTimer>,
}

impl TimedView {
    pub fn new(screen: ScreenId) -> Self {
        Self { screen, timer: None }
    }
}

impl View for TimedView {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let area = content_column(area);
        let t = ctx.theme;
        let hint = match (self.screen, ctx.state.login_method) {
            (ScreenId::ReadingId, LoginMethod::CredentialCard) => "Keep your MyKad in the reader",
            (ScreenId::ReadingId, LoginMethod::QuickResponseCode) => "Hold your QR code to the scanner",
            _ => "Please wait",
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);
        frame.render_widget(
            Paragraph::new(catalog::copy(self.screen).body)
                .style(t.title_style())
                .alignment(Alignment::Center),
            chunks[0],
        );
        frame.render_widget(
            Paragraph::new(hint).style(t.muted_style()).alignment(Alignment::Center),
            chunks[1],
        );

        let progress = self.timer.as_ref().map_or(0.0, |timer| timer.progress(ctx.now));
        frame.render_widget(
            Gauge::default()
                .gauge_style(t.title_style())
                .ratio(progress)
                .label(""),
            chunks[2],
        );
    }

    fn handle_event(&mut self, _event: &Event, _ctx: &RenderContext) -> ViewAction {
        ViewAction::None
    }

    fn tick(&mut self, ctx: &RenderContext) -> ViewAction {
        let fired = self
            .timer
            .as_mut()
            .and_then(|timer| timer.poll(ctx.now, ctx.state.screen, ctx.epoch));
        match fired {
            Some(intent) => ViewAction::Request(intent, None),
            None => ViewAction::None,
        }
    }

    fn on_enter(&mut self, ctx: &RenderContext) {
        self.timer = ctx
            .config
            .timing
            .completion_delay(self.screen)
            .map(|delay| CompletionTimer::arm(self.screen, ctx.epoch, delay, ctx.now));
    }

    fn on_exit(&mut self) {
        if let Some(timer) = self.timer.as_mut() {
            timer.cancel();
        }
    }

    fn footer(&self, keymap: &Keymap, _in_session: bool) -> String {
        format!("Log out: {}", keymap.key_for(Action::Logout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::state::SessionState;
    use crate::styles::Theme;
    use std::time::{Duration, Instant};

    fn ctx<'a>(state: &'a SessionState, config: &'a Config, theme: &'a Theme, now: Instant) -> RenderContext<'a> {
        RenderContext {
            state,
            config,
            theme,
            epoch: 0,
            now,
        }
    }

    #[test]
    fn test_fires_complete_after_configured_delay() {
        let t0 = Instant::now();
        let config = Config::default();
        let theme = Theme::default();
        let mut state = SessionState::new(t0);
        state.screen = ScreenId::ReadingId;

        let mut view = TimedView::new(ScreenId::ReadingId);
        view.on_enter(&ctx(&state, &config, &theme, t0));
        assert_eq!(view.tick(&ctx(&state, &config, &theme, t0 + Duration::from_millis(1999))), ViewAction::None);
        assert_eq!(
            view.tick(&ctx(&state, &config, &theme, t0 + Duration::from_millis(2000))),
            ViewAction::Request(Intent::Complete, None)
        );
        assert_eq!(view.tick(&ctx(&state, &config, &theme, t0 + Duration::from_secs(5))), ViewAction::None);
    }

    #[test]
    fn test_exit_cancels_pending_completion() {
        let t0 = Instant::now();
        let config = Config::default();
        let theme = Theme::default();
        let mut state = SessionState::new(t0);
        state.screen = ScreenId::Processing;

        let mut view = TimedView::new(ScreenId::Processing);
        view.on_enter(&ctx(&state, &config, &theme, t0));
        view.on_exit();
        assert_eq!(view.tick(&ctx(&state, &config, &theme, t0 + Duration::from_secs(10))), ViewAction::None);
    }
}
