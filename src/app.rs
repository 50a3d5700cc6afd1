use crate::catalog;
use crate::components::{Footer, Header};
use crate::config::Config;
use crate::keymap::Action;
use crate::navigation::{Intent, NavigationController, Outcome, ScreenGraph, ScreenId};
use crate::screens::{self, RenderContext, View, ViewAction};
use crate::state::SessionState;
use crate::styles::Theme;
use crate::timers::{InactivityMonitor, PollOutcome};
use crate::tui::Tui;
use crate::utils::create_standard_layout;
use crate::widgets::{Toast, ToastManager};
use anyhow::Result;
use chrono::Local;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};
use ratatui::Frame;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How long to wait for input before running timers again
const EVENT_POLL: Duration = Duration::from_millis(250);

/// Shown on the entry screen after an inactivity logout
pub const TIMEOUT_NOTICE: &str = "Session ended after inactivity";

/// The kiosk: one navigation controller, its inactivity monitor and the view
/// for the current screen.
pub struct App {
    config: Config,
    theme: Theme,
    nav: NavigationController,
    monitor: InactivityMonitor,
    view: Box<dyn View>,
    /// Screen and session epoch the current view was built for
    view_screen: ScreenId,
    view_epoch: u64,
    toasts: ToastManager,
    should_quit: bool,
}

fn context<'a>(
    nav: &'a NavigationController,
    config: &'a Config,
    theme: &'a Theme,
    now: Instant,
) -> RenderContext<'a> {
    RenderContext {
        state: nav.state(),
        config,
        theme,
        epoch: nav.session_epoch(),
        now,
    }
}

impl App {
    pub fn new(config: Config, theme: Theme, now: Instant) -> Self {
        let nav = NavigationController::new(ScreenGraph::standard(), now);
        let monitor = InactivityMonitor::new(
            config.timing.inactivity_timeout(),
            config.timing.inactivity_poll(),
            now,
        );
        let view_screen = nav.screen();
        let view_epoch = nav.session_epoch();
        let mut app = Self {
            config,
            theme,
            nav,
            monitor,
            view: screens::for_screen(view_screen),
            view_screen,
            view_epoch,
            toasts: ToastManager::new(),
            should_quit: false,
        };
        app.view
            .on_enter(&context(&app.nav, &app.config, &app.theme, now));
        app
    }

    pub fn screen(&self) -> ScreenId {
        self.nav.screen()
    }

    pub fn state(&self) -> &SessionState {
        self.nav.state()
    }

    pub fn session_epoch(&self) -> u64 {
        self.nav.session_epoch()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toasts.current()
    }

    /// Run until the operator quits. The terminal is restored even when the
    /// loop fails.
    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        tui.enter()?;
        info!(kiosk = %self.config.kiosk_name, "kiosk started");
        let result = self.event_loop(tui);
        tui.exit()?;
        info!("kiosk stopped");
        result
    }

    fn event_loop(&mut self, tui: &mut Tui) -> Result<()> {
        loop {
            let now = Instant::now();
            self.tick(now);
            tui.draw(|frame| self.render(frame, now))?;

            if self.should_quit {
                return Ok(());
            }

            if let Some(event) = tui.poll_event(EVENT_POLL)? {
                self.handle_event(event, Instant::now());
            }
        }
    }

    /// Route one terminal event. Key presses and mouse presses count as
    /// activity even when nothing handles them.
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match &event {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    return;
                }
                self.nav.touch(now);

                let typing = self.view.is_input_focused()
                    && matches!(key.code, KeyCode::Char(_))
                    && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
                if !typing {
                    match self.config.keymap.get_action(key.code, key.modifiers) {
                        Some(Action::Quit) => {
                            info!("quit requested");
                            self.should_quit = true;
                            return;
                        }
                        Some(Action::Logout) => {
                            if !self.nav.screen().is_entry() {
                                self.apply(ViewAction::Request(Intent::Logout, None), now);
                            }
                            return;
                        }
                        _ => {}
                    }
                }
            }
            Event::Mouse(mouse) => {
                if !matches!(mouse.kind, MouseEventKind::Down(_)) {
                    return;
                }
                self.nav.touch(now);
            }
            _ => return,
        }

        let action = self
            .view
            .handle_event(&event, &context(&self.nav, &self.config, &self.theme, now));
        self.apply(action, now);
    }

    /// Timers: the view's completion timer first, then the inactivity poll.
    pub fn tick(&mut self, now: Instant) {
        let action = self
            .view
            .tick(&context(&self.nav, &self.config, &self.theme, now));
        self.apply(action, now);

        if self.monitor.tick(&mut self.nav, now) == PollOutcome::LoggedOut {
            self.toasts.info(TIMEOUT_NOTICE, now);
            self.sync_view(now);
        }
        self.toasts.tick(now);
    }

    fn apply(&mut self, action: ViewAction, now: Instant) {
        match action {
            ViewAction::None => {}
            ViewAction::Request(intent, payload) => {
                if let Outcome::Stayed(reason) = self.nav.request(intent, payload, now) {
                    debug!(?reason, screen = %self.nav.screen(), "view request refused");
                }
                self.sync_view(now);
            }
        }
    }

    /// Swap in a new view when the session has moved or been reset.
    fn sync_view(&mut self, now: Instant) {
        let screen = self.nav.screen();
        let epoch = self.nav.session_epoch();
        if screen == self.view_screen && epoch == self.view_epoch {
            return;
        }
        self.view.on_exit();
        self.view = screens::for_screen(screen);
        self.view_screen = screen;
        self.view_epoch = epoch;
        self.view
            .on_enter(&context(&self.nav, &self.config, &self.theme, now));
        debug!(screen = %screen, epoch, "view entered");
    }

    fn render(&mut self, frame: &mut Frame, now: Instant) {
        let screen = self.nav.screen();
        let area = frame.area();
        let (header, content, footer) = create_standard_layout(area, Header::HEIGHT, Footer::HEIGHT);

        Header::render(
            frame,
            header,
            &self.theme,
            &self.config.kiosk_name,
            catalog::copy(screen).title,
            Local::now(),
        );
        self.view
            .render(frame, content, &context(&self.nav, &self.config, &self.theme, now));
        let hints = self.view.footer(&self.config.keymap, !screen.is_entry());
        Footer::render(frame, footer, &self.theme, &hints);
        self.toasts.render(frame, area, &self.theme);
    }
}
