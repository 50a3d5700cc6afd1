//! Toast notification widget.
//!
//! A short notice drawn over the bottom-right corner. It never takes focus;
//! expiry is driven by the `now` the app passes in.

use crate::styles::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};
use std::time::{Duration, Instant};

const DEFAULT_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Info,
    Warning,
    Error,
}

impl ToastVariant {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastVariant::Info => "\u{2139}",
            ToastVariant::Warning => "\u{26A0}",
            ToastVariant::Error => "\u{2718}",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub variant: ToastVariant,
    pub shown_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, variant: ToastVariant, now: Instant) -> Self {
        Self {
            message: message.into(),
            variant,
            shown_at: now,
            duration: DEFAULT_DURATION,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }
}

/// Renders a [`Toast`] in the bottom-right corner of the given area
pub struct ToastWidget<'a> {
    toast: &'a Toast,
    theme: &'a Theme,
}

impl<'a> ToastWidget<'a> {
    pub fn new(toast: &'a Toast, theme: &'a Theme) -> Self {
        Self { toast, theme }
    }

    fn toast_area(area: Rect) -> Rect {
        let width = 44u16.min(area.width.saturating_sub(4));
        let height = 3u16.min(area.height);
        let x = area.x + area.width.saturating_sub(width + 2);
        // Keep clear of the footer
        let y = area.y + area.height.saturating_sub(height + 3);
        Rect::new(x, y, width, height)
    }
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let toast_area = Self::toast_area(area);
        let t = self.theme;
        let border = match self.toast.variant {
            ToastVariant::Info => t.border_focused_style(),
            ToastVariant::Warning => t.warning_style(),
            ToastVariant::Error => t.error_style(),
        };

        Clear.render(toast_area, buf);
        Paragraph::new(format!(" {} {} ", self.toast.variant.icon(), self.toast.message))
            .block(Block::default().borders(Borders::ALL).border_style(border))
            .style(t.text_style().add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true })
            .render(toast_area, buf);
    }
}

/// Holds at most one toast; a new one replaces the old
#[derive(Debug, Default)]
pub struct ToastManager {
    current: Option<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        self.current = Some(toast);
    }

    pub fn info(&mut self, message: impl Into<String>, now: Instant) {
        self.push(Toast::new(message, ToastVariant::Info, now));
    }

    pub fn warning(&mut self, message: impl Into<String>, now: Instant) {
        self.push(Toast::new(message, ToastVariant::Warning, now));
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) {
        self.push(Toast::new(message, ToastVariant::Error, now));
    }

    /// Drop an expired toast; returns whether one is still showing
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.current = None;
        }
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn render(&self, frame: &mut ratatui::Frame, area: Rect, theme: &Theme) {
        if let Some(toast) = self.current() {
            frame.render_widget(ToastWidget::new(toast, theme), area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_duration() {
        let t0 = Instant::now();
        let toast = Toast::new("hi", ToastVariant::Info, t0).with_duration(Duration::from_secs(2));
        assert!(!toast.is_expired(t0 + Duration::from_millis(1999)));
        assert!(toast.is_expired(t0 + Duration::from_secs(2)));
    }

    #[test]
    fn test_manager_replaces_and_expires() {
        let t0 = Instant::now();
        let mut manager = ToastManager::new();
        manager.info("first", t0);
        manager.warning("second", t0);
        assert_eq!(manager.current().map(|t| t.message.as_str()), Some("second"));
        assert!(manager.tick(t0 + Duration::from_secs(1)));
        assert!(!manager.tick(t0 + DEFAULT_DURATION));
        assert!(manager.current().is_none());
    }
}
