use crate::styles::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Common footer with key hints
pub struct Footer;

impl Footer {
    pub const HEIGHT: u16 = 2;

    /// Render hints written as `"Label: keys | Label: keys"`.
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme, text: &str) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Self::hint_line(theme, text)).alignment(Alignment::Center),
            inner,
        );
    }

    fn hint_line<'a>(theme: &Theme, text: &'a str) -> Line<'a> {
        let mut spans = Vec::new();
        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", theme.muted_style()));
            }
            match part.split_once(": ") {
                Some((label, keys)) => {
                    spans.push(Span::styled(format!("{}: ", label), theme.text_style()));
                    spans.push(Span::styled(keys, theme.title_style()));
                }
                None => spans.push(Span::styled(part, theme.text_style())),
            }
        }
        Line::from(spans)
    }
}
