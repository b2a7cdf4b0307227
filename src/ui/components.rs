// Reusable UI components

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer {
    content: Line<'static>,
}

impl Footer {
    fn from_controls(controls: &[(&'static str, &'static str)]) -> Self {
        let mut spans = Vec::new();

        for (i, (hotkey, desc)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*hotkey, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(*desc));
        }

        Self {
            content: Line::from(spans),
        }
    }

    pub fn target() -> Self {
        Self::from_controls(&[("[Enter]", " Scan"), ("[Esc]", " Quit")])
    }

    pub fn scan() -> Self {
        Self::from_controls(&[
            ("[S]", "can again"),
            ("[D]", "iff"),
            ("[L]", "ive"),
            ("[Space]", " Select"),
            ("[↑/↓]", " Navigate"),
            ("[Esc]", " Back"),
            ("[Q]", "uit"),
        ])
    }

    pub fn diff() -> Self {
        Self::from_controls(&[("[↑/↓]", " Scroll"), ("[Esc]", " Back")])
    }

    pub fn live() -> Self {
        Self::from_controls(&[("[↑/↓]", " Scroll"), ("[Esc]", " Stop")])
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.content)
            .style(Style::default().bg(Color::DarkGray))
            .render(area, buf);
    }
}
