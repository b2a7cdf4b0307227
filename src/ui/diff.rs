// Diff screen - raw output of the external diff tool

use crate::ui::components::Footer;
use crate::ui::state::DiffState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

pub struct DiffScreen;

impl DiffScreen {
    pub fn render(frame: &mut Frame, state: &DiffState) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title bar
                Constraint::Min(0),    // Diff output
                Constraint::Length(1), // Footer
            ])
            .split(area);

        let title = Block::default()
            .title(format!(" {} ", state.title))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan).bold());
        frame.render_widget(title, chunks[0]);

        // diff's own error text (missing predecessor etc.) is shown as-is
        let lines: Vec<Line> = state
            .output
            .lines()
            .map(|line| {
                let style = if line.starts_with('<') {
                    Style::default().fg(Color::Red)
                } else if line.starts_with('>') {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                };
                Line::styled(line.to_string(), style)
            })
            .collect();

        let output = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL))
            .scroll((state.scroll, 0));
        frame.render_widget(output, chunks[1]);

        frame.render_widget(Footer::diff(), chunks[2]);
    }
}
