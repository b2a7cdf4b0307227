// Live monitor screen

use crate::ui::components::Footer;
use crate::ui::state::LiveState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

pub struct LiveScreen;

impl LiveScreen {
    pub fn render(frame: &mut Frame, state: &LiveState) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title bar
                Constraint::Min(0),    // Monitored targets
                Constraint::Length(1), // Footer
            ])
            .split(area);

        let title = Block::default()
            .title(format!(" {} (cycle {}) ", state.status, state.cycles))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan).bold());
        frame.render_widget(title, chunks[0]);

        let mut lines: Vec<Line> = Vec::new();
        if state.targets.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::styled(
                "  No hosts selected. Select hosts with Space on the scan screen.",
                Style::default().fg(Color::DarkGray),
            ));
        }
        for (target, block) in state.targets.iter().zip(&state.blocks) {
            lines.push(Line::styled(
                format!("── {target}"),
                Style::default().fg(Color::Cyan).bold(),
            ));
            if block.is_empty() {
                lines.push(Line::styled(
                    "   (no response)",
                    Style::default().fg(Color::DarkGray),
                ));
            } else {
                for line in block.lines() {
                    let style = if line.contains("[host up]") {
                        Style::default().fg(Color::Green)
                    } else {
                        Style::default()
                    };
                    lines.push(Line::styled(format!("   {line}"), style));
                }
            }
        }
        // First cycle still in flight
        if !state.targets.is_empty() && state.blocks.is_empty() {
            lines.push(Line::styled(
                "  Waiting for first cycle...",
                Style::default().fg(Color::Yellow),
            ));
        }

        let body = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(format!(" Monitoring {} host(s) ", state.targets.len()))
                    .borders(Borders::ALL),
            )
            .scroll((state.scroll, 0));
        frame.render_widget(body, chunks[1]);

        frame.render_widget(Footer::live(), chunks[2]);
    }
}
