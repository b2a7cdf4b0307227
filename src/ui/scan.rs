// Scan results screen

use crate::ui::components::Footer;
use crate::ui::state::ScanState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub struct ScanScreen;

impl ScanScreen {
    pub fn render(frame: &mut Frame, state: &mut ScanState) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title bar
                Constraint::Length(3), // Status line
                Constraint::Min(0),    // Discovered hosts
                Constraint::Length(1), // Footer
            ])
            .split(area);

        Self::render_title(frame, chunks[0], state);
        Self::render_status(frame, chunks[1], state);
        Self::render_hosts(frame, chunks[2], state);
        frame.render_widget(Footer::scan(), chunks[3]);
    }

    fn render_title(frame: &mut Frame, area: Rect, state: &ScanState) {
        let title = match &state.filename {
            Some(filename) => format!(" Scan: {} - {} ", state.target, filename),
            None => format!(" Scan: {} ", state.target),
        };

        let block = Block::default()
            .title(title)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan).bold());
        frame.render_widget(block, area);
    }

    fn render_status(frame: &mut Frame, area: Rect, state: &ScanState) {
        let style = if state.in_progress {
            Style::default().fg(Color::Yellow)
        } else if state.status.contains("failed") || state.status.contains("interrupted") {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };

        let status = Paragraph::new(state.status.as_str())
            .style(style)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, area);
    }

    fn render_hosts(frame: &mut Frame, area: Rect, state: &mut ScanState) {
        let items: Vec<ListItem> = state
            .hosts
            .iter()
            .zip(&state.selected)
            .map(|(host, selected)| {
                let marker = if *selected { "[x]" } else { "[ ]" };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Cyan)),
                    Span::raw(" "),
                    Span::raw(host.clone()),
                ]))
            })
            .collect();

        let count = state.hosts.len();
        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!(" Discovered Hosts ({count}) "))
                    .borders(Borders::ALL),
            )
            .highlight_style(Style::default().bg(Color::Blue).fg(Color::White));

        frame.render_stateful_widget(list, area, &mut state.list_state);
    }
}
