// Target entry screen

use crate::ui::components::Footer;
use crate::ui::state::TargetState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

pub struct TargetScreen;

impl TargetScreen {
    pub fn render(frame: &mut Frame, state: &TargetState) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title bar
                Constraint::Length(3), // Target input
                Constraint::Min(0),    // Hint text
                Constraint::Length(1), // Footer
            ])
            .split(area);

        let title = Block::default()
            .title(" SCANWATCH ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan).bold());
        frame.render_widget(title, chunks[0]);

        let input = Paragraph::new(state.input.as_str()).block(
            Block::default()
                .title(" Target (hostname, IP, or CIDR) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(input, chunks[1]);

        // Place the terminal cursor inside the input field
        let cursor_x = chunks[1].x + 1 + state.cursor as u16;
        frame.set_cursor_position(Position::new(cursor_x, chunks[1].y + 1));

        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from("  Enter a scan target and press Enter."),
            Line::from("  The target is passed to nmap verbatim, e.g. 192.168.1.0/24."),
        ])
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, chunks[2]);

        frame.render_widget(Footer::target(), chunks[3]);
    }
}
