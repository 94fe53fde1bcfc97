//! Terminal UI for the interactive game: one screen with the demon's
//! stats on the left, the event log on the right, and a key hint footer.

mod log_panel;
mod stats_panel;

use crate::core::demon::Demon;
use crate::event_log::EventLog;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, demon: &Demon, log: &EventLog) {
    let size = frame.size();

    // Split vertically: main content, footer with key hints
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Main content (stats + log)
            Constraint::Length(3), // Footer
        ])
        .split(size);

    // Split the main content: stats panel on the left, log on the right
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(38), Constraint::Min(0)])
        .split(v_chunks[0]);

    stats_panel::draw_stats_panel(frame, h_chunks[0], demon);
    log_panel::draw_log_panel(frame, h_chunks[1], log);
    draw_footer(frame, v_chunks[1], demon);
}

/// Draws the footer with the available key bindings.
fn draw_footer(frame: &mut Frame, area: Rect, demon: &Demon) {
    let line = if demon.is_dead() {
        Line::from(vec![
            Span::styled(
                format!("\u{2620} {} has died. ", demon.name),
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("[r]", Style::default().fg(Color::Yellow)),
            Span::raw(" Rebirth  "),
            Span::styled("[q]", Style::default().fg(Color::Yellow)),
            Span::raw(" Quit"),
        ])
    } else {
        Line::from(vec![
            Span::styled("[1]", Style::default().fg(Color::Yellow)),
            Span::raw(" Feed  "),
            Span::styled("[2]", Style::default().fg(Color::Yellow)),
            Span::raw(" Play  "),
            Span::styled("[3]", Style::default().fg(Color::Yellow)),
            Span::raw(" Scold  "),
            Span::styled("[4]", Style::default().fg(Color::Yellow)),
            Span::raw(" Medicine  "),
            Span::styled("[5]", Style::default().fg(Color::Yellow)),
            Span::raw(" Clean  "),
            Span::styled("[q]", Style::default().fg(Color::Yellow)),
            Span::raw(" Quit"),
        ])
    };

    let footer = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
