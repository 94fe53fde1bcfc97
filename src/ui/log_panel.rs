//! The scrolling event log panel.

use crate::event_log::EventLog;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the event log, newest lines at the bottom.
pub fn draw_log_panel(frame: &mut Frame, area: Rect, log: &EventLog) {
    let visible = area.height.saturating_sub(2) as usize;
    let skip = log.len().saturating_sub(visible);

    let lines: Vec<Line> = log
        .lines()
        .skip(skip)
        .map(|line| Line::from(format!(" {}", line)))
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Event Log "),
    );
    frame.render_widget(paragraph, area);
}
