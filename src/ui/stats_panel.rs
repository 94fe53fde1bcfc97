//! The demon status panel.

use crate::core::constants::{MALNOURISHED_THRESHOLD, OBESE_THRESHOLD, STARTING_HEALTH};
use crate::core::demon::Demon;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the stats panel showing the demon's condition.
pub fn draw_stats_panel(frame: &mut Frame, area: Rect, demon: &Demon) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header: name, stage, sick marker
            Constraint::Min(0),    // Stat rows
        ])
        .split(area);

    draw_header(frame, chunks[0], demon);
    draw_stats(frame, chunks[1], demon);
}

fn draw_header(frame: &mut Frame, area: Rect, demon: &Demon) {
    let mut spans = vec![
        Span::styled(
            demon.name.clone(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" the "),
        Span::styled(demon.stage.label(), Style::default().fg(Color::Cyan)),
    ];
    if demon.is_dead() {
        spans.push(Span::styled(
            "  \u{2620} DEAD",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    } else if demon.is_sick {
        spans.push(Span::styled(
            "  \u{1f912} SICK",
            Style::default().fg(Color::Green),
        ));
    }

    let header =
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn draw_stats(frame: &mut Frame, area: Rect, demon: &Demon) {
    let stomach: String = demon
        .stomach
        .iter()
        .map(|&ticks| if ticks > 0 { '\u{25cf}' } else { '\u{25cb}' })
        .collect();

    let lines = vec![
        stat_line("Health", demon.health, health_color(demon.health)),
        stat_line("Hunger", demon.hunger, hunger_color(demon.hunger)),
        Line::from(vec![Span::styled(
            format!("         {}", hunger_tag(demon.hunger)),
            Style::default().fg(Color::DarkGray),
        )]),
        stat_line("Happy", demon.happiness, signed_color(demon.happiness)),
        stat_line("Discip", demon.discipline, signed_color(demon.discipline)),
        stat_line(
            "Poop",
            demon.poop_count,
            if demon.poop_count > 0 {
                Color::Yellow
            } else {
                Color::White
            },
        ),
        Line::from(vec![
            Span::raw("  Stomach: "),
            Span::styled(stomach, Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![Span::raw(format!(
            "  Actions: {}",
            demon.actions_taken
        ))]),
    ];

    let stats = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Condition "),
    );
    frame.render_widget(stats, area);
}

fn stat_line(label: &str, value: i32, color: Color) -> Line<'_> {
    Line::from(vec![
        Span::raw(format!("  {:<8} ", label)),
        Span::styled(format!("{:>5}", value), Style::default().fg(color)),
    ])
}

fn health_color(health: i32) -> Color {
    if health > STARTING_HEALTH / 2 {
        Color::Green
    } else if health > STARTING_HEALTH / 5 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn hunger_color(hunger: i32) -> Color {
    if hunger > MALNOURISHED_THRESHOLD || hunger < OBESE_THRESHOLD {
        Color::Red
    } else if hunger > MALNOURISHED_THRESHOLD / 2 || hunger < OBESE_THRESHOLD / 2 {
        Color::Yellow
    } else {
        Color::White
    }
}

fn signed_color(value: i32) -> Color {
    if value < 0 {
        Color::Red
    } else {
        Color::White
    }
}

/// A word for the demon's weight state; 0 hunger is perfect.
fn hunger_tag(hunger: i32) -> &'static str {
    if hunger > MALNOURISHED_THRESHOLD {
        "(starving)"
    } else if hunger > MALNOURISHED_THRESHOLD / 2 {
        "(hungry)"
    } else if hunger < OBESE_THRESHOLD {
        "(obese)"
    } else if hunger < OBESE_THRESHOLD / 2 {
        "(stuffed)"
    } else {
        "(content)"
    }
}
