//! Stateless rendering of the towers.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;

use super::app::App;
use crate::puzzle::types::{Configuration, Disk, PegId};

/// Disk colors, cycled when the puzzle has more disks than colors.
const DISK_COLORS: [Color; 8] = [
    Color::Cyan,
    Color::LightRed,
    Color::LightGreen,
    Color::Yellow,
    Color::Magenta,
    Color::LightBlue,
    Color::Green,
    Color::LightYellow,
];

/// Renders the full frame: title, towers, key help, and status line.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title and move counter
            Constraint::Min(6),    // Towers
            Constraint::Length(1), // Key help
            Constraint::Length(3), // Status
        ])
        .split(area);

    draw_header(frame, chunks[0], app);
    draw_towers(frame, chunks[1], app.session().configuration());
    draw_help(frame, chunks[2]);

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let playing = if app.auto_play() { "  ▶" } else { "" };
    let lines = vec![
        Line::from(Span::styled(
            "Tower of Hanoi",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "Move {} of {}{playing}",
            session.current_step(),
            session.move_count()
        )),
    ];
    let header = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn draw_towers(frame: &mut Frame, area: Rect, config: &Configuration) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (column, id) in columns.iter().zip(PegId::iter()) {
        draw_peg(frame, *column, config, id);
    }
}

fn draw_peg(frame: &mut Frame, area: Rect, config: &Configuration, id: PegId) {
    let disk_count = config.disk_count() as usize;
    let disks = config.peg(id).disks();

    // One line per slot, top slot first; empty slots show the bare pole.
    let mut lines = Vec::with_capacity(disk_count + 1);
    for slot in (0..disk_count).rev() {
        let line = match disks.get(slot) {
            Some(disk) => disk_line(*disk),
            None => Line::from(Span::styled("│", Style::default().fg(Color::DarkGray))),
        };
        lines.push(line);
    }
    lines.push(Line::from(Span::styled(
        "─".repeat((2 * disk_count + 3).min(area.width as usize)),
        Style::default().fg(Color::DarkGray),
    )));

    let tower = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(id.label()));
    frame.render_widget(tower, area);
}

/// A disk drawn as a centered bar, one character wider per size step, in a
/// color cycled by size.
fn disk_line(disk: Disk) -> Line<'static> {
    let size = disk.size() as usize;
    let color = DISK_COLORS[(size - 1) % DISK_COLORS.len()];
    Line::from(Span::styled(
        "█".repeat(2 * size + 1),
        Style::default().fg(color),
    ))
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new("←/→ step · space play/pause · +/- speed · 1-9 disks · r restart · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, area);
}
