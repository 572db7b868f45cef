//! UI rendering using ratatui

use ironctl_core::{Accent, MetricTile, ScheduleEntry, Widget};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::App;

/// Card border colour
const BORDER: Color = Color::DarkGray;
/// Secondary text
const DIM: Color = Color::Gray;

/// Height of one impact tile: border, label, value, border
const TILE_HEIGHT: u16 = 4;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Widget grid
            Constraint::Length(1), // Key hint
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_grid(frame, app, chunks[1]);

    let hint = Paragraph::new(Span::styled("q quit", Style::default().fg(BORDER)));
    frame.render_widget(hint, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let label_width = app.page.label.chars().count() as u16;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(label_width)])
        .split(area);

    let title = Paragraph::new(Span::styled(
        app.page.title,
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, chunks[0]);

    let label = Paragraph::new(Span::styled(app.page.label, Style::default().fg(DIM)))
        .alignment(Alignment::Right);
    frame.render_widget(label, chunks[1]);
}

/// Lay the widgets out row-major in as many columns as the width allows
fn render_grid(frame: &mut Frame, app: &App, area: Rect) {
    let columns = app.breakpoints.columns_for(area.width);
    let rows = app.page.dashboard.grid_rows(columns);

    let mut constraints: Vec<Constraint> = rows
        .iter()
        .map(|row| Constraint::Length(row.iter().map(widget_height).max().unwrap_or(0)))
        .collect();
    constraints.push(Constraint::Min(0));

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (row, row_area) in rows.iter().zip(row_areas.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);

        for (widget, cell) in row.iter().zip(cells.iter()) {
            render_widget(frame, widget, *cell);
        }
    }
}

/// Rows a widget card needs, borders included
pub fn widget_height(widget: &Widget) -> u16 {
    let inner = match widget {
        Widget::Status { .. } => 2,
        Widget::Schedule { entries, .. } => 1 + 2 * entries.len() as u16,
        Widget::Impact { .. } => 1 + TILE_HEIGHT,
    };
    inner + 2
}

fn card(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER))
}

fn render_widget(frame: &mut Frame, widget: &Widget, area: Rect) {
    let block = card(widget.title());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match widget {
        Widget::Status { message, .. } => {
            let text = vec![
                Line::from(""),
                Line::from(Span::styled(*message, Style::default().fg(DIM))),
            ];
            frame.render_widget(Paragraph::new(text), inner);
        }
        Widget::Schedule { entries, .. } => {
            frame.render_widget(Paragraph::new(schedule_lines(entries, inner.width)), inner);
        }
        Widget::Impact { tiles, .. } => render_tiles(frame, tiles, inner),
    }
}

/// Time on the left, label on the right, a rule under each row
fn schedule_lines(entries: &[ScheduleEntry], width: u16) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    for entry in entries {
        let used = entry.time.chars().count() + entry.label.chars().count();
        let gap = (width as usize).saturating_sub(used).max(1);
        lines.push(Line::from(vec![
            Span::styled(entry.time, Style::default().fg(DIM)),
            Span::raw(" ".repeat(gap)),
            Span::styled(entry.label, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(
            "─".repeat(width as usize),
            Style::default().fg(BORDER),
        )));
    }
    lines
}

fn render_tiles(frame: &mut Frame, tiles: &[MetricTile], area: Rect) {
    let band = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(TILE_HEIGHT), Constraint::Min(0)])
        .split(area)[1];

    let count = tiles.len().max(1);
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count as u32); count])
        .split(band);

    for (tile, cell) in tiles.iter().zip(cells.iter()) {
        let color = accent_color(tile.accent);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let text = vec![
            Line::from(Span::styled(tile.label, Style::default().fg(color))),
            Line::from(Span::styled(
                tile.value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        ];
        frame.render_widget(Paragraph::new(text).block(block), *cell);
    }
}

fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Blue => Color::Blue,
        Accent::Green => Color::Green,
    }
}
