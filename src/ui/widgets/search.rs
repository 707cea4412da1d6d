use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use crate::app::state::AppState;

/// City search popup. Results appear exactly as the API returned them,
/// at most five.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Search city")
        .style(Style::default().fg(Color::White).bg(Color::Rgb(20, 26, 40)))
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let query = Paragraph::new(Line::from(format!("> {}█", state.search_query)))
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(query, rows[0]);

    if let Some(status) = &state.search_status {
        let status_line = Paragraph::new(Line::from(status.clone()))
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::DIM));
        frame.render_widget(status_line, rows[1]);
    }

    render_results(frame, rows[2], state);
}

fn render_results(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.search_results.is_empty() {
        let hint = Paragraph::new(Line::from("Type a city name and press Enter"))
            .style(Style::default().add_modifier(Modifier::DIM));
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = state
        .search_results
        .iter()
        .enumerate()
        .map(|(idx, location)| {
            let marker = if idx == state.search_selected { "▸ " } else { "  " };
            let style = if idx == state.search_selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(format!("{marker}{}", location.display_name()))).style(style)
        })
        .collect();

    frame.render_widget(List::new(items), area);
}
