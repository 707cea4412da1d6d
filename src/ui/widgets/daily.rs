use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::AppState,
    cli::Cli,
    domain::weather::{DailyForecast, Units, condition_icon, format_temperature},
    ui::theme::ThemeDescriptor,
};

/// Up to five forecast cards, one per aggregated calendar day, in
/// chronological order.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, cli: &Cli, theme: ThemeDescriptor) {
    let Some(snapshot) = state.snapshot.as_ref() else {
        return;
    };
    if snapshot.daily.is_empty() || area.height < 3 {
        return;
    }

    let constraints: Vec<Constraint> = snapshot
        .daily
        .iter()
        .map(|_| Constraint::Ratio(1, snapshot.daily.len() as u32))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (slot, day) in columns.iter().zip(&snapshot.daily) {
        render_card(frame, *slot, day, snapshot.units, cli, theme);
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    day: &DailyForecast,
    units: Units,
    cli: &Cli,
    theme: ThemeDescriptor,
) {
    let style = Style::default().fg(theme.text).bg(theme.card);
    let block = Block::default()
        .borders(Borders::ALL)
        .style(style)
        .border_style(Style::default().fg(theme.accent).bg(theme.card));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let icon = condition_icon(day.condition_code, crate::icon_mode(cli), true);
    let lines = vec![
        Line::from(day.day_label.clone()).style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(icon),
        Line::from(format_temperature(day.temp_max, units)).style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(format_temperature(day.temp_min, units))
            .style(Style::default().add_modifier(Modifier::DIM)),
    ];
    frame.render_widget(Paragraph::new(lines).style(style).centered(), inner);
}
