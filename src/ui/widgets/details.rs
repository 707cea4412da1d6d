use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::AppState,
    domain::weather::{WeatherSnapshot, format_wind_speed},
    ui::theme::ThemeDescriptor,
};

/// Secondary metrics row: humidity, wind, pressure, visibility, sun times.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: ThemeDescriptor) {
    let Some(snapshot) = state.snapshot.as_ref() else {
        return;
    };

    let cards = detail_cards(snapshot);
    let constraints: Vec<Constraint> = cards
        .iter()
        .map(|_| Constraint::Ratio(1, cards.len() as u32))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (slot, (label, value)) in columns.iter().zip(cards) {
        render_card(frame, *slot, &label, &value, theme);
    }
}

fn detail_cards(snapshot: &WeatherSnapshot) -> Vec<(String, String)> {
    let current = &snapshot.current;
    vec![
        ("Humidity".to_string(), format!("{}%", current.humidity)),
        (
            "Wind".to_string(),
            format_wind_speed(current.wind_speed, snapshot.units),
        ),
        ("Pressure".to_string(), format!("{} hPa", current.pressure)),
        ("Visibility".to_string(), visibility_label(current.visibility_m)),
        (
            "Sunrise".to_string(),
            sun_time(current.sunrise, snapshot.utc_offset_secs),
        ),
        (
            "Sunset".to_string(),
            sun_time(current.sunset, snapshot.utc_offset_secs),
        ),
    ]
}

fn visibility_label(meters: Option<u32>) -> String {
    match meters {
        Some(m) if m >= 1000 => format!("{:.1} km", f64::from(m) / 1000.0),
        Some(m) => format!("{m} m"),
        None => "--".to_string(),
    }
}

fn sun_time(timestamp: i64, utc_offset_secs: i32) -> String {
    crate::domain::weather::conversions::local_datetime(timestamp, utc_offset_secs)
        .format("%H:%M")
        .to_string()
}

fn render_card(frame: &mut Frame, area: Rect, label: &str, value: &str, theme: ThemeDescriptor) {
    let style = Style::default().fg(theme.text).bg(theme.card);
    let block = Block::default()
        .borders(Borders::ALL)
        .style(style)
        .border_style(Style::default().fg(theme.accent).bg(theme.card));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(label.to_string()).style(Style::default().add_modifier(Modifier::DIM)),
        Line::from(value.to_string()).style(Style::default().add_modifier(Modifier::BOLD)),
    ];
    frame.render_widget(Paragraph::new(lines).style(style).centered(), inner);
}
