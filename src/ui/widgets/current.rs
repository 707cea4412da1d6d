use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::{
    app::state::AppState,
    cli::Cli,
    domain::weather::{WeatherSnapshot, condition_icon, format_date, format_temperature},
    ui::theme::{ThemeDescriptor, gradient_at},
};

/// Hero panel: gradient sky, particle overlay, and the current reading.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, cli: &Cli, theme: ThemeDescriptor) {
    let Some(snapshot) = state.snapshot.as_ref() else {
        return;
    };

    fill_gradient(frame, area, theme, state.particles.flash_active());
    render_particles(frame, area, state, theme);
    render_reading(frame, area, snapshot, cli, theme);
}

fn fill_gradient(frame: &mut Frame, area: Rect, theme: ThemeDescriptor, flash: bool) {
    let buffer = frame.buffer_mut();
    for row in 0..area.height {
        let t = if area.height > 1 {
            f32::from(row) / f32::from(area.height - 1)
        } else {
            0.0
        };
        let bg = if flash {
            Color::Rgb(235, 235, 245)
        } else {
            gradient_at(&theme, t)
        };
        for col in 0..area.width {
            let cell = &mut buffer[(area.x + col, area.y + row)];
            cell.set_char(' ');
            cell.set_bg(bg);
        }
    }
}

fn render_particles(frame: &mut Frame, area: Rect, state: &AppState, theme: ThemeDescriptor) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let buffer = frame.buffer_mut();
    for particle in &state.particles.particles {
        let x = (particle.x * f32::from(area.width)) as u16;
        let y = (particle.y * f32::from(area.height)) as u16;
        if x < area.width && y < area.height {
            let cell = &mut buffer[(area.x + x, area.y + y)];
            cell.set_char(particle.glyph);
            cell.set_fg(theme.accent);
        }
    }
}

fn render_reading(
    frame: &mut Frame,
    area: Rect,
    snapshot: &WeatherSnapshot,
    cli: &Cli,
    theme: ThemeDescriptor,
) {
    let icon = condition_icon(
        snapshot.current.condition_code,
        crate::icon_mode(cli),
        snapshot.is_day(),
    );
    let (high, low) = snapshot.high_low_today();

    let lines = vec![
        Line::from(snapshot.location.display_name())
            .style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(format_date(
            snapshot.current.timestamp,
            snapshot.utc_offset_secs,
        )),
        Line::default(),
        Line::from(format!(
            "{icon}  {}",
            format_temperature(snapshot.current.temperature, snapshot.units)
        ))
        .style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(capitalize(&snapshot.current.condition_description)),
        Line::from(format!(
            "Feels like {}   H {high}°  L {low}°",
            format_temperature(snapshot.current.feels_like, snapshot.units)
        )),
    ];

    let text_area = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: (lines.len() as u16).min(area.height.saturating_sub(1)),
    };
    let paragraph = Paragraph::new(lines).style(Style::default().fg(theme.text));
    frame.render_widget(paragraph, text_area);
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::capitalize;

    #[test]
    fn capitalizes_first_letter_only() {
        assert_eq!(capitalize("scattered clouds"), "Scattered clouds");
        assert_eq!(capitalize(""), "");
    }
}
