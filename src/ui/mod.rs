pub mod particles;
pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::{AppMode, AppState},
    cli::Cli,
    domain::weather::is_daytime,
    ui::theme::{ThemeDescriptor, select_theme},
};

pub fn render(frame: &mut Frame, state: &AppState, cli: &Cli) {
    let area = frame.area();

    if area.width < 40 || area.height < 16 {
        let warning = Paragraph::new("Terminal too small. Resize to at least 40x16.")
            .block(Block::default().borders(Borders::ALL).title("skycast"));
        frame.render_widget(warning, area);
        return;
    }

    match (&state.snapshot, state.mode) {
        (Some(snapshot), _) => {
            let theme = select_theme(
                snapshot.current.condition_code,
                is_daytime(snapshot.current.sunrise, snapshot.current.sunset),
            );
            render_dashboard(frame, area, state, cli, theme);
        }
        (None, AppMode::Error) => render_message(
            frame,
            area,
            state.last_error.as_deref().unwrap_or("Something went wrong"),
            Color::LightRed,
        ),
        (None, _) => render_message(frame, area, &state.loading_message, Color::Gray),
    }

    if state.search_open {
        widgets::search::render(frame, centered_rect(60, 50, area), state);
    }
}

fn render_dashboard(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    cli: &Cli,
    theme: ThemeDescriptor,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Percentage(20),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area);

    widgets::current::render(frame, chunks[0], state, cli, theme);
    widgets::details::render(frame, chunks[1], state, theme);
    widgets::daily::render(frame, chunks[2], state, cli, theme);
    render_status_line(frame, chunks[3], state, theme);
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &AppState, theme: ThemeDescriptor) {
    let text = if state.mode == AppMode::Loading {
        state.loading_message.clone()
    } else {
        "q quit · r refresh · u units · / search".to_string()
    };
    let line = Paragraph::new(Line::from(text)).style(
        Style::default()
            .fg(theme.text)
            .bg(theme.bottom)
            .add_modifier(Modifier::DIM),
    );
    frame.render_widget(line, area);
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let block = Block::default().borders(Borders::ALL).title("skycast");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let centered = centered_rect(80, 20, inner);
    let paragraph = Paragraph::new(Line::from(message))
        .style(Style::default().fg(color))
        .centered();
    frame.render_widget(paragraph, centered);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
