//! Gamification header: name, points, rank, streak and mute state.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Screen};

pub fn streak_text(streak: u32) -> String {
    let streak = streak.max(1);
    if streak > 1 {
        format!("🔥 {}-Day Streak! 🔥", streak)
    } else {
        "Start your streak today!".to_string()
    }
}

fn mute_icon(muted: bool) -> &'static str {
    if muted { "🔇" } else { "🔊" }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let mute = Span::styled(
        format!(" {} ", mute_icon(game.is_muted())),
        Style::default().fg(Color::DarkGray),
    );

    let line = if app.screen() == Screen::Welcome {
        Line::from(vec![mute])
    } else {
        let engine = game.engine();
        Line::from(vec![
            Span::styled(engine.user_name(), Style::default().fg(Color::White).bold()),
            Span::raw("  ·  "),
            Span::styled(
                format!("{} RZP", engine.user_points()),
                Style::default().fg(Color::Yellow).bold(),
            ),
            Span::raw("  ·  "),
            Span::styled(
                format!("Rank: {}", game.rank()),
                Style::default().fg(Color::Red),
            ),
            Span::raw("  ·  "),
            Span::styled(streak_text(game.streak()), Style::default().fg(Color::LightRed)),
            Span::raw("  "),
            mute,
        ])
    };

    let widget = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}
