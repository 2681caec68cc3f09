use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;

const BADGE_HEIGHT: u16 = 3;

/// Stack active achievement badges near the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    for (slot, badge) in app.badges().iter().rev().enumerate() {
        let offset = BADGE_HEIGHT * (slot as u16 + 1) + 1;
        if offset > area.height {
            break;
        }

        let width = area.width.min(50);
        let badge_area = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + area.height - offset,
            width,
            height: BADGE_HEIGHT,
        };

        let widget = Paragraph::new(badge.text.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow).bold())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Color::Yellow),
            );
        frame.render_widget(Clear, badge_area);
        frame.render_widget(widget, badge_area);
    }
}
