mod badge;
mod header;
mod quiz;
mod result;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).split(area);
    header::render(frame, chunks[0], app);

    match app.screen() {
        Screen::Welcome => welcome::render(frame, chunks[1], app),
        Screen::Quiz => quiz::render(frame, chunks[1], app),
        Screen::Results => result::render(frame, chunks[1], app),
    }

    badge::render(frame, area, app);
}
