use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;

const QUESTION_PREVIEW_LENGTH: usize = 50;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(8),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_summary(frame, chunks[1], app);
    render_answer_breakdown(frame, chunks[2], app);
    render_controls(frame, chunks[3]);
}

fn render_summary(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let engine = game.engine();

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "YOUR RED ZONE",
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            engine.user_name(),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(Span::styled(
            format!("{} RZP", engine.user_points()),
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(Span::styled(
            game.rank(),
            Style::default().fg(Color::LightRed).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_answer_breakdown(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.game().engine();
    let lines: Vec<Line> = engine
        .answer_history()
        .iter()
        .zip(engine.questions().iter())
        .enumerate()
        .map(|(index, (points, question))| {
            Line::from(vec![
                Span::styled(
                    format!("{:>4} RZP ", format!("+{}", points)),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    format!("Q{}. ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    truncate_question(&question.prompt),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((app.result_scroll() as u16, 0));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r restart  ·  m mute  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
