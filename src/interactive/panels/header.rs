use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::interactive::state::{DashboardState, Screen};

pub fn draw(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut spans = vec![Span::styled(
        " IdeateX 2025 ",
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )];

    match state.screen {
        Screen::Faq => spans.push(Span::styled("FAQ", Style::default().fg(Color::White))),
        Screen::Dashboard => {
            spans.push(Span::styled(
                "Team Dashboard",
                Style::default().fg(Color::White),
            ));
            if let Some(team) = &state.team {
                spans.push(Span::styled(
                    format!("  {} [{}]", team.name, team.code),
                    Style::default().fg(Color::Cyan),
                ));
            }
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
