use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::interactive::state::DashboardState;

pub fn draw(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let Some(team) = &state.team else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(5)])
        .split(area);

    draw_summary(frame, chunks[0], state);
    draw_member_list(frame, chunks[1], state, team);
}

fn draw_summary(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let Some(team) = &state.team else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Team ")
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = vec![
        Line::from(vec![
            Span::styled("Leader: ", Style::default().fg(Color::DarkGray)),
            Span::styled(team.leader.name.clone(), Style::default().fg(Color::White)),
            Span::styled("   Code: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                team.code.clone(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Members: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                team.members.len().to_string(),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_member_list(
    frame: &mut Frame,
    area: Rect,
    state: &DashboardState,
    team: &crate::models::Team,
) {
    let title = format!(" Members ({}) ", team.members.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Cyan));

    if team.members.is_empty() {
        let empty = Paragraph::new("No members")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll_offset = if state.member_index >= inner_height {
        state.member_index - inner_height + 1
    } else {
        0
    };

    let items: Vec<ListItem> = team
        .members
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(inner_height)
        .map(|(i, member)| {
            let marker = if member.role == "LEADER" { "★" } else { " " };
            let display = format!(
                "{} {:<20} {:<12} {:<16} {}",
                marker, member.name, member.role, member.contact, member.email
            );

            let style = if i == state.member_index {
                Style::default()
                    .bg(Color::Rgb(30, 35, 50))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(Line::from(Span::styled(display, style)))
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
