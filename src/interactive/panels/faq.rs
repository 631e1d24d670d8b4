use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::faq::FAQ_ITEMS;
use crate::interactive::state::DashboardState;

pub fn draw(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Any questions? ")
        .border_style(Style::default().fg(Color::Cyan));

    let items: Vec<ListItem> = FAQ_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let open = state.faq.is_open(i);
            let selected = state.faq.selected == i;
            let chevron = if open { "▾" } else { "▸" };

            let question_style = if selected {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Rgb(30, 35, 50))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let mut lines = vec![Line::from(Span::styled(
                format!("{} {}", chevron, item.question),
                question_style,
            ))];

            if open {
                for wrapped in wrap(item.answer, area.width.saturating_sub(6) as usize) {
                    lines.push(Line::from(Span::styled(
                        format!("    {}", wrapped),
                        Style::default().fg(Color::Gray),
                    )));
                }
            }

            ListItem::new(lines)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + word.len() + 1 > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
