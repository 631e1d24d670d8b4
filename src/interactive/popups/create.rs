use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::interactive::layout::centered_popup;
use crate::interactive::state::DashboardState;

/// Create-team modal: asks only for a team name; payment follows on success.
pub fn draw(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let width: u16 = 50;
    let height: u16 = 8;
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Create Team ")
        .border_style(Style::default().fg(Color::Magenta));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let name_line = Line::from(vec![
        Span::styled("Team name: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            state.create_input.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("▏", Style::default().fg(Color::White)),
    ]);
    frame.render_widget(
        Paragraph::new(name_line),
        Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), 1),
    );

    if let Some(error) = &state.error {
        frame.render_widget(
            Paragraph::new(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )),
            Rect::new(inner.x + 1, inner.y + 3, inner.width.saturating_sub(2), 1),
        );
    }

    let hint = if state.busy {
        "Creating..."
    } else {
        "Enter: Create  Esc: Cancel"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))),
        Rect::new(
            inner.x + 1,
            inner.y + inner.height.saturating_sub(1),
            inner.width.saturating_sub(2),
            1,
        ),
    );
}
