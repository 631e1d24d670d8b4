use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::TEAM_CODE_LEN;
use crate::interactive::layout::centered_popup;
use crate::interactive::state::DashboardState;

/// Join-team popup: a fixed-length code input, uppercased as typed.
pub fn draw(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let width: u16 = 44;
    let height: u16 = 8;
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Join Team ")
        .border_style(Style::default().fg(Color::Magenta));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let code_display = format!(
        "{}{}",
        state.join_input,
        "_".repeat(TEAM_CODE_LEN.saturating_sub(state.join_input.len()))
    );
    let code_line = Line::from(vec![
        Span::styled("Code: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            code_display,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(code_line),
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
        "Joining..."
    } else if state.join_ready() {
        "Enter: Join  Esc: Cancel"
    } else {
        "Enter the 6-character team code  Esc: Cancel"
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
