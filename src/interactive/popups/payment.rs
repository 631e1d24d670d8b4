use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::interactive::layout::centered_popup;
use crate::interactive::state::{DashboardState, DialogPhase};

/// The payment dialog. One attempt at a time: Idle shows the pay action,
/// Processing disables it, AwaitingProof collects the proof triple from the
/// checkout page.
pub fn draw(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let dialog = &state.dialog;

    let width: u16 = 58;
    let height: u16 = 13;
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Complete Payment ")
        .border_style(Style::default().fg(Color::Magenta));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let row = |offset: u16| Rect::new(inner.x + 1, inner.y + offset, inner.width.saturating_sub(2), 1);

    // Name field is read-only; it arrives pre-filled from the caller.
    let name_line = Line::from(vec![
        Span::styled("Team name: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            dialog.team_name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            if dialog.name_read_only {
                "  (read-only)"
            } else {
                ""
            },
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(name_line), row(0));

    if dialog.success {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "✓ Payment successful!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            row(2),
        );
    }

    match dialog.phase {
        DialogPhase::AwaitingProof => {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "Checkout opened in your browser. Paste the proof:",
                    Style::default().fg(Color::Gray),
                )),
                row(2),
            );

            let fields = [
                ("Payment id: ", &dialog.proof_payment_id, 0),
                ("Order id:   ", &dialog.proof_order_id, 1),
                ("Signature:  ", &dialog.proof_signature, 2),
            ];
            for (i, (label, value, index)) in fields.iter().enumerate() {
                let active = dialog.proof_field == *index;
                let value_style = if active {
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Rgb(30, 35, 50))
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                let line = Line::from(vec![
                    Span::styled(*label, Style::default().fg(Color::DarkGray)),
                    Span::styled((*value).clone(), value_style),
                ]);
                frame.render_widget(Paragraph::new(line), row(4 + i as u16));
            }
        }
        _ => {}
    }

    if let Some(error) = &dialog.error {
        frame.render_widget(
            Paragraph::new(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )),
            Rect::new(
                inner.x + 1,
                inner.y + inner.height.saturating_sub(3),
                inner.width.saturating_sub(2),
                1,
            ),
        );
    }

    let hint = match dialog.phase {
        DialogPhase::Idle => "Enter: Pay with Razorpay  Esc: Cancel",
        DialogPhase::Processing => "Processing...",
        DialogPhase::AwaitingProof => "Tab: Next field  Enter: Verify  Esc: Abandon checkout",
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
