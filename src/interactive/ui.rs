use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::interactive::layout::{app_layout, centered_popup};
use crate::interactive::panels;
use crate::interactive::popups;
use crate::interactive::state::{DashboardState, DashboardView, Popup, Screen};

pub fn draw(frame: &mut Frame, state: &DashboardState) {
    let layout = app_layout(frame.size());

    panels::header::draw(frame, layout.header, state);

    match state.screen {
        Screen::Faq => panels::faq::draw(frame, layout.main, state),
        Screen::Dashboard => match state.view {
            DashboardView::Loading => draw_loading(frame, layout.main),
            DashboardView::NoTeam => draw_no_team(frame, layout.main),
            DashboardView::PaymentPending => draw_payment_pending(frame, layout.main, state),
            DashboardView::Active => panels::members::draw(frame, layout.main, state),
        },
    }

    draw_footer(frame, layout.footer, state);

    match &state.popup {
        Some(Popup::Join) => popups::join::draw(frame, layout.main, state),
        Some(Popup::CreateTeam) => popups::create::draw(frame, layout.main, state),
        Some(Popup::Payment) => popups::payment::draw(frame, layout.main, state),
        Some(Popup::ConfirmRemove(_)) => popups::confirm::draw(frame, layout.main, state),
        None => {}
    }
}

fn draw_loading(frame: &mut Frame, area: Rect) {
    let popup = centered_popup(20, 3, area);
    let widget = Paragraph::new(Span::styled(
        "Loading...",
        Style::default().fg(Color::Gray),
    ))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, popup);
}

fn draw_no_team(frame: &mut Frame, area: Rect) {
    let popup = centered_popup(52, 8, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Welcome to IdeateX 2025! ")
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = vec![
        Line::from(Span::styled(
            "You don't have a team yet.",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "Choose how you'd like to proceed.",
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(
                "[C]",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("reate Team    ", Style::default().fg(Color::White)),
            Span::styled(
                "[J]",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("oin Team", Style::default().fg(Color::White)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_payment_pending(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let popup = centered_popup(56, 10, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Team Payment Pending ")
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let code = state
        .team
        .as_ref()
        .map(|t| if t.code.is_empty() { t.id.clone() } else { t.code.clone() })
        .unwrap_or_else(|| "N/A".to_string());

    let lines = vec![
        Line::from(Span::styled(
            "Your team needs a completed payment to be activated.",
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Team Code: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                code,
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled(
                "[P]",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Complete Payment", Style::default().fg(Color::White)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_footer(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let content = if let Some(error) = &state.error {
        if state.popup.is_none() {
            Span::styled(error.clone(), Style::default().fg(Color::Red))
        } else {
            footer_hint(state)
        }
    } else {
        footer_hint(state)
    };

    frame.render_widget(Paragraph::new(Line::from(content)).block(block), area);
}

fn footer_hint(state: &DashboardState) -> Span<'static> {
    let hint = match state.screen {
        Screen::Faq => "j/k: Navigate  Enter: Toggle  q: Back",
        Screen::Dashboard => match state.view {
            DashboardView::Loading => "q: Quit",
            DashboardView::NoTeam => "c: Create  j: Join  f: FAQ  q: Quit",
            DashboardView::PaymentPending => "p: Pay  r: Refresh  f: FAQ  q: Quit",
            DashboardView::Active => "j/k: Navigate  x: Remove  r: Refresh  f: FAQ  q: Quit",
        },
    };
    Span::styled(hint, Style::default().fg(Color::DarkGray))
}
