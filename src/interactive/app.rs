use std::time::Instant;

use crossterm::event::KeyCode;

use crate::checkout::{CheckoutOutcome, Gateway, Prefill};
use crate::client::RegistrationApi;
use crate::constants::{DEFAULT_AMOUNT_RUPEES, JOIN_RELOAD_DELAY};
use crate::error::IdeatexResult;
use crate::interactive::state::{
    DashboardState, DashboardView, DialogPhase, PaymentDialogState, Popup, Screen,
};
use crate::logging::log_info;
use crate::models::PaymentConfirmation;
use crate::payment::{apply_confirmation, PaymentFlow};
use crate::roster;
use crate::session::Session;

/// The dashboard orchestrator: owns the session, mediates every team-mutating
/// action, and decides which of the four views renders.
pub struct DashboardApp<C, G> {
    pub api: C,
    pub gateway: G,
    pub session: Session,
    pub state: DashboardState,
    pub amount_rupees: u64,
}

impl<C, G> DashboardApp<C, G>
where
    C: RegistrationApi + Clone + 'static,
    G: Gateway,
{
    /// Fails with `TokenNotFound` before any fetch when the session is
    /// unauthenticated; the caller sends the user to `ideatex auth` instead.
    pub fn new(api: C, gateway: G, session: Session) -> IdeatexResult<Self> {
        session.require_token()?;
        Ok(Self {
            api,
            gateway,
            session,
            state: DashboardState::new(),
            amount_rupees: DEFAULT_AMOUNT_RUPEES,
        })
    }

    /// First membership fetch. The view stays `Loading` until this resolves;
    /// only then may NoTeam/PaymentPending/Active render.
    pub async fn init(&mut self) {
        self.refresh_team().await;
    }

    /// Re-fetch membership and compute the view once from the result.
    pub async fn refresh_team(&mut self) {
        self.state.busy = true;
        let view = match self.session.team_id() {
            None => {
                self.state.team = None;
                DashboardView::NoTeam
            }
            Some(team_id) => match roster::fetch_team(&self.api, team_id).await {
                Ok(Some(team)) => {
                    let view = if team.is_pending_payment {
                        DashboardView::PaymentPending
                    } else {
                        DashboardView::Active
                    };
                    self.state.team = Some(team);
                    view
                }
                Ok(None) => {
                    self.state.team = None;
                    DashboardView::NoTeam
                }
                Err(e) => {
                    log_info(&format!("Membership fetch failed: {}", e));
                    self.state.team = None;
                    DashboardView::NoTeam
                }
            },
        };
        self.state.view = view;
        self.state.clamp_member_index();
        self.state.busy = false;
    }

    pub async fn submit_join(&mut self) {
        let code = self.state.join_input.clone();
        if code.trim().is_empty() {
            self.state.error = Some("Team code is required".to_string());
            return;
        }
        if !super::state::is_valid_team_code(&code) {
            self.state.error = Some(format!(
                "Team code must be {} characters",
                crate::constants::TEAM_CODE_LEN
            ));
            return;
        }

        self.state.busy = true;
        match self.api.join_team(&code).await {
            Ok(data) => {
                if let Err(e) = self
                    .session
                    .set_team(Some(data.team.id), Some(data.user_id))
                {
                    self.state.error = Some(e.to_string());
                } else {
                    // Full reload after a fixed delay picks up server state;
                    // the immediate re-fetch keeps the view responsive.
                    self.state.reload_at = Some(Instant::now() + JOIN_RELOAD_DELAY);
                    self.state.popup = None;
                    self.state.error = None;
                    self.refresh_team().await;
                }
            }
            Err(e) => {
                self.state.error = Some(e.to_string());
            }
        }
        self.state.busy = false;
    }

    pub async fn submit_create(&mut self) {
        let name = self.state.create_input.trim().to_string();
        if name.is_empty() {
            self.state.error = Some("Team name is required".to_string());
            return;
        }

        self.state.error = None;
        self.state.busy = true;
        match self.api.create_team(&name).await {
            Ok(data) => {
                if let Err(e) = self
                    .session
                    .set_team(Some(data.team.id), data.team.leader_id)
                {
                    self.state.error = Some(e.to_string());
                } else {
                    self.open_payment_dialog(&name);
                }
            }
            Err(e) => {
                // Creation modal stays open for another attempt.
                self.state.error = Some(e.to_string());
            }
        }
        self.state.busy = false;
    }

    pub fn open_payment_dialog(&mut self, team_name: &str) {
        self.state.dialog = PaymentDialogState::open_for(team_name);
        self.state.popup = Some(Popup::Payment);
    }

    /// Client-side-only removal; the backend is deliberately not called.
    pub fn remove_member(&mut self, member_id: &str) {
        if let Some(team) = self.state.team.as_mut() {
            team.members.retain(|m| m.id != member_id);
        }
        self.state.clamp_member_index();
    }

    /// Kick off one payment attempt: precondition checks, gateway readiness,
    /// order creation, checkout open. Every failure lands in the dialog's
    /// error line and re-enables the pay action.
    pub async fn start_payment(&mut self) {
        if !self.state.dialog.pay_enabled() {
            return;
        }
        self.state.dialog.error = None;
        self.state.dialog.phase = DialogPhase::Processing;

        let team_name = self.state.dialog.team_name.clone();
        let amount_minor = self.amount_rupees * 100;
        let flow = PaymentFlow::new(&self.api, &self.gateway, &self.session);
        match flow.begin(&team_name, amount_minor, Prefill::default()).await {
            Ok(pending) => {
                self.state.dialog.pending = Some(pending);
                self.state.dialog.phase = DialogPhase::AwaitingProof;
            }
            Err(e) => {
                self.state.dialog.error = Some(e.to_string());
                self.state.dialog.phase = DialogPhase::Idle;
            }
        }
    }

    /// The proof triple was entered; verify server-side and hand the
    /// confirmation to the dashboard.
    pub async fn submit_proof(&mut self) {
        let Some(pending) = self.state.dialog.pending.clone() else {
            return;
        };
        if !self.state.dialog.proof_complete() {
            self.state.dialog.error = Some("All three proof fields are required".to_string());
            return;
        }

        let proof = self.state.dialog.proof();
        self.state.dialog.phase = DialogPhase::Processing;

        let flow = PaymentFlow::new(&self.api, &self.gateway, &self.session);
        match flow
            .resolve(&pending, CheckoutOutcome::Completed(proof))
            .await
        {
            Ok(Some(confirmation)) => self.on_payment_confirmed(confirmation).await,
            Ok(None) => {
                self.state.dialog.phase = DialogPhase::Idle;
            }
            Err(e) => {
                self.state.dialog.error = Some(e.to_string());
                self.state.dialog.phase = DialogPhase::Idle;
            }
        }
    }

    /// The user closed the checkout without completing; nothing was verified.
    pub fn cancel_checkout(&mut self) {
        self.state.dialog.pending = None;
        self.state.dialog.phase = DialogPhase::Idle;
    }

    /// Acts only on a verified, server-acknowledged result: persists the
    /// returned identifiers, closes the dialog, and re-fetches membership as
    /// the single source of truth.
    pub async fn on_payment_confirmed(&mut self, confirmation: PaymentConfirmation) {
        match apply_confirmation(&mut self.session, &confirmation) {
            Ok(()) => {
                self.state.dialog.success = true;
                self.state.dialog.phase = DialogPhase::Idle;
                self.state.popup = None;
                self.state.view = DashboardView::Loading;
                self.refresh_team().await;
            }
            Err(e) => {
                self.state.error = Some(e.to_string());
                self.state.dialog.phase = DialogPhase::Idle;
            }
        }
    }

    /// Timer-driven work: the delayed post-join reload.
    pub async fn tick(&mut self) {
        if let Some(at) = self.state.reload_at {
            if Instant::now() >= at {
                self.state.reload_at = None;
                self.state.view = DashboardView::Loading;
                self.refresh_team().await;
            }
        }
    }

    pub async fn handle_key(&mut self, key: KeyCode) {
        if self.state.popup.is_some() {
            self.handle_popup_key(key).await;
            return;
        }

        if self.state.screen == Screen::Faq {
            self.handle_faq_key(key);
            return;
        }

        match self.state.view {
            DashboardView::Loading => {
                if key == KeyCode::Char('q') {
                    self.state.should_quit = true;
                }
            }
            DashboardView::NoTeam => self.handle_no_team_key(key),
            DashboardView::PaymentPending => self.handle_pending_key(key).await,
            DashboardView::Active => self.handle_active_key(key).await,
        }
    }

    fn handle_no_team_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.state.should_quit = true,
            KeyCode::Char('c') => {
                self.state.error = None;
                self.state.create_input.clear();
                self.state.popup = Some(Popup::CreateTeam);
            }
            KeyCode::Char('j') => {
                self.state.error = None;
                self.state.join_input.clear();
                self.state.popup = Some(Popup::Join);
            }
            KeyCode::Char('f') => self.state.screen = Screen::Faq,
            _ => {}
        }
    }

    async fn handle_pending_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.state.should_quit = true,
            KeyCode::Char('p') => {
                let team_name = self
                    .state
                    .team
                    .as_ref()
                    .map(|t| t.name.clone())
                    .unwrap_or_default();
                self.open_payment_dialog(&team_name);
            }
            KeyCode::Char('r') => {
                self.state.view = DashboardView::Loading;
                self.refresh_team().await;
            }
            KeyCode::Char('f') => self.state.screen = Screen::Faq,
            _ => {}
        }
    }

    async fn handle_active_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.state.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => {
                let len = self
                    .state
                    .team
                    .as_ref()
                    .map(|t| t.members.len())
                    .unwrap_or(0);
                if len > 0 {
                    self.state.member_index = (self.state.member_index + 1) % len;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let len = self
                    .state
                    .team
                    .as_ref()
                    .map(|t| t.members.len())
                    .unwrap_or(0);
                if len > 0 {
                    self.state.member_index = if self.state.member_index == 0 {
                        len - 1
                    } else {
                        self.state.member_index - 1
                    };
                }
            }
            KeyCode::Char('x') => {
                if let Some(id) = self.state.selected_member_id() {
                    self.state.popup = Some(Popup::ConfirmRemove(id));
                }
            }
            KeyCode::Char('r') => {
                self.state.view = DashboardView::Loading;
                self.refresh_team().await;
            }
            KeyCode::Char('f') => self.state.screen = Screen::Faq,
            _ => {}
        }
    }

    fn handle_faq_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') => self.state.screen = Screen::Dashboard,
            KeyCode::Char('j') | KeyCode::Down => self.state.faq.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.faq.select_prev(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let selected = self.state.faq.selected;
                self.state.faq.toggle(selected);
            }
            _ => {}
        }
    }

    async fn handle_popup_key(&mut self, key: KeyCode) {
        let Some(popup) = self.state.popup.clone() else {
            return;
        };
        match popup {
            Popup::Join => match key {
                KeyCode::Esc => {
                    self.state.popup = None;
                    self.state.error = None;
                }
                KeyCode::Enter => {
                    if self.state.join_ready() {
                        self.submit_join().await;
                    }
                }
                KeyCode::Char(c) => self.state.push_join_char(c),
                KeyCode::Backspace => {
                    self.state.join_input.pop();
                }
                _ => {}
            },
            Popup::CreateTeam => match key {
                KeyCode::Esc => {
                    self.state.popup = None;
                    self.state.error = None;
                }
                KeyCode::Enter => {
                    if !self.state.busy {
                        self.submit_create().await;
                    }
                }
                KeyCode::Char(c) => self.state.create_input.push(c),
                KeyCode::Backspace => {
                    self.state.create_input.pop();
                }
                _ => {}
            },
            Popup::Payment => self.handle_dialog_key(key).await,
            Popup::ConfirmRemove(member_id) => match key {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.remove_member(&member_id);
                    self.state.popup = None;
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.state.popup = None;
                }
                _ => {}
            },
        }
    }

    async fn handle_dialog_key(&mut self, key: KeyCode) {
        match self.state.dialog.phase {
            DialogPhase::Idle => match key {
                KeyCode::Esc => {
                    // Cancel button: the dialog never closes itself on
                    // success, only the user or the dashboard closes it.
                    self.state.popup = None;
                }
                KeyCode::Enter | KeyCode::Char('p') => self.start_payment().await,
                _ => {}
            },
            DialogPhase::Processing => {}
            DialogPhase::AwaitingProof => match key {
                KeyCode::Esc => self.cancel_checkout(),
                KeyCode::Tab | KeyCode::Down => self.state.dialog.next_proof_field(),
                KeyCode::BackTab | KeyCode::Up => self.state.dialog.prev_proof_field(),
                KeyCode::Enter => {
                    if self.state.dialog.proof_complete() {
                        self.submit_proof().await;
                    } else {
                        self.state.dialog.next_proof_field();
                    }
                }
                KeyCode::Char(c) => self.state.dialog.active_proof_field().push(c),
                KeyCode::Backspace => {
                    self.state.dialog.active_proof_field().pop();
                }
                _ => {}
            },
        }
    }
}
