use std::time::Instant;

use regex::Regex;

use crate::constants::TEAM_CODE_LEN;
use crate::faq::FaqAccordion;
use crate::models::{CheckoutProof, Team};
use crate::payment::PendingPayment;

lazy_static::lazy_static! {
    static ref TEAM_CODE_RE: Regex = Regex::new(r"^[A-Z0-9]{6}$").unwrap();
}

pub fn is_valid_team_code(code: &str) -> bool {
    TEAM_CODE_RE.is_match(code)
}

/// Which of the four mutually exclusive dashboard views renders. Computed
/// once per fetch, never re-derived from loose booleans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashboardView {
    /// First fetch still outstanding; nothing else may flash in.
    Loading,
    /// No team: offer the create/join choice.
    NoTeam,
    /// Team exists but needs a completed payment to be usable.
    PaymentPending,
    /// Full dashboard.
    Active,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Dashboard,
    Faq,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Popup {
    Join,
    CreateTeam,
    Payment,
    ConfirmRemove(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialogPhase {
    Idle,
    Processing,
    /// The checkout is open in the browser; waiting for the proof triple.
    AwaitingProof,
}

/// View state for a single payment attempt. Re-initialized every time the
/// dialog opens; a failure returns to `Idle` with the error text shown and
/// the pay action re-enabled.
#[derive(Debug, Clone)]
pub struct PaymentDialogState {
    pub team_name: String,
    pub name_read_only: bool,
    pub phase: DialogPhase,
    pub error: Option<String>,
    pub success: bool,
    pub pending: Option<PendingPayment>,
    pub proof_payment_id: String,
    pub proof_order_id: String,
    pub proof_signature: String,
    pub proof_field: usize,
}

impl PaymentDialogState {
    pub fn open_for(team_name: &str) -> Self {
        Self {
            team_name: team_name.to_string(),
            name_read_only: true,
            phase: DialogPhase::Idle,
            error: None,
            success: false,
            pending: None,
            proof_payment_id: String::new(),
            proof_order_id: String::new(),
            proof_signature: String::new(),
            proof_field: 0,
        }
    }

    pub fn pay_enabled(&self) -> bool {
        self.phase == DialogPhase::Idle
    }

    pub fn proof(&self) -> CheckoutProof {
        CheckoutProof {
            razorpay_payment_id: self.proof_payment_id.trim().to_string(),
            razorpay_order_id: self.proof_order_id.trim().to_string(),
            razorpay_signature: self.proof_signature.trim().to_string(),
        }
    }

    pub fn proof_complete(&self) -> bool {
        !self.proof_payment_id.trim().is_empty()
            && !self.proof_order_id.trim().is_empty()
            && !self.proof_signature.trim().is_empty()
    }

    pub fn active_proof_field(&mut self) -> &mut String {
        match self.proof_field {
            0 => &mut self.proof_payment_id,
            1 => &mut self.proof_order_id,
            _ => &mut self.proof_signature,
        }
    }

    pub fn next_proof_field(&mut self) {
        self.proof_field = (self.proof_field + 1) % 3;
    }

    pub fn prev_proof_field(&mut self) {
        self.proof_field = if self.proof_field == 0 {
            2
        } else {
            self.proof_field - 1
        };
    }
}

impl Default for PaymentDialogState {
    fn default() -> Self {
        Self::open_for("")
    }
}

/// Complete view state for the dashboard TUI.
pub struct DashboardState {
    pub view: DashboardView,
    pub screen: Screen,
    pub team: Option<Team>,
    pub error: Option<String>,
    pub busy: bool,
    pub popup: Option<Popup>,
    pub dialog: PaymentDialogState,
    pub join_input: String,
    pub create_input: String,
    pub member_index: usize,
    pub faq: FaqAccordion,
    pub reload_at: Option<Instant>,
    pub should_quit: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            view: DashboardView::Loading,
            screen: Screen::Dashboard,
            team: None,
            error: None,
            busy: false,
            popup: None,
            dialog: PaymentDialogState::default(),
            join_input: String::new(),
            create_input: String::new(),
            member_index: 0,
            faq: FaqAccordion::default(),
            reload_at: None,
            should_quit: false,
        }
    }

    pub fn join_ready(&self) -> bool {
        self.join_input.len() == TEAM_CODE_LEN && !self.busy
    }

    pub fn push_join_char(&mut self, c: char) {
        if self.join_input.len() < TEAM_CODE_LEN && c.is_ascii_alphanumeric() {
            // The join code input uppercases as you type.
            self.join_input.push(c.to_ascii_uppercase());
        }
    }

    pub fn selected_member_id(&self) -> Option<String> {
        self.team
            .as_ref()
            .and_then(|t| t.members.get(self.member_index))
            .map(|m| m.id.clone())
    }

    pub fn clamp_member_index(&mut self) {
        let len = self.team.as_ref().map(|t| t.members.len()).unwrap_or(0);
        if len == 0 {
            self.member_index = 0;
        } else if self.member_index >= len {
            self.member_index = len - 1;
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}
