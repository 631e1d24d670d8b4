/// Static FAQ content plus the accordion open/closed state. Items toggle
/// independently; opening one never closes another.
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ITEMS: &[FaqItem] = &[
    FaqItem {
        question: "What is IdeateX?",
        answer: "IdeateX is E-Cell KIET's flagship ideathon, where teams pitch, build, and compete over an intense weekend.",
    },
    FaqItem {
        question: "Who can participate?",
        answer: "Any student team. You need a registered team with a completed payment to take part.",
    },
    FaqItem {
        question: "How do I create a team?",
        answer: "Create a team with a name of your choice, complete the registration payment, then share your team code with teammates.",
    },
    FaqItem {
        question: "How do teammates join?",
        answer: "They enter your 6-character team code. Once joined, everyone appears on the team dashboard.",
    },
    FaqItem {
        question: "Is there a registration fee?",
        answer: "Yes, a one-time fee per team, payable through Razorpay when the team is created.",
    },
    FaqItem {
        question: "My payment went through but my team still shows pending. What now?",
        answer: "Activation happens only after the server verifies the payment. Refresh the dashboard; if it stays pending, contact the organizers with your payment id.",
    },
    FaqItem {
        question: "Will I get a certificate for participation?",
        answer: "Yes, all participants receive digital certificates. Winners and top performers may receive additional recognition and awards.",
    },
    FaqItem {
        question: "How can I stay updated?",
        answer: "Follow @kietecell on Instagram and visit e-cell.in for all updates, schedules, and announcements.",
    },
];

pub struct FaqAccordion {
    open: Vec<bool>,
    pub selected: usize,
}

impl FaqAccordion {
    pub fn new(len: usize) -> Self {
        Self {
            open: vec![false; len],
            selected: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, index: usize) {
        if let Some(flag) = self.open.get_mut(index) {
            *flag = !*flag;
        }
    }

    pub fn select_next(&mut self) {
        if !self.open.is_empty() {
            self.selected = (self.selected + 1) % self.open.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.open.is_empty() {
            self.selected = if self.selected == 0 {
                self.open.len() - 1
            } else {
                self.selected - 1
            };
        }
    }
}

impl Default for FaqAccordion {
    fn default() -> Self {
        Self::new(FAQ_ITEMS.len())
    }
}
