pub mod api;
pub mod payment;
pub mod team;
pub mod user;

// Re-export commonly used types
pub use api::{AddTeamData, ApiResponse, JoinTeamData, MembersData, UserData};
pub use payment::{
    CheckoutProof, PaymentConfirmation, PaymentOrder, VerificationOutcome, VerificationRequest,
};
pub use team::{Leader, Member, MemberRecord, Team};
pub use user::UserProfile;
