pub mod confirm;
pub mod create;
pub mod join;
pub mod payment;
