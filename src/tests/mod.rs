pub mod support;

mod error_tests;
mod faq_tests;
mod payment_flow_tests;
