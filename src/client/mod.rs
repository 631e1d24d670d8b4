pub mod api;
pub mod http;

pub use api::RegistrationApi;
pub use http::RegistrationClient;
