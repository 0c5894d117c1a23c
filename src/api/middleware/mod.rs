pub mod basic_auth;
pub mod request_trace;

pub use basic_auth::AdminAuth;
pub use request_trace::RequestTrace;
