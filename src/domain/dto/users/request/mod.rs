pub mod auth_request;
pub mod profile_request;

pub use auth_request::{LoginRequest, RefreshTokenRequest, RegisterRequest};
pub use profile_request::UpdateProfileRequest;
