//! Welcome endpoint.

/// Body returned by `GET /`.
pub const WELCOME_MESSAGE: &str = "Bienvenido a la API de Demo";

/// GET / — returns the plain-text welcome message.
pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}
