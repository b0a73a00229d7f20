#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth.invalid_credentials")]
    InvalidCredentials,
}
