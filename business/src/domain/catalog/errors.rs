#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Transport failures and non-success responses collapse into one
    /// generic condition; the caller decides how to present it.
    #[error("catalog.fetch_failed")]
    FetchFailed,
}
