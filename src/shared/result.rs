/// Type alias for Result with anyhow::Error as the error type.
/// Every layer of the crate returns this, with `DiffError` as the typed payload.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
