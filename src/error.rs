use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The drawing backend could not create a texture.
    #[error("cannot allocate {what}: {reason}")]
    Allocation { what: &'static str, reason: String },
    #[error("draw failed: {0}")]
    Draw(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
