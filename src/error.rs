use crate::http::error::TransportError;
use crate::validation::error::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DarkSkyError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
