#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("container failed to reserve capacity")]
    AllocationFailure,

    #[error("position {index} is out of range for a container of length {len}")]
    InvalidPosition { index: usize, len: usize },

    #[error("precondition violated: {reason}")]
    PreconditionViolated { reason: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
