use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The browser refused a capability (observer, timer, frame). Callers log and carry on.
    #[error("host capability unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, MotionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = MotionError::InvalidArgument("carousel needs at least one item".into());
        assert_eq!(err.to_string(), "invalid argument: carousel needs at least one item");
    }
}
