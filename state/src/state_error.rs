use thiserror::Error;

/// A reason why the episode listing is unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
pub enum StateError {
    #[default]
    #[error("Loading...")]
    Loading,

    #[error("Network error...")]
    NetError,

    #[error("Unexpected response...")]
    ParseError,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn user_facing_messages() {
        assert_eq!(StateError::default(), StateError::Loading);
        assert_eq!(StateError::Loading.to_string(), "Loading...");
        assert_eq!(StateError::NetError.to_string(), "Network error...");
        assert_eq!(StateError::ParseError.to_string(), "Unexpected response...");
        assert!(StateError::NetError.source().is_none());
    }
}
