//! Outcome taxonomy for backend calls.

/// What a backend call produced.
///
/// Every call lands in exactly one of these. Transport problems are an
/// outcome rather than an error so that callers handle them next to the
/// backend's own failure modes instead of in a separate `Err` arm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiOutcome<T> {
    /// The backend accepted the call; `T` is the payload of its reply.
    Success(T),
    /// The backend rejected the credential. The session has already been
    /// demoted by the time callers see this.
    Unauthorized,
    /// The backend processed the call and reported an error, with its
    /// human-readable message.
    BackendFailure(String),
    /// The call never produced a usable reply, e.g. connection refused,
    /// timeout, or a response body that is not a backend envelope.
    TransportFailure(String),
}

impl<T> ApiOutcome<T> {
    /// Maps the success payload, preserving failures unchanged.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiOutcome<U> {
        match self {
            ApiOutcome::Success(value) => ApiOutcome::Success(f(value)),
            ApiOutcome::Unauthorized => ApiOutcome::Unauthorized,
            ApiOutcome::BackendFailure(message) => ApiOutcome::BackendFailure(message),
            ApiOutcome::TransportFailure(message) => ApiOutcome::TransportFailure(message),
        }
    }

    /// Chains a fallible step onto the success payload.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> ApiOutcome<U>) -> ApiOutcome<U> {
        match self {
            ApiOutcome::Success(value) => f(value),
            ApiOutcome::Unauthorized => ApiOutcome::Unauthorized,
            ApiOutcome::BackendFailure(message) => ApiOutcome::BackendFailure(message),
            ApiOutcome::TransportFailure(message) => ApiOutcome::TransportFailure(message),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiOutcome::Success(_))
    }

    /// Returns the success payload, discarding failure detail.
    pub fn success(self) -> Option<T> {
        match self {
            ApiOutcome::Success(value) => Some(value),
            _ => None,
        }
    }

    /// The failure message, if this outcome carries one.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            ApiOutcome::BackendFailure(message) | ApiOutcome::TransportFailure(message) => {
                Some(message)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_success() {
        let outcome = ApiOutcome::Success(2).map(|n| n * 2);
        assert_eq!(outcome, ApiOutcome::Success(4));
    }

    #[test]
    fn test_map_preserves_failures() {
        let outcome: ApiOutcome<i64> = ApiOutcome::BackendFailure("nope".to_string());
        assert_eq!(
            outcome.map(|n| n * 2),
            ApiOutcome::BackendFailure("nope".to_string())
        );
        let outcome: ApiOutcome<i64> = ApiOutcome::Unauthorized;
        assert_eq!(outcome.map(|n| n * 2), ApiOutcome::Unauthorized);
    }

    #[test]
    fn test_and_then() {
        let ok = ApiOutcome::Success(1).and_then(|n| ApiOutcome::Success(n + 1));
        assert_eq!(ok, ApiOutcome::Success(2));
        let nested: ApiOutcome<i64> =
            ApiOutcome::Success(1).and_then(|_| ApiOutcome::BackendFailure("bad".to_string()));
        assert_eq!(nested, ApiOutcome::BackendFailure("bad".to_string()));
    }

    #[test]
    fn test_accessors() {
        assert!(ApiOutcome::Success(()).is_success());
        assert_eq!(ApiOutcome::Success(7).success(), Some(7));
        let failed: ApiOutcome<()> = ApiOutcome::TransportFailure("timeout".to_string());
        assert_eq!(failed.failure_message(), Some("timeout"));
        assert_eq!(ApiOutcome::Success(()).failure_message(), None);
    }
}
