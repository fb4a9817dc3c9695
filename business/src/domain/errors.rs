/// Errors raised by the remote product service port.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The request never reached the service (connection refused, timeout, ...).
    #[error("service.network: {0}")]
    Network(String),
    /// The service answered with a non-success status.
    #[error("service.status: {0}")]
    Status(u16),
    #[error("service.not_found")]
    NotFound,
    #[error("service.decode: {0}")]
    Decode(String),
    /// The selected image file could not be opened when building the payload.
    #[error("service.image_unreadable: {0}")]
    ImageUnreadable(String),
    /// The request URL could not be built, so nothing was sent.
    #[error("service.invalid_url: {0}")]
    InvalidUrl(String),
}

impl ServiceError {
    pub fn network(reason: impl Into<String>) -> Self {
        ServiceError::Network(reason.into())
    }
    pub fn status(code: u16) -> Self {
        if code == 404 {
            ServiceError::NotFound
        } else {
            ServiceError::Status(code)
        }
    }
    pub fn not_found() -> Self {
        ServiceError::NotFound
    }
    pub fn decode(reason: impl Into<String>) -> Self {
        ServiceError::Decode(reason.into())
    }
    pub fn image_unreadable(reason: impl Into<String>) -> Self {
        ServiceError::ImageUnreadable(reason.into())
    }
    pub fn invalid_url(reason: impl Into<String>) -> Self {
        ServiceError::InvalidUrl(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_404_to_not_found() {
        assert_eq!(ServiceError::status(404), ServiceError::NotFound);
    }

    #[test]
    fn should_keep_other_status_codes() {
        assert_eq!(ServiceError::status(500), ServiceError::Status(500));
        assert_eq!(ServiceError::status(422).to_string(), "service.status: 422");
    }

    #[test]
    fn should_surface_network_reason_in_message() {
        let error = ServiceError::network("connection refused");
        assert_eq!(error.to_string(), "service.network: connection refused");
    }

    #[test]
    fn should_keep_invalid_url_apart_from_network_failures() {
        let error = ServiceError::invalid_url("relative URL without a base");
        assert_eq!(error.to_string(), "service.invalid_url: relative URL without a base");
        assert_ne!(error, ServiceError::network("relative URL without a base"));
    }
}
