pub type GeoRouteResult<T> = Result<T, GeoRouteError>;

#[derive(thiserror::Error, Debug)]
pub enum GeoRouteError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("sampling error: {0}")]
    Sampling(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GeoRouteError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn sampling(msg: impl Into<String>) -> Self {
        Self::Sampling(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            GeoRouteError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            GeoRouteError::sampling("x")
                .to_string()
                .contains("sampling error:")
        );
        assert!(
            GeoRouteError::serde("x")
                .to_string()
                .contains("serialization error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = GeoRouteError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
