use std::fmt;

/// Everything that can go wrong while building a design. Nothing in here is
/// retried; a failed request produces no markup at all.
#[derive(Debug, Clone, PartialEq)]
pub enum FlagError {
    /// Unknown rank, tier, layout or design code.
    InvalidSelector(String),
    /// A request was built without something it can't do without.
    MissingParameter(&'static str),
    /// A parameter was present but unusable (zero fly length, etc).
    InvalidParameter(String),
    InvalidConfig(String),
    Template(String),
    Io(String),
}

impl std::error::Error for FlagError {}

impl fmt::Display for FlagError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FlagError::InvalidSelector(sel) => write!(f, "Unrecognized selector: {}", sel),
            FlagError::MissingParameter(name) => write!(f, "Missing required parameter: {}", name),
            FlagError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            FlagError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            FlagError::Template(msg) => write!(f, "Document template error: {}", msg),
            FlagError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl From<tera::Error> for FlagError {
    fn from(error: tera::Error) -> Self {
        FlagError::Template(error.to_string())
    }
}

impl From<ron::error::SpannedError> for FlagError {
    fn from(error: ron::error::SpannedError) -> Self {
        FlagError::InvalidConfig(error.to_string())
    }
}

impl From<std::io::Error> for FlagError {
    fn from(error: std::io::Error) -> Self {
        FlagError::Io(error.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display_names_the_selector() {
        let err = FlagError::InvalidSelector("XO".to_string());
        assert_eq!(err.to_string(), "Unrecognized selector: XO");
        let err = FlagError::MissingParameter("design");
        assert!(err.to_string().contains("design"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        match FlagError::from(io) {
            FlagError::Io(msg) => assert!(msg.contains("gone")),
            other => panic!("Unexpected conversion: {:?}", other),
        }
    }
}
