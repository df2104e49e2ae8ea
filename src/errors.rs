use std::{error, fmt, path::Path};

/// An error from the harness.
pub struct HarnessError(pub String);

impl HarnessError {
    /// Attach the path an operation was working on to an error message.
    pub fn at<E: fmt::Display>(path: &Path, err: E) -> Self {
        HarnessError(format!("{}: {}", path.display(), err))
    }
}

impl fmt::Debug for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl error::Error for HarnessError {}

impl From<std::io::Error> for HarnessError {
    fn from(err: std::io::Error) -> Self {
        HarnessError(err.to_string())
    }
}

impl From<toml::de::Error> for HarnessError {
    fn from(err: toml::de::Error) -> Self {
        HarnessError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn at_prefixes_path() {
        let err = HarnessError::at(&PathBuf::from("executions/test_a"), "denied");
        assert_eq!(err.to_string(), "executions/test_a: denied");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err: HarnessError = io.into();
        assert_eq!(format!("{:?}", err), "disk full");
    }
}
