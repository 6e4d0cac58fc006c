use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("Incomplete write: {written} of {expected} bytes reached the output")]
    IncompleteWrite {
        written: usize,
        expected: usize,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl EmitError {
    /// Bytes accepted by the channel before the write gave up.
    pub fn written(&self) -> usize {
        match self {
            EmitError::IncompleteWrite { written, .. } => *written,
        }
    }

    /// Process exit status reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            EmitError::IncompleteWrite { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, EmitError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_incomplete_write_display() {
        let err = EmitError::IncompleteWrite {
            written: 5,
            expected: 12,
            source: None,
        };
        assert_eq!(
            err.to_string(),
            "Incomplete write: 5 of 12 bytes reached the output"
        );
        assert_eq!(err.written(), 5);
    }

    #[test]
    fn test_incomplete_write_keeps_io_source() {
        let err = EmitError::IncompleteWrite {
            written: 0,
            expected: 12,
            source: Some(io::Error::from(io::ErrorKind::BrokenPipe)),
        };
        let source = err.source().expect("io error should be the source");
        let io_err = source
            .downcast_ref::<io::Error>()
            .expect("source should be an io::Error");
        assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_exit_code_is_one() {
        let err = EmitError::IncompleteWrite {
            written: 0,
            expected: 12,
            source: None,
        };
        assert_eq!(err.exit_code(), 1);
    }
}
