use crate::core::MESSAGE;
use crate::utils::error::{EmitError, Result};
use std::io::{ErrorKind, Write};

pub struct Emitter<W: Write> {
    out: W,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes the whole message and flushes it, returning the byte count.
    ///
    /// Partial writes are continued until every byte is accepted. Anything
    /// short of that, including a failed flush, is an `IncompleteWrite`.
    pub fn emit(&mut self) -> Result<usize> {
        let expected = MESSAGE.len();
        let mut written = 0;

        tracing::debug!("Emitting {} bytes", expected);

        while written < expected {
            match self.out.write(&MESSAGE[written..]) {
                Ok(0) => {
                    return Err(EmitError::IncompleteWrite {
                        written,
                        expected,
                        source: None,
                    });
                }
                Ok(n) => {
                    written += n;
                    tracing::trace!("Accepted {} bytes ({}/{})", n, written, expected);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {
                    tracing::trace!("Write interrupted, retrying");
                }
                Err(e) => {
                    return Err(EmitError::IncompleteWrite {
                        written,
                        expected,
                        source: Some(e),
                    });
                }
            }
        }

        self.out.flush().map_err(|e| EmitError::IncompleteWrite {
            written,
            expected,
            source: Some(e),
        })?;

        tracing::debug!("Emitted {} bytes", written);
        Ok(written)
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
