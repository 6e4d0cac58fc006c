use std::io::{self, Write};

/// Unbuffered writer for file descriptor 1.
///
/// Errors from the descriptor (`EBADF`, `EPIPE`, `ENOSPC`, ...) are returned
/// as-is instead of being swallowed the way `std::io::Stdout` does for a
/// closed descriptor.
#[cfg(unix)]
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutChannel;

#[cfg(unix)]
impl Write for StdoutChannel {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = unsafe { libc::write(libc::STDOUT_FILENO, buf.as_ptr().cast(), buf.len()) };
        if n < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(n as usize)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(not(unix))]
pub type StdoutChannel = io::Stdout;

#[cfg(unix)]
pub fn channel() -> StdoutChannel {
    StdoutChannel
}

#[cfg(not(unix))]
pub fn channel() -> StdoutChannel {
    io::stdout()
}
