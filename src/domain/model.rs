/// The bytes written to standard output on every run.
pub const MESSAGE: &[u8] = b"Hello World!";
