pub mod emitter;
pub mod stdout;

pub use crate::domain::model::MESSAGE;
pub use crate::utils::error::Result;
