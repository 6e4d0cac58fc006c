pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::emitter::Emitter;
pub use crate::domain::model::MESSAGE;
pub use crate::utils::error::{EmitError, Result};
