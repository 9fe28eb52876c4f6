//! Clinical text assistant for the hospital records system.
//!
//! Generation sits behind the [`TextGenerator`] trait. [`AiAssistant`] never
//! fails: errors and empty responses become fixed fallback messages.

pub mod assistant;
pub mod offline;
pub mod prompts;

pub use assistant::*;
pub use offline::*;
pub use prompts::*;
