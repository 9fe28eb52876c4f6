//! Domain models for the hospital records system.

mod appointment;
mod billing;
mod notification;
mod patient;
mod user;

pub use appointment::*;
pub use billing::*;
pub use notification::*;
pub use patient::*;
pub use user::*;
