//! Page bodies rendered in the central panel

pub mod home;
pub mod unavailable;
pub mod validate;

pub use validate::ValidateAction;
