//! Request extractors.

pub mod form;
pub use form::FormFields;
