//! # FormKit Core
//!
//! Core types, traits, and error handling for FormKit.
//!
//! This crate provides the foundational building blocks used throughout
//! the FormKit ecosystem, including:
//!
//! - **Values**: `FieldValue` and the declared `FieldType` driving widget
//!   dispatch, with fail-closed conversions
//! - **Localization**: the `Localizer` interface and label fallback rules
//! - **Errors**: unified error handling with `FormError` and `FormResult`
//!

pub mod error;
pub mod localize;
pub mod traits;
pub mod value;

// Re-export commonly used items at crate root
pub use error::{FormError, FormResult};
pub use localize::{Localizer, MapLocalizer, NullLocalizer, resolve_label, title_case};
pub use traits::Validatable;
pub use value::{FieldType, FieldValue};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
