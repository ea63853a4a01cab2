//! Visibility and validation evaluator for tool option forms.
//!
//! ```rust
//! use pform::{OptionValues, validate, visible_options};
//! use pschema::builtin;
//!
//! let catalog = builtin::catalog().expect("built-in tools are well formed");
//! let split = catalog.require("split").expect("split is built in");
//!
//! let mut values = OptionValues::seeded(&split);
//! assert_eq!(visible_options(&split, &values).len(), 1);
//!
//! values.insert("splitType", "ranges");
//! assert_eq!(visible_options(&split, &values).len(), 2);
//! assert!(validate(&split, &values, 1).is_empty());
//! ```

mod validate;
mod values;
mod visibility;

pub mod prelude {
    pub use crate::{OptionValues, Violation, ViolationReason, validate, visible_options};
}

pub use validate::{Violation, ViolationReason, validate};
pub use values::OptionValues;
pub use visibility::{is_visible, visible_options};
