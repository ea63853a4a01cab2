//! Declarative tool and option schema for document-processing screens.

pub mod builtin;
mod catalog;
mod check;
mod error;
mod option;
mod rules;
mod tool;

pub mod prelude {
    pub use crate::{
        Choice, ExtraRule, FilePolicy, FileTypePattern, NumericRange, OptionDefinition,
        OptionKind, OptionValue, SchemaError, SchemaErrorKind, ToolCatalog, ToolCategory,
        ToolDefinition, VisibilityCondition,
    };
}

pub use catalog::ToolCatalog;
pub use check::check_definition;
pub use error::{SchemaError, SchemaErrorKind};
pub use option::{
    Choice, NumericRange, OptionDefinition, OptionKind, OptionValue, VisibilityCondition,
};
pub use pcommon::ToolId;
pub use rules::ExtraRule;
pub use tool::{FilePolicy, FileTypePattern, ToolCategory, ToolDefinition};
