pub mod build;
pub mod dev;
pub mod error;
pub mod flags;
pub mod layout;
pub mod resolver;
pub mod validation;

// Re-export main types
pub use build::*;
pub use dev::*;
pub use error::*;
pub use flags::*;
pub use layout::*;

// Re-export the resolver and validation
pub use resolver::{resolve, resolve_with_layout};
pub use validation::{
    ConfigValidator, FsValidator, STAGE_ORDER, SchemaValidator, validate_fs, validate_schema,
};
