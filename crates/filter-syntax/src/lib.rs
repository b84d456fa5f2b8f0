pub mod ast;
pub mod builder;
pub mod errors;
pub mod grammar;
pub mod quote;

pub use ast::{Expression, Literal};
pub use builder::parse;
pub use errors::{
    FilterError, FilterParseError, FilterValidationError, Result, ValidationErrorKind,
};
