mod error;
pub mod line;
mod query;
pub mod validation;

pub use error::*;
pub use line::{parse_line, ObjectDispatch};
pub use query::IndexQuery;

// Re-export some oxrdf types.
pub use oxrdf::{
    BlankNode, BlankNodeIdParseError, IriParseError, LanguageTagParseError, Literal, NamedNode,
    Term, Triple,
};
