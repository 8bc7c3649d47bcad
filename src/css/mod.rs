//! Style model: tokenizer, parser, identifier syntax, rule registry.

pub mod identifier;
pub mod model;
pub mod parser;
pub mod registry;
pub mod tokenizer;

pub use identifier::{check_identifiers, is_identifier, IdentifierError};
pub use model::{Declaration, DeclarationValue, RuleSet, StyleSheet};
pub use parser::{parse_css, parse_declarations, ParseError};
pub use registry::StyleRegistry;
