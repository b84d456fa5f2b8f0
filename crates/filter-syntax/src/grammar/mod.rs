//! Grammar collaborator: turns filter text into a pest parse tree.
//!
//! Operator precedence lives entirely in `filter.pest`; the AST builder only
//! follows the shape of the tree it is handed.

use crate::errors::FilterParseError;
use pest::{Parser, iterators::Pair};
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "grammar/filter.pest"]
pub struct FilterGrammar;

/// Parse `input` into the tree rooted at [`Rule::filter`].
pub fn parse_tree(input: &str) -> Result<Pair<'_, Rule>, FilterParseError> {
    let mut pairs = FilterGrammar::parse(Rule::filter, input)
        .map_err(|e| FilterParseError::from_pest_error(e, input))?;

    pairs
        .next()
        .ok_or_else(|| FilterParseError::new("Empty input", 1, 1))
}
