//! The abstract syntax tree produced by the parser.

pub mod constant;
pub mod keyword;
pub mod node;
pub mod op;
pub mod position;
pub mod punctuator;

pub use self::{
    constant::Const,
    keyword::Keyword,
    node::Node,
    position::{Position, Span},
    punctuator::Punctuator,
};
