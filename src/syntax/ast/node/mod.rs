//! The template AST nodes.

pub mod array;
pub mod call;
pub mod conditional;
pub mod declaration;
pub mod field;
pub mod filter;
pub mod identifier;
pub mod iteration;
pub mod macro_def;
pub mod object;
pub mod operator;
pub mod statement_list;
pub mod text;

pub use self::{
    array::ArrayDecl,
    call::{Call, Spread},
    conditional::If,
    declaration::{FormalParameter, Set, SetTarget},
    field::{GetConstField, GetField, Slice},
    filter::{FilterCall, FilterExpr, TestExpr},
    identifier::Identifier,
    iteration::{Break, Continue, ForLoop},
    macro_def::{CallBlock, FilterBlock, MacroDecl},
    object::ObjectDecl,
    operator::{BinOp, ConditionalOp, UnaryOp},
    statement_list::{RcStatementList, StatementList},
    text::Text,
};

use crate::syntax::ast::constant::Const;
use std::fmt;

/// A node of the template AST.
///
/// Nodes are either literal text, expressions (which produce a value and,
/// at statement-list level, write their display form to the output) or
/// statements (which only have effects).
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Literal template text.
    Text(Text),
    /// A literal constant.
    Const(Const),
    /// A name reference.
    Identifier(Identifier),
    /// An array literal.
    ArrayDecl(ArrayDecl),
    /// An object literal.
    ObjectDecl(ObjectDecl),
    /// A binary operation.
    BinOp(BinOp),
    /// A unary operation.
    UnaryOp(UnaryOp),
    /// An inline conditional.
    ConditionalOp(ConditionalOp),
    /// A call.
    Call(Call),
    /// A `*iterable` argument spread.
    Spread(Spread),
    /// Dotted member access.
    GetConstField(GetConstField),
    /// Computed member access.
    GetField(GetField),
    /// A slice.
    Slice(Slice),
    /// A filter application.
    FilterExpr(FilterExpr),
    /// An `is` test.
    TestExpr(TestExpr),
    /// An `if` block.
    If(If),
    /// A `for` block.
    ForLoop(ForLoop),
    /// A `break` inside a loop body.
    Break(Break),
    /// A `continue` inside a loop body.
    Continue(Continue),
    /// A `set` statement.
    Set(Set),
    /// A macro definition.
    MacroDecl(MacroDecl),
    /// A `call` block.
    CallBlock(CallBlock),
    /// A `filter` block.
    FilterBlock(FilterBlock),
    /// A nested statement list.
    StatementList(StatementList),
}

impl Node {
    /// Whether this node is a statement.
    ///
    /// Statements are executed for their effects; everything else is an
    /// expression whose value is written to the output when it appears
    /// directly in a statement list.
    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            Self::Text(_)
                | Self::If(_)
                | Self::ForLoop(_)
                | Self::Break(_)
                | Self::Continue(_)
                | Self::Set(_)
                | Self::MacroDecl(_)
                | Self::CallBlock(_)
                | Self::FilterBlock(_)
                | Self::StatementList(_)
        )
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(node) => fmt::Display::fmt(node, f),
            Self::Const(node) => fmt::Display::fmt(node, f),
            Self::Identifier(node) => fmt::Display::fmt(node, f),
            Self::ArrayDecl(node) => fmt::Display::fmt(node, f),
            Self::ObjectDecl(node) => fmt::Display::fmt(node, f),
            Self::BinOp(node) => fmt::Display::fmt(node, f),
            Self::UnaryOp(node) => fmt::Display::fmt(node, f),
            Self::ConditionalOp(node) => fmt::Display::fmt(node, f),
            Self::Call(node) => fmt::Display::fmt(node, f),
            Self::Spread(node) => fmt::Display::fmt(node, f),
            Self::GetConstField(node) => fmt::Display::fmt(node, f),
            Self::GetField(node) => fmt::Display::fmt(node, f),
            Self::Slice(node) => fmt::Display::fmt(node, f),
            Self::FilterExpr(node) => fmt::Display::fmt(node, f),
            Self::TestExpr(node) => fmt::Display::fmt(node, f),
            Self::If(node) => fmt::Display::fmt(node, f),
            Self::ForLoop(node) => fmt::Display::fmt(node, f),
            Self::Break(node) => fmt::Display::fmt(node, f),
            Self::Continue(node) => fmt::Display::fmt(node, f),
            Self::Set(node) => fmt::Display::fmt(node, f),
            Self::MacroDecl(node) => fmt::Display::fmt(node, f),
            Self::CallBlock(node) => fmt::Display::fmt(node, f),
            Self::FilterBlock(node) => fmt::Display::fmt(node, f),
            Self::StatementList(node) => fmt::Display::fmt(node, f),
        }
    }
}

macro_rules! node_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(node: $ty) -> Self {
                    Self::$variant(node)
                }
            }
        )*
    };
}

node_from! {
    Text(Text),
    Const(Const),
    Identifier(Identifier),
    ArrayDecl(ArrayDecl),
    ObjectDecl(ObjectDecl),
    BinOp(BinOp),
    UnaryOp(UnaryOp),
    ConditionalOp(ConditionalOp),
    Call(Call),
    Spread(Spread),
    GetConstField(GetConstField),
    GetField(GetField),
    Slice(Slice),
    FilterExpr(FilterExpr),
    TestExpr(TestExpr),
    If(If),
    ForLoop(ForLoop),
    Break(Break),
    Continue(Continue),
    Set(Set),
    MacroDecl(MacroDecl),
    CallBlock(CallBlock),
    FilterBlock(FilterBlock),
    StatementList(StatementList),
}
