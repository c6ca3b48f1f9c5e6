//! Expression Types
//!
//! Core expression nodes and variants. Every node owns its children; the
//! only sharing in the tree is at function declarations (see `stmt.rs`).

use std::fmt;
use std::mem;

use super::operators::{BinaryOp, LogicalOp, UnaryOp};
use crate::{Name, Span};

/// Identity of an expression node within one parse.
///
/// Assigned sequentially by the parser, so parsing the same source twice
/// yields the same ids. The resolver keys its scope-distance table on these.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        ExprId(raw)
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub id: ExprId,
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(id: ExprId, kind: ExprKind, span: Span) -> Self {
        Expr { id, kind, span }
    }

    /// Take the node's kind, consuming the node.
    pub fn into_kind(mut self) -> ExprKind {
        mem::replace(&mut self.kind, ExprKind::This)
    }

    /// Move the direct children of this node into `out`, leaving a leaf.
    fn detach_children(&mut self, out: &mut Vec<Expr>) {
        if matches!(
            self.kind,
            ExprKind::Literal(_) | ExprKind::Variable(_) | ExprKind::This | ExprKind::Super { .. }
        ) {
            return;
        }
        match mem::replace(&mut self.kind, ExprKind::This) {
            ExprKind::Assign { value: child, .. }
            | ExprKind::Unary { operand: child, .. }
            | ExprKind::Get { object: child, .. }
            | ExprKind::Grouping(child) => out.push(*child),
            ExprKind::Binary { left, right, .. } | ExprKind::Logical { left, right, .. } => {
                out.push(*left);
                out.push(*right);
            }
            ExprKind::Set { object, value, .. } => {
                out.push(*object);
                out.push(*value);
            }
            ExprKind::Call { callee, args } => {
                out.push(*callee);
                out.extend(args);
            }
            ExprKind::Literal(_) | ExprKind::Variable(_) | ExprKind::This | ExprKind::Super { .. } => {}
        }
    }
}

/// Long operator chains nest one `Box` per operator. Freeing them through
/// drop glue would recurse that deep, so children are detached onto a
/// work-list first.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Literal values that can appear directly in source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Literal {
    /// Number literal, stored as `f64` bits.
    Number(u64),
    /// String literal (interned, no quotes).
    String(Name),
    Bool(bool),
    Nil,
}

impl Literal {
    #[inline]
    pub fn number(value: f64) -> Self {
        Literal::Number(value.to_bits())
    }
}

/// Expression variants.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// `42`, `"text"`, `true`, `nil`
    Literal(Literal),

    /// Variable reference: `name`
    Variable(Name),

    /// Variable assignment: `name = value`
    Assign { name: Name, value: Box<Expr> },

    /// `-x`, `!x`
    Unary { op: UnaryOp, operand: Box<Expr> },

    /// `left op right`
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// `left and right`, `left or right` (short-circuiting)
    Logical {
        op: LogicalOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// `callee(args...)`
    Call { callee: Box<Expr>, args: Vec<Expr> },

    /// Property read: `object.name`
    Get { object: Box<Expr>, name: Name },

    /// Property write: `object.name = value`
    Set {
        object: Box<Expr>,
        name: Name,
        value: Box<Expr>,
    },

    /// `this`
    This,

    /// `super.method`
    Super { method: Name },

    /// `(inner)`
    Grouping(Box<Expr>),
}
