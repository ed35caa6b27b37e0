//! Relocatable expression trees.
//!
//! Expressions are immutable values compared structurally; the assembly
//! printer renders them with [`std::fmt::Display`] and the object writer
//! lowers them to relocations.

use std::fmt;

use crate::symbol::{Symbol, SymbolRefKind};

/// Binary operator in an expression tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
}

impl BinaryOp {
    fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
        }
    }
}

/// An assembler expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// An absolute integer.
    Constant(i64),
    /// A reference to a symbol with an optional relocation modifier.
    SymbolRef { symbol: Symbol, kind: SymbolRefKind },
    /// `lhs op rhs`.
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    pub fn constant(value: i64) -> Self {
        Expr::Constant(value)
    }

    pub fn symbol_ref(symbol: Symbol, kind: SymbolRefKind) -> Self {
        Expr::SymbolRef { symbol, kind }
    }

    pub fn add(lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op: BinaryOp::Add,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn sub(lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op: BinaryOp::Sub,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Fold the expression to an integer if it references no symbols.
    pub fn evaluate_constant(&self) -> Option<i64> {
        match self {
            Expr::Constant(v) => Some(*v),
            Expr::SymbolRef { .. } => None,
            Expr::Binary { op, lhs, rhs } => {
                let l = lhs.evaluate_constant()?;
                let r = rhs.evaluate_constant()?;
                match op {
                    BinaryOp::Add => l.checked_add(r),
                    BinaryOp::Sub => l.checked_sub(r),
                }
            }
        }
    }

    /// All symbols referenced anywhere in the tree, left to right.
    pub fn referenced_symbols(&self) -> Vec<&Symbol> {
        let mut out = Vec::new();
        self.collect_symbols(&mut out);
        out
    }

    fn collect_symbols<'a>(&'a self, out: &mut Vec<&'a Symbol>) {
        match self {
            Expr::Constant(_) => {}
            Expr::SymbolRef { symbol, .. } => out.push(symbol),
            Expr::Binary { lhs, rhs, .. } => {
                lhs.collect_symbols(out);
                rhs.collect_symbols(out);
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(v) => write!(f, "{v}"),
            Expr::SymbolRef { symbol, kind } => write!(f, "{symbol}{}", kind.suffix()),
            Expr::Binary { op, lhs, rhs } => {
                // Negative constants on the right print as `a-4`, not `a+-4`.
                match (op, rhs.as_ref()) {
                    (BinaryOp::Add, Expr::Constant(v)) if *v < 0 => {
                        write!(f, "{lhs}-{}", v.unsigned_abs())
                    }
                    (_, Expr::Binary { .. }) => write!(f, "{lhs}{}({rhs})", op.symbol()),
                    _ => write!(f, "{lhs}{}{rhs}", op.symbol()),
                }
            }
        }
    }
}
