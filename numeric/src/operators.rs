//! Operator registry shared by the scanner and the postfix converter

use std::collections::HashMap;

/// Prefix marking the unary form of `+` and `-` in postfix streams
pub const UNARY_PREFIX: &str = "u";

/// Implied addition joining a unit to the literal after it (`3ft 6in`).
/// Binds tighter than every other operator and cannot be typed.
pub const JOIN: &str = "j+";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Multiply,
    Divide,
    Add,
    Subtract,
    /// Implied addition inside a compound length
    Join,
    UnaryPlus,
    UnaryMinus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator {
    pub kind: OperatorKind,
    pub precedence: u8,
    /// Number of operands: 1 or 2
    pub arity: u8,
}

impl Operator {
    pub const fn binary(kind: OperatorKind, precedence: u8) -> Self {
        Self {
            kind,
            precedence,
            arity: 2,
        }
    }

    pub const fn unary(kind: OperatorKind, precedence: u8) -> Self {
        Self {
            kind,
            precedence,
            arity: 1,
        }
    }

    pub fn is_unary(&self) -> bool {
        self.arity == 1
    }
}

/// Symbol→operator registry. Fixed for the lifetime of a compiler.
#[derive(Debug, Clone)]
pub struct OperatorTable {
    operators: HashMap<&'static str, Operator>,
}

impl Default for OperatorTable {
    fn default() -> Self {
        let mut operators = HashMap::new();

        operators.insert("*", Operator::binary(OperatorKind::Multiply, 3));
        operators.insert("/", Operator::binary(OperatorKind::Divide, 3));
        operators.insert("+", Operator::binary(OperatorKind::Add, 1));
        operators.insert("-", Operator::binary(OperatorKind::Subtract, 1));

        operators.insert("u+", Operator::unary(OperatorKind::UnaryPlus, 100));
        operators.insert("u-", Operator::unary(OperatorKind::UnaryMinus, 100));

        operators.insert(JOIN, Operator::binary(OperatorKind::Join, 200));

        Self { operators }
    }
}

impl OperatorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, symbol: &str) -> Option<Operator> {
        self.operators.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.operators.contains_key(symbol)
    }

    /// Whether some registered operator starts with `candidate`
    pub fn could_extend(&self, candidate: &str) -> bool {
        self.operators.keys().any(|symbol| symbol.starts_with(candidate))
    }

    /// Symbol of the unary form of `symbol`, if it has one
    pub fn unary_form(&self, symbol: &str) -> Option<String> {
        let unary = format!("{}{}", UNARY_PREFIX, symbol);
        self.contains(&unary).then_some(unary)
    }
}
