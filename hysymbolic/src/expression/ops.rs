//! Operator sugar for arithmetic terms.
//!
//! The `define_ops_expression!` macro implements a binary operator on [`Expression`],
//! [`Variable`] (and references to both) for any right operand convertible into an
//! [`Expression`], plus the mirrored impls with an `f64` literal on the left.
use crate::{
    expression::{Expression, ExpressionCell},
    variable::Variable,
};

macro_rules! define_ops_expression {
    (@literal $op:ident, $method:ident, $cell:ident, $rhs:ident) => {
        impl std::ops::$op<$rhs> for f64 {
            type Output = Expression;

            fn $method(self, rhs: $rhs) -> Self::Output {
                Expression::binary(ExpressionCell::$cell, self.into(), rhs.into())
            }
        }

        impl<'a> std::ops::$op<&'a $rhs> for f64 {
            type Output = Expression;

            fn $method(self, rhs: &'a $rhs) -> Self::Output {
                Expression::binary(ExpressionCell::$cell, self.into(), rhs.into())
            }
        }
    };
    ($op:ident, $method:ident, $cell:ident) => {
        impl<_O1: Into<Expression>> std::ops::$op<_O1> for Expression {
            type Output = Expression;

            fn $method(self, rhs: _O1) -> Self::Output {
                Expression::binary(ExpressionCell::$cell, self, rhs.into())
            }
        }

        impl<_O1: Into<Expression>> std::ops::$op<_O1> for &Expression {
            type Output = Expression;

            fn $method(self, rhs: _O1) -> Self::Output {
                Expression::binary(ExpressionCell::$cell, self.clone(), rhs.into())
            }
        }

        impl<_O1: Into<Expression>> std::ops::$op<_O1> for Variable {
            type Output = Expression;

            fn $method(self, rhs: _O1) -> Self::Output {
                Expression::binary(ExpressionCell::$cell, self.into(), rhs.into())
            }
        }

        impl<_O1: Into<Expression>> std::ops::$op<_O1> for &Variable {
            type Output = Expression;

            fn $method(self, rhs: _O1) -> Self::Output {
                Expression::binary(ExpressionCell::$cell, self.into(), rhs.into())
            }
        }

        define_ops_expression!(@literal $op, $method, $cell, Expression);
        define_ops_expression!(@literal $op, $method, $cell, Variable);
    };
}

define_ops_expression!(Add, add, Add);
define_ops_expression!(Sub, sub, Sub);
define_ops_expression!(Mul, mul, Mul);
define_ops_expression!(Div, div, Div);

impl std::ops::Neg for Expression {
    type Output = Expression;

    fn neg(self) -> Self::Output {
        Expression::unary(ExpressionCell::Neg, self)
    }
}

impl std::ops::Neg for &Expression {
    type Output = Expression;

    fn neg(self) -> Self::Output {
        Expression::unary(ExpressionCell::Neg, self.clone())
    }
}

impl std::ops::Neg for Variable {
    type Output = Expression;

    fn neg(self) -> Self::Output {
        Expression::unary(ExpressionCell::Neg, self.into())
    }
}

impl std::ops::Neg for &Variable {
    type Output = Expression;

    fn neg(self) -> Self::Output {
        Expression::unary(ExpressionCell::Neg, self.into())
    }
}
