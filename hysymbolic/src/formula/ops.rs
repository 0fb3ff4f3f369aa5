//! Operator sugar for formulas.
//!
//! The `define_ops_formula!` macro implements `BitAnd`, `BitOr`, and `Not` on the given
//! formula-like type, so you can write `p & q`, `p | q`, and `!p`. Every operator goes through
//! the canonicalizing constructors of [`crate::formula::func`].
use crate::formula::{Formula, func};

macro_rules! define_ops_formula {
    ($name:ty) => {
        impl<_O1: Into<Formula>> std::ops::BitAnd<_O1> for $name {
            type Output = Formula;

            fn bitand(self, rhs: _O1) -> Self::Output {
                func::and(self, rhs)
            }
        }

        impl<_O1: Into<Formula>> std::ops::BitOr<_O1> for $name {
            type Output = Formula;

            fn bitor(self, rhs: _O1) -> Self::Output {
                func::or(self, rhs)
            }
        }

        impl std::ops::Not for $name {
            type Output = Formula;

            fn not(self) -> Self::Output {
                func::not(self)
            }
        }
    };
}

define_ops_formula!(Formula);
define_ops_formula!(&Formula);
