/// Hash mixing helpers shared by variables, expressions and formulas.
pub mod hash;
