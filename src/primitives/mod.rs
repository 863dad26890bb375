//! # Layer 0: Primitives
//!
//! Basic building blocks for the list algebra:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).
//! - `nibble.rs`: Type-level 4-bit values (X0-XF).
//! - `stream.rs`: Identity streams and Peano numbers.
//! - `const_utils.rs`: Const hashing for derive-time identities.

pub mod bool;
pub mod const_utils;
pub mod nibble;
pub mod stream;

// Re-export key types at this level
pub use bool::{Absent, Bool, BoolAnd, BoolNot, BoolOr, Present};
pub use nibble::{Nibble, NibbleEq, X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF};
pub use stream::{Cons, ConstStream, IdStream, Peano, PeanoEq, S, StreamEq, Z};
