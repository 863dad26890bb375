//! Type-level nibble system (4-bit values X0-XF).
//!
//! Nibbles are the alphabet of symbol identity streams: a symbol's
//! 64-bit name hash is spelled as 16 nibbles.

use super::bool::{Absent, Bool, Present};

// =============================================================================
// Nibble iteration macros
// =============================================================================

/// Iterate over all 16 nibbles (X0..XF).
#[macro_export]
macro_rules! for_each_nibble {
    ($mac:ident) => {
        $mac!(X0); $mac!(X1); $mac!(X2); $mac!(X3);
        $mac!(X4); $mac!(X5); $mac!(X6); $mac!(X7);
        $mac!(X8); $mac!(X9); $mac!(XA); $mac!(XB);
        $mac!(XC); $mac!(XD); $mac!(XE); $mac!(XF);
    };
}

/// Generate impls for all distinct pairs (A, B) and (B, A) where A != B.
#[macro_export]
macro_rules! for_distinct_pairs {
    ($mac:ident) => {
        $crate::for_distinct_pairs!(@recurse $mac, [X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF]);
    };
    (@recurse $mac:ident, [$head:ident, $($tail:ident),*]) => {
        $(
            $mac!($head, $tail);
            $mac!($tail, $head);
        )*
        $crate::for_distinct_pairs!(@recurse $mac, [$($tail),*]);
    };
    (@recurse $mac:ident, [$last:ident]) => {};
}

// =============================================================================
// Nibble trait and types
// =============================================================================

/// Type-level nibble (4-bit value, 0..15)
pub trait Nibble: 'static {}

// Define structs X0..XF and implement Nibble
macro_rules! define_nibble {
    ($n:ident) => {
        pub struct $n;
        impl Nibble for $n {}
    };
}
for_each_nibble!(define_nibble);

// =============================================================================
// Nibble equality
// =============================================================================

/// Type-level nibble equality
pub trait NibbleEq<Other: Nibble>: Nibble {
    type Out: Bool;
}

// Self-equality: X == X → Present
macro_rules! impl_eq_self {
    ($($n:ident),*) => { $(impl NibbleEq<$n> for $n { type Out = Present; })* };
}
impl_eq_self!(X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF);

// Cross-inequality: X != Y → Absent
macro_rules! impl_neq { ($a:ident, $b:ident) => { impl NibbleEq<$b> for $a { type Out = Absent; } }; }
for_distinct_pairs!(impl_neq);
