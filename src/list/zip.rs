//! Positional combination ("prod").
//!
//! Despite the name this is NOT a cartesian product: it is an
//! equal-length positional zip. `prod!([a,b], [c,d])` is
//! `[[a,c], [b,d]]`, and a single argument wraps each element into a
//! singleton tuple. Unequal lengths have no impl and refuse to
//! compile.

use super::build::Concat;
use super::node::{Cons, List, Nil};

/// Wrap each element into a singleton list: `[a,b] -> [[a],[b]]`.
pub trait Listify: List {
    type Out: List;
}

impl Listify for Nil {
    type Out = Nil;
}

impl<H, T> Listify for Cons<H, T>
where
    H: 'static,
    T: List + Listify,
{
    type Out = Cons<Cons<H, Nil>, <T as Listify>::Out>;
}

/// Position-wise concatenation of two equal-length lists of lists:
/// tuple `j` of the result is `self[j] ++ other[j]`.
pub trait ZipConcat<Other: List>: List {
    type Out: List;
}

impl ZipConcat<Nil> for Nil {
    type Out = Nil;
}

impl<A, TA, B, TB> ZipConcat<Cons<B, TB>> for Cons<A, TA>
where
    A: List + Concat<B>,
    B: List,
    TA: List + ZipConcat<TB>,
    TB: List,
{
    type Out = Cons<<A as Concat<B>>::Out, <TA as ZipConcat<TB>>::Out>;
}
