//! Membership queries: emptiness, containment, leftmost position.

use super::eq::ItemEq;
use super::node::{Cons, List, Nil};
use crate::primitives::bool::{Absent, Bool, Present};
use crate::primitives::stream::{Peano, S, Z};

// =============================================================================
// IsEmpty
// =============================================================================

pub trait IsEmpty: List {
    type Out: Bool;
}

impl IsEmpty for Nil {
    type Out = Present;
}

impl<H: 'static, T: List> IsEmpty for Cons<H, T> {
    type Out = Absent;
}

// =============================================================================
// Contains
// =============================================================================

/// True iff `X` occurs at any position. Vacuously false on `Nil`.
pub trait Contains<X>: List {
    type Out: Bool;
}

impl<X> Contains<X> for Nil {
    type Out = Absent;
}

impl<X, H, T> Contains<X> for Cons<H, T>
where
    H: ItemEq<X> + 'static,
    T: List + Contains<X>,
{
    type Out = <<H as ItemEq<X>>::Out as Bool>::Or<<T as Contains<X>>::Out>;
}

// =============================================================================
// Find
// =============================================================================

/// Leftmost index of `X`.
///
/// There is no impl for an absent element: finding something a list
/// does not contain refuses to compile.
pub trait Find<X>: List {
    type Index: Peano;
    const INDEX: usize = <Self::Index as Peano>::VALUE;
}

impl<X, H, T> Find<X> for Cons<H, T>
where
    H: ItemEq<X> + 'static,
    T: List,
    <H as ItemEq<X>>::Out: FindDispatch<X, T>,
{
    type Index = <<H as ItemEq<X>>::Out as FindDispatch<X, T>>::Index;
}

/// Head matched: index is here. Head missed: recurse with an offset.
pub trait FindDispatch<X, Tail> {
    type Index: Peano;
}

impl<X, Tail> FindDispatch<X, Tail> for Present {
    type Index = Z;
}

impl<X, Tail> FindDispatch<X, Tail> for Absent
where
    Tail: Find<X>,
{
    type Index = S<<Tail as Find<X>>::Index>;
}
