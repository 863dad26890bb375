//! Higher-order transforms: predicate filtering and per-element
//! mapping.
//!
//! Capabilities are marker types implementing [`Predicate`] or
//! [`Mapper`] over the list's elements. The capability is the `Self`
//! type so downstream crates can blanket their impls over all
//! symbols without tripping the orphan rule:
//!
//! ```ignore
//! struct DropFloat;
//!
//! impl<S> Predicate<S> for DropFloat
//! where
//!     S: SymbolEq<Floaty>,
//!     <S as SymbolEq<Floaty>>::Out: BoolNot,
//! {
//!     type Out = <<S as SymbolEq<Floaty>>::Out as BoolNot>::Out;
//! }
//! ```

use super::node::{Cons, ConsIf, List, Nil};
use crate::primitives::bool::Bool;

/// Per-element test supplied by a predicate capability.
pub trait Predicate<Elem> {
    type Out: Bool;
}

/// Per-element transform supplied by a mapper capability.
pub trait Mapper<Elem> {
    type Out: 'static;
}

// =============================================================================
// Filter
// =============================================================================

/// Elements satisfying `P`, in original relative order, duplicates
/// preserved. Linear scan, order-stable, idempotent.
pub trait Filter<P>: List {
    type Out: List;
}

impl<P> Filter<P> for Nil {
    type Out = Nil;
}

impl<P, H, T> Filter<P> for Cons<H, T>
where
    P: Predicate<H>,
    H: 'static,
    T: List + Filter<P>,
    <P as Predicate<H>>::Out: ConsIf<H, <T as Filter<P>>::Out>,
{
    type Out = <<P as Predicate<H>>::Out as ConsIf<H, <T as Filter<P>>::Out>>::Out;
}

// =============================================================================
// Map
// =============================================================================

/// Same-length list with every element replaced by `M`'s transform,
/// order preserved. The result may repeat even if the input was a
/// set.
pub trait Map<M>: List {
    type Out: List;
}

impl<M> Map<M> for Nil {
    type Out = Nil;
}

impl<M, H, T> Map<M> for Cons<H, T>
where
    M: Mapper<H>,
    H: 'static,
    T: List + Map<M>,
{
    type Out = Cons<<M as Mapper<H>>::Out, <T as Map<M>>::Out>;
}
