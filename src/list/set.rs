//! Set algebra over the set interpretation of a list: dedup, subset
//! relations, intersection, union, subtraction, powerset.
//!
//! Membership ignores order and duplicates; operations that return
//! lists document which side's order and duplicates survive.

use super::build::Concat;
use super::node::{Cons, ConsIf, List, Nil};
use super::query::Contains;
use crate::primitives::bool::{Bool, BoolNot, Present};
use crate::primitives::stream::PeanoEq;

// =============================================================================
// Unique / Set refinement
// =============================================================================

/// De-duplicated list, keeping each distinct element's
/// first-occurrence relative order: `[a,a,b,c,c] -> [a,b,c]`.
pub trait Unique: List {
    type Out: List;
}

impl Unique for Nil {
    type Out = Nil;
}

impl<H, T> Unique for Cons<H, T>
where
    H: 'static,
    T: List + Subtract<Cons<H, Nil>>,
    <T as Subtract<Cons<H, Nil>>>::Out: Unique,
{
    type Out = Cons<H, <<T as Subtract<Cons<H, Nil>>>::Out as Unique>::Out>;
}

/// A list is a set iff de-duplication does not shrink it.
pub trait IsSet: List {
    type Out: Bool;
}

impl<L> IsSet for L
where
    L: List + Unique,
    <L as Unique>::Out: List,
    L::Len: PeanoEq<<<L as Unique>::Out as List>::Len>,
{
    type Out = <L::Len as PeanoEq<<<L as Unique>::Out as List>::Len>>::Out;
}

/// Marker for duplicate-free lists, usable in bound position.
pub trait Set: List {}

impl<L> Set for L where L: List + IsSet<Out = Present> {}

// =============================================================================
// Intersect / Unite / Subtract
// =============================================================================

/// Elements of `Self` that also occur in `Other`; preserves `Self`'s
/// order and duplicates. Chain for the n-ary form (`intersect!`).
pub trait Intersect<Other: List>: List {
    type Out: List;
}

impl<O: List> Intersect<O> for Nil {
    type Out = Nil;
}

impl<O, H, T> Intersect<O> for Cons<H, T>
where
    O: List + Contains<H>,
    H: 'static,
    T: List + Intersect<O>,
    <O as Contains<H>>::Out: ConsIf<H, <T as Intersect<O>>::Out>,
{
    type Out = <<O as Contains<H>>::Out as ConsIf<H, <T as Intersect<O>>::Out>>::Out;
}

/// De-duplicated concatenation, keeping first-occurrence order across
/// the full concatenation. The n-ary form is `unite!`.
pub trait Unite<Other: List>: List {
    type Out: List;
}

impl<A, B> Unite<B> for A
where
    A: List + Concat<B>,
    B: List,
    <A as Concat<B>>::Out: Unique,
{
    type Out = <<A as Concat<B>>::Out as Unique>::Out;
}

/// Elements of `Self` not occurring in `What`; preserves `Self`'s
/// order and duplicates.
pub trait Subtract<What: List>: List {
    type Out: List;
}

impl<W: List> Subtract<W> for Nil {
    type Out = Nil;
}

impl<W, H, T> Subtract<W> for Cons<H, T>
where
    W: List + Contains<H>,
    H: 'static,
    T: List + Subtract<W>,
    <W as Contains<H>>::Out: BoolNot,
    <<W as Contains<H>>::Out as BoolNot>::Out: ConsIf<H, <T as Subtract<W>>::Out>,
{
    type Out = <<<W as Contains<H>>::Out as BoolNot>::Out as ConsIf<H, <T as Subtract<W>>::Out>>::Out;
}

// =============================================================================
// Subset relations
// =============================================================================

/// True iff every element of `Self` occurs in `Super` (set
/// semantics; `Self`'s duplicates and order are irrelevant).
pub trait IsSubset<Super: List>: List {
    type Out: Bool;
}

impl<Super: List> IsSubset<Super> for Nil {
    type Out = Present;
}

impl<Super, H, T> IsSubset<Super> for Cons<H, T>
where
    Super: List + Contains<H>,
    H: 'static,
    T: List + IsSubset<Super>,
{
    type Out = <<Super as Contains<H>>::Out as Bool>::And<<T as IsSubset<Super>>::Out>;
}

/// SubsetOf: every element of `Self` occurs in `Super`.
/// Used as a bound, e.g. by `injection`.
pub trait SubsetOf<Super: List>: List {}

impl<Sub, Super> SubsetOf<Super> for Sub
where
    Sub: List + IsSubset<Super, Out = Present>,
    Super: List,
{
}

/// SupersetOf: `Self` contains every element of `Sub`.
pub trait SupersetOf<Sub: List>: List {}

impl<Super, Sub> SupersetOf<Sub> for Super
where
    Super: List,
    Sub: List + IsSubset<Super, Out = Present>,
{
}

// =============================================================================
// Powerset
// =============================================================================

/// All `2^LEN` sub-lists. For `[x] ++ rest`: every subset containing
/// `x` (in the order produced by recursing on `rest`), then every
/// subset not containing `x`; `powerset([]) = [[]]`.
pub trait Powerset: List {
    type Out: List;
}

impl Powerset for Nil {
    type Out = Cons<Nil, Nil>;
}

impl<H, T> Powerset for Cons<H, T>
where
    H: 'static,
    T: List + Powerset,
    <T as Powerset>::Out: DistribCons<H>,
    <<T as Powerset>::Out as DistribCons<H>>::Out: Concat<<T as Powerset>::Out>,
{
    type Out = <<<T as Powerset>::Out as DistribCons<H>>::Out as Concat<<T as Powerset>::Out>>::Out;
}

/// Prepend `X` to every inner list of a list of lists.
pub trait DistribCons<X>: List {
    type Out: List;
}

impl<X> DistribCons<X> for Nil {
    type Out = Nil;
}

impl<X, H, T> DistribCons<X> for Cons<H, T>
where
    X: 'static,
    H: List,
    T: List + DistribCons<X>,
{
    type Out = Cons<Cons<X, H>, <T as DistribCons<X>>::Out>;
}
