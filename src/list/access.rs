//! Positional access: head, tail, arbitrary index, bounded prefix.
//!
//! None of these exist for out-of-range positions; calling them
//! outside their preconditions is a missing impl, caught at build
//! time.

use super::node::{Cons, List, Nil};
use crate::primitives::stream::{Peano, S, Z};

/// First element. **Precondition**: non-empty.
pub trait Head: List {
    type Out: 'static;
}

impl<H: 'static, T: List> Head for Cons<H, T> {
    type Out = H;
}

/// All but the first element, order preserved. **Precondition**: non-empty.
pub trait Tail: List {
    type Out: List;
}

impl<H: 'static, T: List> Tail for Cons<H, T> {
    type Out = T;
}

/// Element at 0-based position `I`. **Precondition**: `I < LEN`.
pub trait At<I: Peano>: List {
    type Out: 'static;
}

impl<H: 'static, T: List> At<Z> for Cons<H, T> {
    type Out = H;
}

impl<I, H, T> At<S<I>> for Cons<H, T>
where
    I: Peano,
    H: 'static,
    T: List + At<I>,
{
    type Out = <T as At<I>>::Out;
}

/// Ordered prefix of length `N`. **Precondition**: `N <= LEN`.
pub trait Take<N: Peano>: List {
    type Out: List;
}

impl<L: List> Take<Z> for L {
    type Out = Nil;
}

impl<N, H, T> Take<S<N>> for Cons<H, T>
where
    N: Peano,
    H: 'static,
    T: List + Take<N>,
{
    type Out = Cons<H, <T as Take<N>>::Out>;
}
