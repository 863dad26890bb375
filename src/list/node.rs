//! List cells: `Nil` and `Cons`.
//!
//! A list is an ordered, fixed-length sequence of elements encoded in
//! the type. Elements are usually symbols, but operations that build
//! lists of lists (powerset, prod) nest cells directly.

use crate::primitives::bool::{Absent, Present};
use crate::primitives::stream::{Peano, S, Z};
use core::marker::PhantomData;

/// Type-level list.
///
/// `Len` is the length as a Peano number (drives injection table
/// sizing); `LEN` reflects it as an ordinary const.
pub trait List: 'static {
    type Len: Peano;
    const LEN: usize;
}

/// The empty list.
pub struct Nil;

/// A list cell: head element `H`, tail list `T`.
pub struct Cons<H, T>(PhantomData<(H, T)>);

impl List for Nil {
    type Len = Z;
    const LEN: usize = 0;
}

impl<H: 'static, T: List> List for Cons<H, T> {
    type Len = S<T::Len>;
    const LEN: usize = 1 + T::LEN;
}

// =============================================================================
// Conditional cell construction
// =============================================================================

/// Prepend `H` to `Rest` when the implementing boolean is `Present`,
/// otherwise keep `Rest`. Shared dispatch for filter, intersect, and
/// subtract.
pub trait ConsIf<H, Rest: List> {
    type Out: List;
}

impl<H: 'static, Rest: List> ConsIf<H, Rest> for Present {
    type Out = Cons<H, Rest>;
}

impl<H, Rest: List> ConsIf<H, Rest> for Absent {
    type Out = Rest;
}
