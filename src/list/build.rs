//! Construction and combination: concat, push, flatten.

use super::node::{Cons, List, Nil};

/// Left-to-right concatenation. `Nil` is the identity on both sides
/// and the operation is associative; the n-ary form (including zero
/// arguments) is `concat_lists!`.
pub trait Concat<Other: List>: List {
    type Out: List;
}

impl<L: List> Concat<L> for Nil {
    type Out = L;
}

impl<H, T, L> Concat<L> for Cons<H, T>
where
    H: 'static,
    T: List + Concat<L>,
    L: List,
{
    type Out = Cons<H, <T as Concat<L>>::Out>;
}

/// Prepend one element, preserving existing order. Inverse of `Tail`.
pub trait PushFront<X>: List {
    type Out: List;
}

impl<X: 'static, L: List> PushFront<X> for L {
    type Out = Cons<X, L>;
}

/// Append one element, preserving existing order.
pub trait PushBack<X>: List {
    type Out: List;
}

impl<X: 'static> PushBack<X> for Nil {
    type Out = Cons<X, Nil>;
}

impl<X, H, T> PushBack<X> for Cons<H, T>
where
    X: 'static,
    H: 'static,
    T: List + PushBack<X>,
{
    type Out = Cons<H, <T as PushBack<X>>::Out>;
}

/// Concatenate the inner lists of a list of lists, in their given
/// order. Equivalent to n-ary concat over the elements.
pub trait Flatten: List {
    type Out: List;
}

impl Flatten for Nil {
    type Out = Nil;
}

impl<H, T> Flatten for Cons<H, T>
where
    T: List + Flatten,
    H: List + Concat<<T as Flatten>::Out>,
{
    type Out = <H as Concat<<T as Flatten>::Out>>::Out;
}
