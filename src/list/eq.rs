//! Structural equality over list elements.
//!
//! `ItemEq` is the one equality the whole algebra is built on. Symbols
//! get an impl from `#[derive(Symbol)]` (identity stream comparison);
//! lists get the structural impls below, so lists of lists compare
//! element-wise. Two lists are equal iff same length and equal element
//! at every position; differing shapes compare `Absent`, never fail.

use super::node::{Cons, List, Nil};
use crate::primitives::bool::{Absent, Bool, Present};

/// Generalized element equality supporting nested list comparison.
///
/// Equality is total within a kind: any two symbols compare, and any
/// two lists compare. Across kinds there is deliberately no impl;
/// asking whether a symbol equals a list is a category error and
/// refuses to compile, rather than evaluating to `Absent`.
pub trait ItemEq<Other> {
    type Out: Bool;
}

impl ItemEq<Nil> for Nil {
    type Out = Present;
}

impl<H: 'static, T: List> ItemEq<Cons<H, T>> for Nil {
    type Out = Absent;
}

impl<H: 'static, T: List> ItemEq<Nil> for Cons<H, T> {
    type Out = Absent;
}

impl<H1, T1, H2, T2> ItemEq<Cons<H2, T2>> for Cons<H1, T1>
where
    H1: ItemEq<H2>,
    T1: ItemEq<T2>,
{
    type Out = <<H1 as ItemEq<H2>>::Out as Bool>::And<<T1 as ItemEq<T2>>::Out>;
}
