//! Value-level enumeration of a list's symbols.
//!
//! The one escape hatch from the type level besides `injection`: walk
//! a list front to back and call a visitor once per element, so
//! runtime code can fold over a compile-time catalog (count it, build
//! a lookup structure, print it). The visitor sees each element as a
//! type parameter; nothing is instantiated.

use super::node::{Cons, List, Nil};
use crate::symbol::Symbol;

/// Per-element callback for [`ForEach::for_each`].
pub trait Visitor {
    fn visit<S: Symbol>(&mut self);
}

/// Per-element callback receiving the element's 0-based position.
pub trait IndexedVisitor {
    fn visit<S: Symbol>(&mut self, index: usize);
}

/// Front-to-back enumeration over a list of symbols.
pub trait ForEach: List {
    /// Call `visitor` once per element, in list order.
    fn for_each<V: Visitor>(visitor: &mut V);

    /// Like [`for_each`](Self::for_each), passing each element's
    /// position as well.
    fn for_each_indexed<V: IndexedVisitor>(visitor: &mut V) {
        Self::visit_from(visitor, 0);
    }

    #[doc(hidden)]
    fn visit_from<V: IndexedVisitor>(visitor: &mut V, index: usize);
}

impl ForEach for Nil {
    fn for_each<V: Visitor>(_: &mut V) {}

    fn visit_from<V: IndexedVisitor>(_: &mut V, _: usize) {}
}

impl<H, T> ForEach for Cons<H, T>
where
    H: Symbol,
    T: List + ForEach,
{
    fn for_each<V: Visitor>(visitor: &mut V) {
        visitor.visit::<H>();
        T::for_each(visitor);
    }

    fn visit_from<V: IndexedVisitor>(visitor: &mut V, index: usize) {
        visitor.visit::<H>(index);
        T::visit_from(visitor, index + 1);
    }
}
