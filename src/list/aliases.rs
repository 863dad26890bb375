//! Convenience aliases and macros for list construction and the
//! algebra's operations.
//!
//! Type-position macros (`tlist!`, `concat_lists!`, `unique!`, ...)
//! expand to operation-trait projections; expression macros
//! (`contains!`, `find!`, `len!`, ...) expand to consts and are
//! usable inside `const _: () = assert!(...)` for build-time checks.

use super::node::{Cons, Nil};

// =============================================================================
// Convenience Type Aliases
// =============================================================================

/// Empty list
pub type List0 = Nil;

/// List with 1 element
pub type List1<A> = Cons<A, Nil>;

/// List with 2 elements
pub type List2<A, B> = Cons<A, List1<B>>;

/// List with 3 elements
pub type List3<A, B, C> = Cons<A, List2<B, C>>;

/// List with 4 elements
pub type List4<A, B, C, D> = Cons<A, List3<B, C, D>>;

// =============================================================================
// Construction macros
// =============================================================================

/// Build a list type from element types.
/// Usage: `tlist![A, B, C]` (elements may themselves be lists)
#[macro_export]
macro_rules! tlist {
    () => { $crate::list::Nil };
    ($head:ty $(, $rest:ty)* $(,)?) => {
        $crate::list::Cons<$head, $crate::tlist![$($rest),*]>
    };
}

/// n-ary left-to-right concatenation; `concat_lists![]` is the empty
/// list.
#[macro_export]
macro_rules! concat_lists {
    () => { $crate::list::Nil };
    ($a:ty) => { $a };
    ($a:ty, $($rest:ty),+ $(,)?) => {
        <$a as $crate::list::Concat<$crate::concat_lists![$($rest),+]>>::Out
    };
}

/// Prepend an element: `push_front![L, X]`
#[macro_export]
macro_rules! push_front {
    ($list:ty, $x:ty) => {
        <$list as $crate::list::PushFront<$x>>::Out
    };
}

/// Append an element: `push_back![L, X]`
#[macro_export]
macro_rules! push_back {
    ($list:ty, $x:ty) => {
        <$list as $crate::list::PushBack<$x>>::Out
    };
}

/// Flatten a list of lists: `flatten![LL]`
#[macro_export]
macro_rules! flatten {
    ($list:ty) => {
        <$list as $crate::list::Flatten>::Out
    };
}

// =============================================================================
// Access macros
// =============================================================================

/// First element: `head![L]`
#[macro_export]
macro_rules! head {
    ($list:ty) => {
        <$list as $crate::list::Head>::Out
    };
}

/// All but the first element: `tail![L]`
#[macro_export]
macro_rules! tail {
    ($list:ty) => {
        <$list as $crate::list::Tail>::Out
    };
}

/// Element at a Peano index: `at![D1, L]`
#[macro_export]
macro_rules! at {
    ($idx:ty, $list:ty) => {
        <$list as $crate::list::At<$idx>>::Out
    };
}

/// Prefix of a Peano length: `take![D2, L]`
#[macro_export]
macro_rules! take {
    ($n:ty, $list:ty) => {
        <$list as $crate::list::Take<$n>>::Out
    };
}

// =============================================================================
// Transform macros
// =============================================================================

/// Keep elements satisfying a predicate capability: `filter![P, L]`
#[macro_export]
macro_rules! filter {
    ($pred:ty, $list:ty) => {
        <$list as $crate::list::Filter<$pred>>::Out
    };
}

/// Map every element through a mapper capability: `map_list![M, L]`
#[macro_export]
macro_rules! map_list {
    ($mapper:ty, $list:ty) => {
        <$list as $crate::list::Map<$mapper>>::Out
    };
}

// =============================================================================
// Set algebra macros
// =============================================================================

/// De-duplicate, first occurrence wins: `unique![L]`
#[macro_export]
macro_rules! unique {
    ($list:ty) => {
        <$list as $crate::list::Unique>::Out
    };
}

/// n-ary intersection; keeps the first list's order and duplicates.
#[macro_export]
macro_rules! intersect {
    ($a:ty) => { $a };
    ($a:ty, $b:ty) => {
        <$a as $crate::list::Intersect<$b>>::Out
    };
    ($a:ty, $b:ty, $($rest:ty),+ $(,)?) => {
        $crate::intersect![$crate::intersect![$a, $b], $($rest),+]
    };
}

/// n-ary union: de-duplicated concatenation, first occurrence wins.
#[macro_export]
macro_rules! unite {
    ($($list:ty),* $(,)?) => {
        <$crate::concat_lists![$($list),*] as $crate::list::Unique>::Out
    };
}

/// Remove all elements also occurring in the second list:
/// `subtract![From, What]`
#[macro_export]
macro_rules! subtract {
    ($from:ty, $what:ty) => {
        <$from as $crate::list::Subtract<$what>>::Out
    };
}

/// All sub-lists: `powerset![L]`
#[macro_export]
macro_rules! powerset {
    ($list:ty) => {
        <$list as $crate::list::Powerset>::Out
    };
}

/// Positional zip ("prod"): tuple `j` concatenates the `j`-th element
/// of every argument; one argument wraps elements into singletons.
/// All arguments must have equal length.
#[macro_export]
macro_rules! prod {
    ($a:ty) => {
        <$a as $crate::list::Listify>::Out
    };
    ($a:ty, $($rest:ty),+ $(,)?) => {
        <<$a as $crate::list::Listify>::Out as $crate::list::ZipConcat<$crate::prod![$($rest),+]>>::Out
    };
}

// =============================================================================
// Expression macros (const-capable queries)
// =============================================================================

/// Element count as a const: `len!(L)`
#[macro_export]
macro_rules! len {
    ($list:ty) => {
        <$list as $crate::list::List>::LEN
    };
}

/// Emptiness as a const bool: `is_empty!(L)`
#[macro_export]
macro_rules! is_empty {
    ($list:ty) => {
        <<$list as $crate::list::IsEmpty>::Out as $crate::primitives::bool::Bool>::VALUE
    };
}

/// Membership as a const bool: `contains!(L, X)`
#[macro_export]
macro_rules! contains {
    ($list:ty, $x:ty) => {
        <<$list as $crate::list::Contains<$x>>::Out as $crate::primitives::bool::Bool>::VALUE
    };
}

/// Leftmost index as a const: `find!(L, X)`. Absent elements do not
/// compile.
#[macro_export]
macro_rules! find {
    ($list:ty, $x:ty) => {
        <$list as $crate::list::Find<$x>>::INDEX
    };
}

/// Structural equality as a const bool: `list_eq!(A, B)`
#[macro_export]
macro_rules! list_eq {
    ($a:ty, $b:ty) => {
        <<$a as $crate::list::ItemEq<$b>>::Out as $crate::primitives::bool::Bool>::VALUE
    };
}

/// Identity comparison of two symbols as a const bool: `sym_eq!(A, B)`
#[macro_export]
macro_rules! sym_eq {
    ($a:ty, $b:ty) => {
        <<$a as $crate::SymbolEq<$b>>::Out as $crate::primitives::bool::Bool>::VALUE
    };
}

/// Set refinement as a const bool: `is_set!(L)`
#[macro_export]
macro_rules! is_set {
    ($list:ty) => {
        <<$list as $crate::list::IsSet>::Out as $crate::primitives::bool::Bool>::VALUE
    };
}

/// Subset relation as a const bool: `is_subset!(Sub, Super)`
#[macro_export]
macro_rules! is_subset {
    ($sub:ty, $super:ty) => {
        <<$sub as $crate::list::IsSubset<$super>>::Out as $crate::primitives::bool::Bool>::VALUE
    };
}
