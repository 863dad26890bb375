//! Cross-list index mapping.
//!
//! `injection::<From, To>()` produces the one runtime artifact of the
//! algebra: a `[usize; LEN(From)]` table where slot `i` holds the
//! position of `From`'s `i`-th element inside `To`. It translates
//! between two numberings of an overlapping symbol set (a subsystem's
//! compact index space onto a host's full one). The table is plain
//! immutable data owned by the caller.
//!
//! Preconditions, enforced as bounds: `From` is a `Set` and a
//! `SubsetOf<To>`. Table types are generated up to length 32.

use super::node::{Cons, List, Nil};
use super::query::Find;
use super::set::{Set, SubsetOf};
use crate::primitives::stream::Peano;

// =============================================================================
// Peano length -> concrete table type
// =============================================================================

/// Maps a type-level length to its injection table type `[usize; k]`.
/// Implementation detail of [`injection`].
#[doc(hidden)]
pub trait TableLen: Peano {
    type Table: AsRef<[usize]> + AsMut<[usize]> + Copy + Eq + core::fmt::Debug + 'static;
    const ZEROED: Self::Table;
}

// Generate impls D0 -> [usize; 0] .. D32 -> [usize; 32]
macros::table_len!(32);

// =============================================================================
// Table filling
// =============================================================================

/// Writes each element's position in `To` into consecutive slots.
/// Implementation detail of [`injection`], which is the only caller
/// and always supplies a slice of exactly the list's length.
#[doc(hidden)]
pub trait FillTable<To: List>: List {
    fn fill(table: &mut [usize]);
}

impl<To: List> FillTable<To> for Nil {
    fn fill(_: &mut [usize]) {}
}

impl<H, T, To> FillTable<To> for Cons<H, T>
where
    H: 'static,
    T: List + FillTable<To>,
    To: List + Find<H>,
{
    fn fill(table: &mut [usize]) {
        table[0] = <To as Find<H>>::INDEX;
        T::fill(&mut table[1..]);
    }
}

// =============================================================================
// Entry point
// =============================================================================

/// Build the index table translating `From` positions into `To`
/// positions. `injection::<L, L>()` is the identity permutation.
pub fn injection<From, To>() -> <From::Len as TableLen>::Table
where
    From: List + Set + SubsetOf<To> + FillTable<To>,
    To: List,
    From::Len: TableLen,
{
    let mut table = <From::Len as TableLen>::ZEROED;
    From::fill(table.as_mut());
    table
}
