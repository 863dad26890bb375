//! Higher-order transforms: predicate filtering and mapping.
//!
//! Predicates and mappers are marker types; their per-element
//! behavior is supplied as `Predicate`/`Mapper` impls, blanketed
//! over symbols where convenient.

use tola_list::prelude::*;
use tola_list::{filter, is_set, len, list_eq, map_list, tlist};

#[derive(Symbol)]
struct A;
#[derive(Symbol)]
struct B;
#[derive(Symbol)]
struct C;
#[derive(Symbol)]
struct Unit;

type L0 = tlist![];
type L1 = tlist![A, B, C];

// =============================================================================
// Filter: drop every occurrence of B
// =============================================================================

struct DropB;

impl<S> Predicate<S> for DropB
where
    S: SymbolEq<B>,
    <S as SymbolEq<B>>::Out: BoolNot,
{
    type Out = <<S as SymbolEq<B>>::Out as BoolNot>::Out;
}

const _: () = assert!(list_eq!(filter![DropB, L1], tlist![A, C]));
const _: () = assert!(list_eq!(filter![DropB, L0], tlist![]));

// Order-stable, duplicate-preserving
const _: () = assert!(list_eq!(filter![DropB, tlist![B, A, B, A]], tlist![A, A]));

// Idempotent under re-application
const _: () = assert!(list_eq!(filter![DropB, filter![DropB, L1]], filter![DropB, L1]));

// =============================================================================
// Map: collapse every symbol to Unit
// =============================================================================

struct ToUnit;

impl<S: Symbol> Mapper<S> for ToUnit {
    type Out = Unit;
}

const _: () = assert!(list_eq!(map_list![ToUnit, L1], tlist![Unit, Unit, Unit]));
const _: () = assert!(list_eq!(map_list![ToUnit, L0], tlist![]));

// Same length, but no longer a set
const _: () = assert!(len!(map_list![ToUnit, L1]) == len!(L1));
const _: () = assert!(!is_set!(map_list![ToUnit, L1]));

// =============================================================================
// Map: swap A and B, leave the rest alone
// =============================================================================

struct SwapAB;

impl Mapper<A> for SwapAB {
    type Out = B;
}
impl Mapper<B> for SwapAB {
    type Out = A;
}
impl Mapper<C> for SwapAB {
    type Out = C;
}

const _: () = assert!(list_eq!(map_list![SwapAB, L1], tlist![B, A, C]));

#[test]
fn filter_and_map_compose() {
    // Mapping after filtering: [A, C] -> [Unit, Unit]
    type Mapped = map_list![ToUnit, filter![DropB, L1]];
    assert_eq!(len!(Mapped), 2);
    assert!(list_eq!(Mapped, tlist![Unit, Unit]));
}
