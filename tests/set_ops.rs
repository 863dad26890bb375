//! Set algebra: unique, set refinement, intersection, union,
//! subtraction, subset relations, powerset.

use tola_list::prelude::*;
use tola_list::{
    contains, intersect, is_set, is_subset, len, list_eq, powerset, subtract, tlist, unique, unite,
};

#[derive(Symbol)]
struct A;
#[derive(Symbol)]
struct B;
#[derive(Symbol)]
struct C;
#[derive(Symbol)]
struct D;

type L0 = tlist![];
type L1 = tlist![A, B, C];

// =============================================================================
// Unique (first occurrence wins)
// =============================================================================

const _: () = assert!(list_eq!(unique![L0], L0));
const _: () = assert!(list_eq!(unique![L1], L1));
const _: () = assert!(list_eq!(unique![tlist![A, A, B, C, C]], tlist![A, B, C]));
const _: () = assert!(list_eq!(unique![tlist![A, A, A, A]], tlist![A]));

// First-occurrence relative order is kept
const _: () = assert!(list_eq!(unique![tlist![A, B, A]], tlist![A, B]));
const _: () = assert!(list_eq!(unique![tlist![B, A, B, C, A]], tlist![B, A, C]));

// =============================================================================
// Set refinement: size(C) == size(unique(C)) <=> isASet(C)
// =============================================================================

const _: () = assert!(is_set!(L0));
const _: () = assert!(is_set!(L1));
const _: () = assert!(!is_set!(tlist![A, A]));
const _: () = assert!(!is_set!(tlist![A, B, A]));

const _: () = assert!((len!(L1) == len!(unique![L1])) == is_set!(L1));
const _: () =
    assert!((len!(tlist![A, A]) == len!(unique![tlist![A, A]])) == is_set!(tlist![A, A]));

// =============================================================================
// Intersect (preserves first list's order and duplicates)
// =============================================================================

const _: () = assert!(list_eq!(intersect![L0, L0], L0));
const _: () = assert!(list_eq!(intersect![L1, L1], L1));
const _: () = assert!(list_eq!(intersect![L1, L0], L0));
const _: () = assert!(list_eq!(intersect![L0, L1], L0));
const _: () = assert!(list_eq!(intersect![tlist![A, B, C], tlist![A, C, D]], tlist![A, C]));
const _: () = assert!(list_eq!(intersect![tlist![A], tlist![B]], tlist![]));

// n == 1 returns the list unchanged
const _: () = assert!(list_eq!(intersect![L1], L1));

// n-ary: elements of the first list present in every other
const _: () = assert!(list_eq!(intersect![tlist![A], tlist![A], tlist![B]], tlist![]));
const _: () = assert!(list_eq!(
    intersect![tlist![A, C], tlist![B, A], tlist![A, D]],
    tlist![A]
));

// =============================================================================
// Unite (dedup concat, first occurrence wins)
// =============================================================================

const _: () = assert!(list_eq!(unite![L0, tlist![A]], tlist![A]));
const _: () = assert!(list_eq!(unite![tlist![], tlist![A], tlist![C, A]], tlist![A, C]));
const _: () = assert!(list_eq!(unite![L1, L1], L1));
const _: () = assert!(list_eq!(unite![], tlist![]));

// =============================================================================
// Subtract (preserves first list's order and duplicates)
// =============================================================================

const _: () = assert!(list_eq!(subtract![L0, L0], L0));
const _: () = assert!(list_eq!(subtract![L1, L0], L1));
const _: () = assert!(list_eq!(subtract![L0, L1], L0));
const _: () = assert!(list_eq!(subtract![L1, L1], L0));
const _: () = assert!(list_eq!(subtract![tlist![A], tlist![B]], tlist![A]));
const _: () = assert!(list_eq!(subtract![tlist![A], tlist![A]], tlist![]));
const _: () = assert!(list_eq!(subtract![tlist![A, B], tlist![A]], tlist![B]));
const _: () = assert!(list_eq!(subtract![tlist![A, B], tlist![B]], tlist![A]));
const _: () = assert!(list_eq!(subtract![tlist![A, B, A], tlist![B]], tlist![A, A]));

// =============================================================================
// Subset relations (set semantics: order and duplicates irrelevant)
// =============================================================================

const _: () = assert!(is_subset!(L0, L1));
const _: () = assert!(!is_subset!(L1, L0));
const _: () = assert!(is_subset!(tlist![A, B], tlist![C, B, D, A]));
const _: () = assert!(is_subset!(tlist![A, A, B], tlist![B, A]));
const _: () = assert!(!is_subset!(tlist![A, D], tlist![A, B, C]));

// =============================================================================
// Powerset: left-inclusive first, then exclusive; 2^n entries
// =============================================================================

const _: () = assert!(list_eq!(powerset![L0], tlist![tlist![]]));
const _: () = assert!(list_eq!(powerset![tlist![A]], tlist![tlist![A], tlist![]]));
const _: () = assert!(list_eq!(
    powerset![tlist![A, B]],
    tlist![tlist![A, B], tlist![A], tlist![B], tlist![]]
));

// Cardinality 2^n, no duplicate subsets, every entry a subset
const _: () = assert!(len!(powerset![L1]) == 8);
const _: () = assert!(is_set!(powerset![L1]));
const _: () = assert!(contains!(powerset![L1], tlist![A, C]));
const _: () = assert!(contains!(powerset![L1], tlist![]));
const _: () = assert!(!contains!(powerset![L1], tlist![C, A]));

#[test]
fn powerset_entries_are_subsets() {
    // Spot-check the full 3-symbol enumeration order
    assert!(list_eq!(
        powerset![L1],
        tlist![
            tlist![A, B, C],
            tlist![A, B],
            tlist![A, C],
            tlist![A],
            tlist![B, C],
            tlist![B],
            tlist![C],
            tlist![]
        ]
    ));
}
