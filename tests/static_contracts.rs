//! Contract violations are build failures.
//!
//! Every precondition of the algebra is a trait bound; breaking one
//! means a missing impl, so the offending code never compiles. Each
//! section shows the passing form next to the (commented-out)
//! violating form. Uncomment a line to watch it fail.

use tola_list::prelude::*;
use tola_list::{at, find, head, injection, prod, tail, take, tlist};

#[derive(Symbol)]
struct A;
#[derive(Symbol)]
struct B;
#[derive(Symbol)]
struct C;

type Empty = tlist![];
type Two = tlist![A, B];

// =============================================================================
// Access on the empty list
// =============================================================================

#[allow(dead_code)]
type FirstOk = head![Two]; // A
// type FirstBad = head![Empty];          // error: Nil: Head not satisfied

#[allow(dead_code)]
type RestOk = tail![Two]; // [B]
// type RestBad = tail![Empty];           // error: Nil: Tail not satisfied

// =============================================================================
// Index and prefix out of range
// =============================================================================

#[allow(dead_code)]
type AtOk = at![D1, Two]; // B
// type AtBad = at![D2, Two];             // error: index past the end

#[allow(dead_code)]
type TakeOk = take![D2, Two]; // [A, B]
// type TakeBad = take![D3, Two];         // error: prefix longer than list

// =============================================================================
// Find on an absent symbol
// =============================================================================

const _: () = assert!(find!(Two, B) == 1);
// const _: () = assert!(find!(Two, C) == 0);  // error: C not in the list

// =============================================================================
// Zip over unequal lengths
// =============================================================================

#[allow(dead_code)]
type ZipOk = prod![Two, tlist![B, C]];
// type ZipBad = prod![Two, tlist![C]];   // error: no tuple for the orphan

// =============================================================================
// Injection preconditions
// =============================================================================

#[test]
fn injection_accepts_a_set_subset() {
    assert_eq!(injection::<tlist![B], Two>(), [1]);

    // injection::<tlist![A, A], Two>();      // error: From is not a set
    // injection::<tlist![A, C], Two>();      // error: From is not a subset
}

#[test]
fn empty_is_still_a_valid_source() {
    let table = injection::<Empty, Two>();
    assert!(table.as_ref().is_empty());
}
