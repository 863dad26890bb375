//! Injection index tables: for `From ⊆ To`, `injection::<From, To>()`
//! yields one `To`-index per `From` element, in `From` order.

use tola_list::injection;
use tola_list::prelude::*;
use tola_list::tlist;

#[derive(Symbol)]
struct A;
#[derive(Symbol)]
struct B;
#[derive(Symbol)]
struct C;
#[derive(Symbol)]
struct D;

type Full = tlist![A, B, C, D];

#[test]
fn empty_from_yields_empty_table() {
    let table: [usize; 0] = injection::<tlist![], Full>();
    assert!(table.is_empty());
}

#[test]
fn identity_injection() {
    assert_eq!(injection::<Full, Full>(), [0, 1, 2, 3]);
}

#[test]
fn singleton_injection() {
    assert_eq!(injection::<tlist![A], tlist![B, A, C]>(), [1]);
}

#[test]
fn order_follows_the_from_list() {
    assert_eq!(injection::<tlist![C, A], Full>(), [2, 0]);
    assert_eq!(injection::<tlist![D, B, A], Full>(), [3, 1, 0]);
}

#[test]
fn duplicates_in_to_resolve_to_leftmost() {
    assert_eq!(injection::<tlist![B], tlist![A, B, C, B]>(), [1]);
}

// Contract violations do not compile:
//   injection::<tlist![A, A], Full>();          // From is not a set
//   injection::<tlist![A, D], tlist![A, B]>();  // From is not a subset of To
