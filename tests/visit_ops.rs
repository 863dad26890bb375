//! Value-level enumeration: walking a compile-time list at runtime
//! with per-element visitors.

use tola_list::prelude::*;
use tola_list::{len, tlist};

#[derive(Symbol)]
struct A;
#[derive(Symbol)]
struct B;
#[derive(Symbol)]
struct C;

type L0 = tlist![];
type L1 = tlist![A, B, C];

// =============================================================================
// ForEach: one visit per element
// =============================================================================

struct CountSymbols {
    count: usize,
}

impl Visitor for CountSymbols {
    fn visit<S: Symbol>(&mut self) {
        self.count += 1;
    }
}

fn count_symbols<L: ForEach>() -> usize {
    let mut counter = CountSymbols { count: 0 };
    L::for_each(&mut counter);
    counter.count
}

#[test]
fn visits_every_element_once() {
    assert_eq!(count_symbols::<L0>(), 0);
    assert_eq!(count_symbols::<L1>(), 3);
    assert_eq!(count_symbols::<tlist![A, A, B]>(), 3);
    assert_eq!(count_symbols::<L1>(), len!(L1));
}

// =============================================================================
// ForEach: list order, observed by name
// =============================================================================

struct CollectNames {
    names: Vec<&'static str>,
}

impl Visitor for CollectNames {
    fn visit<S: Symbol>(&mut self) {
        self.names.push(core::any::type_name::<S>());
    }
}

#[test]
fn visits_in_list_order() {
    let mut collector = CollectNames { names: Vec::new() };
    <L1 as ForEach>::for_each(&mut collector);
    assert_eq!(
        collector.names,
        [
            core::any::type_name::<A>(),
            core::any::type_name::<B>(),
            core::any::type_name::<C>(),
        ]
    );
}

// =============================================================================
// Indexed variant
// =============================================================================

struct CollectIndexes {
    seen: Vec<usize>,
}

impl IndexedVisitor for CollectIndexes {
    fn visit<S: Symbol>(&mut self, index: usize) {
        self.seen.push(index);
    }
}

#[test]
fn indexed_visits_count_up_from_zero() {
    let mut collector = CollectIndexes { seen: Vec::new() };
    <L1 as ForEach>::for_each_indexed(&mut collector);
    assert_eq!(collector.seen, [0, 1, 2]);

    let mut empty = CollectIndexes { seen: Vec::new() };
    <L0 as ForEach>::for_each_indexed(&mut empty);
    assert!(empty.seen.is_empty());
}
