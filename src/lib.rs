#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::crate_in_macro_def)]

//! # tola-list
//!
//! **Type-level list algebra for Rust.**
//!
//! A closed algebra over ordered collections of compile-time symbols
//! (opaque marker types standing for program types). Every operation
//! is evaluated by the trait system; nothing exists at runtime unless
//! explicitly materialized (the injection index table).
//!
//! ## Architecture
//!
//! ### 1. Identity
//! A **64-bit FNV-1a Hash** of the symbol's fully qualified name
//! (`module_path!()::Name`) spelled as a cyclic 16-nibble stream:
//!
//! ```text
//! Type Name -> FNV Hash (u64) -> Nibble Stream -> StreamEq (bounded)
//! ```
//!
//! Two symbols are the same symbol iff their streams agree for one
//! full period. Same-named types in different modules stay distinct.
//!
//! ### 2. Lists
//! Collections are cons cells (`Cons<H, T>` / `Nil`); operations are
//! traits with a `type Out` result, recursion expressed as impls over
//! the cell shapes. Precondition violations (head of empty, index out
//! of range, unequal-length zip, non-subset injection) are missing
//! impls: they fail the build, never a running program.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (Present/Absent), Nibble (X0-XF), IdStream, Peano         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Symbol & List Core                                      |
//! |  - Symbol, Tag, SymbolEq (identity)                               |
//! |  - Nil/Cons, ItemEq, access, concat, filter/map, set algebra,     |
//! |    powerset, zip, injection, visitors                             |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: User API                                                |
//! |  - #[derive(Symbol)], define_symbols!, tlist! and friends,        |
//! |    const-capable query macros (contains!, find!, list_eq!, ...)   |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use tola_list::prelude::*;
//!
//! #[derive(Symbol)]
//! struct CanRead;
//!
//! #[derive(Symbol)]
//! struct CanWrite;
//!
//! #[derive(Symbol)]
//! struct CanAdmin;
//!
//! type Host = tlist![CanRead, CanWrite, CanAdmin];
//! type Plugin = tlist![CanWrite, CanRead];
//!
//! // Validate at build time that the plugin needs nothing the host
//! // lacks.
//! const _: () = assert!(is_subset!(Plugin, Host));
//!
//! // Translate the plugin's compact numbering into the host's.
//! let table = injection::<Plugin, Host>();
//! assert_eq!(table, [1, 0]);
//! ```

// Allow `::tola_list` to work inside the crate itself
extern crate self as tola_list;

// Re-export paste for define_symbols!
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Symbol & List Core
// =============================================================================
pub mod symbol;

pub mod list;

// Syntax macros (define_symbols!)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::bool::{Absent, Bool, BoolAnd, BoolNot, BoolOr, Present};
pub use primitives::nibble::{Nibble, NibbleEq};
pub use primitives::stream::{
    D0, D1, D2, D3, D4, D5, D6, D7, D8, D16, D32, DefaultMaxDepth, HashStream16, IdStream, Peano,
    PeanoEq, S, StreamEq, Z,
};
pub use symbol::{Symbol, SymbolEq, Tag, tag};

pub use list::*;

// Re-export proc-macros
pub use macros::{Symbol, make_id_stream};

// =============================================================================
// Declarative Macro Bridge for #[derive(Symbol)]
// =============================================================================
//
// Three-layer macro architecture to get module_path!() into proc-macros:
// 1. #[derive(Symbol)] (proc-macro) generates __impl_symbol! call
// 2. __impl_symbol! (this decl-macro) expands concat!(module_path!(), ...)
// 3. make_id_stream! (proc-macro) receives string literal

/// Internal macro bridge - DO NOT USE DIRECTLY.
/// Use #[derive(Symbol)] instead.
#[macro_export]
#[doc(hidden)]
macro_rules! __impl_symbol {
    ($ty:ty, $name:expr) => {
        impl $crate::Symbol for $ty {
            // Identity: hash-based nibble stream of the full path
            type Id = $crate::make_id_stream!(concat!(module_path!(), "::", $name));
        }

        impl<O: $crate::Symbol> $crate::list::ItemEq<O> for $ty
        where
            $ty: $crate::SymbolEq<O>,
        {
            type Out = <$ty as $crate::SymbolEq<O>>::Out;
        }
    };
}

/// Common items for the list algebra.
pub mod prelude {
    pub use crate::list::{
        At, Concat, Contains, Filter, Find, Flatten, ForEach, Head, IndexedVisitor, Intersect,
        IsEmpty, IsSet, IsSubset, ItemEq, List, Map, Mapper, Powerset, Predicate, PushBack,
        PushFront, Set, SubsetOf, SupersetOf, Subtract, Tail, Take, Unique, Unite, Visitor,
        injection,
    };
    pub use crate::list::{Cons, Nil};
    pub use crate::primitives::bool::{Absent, Bool, BoolNot, Present};
    pub use crate::primitives::stream::{D0, D1, D2, D3, D4, S, Z};
    pub use crate::symbol::{Symbol, SymbolEq, Tag, tag};
    pub use macros::Symbol;
    // Note: tlist!, contains!, find!, ... are #[macro_export] so they're at crate root
}
