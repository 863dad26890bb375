//! # Layer 1: List Core
//!
//! The ordered, fixed-length collection type and its algebra.
//!
//! - **Cells**: `Nil` / `Cons` (structure), `ItemEq` (equality).
//! - **Queries**: `Contains`, `Find`, `IsEmpty`.
//! - **Access**: `Head`, `Tail`, `At`, `Take`.
//! - **Construction**: `Concat`, `PushFront`, `PushBack`, `Flatten`.
//! - **Transforms**: `Filter`/`Predicate`, `Map`/`Mapper`.
//! - **Set algebra**: `Unique`, `IsSet`, `Intersect`, `Unite`,
//!   `Subtract`, `IsSubset`, `Powerset`.
//! - **Zip & injection**: `Listify`/`ZipConcat`, `injection`.
//! - **Enumeration**: `ForEach` with `Visitor`/`IndexedVisitor`.
//!
//! Everything is immutable: every operation names a fresh list type.

pub mod access;
pub mod aliases;
pub mod build;
pub mod eq;
pub mod injection;
pub mod node;
pub mod query;
pub mod set;
pub mod transform;
pub mod visit;
pub mod zip;

// Re-export key types at list level
pub use access::{At, Head, Tail, Take};
pub use aliases::{List0, List1, List2, List3, List4};
pub use build::{Concat, Flatten, PushBack, PushFront};
pub use eq::ItemEq;
pub use injection::injection;
pub use node::{Cons, ConsIf, List, Nil};
pub use query::{Contains, Find, FindDispatch, IsEmpty};
pub use set::{
    DistribCons, Intersect, IsSet, IsSubset, Powerset, Set, SubsetOf, Subtract, SupersetOf, Unique,
    Unite,
};
pub use transform::{Filter, Map, Mapper, Predicate};
pub use visit::{ForEach, IndexedVisitor, Visitor};
pub use zip::{Listify, ZipConcat};
