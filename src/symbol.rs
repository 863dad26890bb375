//! # Layer 1: Symbol & Tag
//!
//! The identifier primitive of the algebra. A `Symbol` is an opaque
//! marker type standing for a program type; it carries no data and is
//! compared only by identity. Identity is the symbol's nibble stream,
//! not the Rust type itself: `#[derive(Symbol)]` hashes
//! `module_path!()::Name` so equal names in different modules stay
//! distinct.

use crate::primitives::bool::Bool;
use crate::primitives::stream::{DefaultMaxDepth, IdStream, StreamEq};
use core::marker::PhantomData;

/// Symbol Trait
///
/// Implemented by unit structs via `#[derive(Symbol)]` (or, for
/// tests, the manual `impl_symbol!` macro).
pub trait Symbol: 'static {
    /// Type-level nibble stream carrying this symbol's identity.
    /// Typically a 64-bit hash of the fully qualified name.
    type Id: IdStream;
}

/// Identity comparison between two symbols.
///
/// Two symbols are equal iff their identity streams agree for
/// `DefaultMaxDepth` nibbles (one full hash period).
pub trait SymbolEq<Other: Symbol>: Symbol {
    type Out: Bool;
}

impl<A, B> SymbolEq<B> for A
where
    A: Symbol,
    B: Symbol,
    A::Id: StreamEq<B::Id, DefaultMaxDepth>,
{
    type Out = <A::Id as StreamEq<B::Id, DefaultMaxDepth>>::Out;
}

// =============================================================================
// Tag - the singleton carrier value
// =============================================================================

/// Zero-sized carrier value for a single symbol.
///
/// Lets operations be spelled with an argument instead of a turbofish,
/// and gives symbols a value-level equality mirror: two tags compare
/// equal iff they carry the same symbol.
pub struct Tag<S: Symbol>(PhantomData<S>);

impl<S: Symbol> Tag<S> {
    pub const fn new() -> Self {
        Tag(PhantomData)
    }
}

/// Construct the tag for a symbol.
pub const fn tag<S: Symbol>() -> Tag<S> {
    Tag::new()
}

impl<S: Symbol> Default for Tag<S> {
    fn default() -> Self {
        Tag::new()
    }
}

impl<S: Symbol> Clone for Tag<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Symbol> Copy for Tag<S> {}

impl<S: Symbol> core::fmt::Debug for Tag<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Tag<")?;
        f.write_str(core::any::type_name::<S>())?;
        f.write_str(">")
    }
}

impl<A, B> PartialEq<Tag<B>> for Tag<A>
where
    A: Symbol + SymbolEq<B>,
    B: Symbol,
{
    fn eq(&self, _: &Tag<B>) -> bool {
        <A as SymbolEq<B>>::Out::VALUE
    }
}

impl<S: Symbol + SymbolEq<S>> Eq for Tag<S> {}

// -----------------------------------------------------------------------------
// Macros
// -----------------------------------------------------------------------------

/// Implement `Symbol` with an explicit identity stream (testing only).
///
/// Identity is the stream, so two types given the same stream are the
/// same symbol. `#[derive(Symbol)]` is the collision-free path.
#[macro_export]
macro_rules! impl_symbol {
    ($name:ty, $stream:ty) => {
        impl $crate::Symbol for $name {
            type Id = $stream;
        }

        impl<O: $crate::Symbol> $crate::list::ItemEq<O> for $name
        where
            $name: $crate::SymbolEq<O>,
        {
            type Out = <$name as $crate::SymbolEq<O>>::Out;
        }
    };
}
