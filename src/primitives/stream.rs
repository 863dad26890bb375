//! Identity streams and Peano numbers.
//!
//! A symbol's identity is an infinite nibble stream (in practice a
//! cyclic 16-nibble hash); equality is stream comparison up to a
//! fixed depth.

use super::nibble::Nibble;
use core::marker::PhantomData;

// =============================================================================
// Identity Stream trait
// =============================================================================

/// Infinite stream of nibbles via recursive type
pub trait IdStream: 'static {
    type Head: Nibble;
    type Tail: IdStream;
}

// =============================================================================
// Stream implementations
// =============================================================================

/// Constant stream: N, N, N, N, ...
pub struct ConstStream<N>(PhantomData<N>);

impl<N: Nibble + 'static> IdStream for ConstStream<N> {
    type Head = N;
    type Tail = ConstStream<N>;
}

/// Cons cell for explicit streams (manual symbol identities in tests)
pub struct Cons<H, T>(PhantomData<(H, T)>);

impl<H: Nibble + 'static, T: IdStream> IdStream for Cons<H, T> {
    type Head = H;
    type Tail = T;
}

// =============================================================================
// Peano Numbers
// =============================================================================

/// Peano number trait.
///
/// `VALUE` reflects the number as an ordinary const, so type-level
/// indices and lengths can be asserted in const contexts.
pub trait Peano: 'static {
    const VALUE: usize;
}

/// Zero (base case)
pub struct Z;
impl Peano for Z {
    const VALUE: usize = 0;
}

/// Successor (S<N> = N + 1)
pub struct S<N>(PhantomData<N>);
impl<N: Peano> Peano for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

// Generate D0..D64 using proc-macro
macros::peano!(64);

/// Default max depth for identity comparison (16 nibbles = 64 bits)
pub type DefaultMaxDepth = D16;

// =============================================================================
// Peano comparison
// =============================================================================

use super::bool::{Absent, Bool, Present};

/// Type-level Peano equality
pub trait PeanoEq<Other: Peano>: Peano {
    type Out: Bool;
}

impl PeanoEq<Z> for Z {
    type Out = Present;
}

impl<N: Peano> PeanoEq<S<N>> for Z {
    type Out = Absent;
}

impl<N: Peano> PeanoEq<Z> for S<N> {
    type Out = Absent;
}

impl<A, B> PeanoEq<S<B>> for S<A>
where
    A: Peano + PeanoEq<B>,
    B: Peano,
{
    type Out = <A as PeanoEq<B>>::Out;
}

// =============================================================================
// Stream comparison
// =============================================================================

/// Compare two identity streams up to a depth limit
pub trait StreamEq<Other: IdStream, Limit> {
    type Out: Bool;
}

impl<A: IdStream, B: IdStream> StreamEq<B, Z> for A {
    type Out = Present;
}

impl<A, B, L> StreamEq<B, S<L>> for A
where
    A: IdStream,
    B: IdStream,
    A::Head: super::nibble::NibbleEq<B::Head>,
    <A::Head as super::nibble::NibbleEq<B::Head>>::Out: StreamEqDispatch<A::Tail, B::Tail, L>,
{
    type Out =
        <<A::Head as super::nibble::NibbleEq<B::Head>>::Out as StreamEqDispatch<A::Tail, B::Tail, L>>::Out;
}

pub trait StreamEqDispatch<TailA, TailB, Limit> {
    type Out: Bool;
}

impl<TailA, TailB, L> StreamEqDispatch<TailA, TailB, L> for Absent {
    type Out = Absent;
}

impl<TailA, TailB, L> StreamEqDispatch<TailA, TailB, L> for Present
where
    TailA: IdStream + StreamEq<TailB, L>,
    TailB: IdStream,
{
    type Out = <TailA as StreamEq<TailB, L>>::Out;
}

// =============================================================================
// Const-to-Stream conversion (Stable Rust approach)
// =============================================================================

use super::nibble::{X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF};

/// Trait to select nibble type from const value
pub trait SelectNibble<const N: u8> {
    type Out: Nibble;
}

macro_rules! impl_select_nibble {
    ($($val:literal => $nib:ident),* $(,)?) => {
        $(
            impl SelectNibble<$val> for () {
                type Out = $nib;
            }
        )*
    };
}

impl_select_nibble!(
    0 => X0, 1 => X1, 2 => X2, 3 => X3,
    4 => X4, 5 => X5, 6 => X6, 7 => X7,
    8 => X8, 9 => X9, 10 => XA, 11 => XB,
    12 => XC, 13 => XD, 14 => XE, 15 => XF,
);

/// Build an identity stream from 16 const nibble values (a 64-bit hash).
/// The stream cycles, so comparison at `DefaultMaxDepth` covers one
/// full period.
pub struct HashStream16<
    const N0: u8, const N1: u8, const N2: u8, const N3: u8,
    const N4: u8, const N5: u8, const N6: u8, const N7: u8,
    const N8: u8, const N9: u8, const N10: u8, const N11: u8,
    const N12: u8, const N13: u8, const N14: u8, const N15: u8,
>(PhantomData<()>);

impl<
    const N0: u8, const N1: u8, const N2: u8, const N3: u8,
    const N4: u8, const N5: u8, const N6: u8, const N7: u8,
    const N8: u8, const N9: u8, const N10: u8, const N11: u8,
    const N12: u8, const N13: u8, const N14: u8, const N15: u8,
> IdStream for HashStream16<N0, N1, N2, N3, N4, N5, N6, N7, N8, N9, N10, N11, N12, N13, N14, N15>
where
    (): SelectNibble<N0> + SelectNibble<N1> + SelectNibble<N2> + SelectNibble<N3>
      + SelectNibble<N4> + SelectNibble<N5> + SelectNibble<N6> + SelectNibble<N7>
      + SelectNibble<N8> + SelectNibble<N9> + SelectNibble<N10> + SelectNibble<N11>
      + SelectNibble<N12> + SelectNibble<N13> + SelectNibble<N14> + SelectNibble<N15>,
{
    type Head = <() as SelectNibble<N0>>::Out;
    type Tail = HashStream16<N1, N2, N3, N4, N5, N6, N7, N8, N9, N10, N11, N12, N13, N14, N15, N0>;
}
