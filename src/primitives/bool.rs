//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: If<Then, Else> (General Type Selector)
    type If<Then, Else>;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;
}

/// Type-level True.
#[derive(Debug)]
pub struct Present;

/// Type-level False.
#[derive(Debug)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;

    type And<Other: Bool> = Other;
    type Or<Other: Bool> = Present;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;

    type And<Other: Bool> = Absent;
    type Or<Other: Bool> = Other;
}

/// Type-level NOT.
pub trait BoolNot: Bool {
    type Out: Bool;
}

impl BoolNot for Present {
    type Out = Absent;
}

impl BoolNot for Absent {
    type Out = Present;
}

/// Binary AND as a standalone trait, for use in bound position.
pub trait BoolAnd<Other: Bool>: Bool {
    type Out: Bool;
}

impl<A: Bool, B: Bool> BoolAnd<B> for A {
    type Out = A::And<B>;
}

/// Binary OR as a standalone trait, for use in bound position.
pub trait BoolOr<Other: Bool>: Bool {
    type Out: Bool;
}

impl<A: Bool, B: Bool> BoolOr<B> for A {
    type Out = A::Or<B>;
}
