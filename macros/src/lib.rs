//! Procedural macros for the tola-list type-level list algebra
//!
//! | Macro | Purpose |
//! |-------|---------|
//! | `#[derive(Symbol)]` | Implement `Symbol` with a module-path-unique identity stream |
//! | `make_id_stream!` | Turn a name string into a `HashStream16` identity stream |
//! | `peano!` | Generate Peano index aliases `D0..Dn` |
//! | `table_len!` | Generate `TableLen` impls mapping `Dk -> [usize; k]` |

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (inner: codegen helpers / user: derive surface)
// =============================================================================

mod inner;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate Peano number type aliases D0..Dn.
///
/// # Usage
/// ```ignore
/// peano!(64);  // Generates D0 = Z, D1 = S<D0>, ..., D64 = S<D63>
/// ```
#[proc_macro]
pub fn peano(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::peano::PeanoInput);
    inner::peano::expand_peano(input).into()
}

/// Generate `TableLen` impls for D0..Dn, mapping each Peano length to
/// the concrete injection table type `[usize; k]`.
///
/// `TableLen` resolves in the invoking scope; the Peano aliases are
/// named by full crate path (crate-internal macro).
#[proc_macro]
pub fn table_len(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::peano::PeanoInput);
    inner::peano::expand_table_len(input).into()
}

/// Internal: Compute an identity hash stream from a full module path string.
/// Input is either a string literal or a `concat!(module_path!(), ...)`
/// invocation that expands to one.
#[proc_macro]
pub fn make_id_stream(input: TokenStream) -> TokenStream {
    user::symbol::expand_make_id_stream(input.into()).into()
}

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Derive macro to implement the `Symbol` trait.
///
/// Hashes `module_path!()::TypeName` (FNV-1a 64) into a 16-nibble
/// identity stream, so same-named symbols in different modules stay
/// distinct.
///
/// # Usage
/// ```ignore
/// #[derive(Symbol)]
/// struct Http;
///
/// #[derive(Symbol)]
/// struct Grpc;
///
/// type Protocols = tlist![Http, Grpc];
/// ```
#[proc_macro_derive(Symbol)]
pub fn derive_symbol(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::symbol::expand_derive_symbol(input).into()
}
