use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::DeriveInput;

/// #[derive(Symbol)] generates a call to the declarative macro bridge.
/// This allows module_path!() to be expanded before the proc-macro processes it.
///
/// The three-layer architecture:
/// 1. #[derive(Symbol)] (proc-macro) -> generates __impl_symbol! call
/// 2. __impl_symbol! (decl-macro) -> passes concat!() to proc-macro
/// 3. make_id_stream! (proc-macro) -> receives expanded string
pub fn expand_derive_symbol(input: DeriveInput) -> TokenStream2 {
    let ident = &input.ident;
    let ident_str = ident.to_string();

    // The concat!(module_path!(), ...) is expanded BEFORE make_id_stream! runs.
    quote! {
        ::tola_list::__impl_symbol!(#ident, #ident_str);
    }
}

// Logic for make_id_stream! macro
pub fn expand_make_id_stream(input: TokenStream2) -> TokenStream2 {
    // 1. Try to parse as string literal first (direct case)
    if let Ok(lit) = syn::parse2::<syn::LitStr>(input.clone()) {
        let s = lit.value();
        let hash = fnv1a_64(&s);

        let nibbles: Vec<u8> = (0..16).map(|i| ((hash >> (i * 4)) & 0xF) as u8).collect();

        return quote! {
            ::tola_list::primitives::stream::HashStream16<
                #(#nibbles),*
            >
        };
    }

    // 2. If not a string literal, it's likely concat!(module_path!(), ...).
    //    Defer the hash to const evaluation so the concat! can expand first.
    let slots = (0..16u8).map(|n| {
        quote! { { ::tola_list::primitives::const_utils::hash_nibble(#input, #n) } }
    });

    quote! {
        ::tola_list::primitives::stream::HashStream16<
            #(#slots),*
        >
    }
}

// Must match primitives::const_utils::fnv1a_64_str exactly, or the
// literal and concat! expansion paths would disagree on identities.
fn fnv1a_64(s: &str) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for b in s.as_bytes() {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
