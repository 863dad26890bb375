//! Batch symbol declaration sugar.

/// Declare symbol structs in one go, with a `Tag` constant per symbol.
///
/// ```ignore
/// define_symbols! {
///     pub Http,
///     pub Grpc,
///     WebSocket,
/// }
///
/// // Generates: struct Http + Symbol impl + `pub const HTTP_TAG: Tag<Http>`,
/// // and likewise GRPC_TAG, WEB_SOCKET_TAG.
/// assert!(HTTP_TAG == tag::<Http>());
/// ```
///
/// Identities hash `module_path!()`, so the same name in two modules
/// yields two distinct symbols.
#[macro_export]
macro_rules! define_symbols {
    ($($(#[$meta:meta])* $vis:vis $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            $vis struct $name;

            $crate::__impl_symbol!($name, stringify!($name));

            $crate::paste::paste! {
                $vis const [<$name:snake:upper _TAG>]: $crate::Tag<$name> =
                    $crate::tag::<$name>();
            }
        )*
    };
}
