#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for declaration-level platform attributes.
//! Everything here is resolved at compile time: invalid arguments surface as
//! `compile_error!` spans on the offending token, never as runtime failures.
//!
//! ## Usage
//! Most consumers reach these through the `plinth` facade re-exports:
//! ```toml
//! [dependencies]
//! plinth = { path = "../crates/plinth" }
//! ```
//!
//! See each macro’s docstring for examples; they are `ignore`d to avoid compiling in this crate,
//! but the same snippets are exercised by the UI tests under `tests/ui`.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro constraining a type to an address that is a multiple of `N` bytes.
///
/// Expands to `#[repr(align(N))]` plus a compile-time check on the resulting
/// alignment for non-generic types.
///
/// # Errors
/// Emits a compile-time error when `N` is not a power of two in `1..=2^29`,
/// when the argument is missing, or when the type is also `repr(packed)`.
///
/// # Example
///
/// ```rust,ignore
/// use plinth_derive::align_to;
///
/// #[align_to(64)]
/// struct CacheLine {
///     counter: u64,
/// }
///
/// assert_eq!(std::mem::align_of::<CacheLine>(), 64);
/// ```
#[proc_macro_attribute]
pub fn align_to(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::layout::expand_align_to(args.into(), input).into()
}

/// Attribute macro removing padding from a struct.
///
/// `#[packed]` expands to `#[repr(C, packed)]` and `#[packed(N)]` to
/// `#[repr(C, packed(N))]`. Fields of a packed struct may be unaligned; copy
/// them out instead of taking references.
///
/// # Errors
/// Emits a compile-time error on enums and unions, or when `N` is not a valid alignment.
///
/// # Example
///
/// ```rust,ignore
/// use plinth_derive::packed;
///
/// #[packed]
/// struct WireHeader {
///     tag: u8,
///     length: u32,
/// }
///
/// assert_eq!(std::mem::size_of::<WireHeader>(), 5);
/// ```
#[proc_macro_attribute]
pub fn packed(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::layout::expand_packed(args.into(), input).into()
}

/// Marks an interface element as deprecated without changing its behaviour.
///
/// Accepts the same optional `since` and `note` arguments as `#[deprecated]`.
/// With the `silence-deprecations` feature enabled the item is emitted
/// unchanged, so no warnings are produced anywhere in the build.
///
/// # Example
///
/// ```rust,ignore
/// use plinth_derive::deprecated_api;
///
/// #[deprecated_api(since = "0.2.0", note = "use `checked_sum` instead")]
/// pub fn sum(values: &[u32]) -> u32 {
///     values.iter().sum()
/// }
/// ```
#[proc_macro_attribute]
pub fn deprecated_api(args: TokenStream, item: TokenStream) -> TokenStream {
    macros::deprecation::expand_deprecated_api(args.into(), item.into()).into()
}

/// Requests inlining that is forced in optimized builds only.
///
/// Debug builds get a plain `#[inline]` hint so functions stay steppable.
///
/// # Example
///
/// ```rust,ignore
/// use plinth_derive::forced_inline;
///
/// #[forced_inline]
/// fn lerp(a: f32, b: f32, t: f32) -> f32 {
///     a + (b - a) * t
/// }
/// ```
#[proc_macro_attribute]
pub fn forced_inline(args: TokenStream, item: TokenStream) -> TokenStream {
    macros::inline::expand_forced_inline(args.into(), item.into()).into()
}

/// A high-level attribute macro for defining domain-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Type Aliasing**: Creates a `Result<T>` alias bound to the enum.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a source field.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` if an
///   `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants.
/// 2. Variants with a `source` field must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use plinth_derive::plinth_error;
/// use std::borrow::Cow;
///
/// #[plinth_error]
/// pub enum SettingsError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn plinth_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_error(input).into()
}
