use proc_macro2::TokenStream;
use quote::quote;
use syn::Error;

/// `#[inline]` in debug builds so stepping stays usable, `#[inline(always)]` otherwise.
pub fn expand_forced_inline(args: TokenStream, item: TokenStream) -> TokenStream {
    if !args.is_empty() {
        return Error::new_spanned(args, "forced_inline takes no arguments").to_compile_error();
    }

    quote! {
        #[cfg_attr(debug_assertions, inline)]
        #[cfg_attr(not(debug_assertions), inline(always))]
        #item
    }
}
