use plinth_domain::Alignment;
use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::{Data, DeriveInput, Error, LitInt};

/// Expands `#[align_to(N)]` into `#[repr(align(N))]`, rejecting invalid `N` at compile time.
pub fn expand_align_to(args: TokenStream, input: DeriveInput) -> TokenStream {
    let alignment = match parse_alignment(args, "align_to") {
        Ok(Some(alignment)) => alignment,
        Ok(None) => {
            return Error::new_spanned(&input.ident, "align_to requires a byte count, e.g. #[align_to(16)]")
                .to_compile_error();
        }
        Err(err) => return err,
    };

    if has_packed_repr(&input) {
        return Error::new_spanned(&input.ident, "align_to cannot be combined with repr(packed)")
            .to_compile_error();
    }

    let bytes = Literal::usize_unsuffixed(alignment.get());
    // Generic types cannot be named without parameters in a const item.
    let check = input.generics.params.is_empty().then(|| {
        let name = &input.ident;
        quote! {
            const _: () = assert!(::core::mem::align_of::<#name>() >= #bytes);
        }
    });

    quote! {
        #[repr(align(#bytes))]
        #input
        #check
    }
}

/// Expands `#[packed]` / `#[packed(N)]` into `#[repr(C, packed)]` / `#[repr(C, packed(N))]`.
pub fn expand_packed(args: TokenStream, input: DeriveInput) -> TokenStream {
    if !matches!(input.data, Data::Struct(_)) {
        return Error::new_spanned(&input.ident, "packed can only be applied to structs")
            .to_compile_error();
    }

    match parse_alignment(args, "packed") {
        Ok(None) => quote! {
            #[repr(C, packed)]
            #input
        },
        Ok(Some(alignment)) => {
            let bytes = Literal::usize_unsuffixed(alignment.get());
            quote! {
                #[repr(C, packed(#bytes))]
                #input
            }
        }
        Err(err) => err,
    }
}

fn parse_alignment(args: TokenStream, macro_name: &str) -> Result<Option<Alignment>, TokenStream> {
    if args.is_empty() {
        return Ok(None);
    }

    let lit: LitInt = syn::parse2(args).map_err(|err| err.to_compile_error())?;
    let bytes: usize = lit.base10_parse().map_err(|err| err.to_compile_error())?;

    Alignment::new(bytes).map(Some).ok_or_else(|| {
        Error::new_spanned(
            &lit,
            format!(
                "{macro_name} requires a power of two between 1 and {}, got {bytes}",
                Alignment::MAX
            ),
        )
        .to_compile_error()
    })
}

fn has_packed_repr(input: &DeriveInput) -> bool {
    input.attrs.iter().filter(|attr| attr.path().is_ident("repr")).any(|attr| {
        let mut packed = false;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("packed") {
                packed = true;
            }
            // Skip `align(N)` / `packed(N)` payloads.
            if meta.input.peek(syn::token::Paren) {
                let content;
                syn::parenthesized!(content in meta.input);
                let _: TokenStream = content.parse()?;
            }
            Ok(())
        });
        packed
    })
}
