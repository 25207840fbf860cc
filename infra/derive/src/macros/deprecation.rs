use proc_macro2::TokenStream;
use quote::quote;
use syn::LitStr;
use syn::parse::Parser;

/// Prefixes the item with `#[deprecated(..)]`, or returns it untouched when
/// deprecation warnings are silenced for the build.
pub fn expand_deprecated_api(args: TokenStream, item: TokenStream) -> TokenStream {
    let mut since: Option<LitStr> = None;
    let mut note: Option<LitStr> = None;

    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("since") {
            since = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("note") {
            note = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported deprecated_api argument, expected `since` or `note`"))
        }
    });
    if let Err(err) = parser.parse2(args) {
        return err.to_compile_error();
    }

    if cfg!(feature = "silence-deprecations") {
        return item;
    }

    let fields: Vec<TokenStream> = [
        since.map(|since| quote! { since = #since }),
        note.map(|note| quote! { note = #note }),
    ]
    .into_iter()
    .flatten()
    .collect();

    if fields.is_empty() {
        quote! {
            #[deprecated]
            #item
        }
    } else {
        quote! {
            #[deprecated(#(#fields),*)]
            #item
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(args: TokenStream) -> String {
        let item = quote! { pub fn legacy() -> u8 { 1 } };
        expand_deprecated_api(args, item).to_string()
    }

    #[test]
    fn annotation_follows_feature() {
        let expanded = expand(quote! { since = "0.2.0", note = "use `modern`" });
        let annotated = expanded.contains("deprecated");

        assert_eq!(annotated, !cfg!(feature = "silence-deprecations"), "{expanded}");
        assert!(expanded.contains("fn legacy"));
    }

    #[test]
    fn arguments_are_forwarded() {
        let expanded = expand(quote! { since = "0.2.0", note = "use `modern`" });
        if !cfg!(feature = "silence-deprecations") {
            assert!(expanded.contains("since = \"0.2.0\""), "{expanded}");
            assert!(expanded.contains("note = \"use `modern`\""), "{expanded}");
        }
    }

    #[test]
    fn unknown_argument_is_rejected_even_when_silenced() {
        let expanded = expand(quote! { reason = "x" });
        assert!(expanded.contains("compile_error"), "{expanded}");
    }
}
