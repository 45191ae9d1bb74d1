use proc_macro::TokenStream;
use quote::quote;
use syn::{
  parse::{Parse, ParseStream},
  ItemFn,
};

struct Args {
  level: proc_macro2::TokenStream,
}

impl Parse for Args {
  fn parse(input: ParseStream) -> syn::Result<Self> {
    if input.is_empty() {
      return Ok(Self {
        level: quote! { log::Level::Trace },
      });
    }

    let ident = input.parse::<syn::Ident>()?;
    let level = match ident.to_string().as_str() {
      "error" => quote! { log::Level::Error },
      "warn" => quote! { log::Level::Warn },
      "info" => quote! { log::Level::Info },
      "debug" => quote! { log::Level::Debug },
      "trace" => quote! { log::Level::Trace },
      other => {
        return Err(syn::Error::new(
          ident.span(),
          format!(
            "unknown log level `{}`, expected one of error, warn, info, debug, trace",
            other
          ),
        ))
      }
    };

    Ok(Self { level })
  }
}

/// Marks a test and installs `teamcity_logger` before the body runs.
///
/// `#[teamcity_test::test]` logs at trace, `#[teamcity_test::test(debug)]`
/// picks another level. The calling crate needs `log` and `teamcity-logger`
/// as dev-dependencies.
#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
  let item_fn = syn::parse_macro_input!(item as ItemFn);
  let args = syn::parse_macro_input!(attr as Args);

  if let Some(asyncness) = item_fn.sig.asyncness {
    return syn::Error::new_spanned(asyncness, "async tests are not supported")
      .to_compile_error()
      .into();
  }

  let attrs = item_fn.attrs;
  let test_name = item_fn.sig.ident;
  let output = item_fn.sig.output;
  let content = item_fn.block;
  let level = args.level;

  quote! {
    #[test]
    #(#attrs)*
    fn #test_name() #output {
      teamcity_logger::init_logger_with_level(#level);

      #content
    }
  }
  .into()
}
