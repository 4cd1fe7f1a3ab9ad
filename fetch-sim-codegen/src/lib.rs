use proc_macro::TokenStream;
use quote::quote;
use quote::quote_spanned;
use syn::spanned::Spanned;

/// Turns `async fn name(sim: FetchSimulator) { .. }` into a `#[test]` that builds
/// the simulator from the given fixture function and runs the body on a
/// single-threaded tokio runtime.
///
/// ```ignore
/// #[simulated_fetch_test(products_table)]
/// async fn lists_products(sim: FetchSimulator) { .. }
/// ```
#[proc_macro_attribute]
pub fn simulated_fetch_test(attrs: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as syn::ItemFn);
    let args = syn::parse_macro_input!(attrs as syn::AttributeArgs);

    let attributes = &input.attrs;
    let visibility = &input.vis;
    let signature = &input.sig;
    let name = &signature.ident;
    let block = &input.block;

    if args.len() != 1 {
        return quote! {
            compile_error!("A fixture function returning a ResponseTable should be passed to the macro");
        }
        .into();
    }

    let fixture_function;
    if let syn::NestedMeta::Meta(syn::Meta::Path(function_path)) = &args[0] {
        fixture_function = function_path;
    } else {
        return quote! {
            compile_error!("The argument should be a fixture function!");
        }
        .into();
    }

    if signature.asyncness.is_none() {
        return quote_spanned! {signature.fn_token.span()=>
            compile_error!("The test function should be async!");
        }
        .into();
    }

    let simulator_argument = match validate_inputs(signature) {
        Ok(argument) => argument,
        Err(stream) => return stream.into(),
    };
    let simulator_pattern = &simulator_argument.pat;
    let simulator_type = &simulator_argument.ty;

    let output = quote! {
        #[test]
        #(#attributes)*
        #visibility fn #name() {
            ::fetch_sim::init_diagnostics();

            let __fetch_sim_table = #fixture_function();
            let #simulator_pattern: #simulator_type = ::fetch_sim::FetchSimulator::new(__fetch_sim_table);

            ::fetch_sim::__private::tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Couldn't build the fetch-sim test runtime")
                .block_on(async move #block)
        }
    };

    TokenStream::from(output)
}

fn validate_inputs(signature: &syn::Signature) -> Result<&syn::PatType, proc_macro2::TokenStream> {
    let mut inputs = signature.inputs.iter();

    match (inputs.next(), inputs.next()) {
        (Some(syn::FnArg::Typed(argument)), None) => Ok(argument),
        _ => Err(quote_spanned! {signature.inputs.span()=>
            compile_error!("The test function should take exactly one FetchSimulator argument!");
        }),
    }
}
