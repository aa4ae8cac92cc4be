//! Provides derive macros for decoding contract events.
use proc_macro::TokenStream;
use quote::quote;
use syn::{
	parse_macro_input,
	Data,
	DataStruct,
	DeriveInput,
	Fields,
};

/// Name of the field receiving the log metadata instead of an event parameter.
const METADATA_FIELD: &str = "meta";

/// Derive macro decoding a struct from a generic `Event`.
///
/// The event name is the struct name. Every field is read from the ABI parameter with the
/// camelCase version of its name, except `meta` which receives the log metadata.
#[proc_macro_derive(ContractEvent)]
pub fn contract_event(input: TokenStream) -> TokenStream {
	// Parse the input tokens into a syntax tree
	let input = parse_macro_input!(input as DeriveInput);
	let name = input.ident;
	let event_name = name.to_string();

	let fields = match input.data {
		Data::Struct(DataStruct { fields: Fields::Named(fields), .. }) => fields.named,
		_ =>
			return syn::Error::new_spanned(
				&name,
				"ContractEvent can only be derived for structs with named fields",
			)
			.to_compile_error()
			.into(),
	};

	let initializers = fields.iter().filter_map(|field| field.ident.as_ref()).map(|ident| {
		if ident == METADATA_FIELD {
			quote! { #ident: event.metadata() }
		} else {
			let param = to_camel_case(&ident.to_string());
			quote! { #ident: event.take(#param)? }
		}
	});

	let expanded = quote! {
		impl ContractEvent for #name {
			const NAME: &'static str = #event_name;

			fn from_event(mut event: Event) -> Result<Self, EventError> {
				Ok(Self {
					#(#initializers,)*
				})
			}
		}
	};

	TokenStream::from(expanded)
}

fn to_camel_case(snake: &str) -> String {
	let mut camel = String::with_capacity(snake.len());
	let mut upper_next = false;
	for c in snake.chars() {
		if c == '_' {
			upper_next = !camel.is_empty();
			continue
		}
		if upper_next {
			camel.extend(c.to_uppercase());
			upper_next = false;
		} else {
			camel.push(c);
		}
	}
	camel
}
