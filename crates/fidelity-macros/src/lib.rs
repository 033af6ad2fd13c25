use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields, Lit, Meta};

/// Derive macro for score records. All fields in the source struct must be `f64`.
///
/// Generates a companion `*Table` struct that collects one record per row as
/// `Vec<f64>` columns, with `with_capacity`, `push`, `row`, `column`, `len`
/// and `is_empty` methods. The record itself gains `labels()`,
/// `field_names()`, `values()`, `get()` and `nan()`.
///
/// Use `#[scores(table_name = "CustomName")]` to override the default table
/// struct name (`{StructName}Table`), and `#[score(label = "MFM")]` on a field
/// to override its display label (defaults to the field name).
#[proc_macro_derive(Scores, attributes(scores, score))]
pub fn derive_scores(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let table_name = table_name(&input);

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return syn::Error::new_spanned(
                    name,
                    "Scores can only be derived for structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "Scores can only be derived for structs")
                .to_compile_error()
                .into();
        }
    };

    if fields.is_empty() {
        return syn::Error::new_spanned(name, "Scores struct must have at least one field")
            .to_compile_error()
            .into();
    }

    let mut field_names = Vec::new();
    let mut labels = Vec::new();
    let mut field_idents = Vec::new();
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        if !is_f64_type(&field.ty) {
            return syn::Error::new_spanned(&field.ty, "Scores derive: all fields must be f64")
                .to_compile_error()
                .into();
        }
        let label = extract_name_value(&field.attrs, "score", "label")
            .unwrap_or_else(|| ident.to_string());
        field_names.push(ident.to_string());
        labels.push(label);
        field_idents.push(ident);
    }

    let first_field = &field_idents[0];

    let field_name_strs: Vec<&str> = field_names.iter().map(|s| s.as_str()).collect();
    let label_strs: Vec<&str> = labels.iter().map(|s| s.as_str()).collect();

    let table_fields = field_idents.iter().map(|f| {
        quote! { pub #f: Vec<f64> }
    });

    let with_cap_fields = field_idents.iter().map(|f| {
        quote! { #f: Vec::with_capacity(n) }
    });

    let push_fields = field_idents.iter().map(|f| {
        quote! { self.#f.push(record.#f); }
    });

    let row_fields = field_idents.iter().map(|f| {
        quote! { #f: self.#f[i] }
    });

    let column_arms = field_idents.iter().zip(&label_strs).map(|(f, label)| {
        quote! { #label => Some(self.#f.as_slice()) }
    });

    let get_arms = field_idents.iter().zip(&label_strs).map(|(f, label)| {
        quote! { #label => Some(self.#f) }
    });

    let nan_fields = field_idents.iter().map(|f| {
        quote! { #f: f64::NAN }
    });

    let expanded = quote! {
        /// Auto-generated column table collecting one score record per row.
        #[derive(Debug, Clone, Default)]
        pub struct #table_name {
            #(#table_fields,)*
        }

        impl #table_name {
            /// Pre-allocate all columns for `n` rows.
            pub fn with_capacity(n: usize) -> Self {
                Self {
                    #(#with_cap_fields,)*
                }
            }

            /// Append one record as a new row.
            pub fn push(&mut self, record: &#name) {
                #(#push_fields)*
            }

            /// Rebuild the record stored at row `i`.
            pub fn row(&self, i: usize) -> Option<#name> {
                if i >= self.len() {
                    return None;
                }
                Some(#name {
                    #(#row_fields,)*
                })
            }

            /// Column for a display label.
            pub fn column(&self, label: &str) -> Option<&[f64]> {
                match label {
                    #(#column_arms,)*
                    _ => None,
                }
            }

            /// Number of rows stored.
            pub fn len(&self) -> usize {
                self.#first_field.len()
            }

            /// Returns `true` if no rows have been stored.
            pub fn is_empty(&self) -> bool {
                self.#first_field.is_empty()
            }
        }

        impl #name {
            /// Display labels, in field order.
            pub fn labels() -> &'static [&'static str] {
                &[#(#label_strs),*]
            }

            /// Rust field names, in field order.
            pub fn field_names() -> &'static [&'static str] {
                &[#(#field_name_strs),*]
            }

            /// Field values, in field order.
            pub fn values(&self) -> Vec<f64> {
                vec![#(self.#field_idents),*]
            }

            /// Value for a display label.
            pub fn get(&self, label: &str) -> Option<f64> {
                match label {
                    #(#get_arms,)*
                    _ => None,
                }
            }

            /// A record with every field set to NaN.
            pub fn nan() -> Self {
                Self {
                    #(#nan_fields,)*
                }
            }
        }
    };

    expanded.into()
}

/// Table struct name: `#[scores(table_name = "...")]` or `{StructName}Table`.
fn table_name(input: &DeriveInput) -> proc_macro2::Ident {
    extract_name_value(&input.attrs, "scores", "table_name")
        .map(|s| format_ident!("{}", s))
        .unwrap_or_else(|| format_ident!("{}Table", input.ident))
}

/// Find `#[attr_name(key = "value")]` among `attrs` and return `value`.
fn extract_name_value(attrs: &[syn::Attribute], attr_name: &str, key: &str) -> Option<String> {
    for attr in attrs {
        if attr.path().is_ident(attr_name) {
            let nested = attr
                .parse_args_with(
                    syn::punctuated::Punctuated::<syn::Meta, syn::Token![,]>::parse_terminated,
                )
                .ok()?;
            for meta in nested {
                if let Meta::NameValue(nv) = meta {
                    if nv.path.is_ident(key) {
                        if let syn::Expr::Lit(expr_lit) = &nv.value {
                            if let Lit::Str(lit_str) = &expr_lit.lit {
                                return Some(lit_str.value());
                            }
                        }
                    }
                }
            }
        }
    }
    None
}

fn is_f64_type(ty: &syn::Type) -> bool {
    if let syn::Type::Path(type_path) = ty {
        type_path.path.is_ident("f64")
    } else {
        false
    }
}
