use lazy_static::lazy_static;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use std::collections::HashMap;
use syn::{parse2, DeriveInput, Field, GenericArgument, Ident, Lit, LitStr, Meta, NestedMeta, Type};

lazy_static! {
    // upper cased attribute value -> FeatureType variant
    static ref GEO_TYPES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("POINT", "Point");
        m.insert("LINESTRING", "LineString");
        m.insert("POLYGON", "Polygon");
        m.insert("MULTIPOINT", "MultiPoint");
        m.insert("MULTILINESTRING", "MultiLineString");
        m.insert("MULTIPOLYGON", "MultiPolygon");
        m
    };
}

/// A macro for deriving an implementation of GeometryRecord for a struct
///
/// The geom_field attribute marks a field holding a geometry field and declares the
/// geometry type it must hold. The type name is matched without regard to case, so
/// `"LineString"` and `"linestring"` are the same.
///
/// A marked field may be one of the typed fields, a `GeometryField`, or an `Option` of
/// either; `None` is skipped during validation.
/// # Usage
/// ```ignore
/// use geojson_fields::{GeometryRecord, PointField, PolygonField};
///
/// #[derive(GeometryRecord)]
/// struct Parcel {
///     name: String,
///     #[geom_field("Point")]
///     centroid: PointField,
///     #[geom_field("Polygon")]
///     outline: Option<PolygonField>,
/// }
/// ```
#[proc_macro_derive(GeometryRecord, attributes(geom_field))]
pub fn derive_geometry_record(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let inner_input = proc_macro2::TokenStream::from(input);
    proc_macro::TokenStream::from(derive_geometry_record_inner(inner_input))
}

fn derive_geometry_record_inner(input: TokenStream) -> TokenStream {
    let ast = parse2::<DeriveInput>(input).unwrap();

    let fields = match &ast.data {
        syn::Data::Struct(data) => match &data.fields {
            syn::Fields::Named(fields) => fields.named.iter(),
            _ => panic!("GeometryRecord derive expected named fields"),
        },
        _ => panic!("GeometryRecord derive expected a struct"),
    }
    .collect();

    impl_record(&ast.ident, &fields, &ast.generics)
}

#[derive(Debug)]
struct GeomFieldInfo {
    name: Ident,
    feature_type: Ident,
    optional: bool,
}

// whether the field type is an Option, the inner type isn't checked since any
// geometry field will do and the trait bound on the check reports anything else
fn is_option(ty: &Type) -> bool {
    match ty {
        Type::Path(p) => {
            let final_segment = match p.path.segments.last() {
                Some(s) => s,
                None => return false,
            };
            if final_segment.ident != "Option" {
                return false;
            }
            match &final_segment.arguments {
                syn::PathArguments::AngleBracketed(a) => {
                    assert!(a.args.len() == 1, "Only one argument allowed in an Option");
                    matches!(a.args[0], GenericArgument::Type(_))
                }
                _ => panic!("Unsupported use of the option type"),
            }
        }
        _ => false,
    }
}

fn get_geom_field_info(field: &Field) -> Option<GeomFieldInfo> {
    let attr = field
        .attrs
        .iter()
        .find(|attr| attr.path.is_ident("geom_field"))?;
    let type_name: LitStr = match attr.parse_meta() {
        Ok(Meta::List(l)) => match l.nested.first() {
            Some(NestedMeta::Lit(Lit::Str(ls))) if l.nested.len() == 1 => ls.clone(),
            _ => panic!("You must specify a geometry type when using the geom_field attribute"),
        },
        _ => panic!("You must specify a geometry type when using the geom_field attribute"),
    };
    let variant = match GEO_TYPES.get(type_name.value().to_uppercase().as_str()) {
        Some(v) => *v,
        None => panic!("{} is not a supported geometry type", type_name.value()),
    };
    Some(GeomFieldInfo {
        name: field.ident.clone().expect("Expected named field"),
        feature_type: Ident::new(variant, Span::call_site()),
        optional: is_option(&field.ty),
    })
}

fn impl_record(name: &Ident, fields: &Vec<&Field>, generics: &syn::Generics) -> TokenStream {
    let geom_fields: Vec<GeomFieldInfo> = fields
        .iter()
        .filter_map(|f| get_geom_field_info(f))
        .collect();

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let listing = geom_fields.iter().map(|f| {
        let field_name = f.name.to_string();
        let feature_type = &f.feature_type;
        quote!((#field_name, ::geojson_fields::FeatureType::#feature_type))
    });

    let checks = geom_fields.iter().map(|f| {
        let field_ident = &f.name;
        let field_name = f.name.to_string();
        let feature_type = &f.feature_type;
        let check = quote!(::geojson_fields::check_record_field(
            #field_name,
            ::geojson_fields::FeatureType::#feature_type,
            value,
        )?;);
        if f.optional {
            quote!(
                if let ::core::option::Option::Some(value) = &self.#field_ident {
                    #check
                }
            )
        } else {
            quote!(
                {
                    let value = &self.#field_ident;
                    #check
                }
            )
        }
    });

    quote!(
        impl #impl_generics ::geojson_fields::GeometryRecord for #name #ty_generics #where_clause {
            #[inline]
            fn geometry_fields() -> &'static [(&'static str, ::geojson_fields::FeatureType)] {
                &[#(#listing),*]
            }

            fn validate_geometry(&self) -> ::geojson_fields::Result<()> {
                #(#checks)*
                ::core::result::Result::Ok(())
            }
        }
    )
}
