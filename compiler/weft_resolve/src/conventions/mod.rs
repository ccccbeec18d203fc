//! Default classifiers and factories.
//!
//! Tag helpers and view components are recognized by shape, not by an
//! explicit tag:
//!
//! | Kind | Classifier | Factory |
//! |------|------------|---------|
//! | ElementBindable | [`TagHelperConvention`] | [`TagHelperFactory`] |
//! | ViewComponent | [`ViewComponentConvention`] | [`ViewComponentTagHelperFactory`] |
//!
//! The marker names they look for are in [`well_known`].

mod tag_helper;
mod view_component;
pub mod well_known;

pub use tag_helper::{TagHelperConvention, TagHelperFactory};
pub use view_component::{ViewComponentConvention, ViewComponentTagHelperFactory};

use weft_symbols::TypeRef;

/// Converts a PascalCase identifier to kebab-case HTML naming.
///
/// A hyphen goes before an uppercase letter that follows a lowercase letter,
/// or that follows a letter or digit and precedes a lowercase letter. The
/// result is lowercased: `MyFoo` → `my-foo`, `HTMLElement` → `html-element`,
/// `SomeID` → `some-id`.
pub fn to_html_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(char::is_ascii_lowercase);
            if prev.is_ascii_lowercase() || (prev.is_ascii_alphanumeric() && next_is_lower) {
                out.push('-');
            }
        }
        out.extend(c.to_lowercase());
    }

    out
}

/// Shape shared by both conventions: a public, concrete, non-generic class.
fn is_public_concrete_class(ty: TypeRef<'_>) -> bool {
    let symbol = ty.symbol();
    symbol.is_class()
        && symbol.accessibility.is_public()
        && !symbol.is_abstract
        && !symbol.is_generic()
}
