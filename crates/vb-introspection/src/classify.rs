//! Member classification

use vb_core::{Category, MemberKind, Reflect};

/// Bucket for a member name based purely on its leading underscores.
pub fn naming_category(name: &str) -> Category {
    if name.starts_with("__") {
        Category::InternalMethods
    } else if name.starts_with('_') {
        Category::PrivateMethods
    } else {
        Category::PublicAttributes
    }
}

/// Bucket for a class-level member, if it belongs in one.
///
/// Descriptors (properties, static and class methods) are bucketed whatever
/// their name; plain methods and basic values only when public.
pub fn classify_kind(name: &str, kind: MemberKind) -> Option<Category> {
    match kind {
        MemberKind::Property => Some(Category::Properties),
        MemberKind::StaticMethod => Some(Category::StaticMethods),
        MemberKind::ClassMethod => Some(Category::ClassMethods),
        _ if name.starts_with('_') => None,
        MemberKind::Method => Some(Category::Methods),
        MemberKind::Value(_) => Some(Category::ClassVariables),
        MemberKind::Opaque => None,
    }
}

/// Sort by lower-cased form; equal keys keep their relative order.
pub fn case_insensitive_sort(names: &mut [String]) {
    names.sort_by_cached_key(|name| name.to_lowercase());
}

/// Label shown in the header for an inspected object:
/// `<name or "instance of <type>"> | <type descriptor>`.
pub fn source_label(obj: &dyn Reflect) -> String {
    let name = match obj.own_name() {
        Some(name) => name,
        None => {
            let type_name = obj.type_name();
            if type_name == "type" {
                type_name
            } else {
                format!("instance of {}", type_name)
            }
        }
    };

    format!("{} | {}", name, obj.type_descriptor())
}
