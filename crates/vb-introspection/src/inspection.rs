//! Inspection payload

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use tracing::trace;

use crate::classify::{case_insensitive_sort, classify_kind, naming_category};
use vb_core::{Category, Reflect, Result};

/// Classified members of one object.
///
/// Only non-empty categories are present. Categories iterate (and
/// serialize) in collection order, each list sorted case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inspection {
    categories: BTreeMap<Category, Vec<String>>,
}

impl Inspection {
    /// Reflect over `obj` and classify everything it exposes.
    ///
    /// Errors from the object's `Reflect` impl are returned as-is.
    pub fn of(obj: &dyn Reflect) -> Result<Self> {
        let mut inspection = Inspection::default();

        // Duplicate names collapse; the byte order is the tie-break for the
        // case-insensitive sort below.
        let names: BTreeSet<String> = obj.members()?.into_iter().collect();
        for name in names {
            let category = naming_category(&name);
            inspection.push(category, name);
        }

        if let Some(fields) = obj.instance_fields()? {
            for field in fields {
                inspection.push(Category::DataAttributes, field);
            }
        }

        if let Some(members) = obj.class_members()? {
            for (name, kind) in members {
                if let Some(category) = classify_kind(&name, kind) {
                    inspection.push(category, name);
                }
            }
        }

        for names in inspection.categories.values_mut() {
            case_insensitive_sort(names);
        }

        trace!(
            categories = inspection.categories.len(),
            "Classified members of {}",
            obj.type_name()
        );
        Ok(inspection)
    }

    fn push(&mut self, category: Category, name: String) {
        self.categories.entry(category).or_default().push(name);
    }

    /// Names in a category, if it is present
    pub fn get(&self, category: Category) -> Option<&[String]> {
        self.categories.get(&category).map(Vec::as_slice)
    }

    pub fn contains(&self, category: Category) -> bool {
        self.categories.contains_key(&category)
    }

    /// Present categories in collection order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Payload as JSON
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl Serialize for Inspection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for (category, names) in &self.categories {
            map.serialize_entry(category.key(), names)?;
        }
        map.end()
    }
}
