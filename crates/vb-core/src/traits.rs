//! Core traits for vb-console

use crate::{MemberKind, Result};

/// Reflection capability - what the console needs to know about an object
/// in order to classify its members.
///
/// Every method is fallible: an object whose members cannot be enumerated
/// (a getter that fails, a lock that is poisoned) reports it here and the
/// error reaches the caller of `Console::dir` unchanged.
pub trait Reflect {
    /// Runtime type name of the object, without any module path
    fn type_name(&self) -> String;

    /// Own name when the object is itself a type or a function.
    ///
    /// Instances return `None` and are labelled `instance of <type_name>`.
    fn own_name(&self) -> Option<String> {
        None
    }

    /// Full runtime type descriptor appended to the label
    fn type_descriptor(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }

    /// Every member name reachable on the object, inherited ones included
    fn members(&self) -> Result<Vec<String>>;

    /// Keys of the instance-level attribute dictionary.
    ///
    /// `None` when the object carries no such dictionary.
    fn instance_fields(&self) -> Result<Option<Vec<String>>> {
        Ok(None)
    }

    /// Members defined directly on the object's class, with their kinds.
    ///
    /// `None` when the class exposes no member dictionary.
    fn class_members(&self) -> Result<Option<Vec<(String, MemberKind)>>> {
        Ok(None)
    }
}

impl<T: Reflect + ?Sized> Reflect for &T {
    fn type_name(&self) -> String {
        (**self).type_name()
    }

    fn own_name(&self) -> Option<String> {
        (**self).own_name()
    }

    fn type_descriptor(&self) -> String {
        (**self).type_descriptor()
    }

    fn members(&self) -> Result<Vec<String>> {
        (**self).members()
    }

    fn instance_fields(&self) -> Result<Option<Vec<String>>> {
        (**self).instance_fields()
    }

    fn class_members(&self) -> Result<Option<Vec<(String, MemberKind)>>> {
        (**self).class_members()
    }
}
