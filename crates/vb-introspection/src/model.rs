//! Reflection descriptors
//!
//! Rust has no runtime member table, so objects that want to be inspected
//! either implement [`Reflect`] by hand or describe themselves with a
//! [`ClassInfo`] and hand out [`Instance`]s of it.

use std::sync::Arc;

use vb_core::{MemberKind, Reflect, Result, ValueKind};

/// Description of a class: its name, bases and directly defined members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassInfo {
    name: String,
    module: Option<String>,
    bases: Vec<Arc<ClassInfo>>,
    members: Vec<(String, MemberKind)>,
}

impl ClassInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module: None,
            bases: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Module path used in the type descriptor
    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Inherit every member of `base`
    pub fn base(mut self, base: Arc<ClassInfo>) -> Self {
        self.bases.push(base);
        self
    }

    pub fn member(mut self, name: impl Into<String>, kind: MemberKind) -> Self {
        self.members.push((name.into(), kind));
        self
    }

    pub fn property(self, name: impl Into<String>) -> Self {
        self.member(name, MemberKind::Property)
    }

    pub fn static_method(self, name: impl Into<String>) -> Self {
        self.member(name, MemberKind::StaticMethod)
    }

    pub fn class_method(self, name: impl Into<String>) -> Self {
        self.member(name, MemberKind::ClassMethod)
    }

    pub fn method(self, name: impl Into<String>) -> Self {
        self.member(name, MemberKind::Method)
    }

    pub fn value(self, name: impl Into<String>, kind: ValueKind) -> Self {
        self.member(name, MemberKind::Value(kind))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `module::Name`, or just `Name` without a module
    pub fn qualified_name(&self) -> String {
        match &self.module {
            Some(module) => format!("{}::{}", module, self.name),
            None => self.name.clone(),
        }
    }

    /// Members defined on this class only
    pub fn own_members(&self) -> &[(String, MemberKind)] {
        &self.members
    }

    /// Names defined on this class and all of its bases
    pub fn all_member_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.members.iter().map(|(n, _)| n.clone()).collect();
        for base in &self.bases {
            names.extend(base.all_member_names());
        }
        names
    }

    /// Create an instance with no data attributes yet
    pub fn instantiate(self: &Arc<Self>) -> Instance {
        Instance::new(Arc::clone(self))
    }
}

/// A class viewed as an object: it is named, its member dictionary is its
/// own members, and it has no class-level descriptors of its own.
impl Reflect for ClassInfo {
    fn type_name(&self) -> String {
        "type".to_string()
    }

    fn own_name(&self) -> Option<String> {
        Some(self.name.clone())
    }

    fn type_descriptor(&self) -> String {
        "type".to_string()
    }

    fn members(&self) -> Result<Vec<String>> {
        Ok(self.all_member_names())
    }

    fn instance_fields(&self) -> Result<Option<Vec<String>>> {
        Ok(Some(self.members.iter().map(|(n, _)| n.clone()).collect()))
    }
}

/// An instance of a [`ClassInfo`] carrying its own data attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    class: Arc<ClassInfo>,
    fields: Vec<String>,
}

impl Instance {
    pub fn new(class: Arc<ClassInfo>) -> Self {
        Self {
            class,
            fields: Vec::new(),
        }
    }

    /// Add an instance-level data attribute
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(name.into());
        self
    }

    pub fn class(&self) -> &Arc<ClassInfo> {
        &self.class
    }
}

impl Reflect for Instance {
    fn type_name(&self) -> String {
        self.class.name.clone()
    }

    fn type_descriptor(&self) -> String {
        self.class.qualified_name()
    }

    fn members(&self) -> Result<Vec<String>> {
        let mut names = self.class.all_member_names();
        names.extend(self.fields.iter().cloned());
        Ok(names)
    }

    fn instance_fields(&self) -> Result<Option<Vec<String>>> {
        Ok(Some(self.fields.clone()))
    }

    fn class_members(&self) -> Result<Option<Vec<(String, MemberKind)>>> {
        Ok(Some(self.class.members.clone()))
    }
}
