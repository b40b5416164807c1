//! # Data Models
//!
//! Intermediate Representation (IR) of parsed type declarations.
//!
//! Every list here is filled while the declaring file is walked and is
//! read-only afterwards; the registry hands out shared references only.

use serde::Serialize;
use std::path::PathBuf;

/// A named metadata marker, e.g. `@JsonProperty("foo_id")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// Simple name of the annotation (qualifier stripped).
    pub name: String,
    /// The single value, if the annotation carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Annotation {
    /// Creates an annotation without a value.
    pub fn marker(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Creates an annotation carrying `value`.
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}

/// The flavour of a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    /// `class Foo`
    Class,
    /// `enum Foo`
    Enum,
    /// `interface Foo`
    Interface,
}

/// A field of a class, enum or interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// The field name.
    pub name: String,
    /// The declared type, as written in source (e.g. `List<String>`).
    pub type_name: String,
    /// Annotations attached to the field.
    pub annotations: Vec<Annotation>,
    /// Whether the field is `static`.
    pub is_static: bool,
    /// Whether the field is `final`.
    pub is_final: bool,
}

/// A constructor or method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    /// The parameter name.
    pub name: String,
    /// The declared type, as written in source.
    pub type_name: String,
    /// Annotations attached to the parameter.
    pub annotations: Vec<Annotation>,
}

/// A constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Constructor {
    /// Parameters in declared order.
    pub parameters: Vec<Parameter>,
    /// Annotations attached to the constructor.
    pub annotations: Vec<Annotation>,
}

/// A method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Method {
    /// The method name.
    pub name: String,
    /// The declared return type (`void` included).
    pub return_type: String,
    /// Parameters in declared order.
    pub parameters: Vec<Parameter>,
    /// Annotations attached to the method.
    pub annotations: Vec<Annotation>,
}

/// A parsed class, enum or interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDeclaration {
    /// Simple name, e.g. `Foo` (or `Inner` for `Outer.Inner`).
    pub name: String,
    /// Globally unique name, e.g. `com.acme.Foo`.
    pub full_name: String,
    /// Declaring package, empty for the default package.
    pub package: String,
    /// Class, enum or interface.
    pub kind: DeclarationKind,
    /// `extends` clause of a class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superclass: Option<String>,
    /// `implements` clause of a class or enum, `extends` clause of an interface.
    pub interfaces: Vec<String>,
    /// Whether the declaration is marked `abstract`.
    pub is_abstract: bool,
    /// Fields in declared order.
    pub fields: Vec<Field>,
    /// Constructors in declared order.
    pub constructors: Vec<Constructor>,
    /// Methods in declared order.
    pub methods: Vec<Method>,
    /// Enum constants in declared order (enums only).
    pub enum_constants: Vec<String>,
    /// Annotations attached to the declaration itself.
    pub annotations: Vec<Annotation>,
    /// The file this declaration was parsed from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_path: Option<PathBuf>,
}

impl TypeDeclaration {
    /// Creates an empty declaration named `full_name`.
    ///
    /// The package and simple name are derived by splitting on the last `.`;
    /// nested types should set `package` explicitly afterwards.
    pub fn new(full_name: impl Into<String>, kind: DeclarationKind) -> Self {
        let full_name = full_name.into();
        let (package, name) = match full_name.rsplit_once('.') {
            Some((pkg, name)) => (pkg.to_string(), name.to_string()),
            None => (String::new(), full_name.clone()),
        };
        Self {
            name,
            full_name,
            package,
            kind,
            superclass: None,
            interfaces: Vec::new(),
            is_abstract: false,
            fields: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
            enum_constants: Vec::new(),
            annotations: Vec::new(),
            source_path: None,
        }
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Human readable origin, used in diagnostics.
    pub fn origin(&self) -> String {
        match &self.source_path {
            Some(path) => path.display().to_string(),
            None => "<unknown source>".to_string(),
        }
    }
}
