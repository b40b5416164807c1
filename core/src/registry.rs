#![deny(missing_docs)]

//! # Model Registry
//!
//! Append-only store of every type declaration parsed during one generation
//! run, keyed by fully qualified name.

use crate::error::{AppError, AppResult};
use crate::parser::TypeDeclaration;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;

/// Registry of parsed declarations for one run.
///
/// Entries are never removed or replaced. Iteration follows insertion order,
/// which is input order and then file traversal order.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct ModelRegistry {
    declarations: IndexMap<String, TypeDeclaration>,
}

impl ModelRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts one declaration.
    ///
    /// A declaration whose fully qualified name is already registered is
    /// rejected with [`AppError::DuplicateDeclaration`]; the first one stays.
    pub fn add(&mut self, declaration: TypeDeclaration) -> AppResult<()> {
        if let Some(existing) = self.declarations.get(&declaration.full_name) {
            return Err(duplicate(existing, &declaration));
        }
        self.declarations
            .insert(declaration.full_name.clone(), declaration);
        Ok(())
    }

    /// Inserts a batch of declarations, typically everything found in one file.
    ///
    /// The batch is checked against the registry and against itself first;
    /// on a duplicate nothing from the batch is inserted.
    pub fn add_all(&mut self, declarations: Vec<TypeDeclaration>) -> AppResult<()> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(declarations.len());
        for (i, decl) in declarations.iter().enumerate() {
            if let Some(existing) = self.declarations.get(&decl.full_name) {
                return Err(duplicate(existing, decl));
            }
            if !seen.insert(decl.full_name.as_str()) {
                let first = declarations[..i]
                    .iter()
                    .find(|d| d.full_name == decl.full_name)
                    .unwrap_or(decl);
                return Err(duplicate(first, decl));
            }
        }

        self.declarations.extend(
            declarations
                .into_iter()
                .map(|decl| (decl.full_name.clone(), decl)),
        );
        Ok(())
    }

    /// Exact lookup by fully qualified name.
    pub fn find_by_full_name(&self, full_name: &str) -> AppResult<&TypeDeclaration> {
        self.declarations
            .get(full_name)
            .ok_or_else(|| AppError::NotFound(full_name.to_string()))
    }

    /// Whether `full_name` is registered.
    pub fn contains(&self, full_name: &str) -> bool {
        self.declarations.contains_key(full_name)
    }

    /// Number of registered declarations.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDeclaration> {
        self.declarations.values()
    }

    /// Fully qualified names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.declarations.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a ModelRegistry {
    type Item = &'a TypeDeclaration;
    type IntoIter = indexmap::map::Values<'a, String, TypeDeclaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.values()
    }
}

fn duplicate(existing: &TypeDeclaration, incoming: &TypeDeclaration) -> AppError {
    AppError::DuplicateDeclaration {
        name: incoming.full_name.clone(),
        existing: existing.origin(),
        incoming: incoming.origin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::DeclarationKind;
    use std::path::PathBuf;

    fn decl(name: &str) -> TypeDeclaration {
        TypeDeclaration::new(name, DeclarationKind::Class)
    }

    fn decl_from(name: &str, file: &str) -> TypeDeclaration {
        let mut d = decl(name);
        d.source_path = Some(PathBuf::from(file));
        d
    }

    #[test]
    fn test_find_inserted_declarations() {
        let mut registry = ModelRegistry::new();
        registry
            .add_all(vec![decl("com.acme.Foo"), decl("com.acme.Bar")])
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.find_by_full_name("com.acme.Foo").unwrap().name,
            "Foo"
        );
        assert_eq!(
            registry.find_by_full_name("com.acme.Bar").unwrap().name,
            "Bar"
        );
    }

    #[test]
    fn test_lookup_is_exact() {
        let mut registry = ModelRegistry::new();
        registry.add(decl("com.acme.Foo")).unwrap();

        for missing in ["Foo", "com.acme.foo", "com.acme.Foo ", "com.acme", ""] {
            match registry.find_by_full_name(missing) {
                Err(AppError::NotFound(name)) => assert_eq!(name, missing),
                other => panic!("expected NotFound for {:?}, got {:?}", missing, other),
            }
        }
    }

    #[test]
    fn test_duplicate_is_rejected_and_first_kept() {
        let mut registry = ModelRegistry::new();
        registry.add(decl_from("com.acme.Foo", "a/Foo.java")).unwrap();

        let err = registry
            .add(decl_from("com.acme.Foo", "b/Foo.java"))
            .unwrap_err();
        match err {
            AppError::DuplicateDeclaration {
                name,
                existing,
                incoming,
            } => {
                assert_eq!(name, "com.acme.Foo");
                assert!(existing.ends_with("Foo.java") && existing.starts_with('a'));
                assert!(incoming.starts_with('b'));
            }
            other => panic!("unexpected error: {}", other),
        }

        let kept = registry.find_by_full_name("com.acme.Foo").unwrap();
        assert_eq!(kept.source_path, Some(PathBuf::from("a/Foo.java")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_add_all_is_all_or_nothing() {
        let mut registry = ModelRegistry::new();
        registry.add(decl("com.acme.Foo")).unwrap();

        let batch = vec![decl("com.acme.Bar"), decl("com.acme.Foo")];
        assert!(registry.add_all(batch).is_err());
        assert!(!registry.contains("com.acme.Bar"));

        let batch = vec![decl("com.acme.Baz"), decl("com.acme.Baz")];
        assert!(matches!(
            registry.add_all(batch),
            Err(AppError::DuplicateDeclaration { .. })
        ));
        assert!(!registry.contains("com.acme.Baz"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut registry = ModelRegistry::new();
        registry.add_all(vec![decl("z.Z"), decl("a.A")]).unwrap();
        registry.add(decl("m.M")).unwrap();

        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["z.Z", "a.A", "m.M"]);
        let via_iter: Vec<_> = (&registry).into_iter().map(|d| d.name.as_str()).collect();
        assert_eq!(via_iter, vec!["Z", "A", "M"]);
    }

    #[test]
    fn test_equivalent_registries_from_same_input() {
        let batch = || vec![decl("com.acme.Foo"), decl("com.acme.Bar")];
        let mut left = ModelRegistry::new();
        let mut right = ModelRegistry::new();
        left.add_all(batch()).unwrap();
        right.add_all(batch()).unwrap();

        for name in left.names().chain(right.names()) {
            assert_eq!(
                left.find_by_full_name(name).unwrap(),
                right.find_by_full_name(name).unwrap()
            );
        }
    }

    #[test]
    fn test_serializes_keyed_by_full_name() {
        let mut registry = ModelRegistry::new();
        registry.add(decl("com.acme.Foo")).unwrap();
        let json = serde_json::to_value(&registry).unwrap();
        assert_eq!(json["com.acme.Foo"]["name"], "Foo");
    }
}
