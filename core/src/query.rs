//! # Annotation Queries
//!
//! Read-only lookups over the parsed model that generators rely on to map
//! Jackson metadata onto client code.

use crate::error::{AppError, AppResult};
use crate::parser::{Annotation, Constructor, Field, TypeDeclaration};

/// Field-level annotation carrying the serialized name.
pub const SERIALIZATION_NAME_ANNOTATION: &str = "JsonProperty";

/// Constructor-level annotation marking the deserialization entry point.
pub const CANONICAL_CONSTRUCTOR_ANNOTATION: &str = "JsonCreator";

/// First annotation named `name`, if any.
pub fn find_annotation<'a>(annotations: &'a [Annotation], name: &str) -> Option<&'a Annotation> {
    annotations.iter().find(|a| a.name == name)
}

/// Returns the value of the field's `@JsonProperty`.
///
/// A missing annotation is an [`AppError::AnnotationNotFound`], one without a
/// value an [`AppError::AnnotationWithoutValue`]; both name the declaration
/// and the field.
pub fn find_serialization_name<'a>(
    declaration: &TypeDeclaration,
    field: &'a Field,
) -> AppResult<&'a str> {
    let member = || format!("field {}", field.name);
    let annotation = find_annotation(&field.annotations, SERIALIZATION_NAME_ANNOTATION)
        .ok_or_else(|| AppError::AnnotationNotFound {
            declaration: declaration.full_name.clone(),
            member: Some(member()),
            annotation: SERIALIZATION_NAME_ANNOTATION.to_string(),
        })?;

    annotation
        .value
        .as_deref()
        .ok_or_else(|| AppError::AnnotationWithoutValue {
            declaration: declaration.full_name.clone(),
            member: member(),
            annotation: SERIALIZATION_NAME_ANNOTATION.to_string(),
        })
}

/// Returns the first constructor, in declared order, annotated `@JsonCreator`.
pub fn find_canonical_constructor(declaration: &TypeDeclaration) -> AppResult<&Constructor> {
    declaration
        .constructors
        .iter()
        .filter(|ctor| !ctor.annotations.is_empty())
        .find(|ctor| find_annotation(&ctor.annotations, CANONICAL_CONSTRUCTOR_ANNOTATION).is_some())
        .ok_or_else(|| AppError::AnnotationNotFound {
            declaration: declaration.full_name.clone(),
            member: None,
            annotation: CANONICAL_CONSTRUCTOR_ANNOTATION.to_string(),
        })
}
