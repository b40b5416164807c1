//! # Extraction Logic
//!
//! Reduces a Java syntax tree into [`TypeDeclaration`]s.

use crate::parser::annotations::{extract_annotations, has_modifier, node_text};
use crate::parser::models::{
    Constructor, DeclarationKind, Field, Method, Parameter, TypeDeclaration,
};
use crate::parser::tree::JavaSyntaxTree;
use crate::parser::DeclarationWalker;
use tree_sitter::Node;

/// Collects every class, enum and interface of a Java compilation unit.
///
/// Nested types are reported after their enclosing type, with a fully
/// qualified name of the form `pkg.Outer.Inner`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JavaDeclarationWalker;

impl JavaDeclarationWalker {
    /// Creates a walker.
    pub fn new() -> Self {
        Self
    }
}

impl DeclarationWalker<JavaSyntaxTree> for JavaDeclarationWalker {
    fn walk(&self, tree: &JavaSyntaxTree) -> Vec<TypeDeclaration> {
        let source = tree.source();
        let root = tree.root_node();
        let package = package_name(&root, source).unwrap_or_default();

        let mut declarations = Vec::new();
        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            collect_type(&child, source, &package, None, &mut declarations);
        }
        declarations
    }
}

/// Reads `package a.b.c;`, if present.
fn package_name(root: &Node, source: &str) -> Option<String> {
    let mut cursor = root.walk();
    let decl = root
        .named_children(&mut cursor)
        .find(|c| c.kind() == "package_declaration")?;

    let mut inner = decl.walk();
    let name = decl
        .named_children(&mut inner)
        .find(|c| matches!(c.kind(), "scoped_identifier" | "identifier"))
        .map(|n| node_text(&n, source).to_string());
    name
}

fn declaration_kind(ts_kind: &str) -> Option<DeclarationKind> {
    match ts_kind {
        "class_declaration" => Some(DeclarationKind::Class),
        "interface_declaration" => Some(DeclarationKind::Interface),
        "enum_declaration" => Some(DeclarationKind::Enum),
        _ => None,
    }
}

fn collect_type(
    node: &Node,
    source: &str,
    package: &str,
    outer: Option<&str>,
    out: &mut Vec<TypeDeclaration>,
) {
    let Some(kind) = declaration_kind(node.kind()) else {
        return;
    };
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(&n, source).to_string())
        .unwrap_or_default();
    if name.is_empty() {
        return;
    }

    let full_name = match outer {
        Some(outer) => format!("{}.{}", outer, name),
        None if package.is_empty() => name.clone(),
        None => format!("{}.{}", package, name),
    };

    let mut decl = TypeDeclaration::new(full_name.clone(), kind);
    decl.name = name;
    decl.package = package.to_string();
    decl.annotations = extract_annotations(node, source);
    decl.is_abstract = has_modifier(node, "abstract");
    decl.superclass = node
        .child_by_field_name("superclass")
        .and_then(|s| s.named_child(0))
        .map(|t| node_text(&t, source).to_string());
    decl.interfaces = implemented_types(node, source);

    let mut nested = Vec::new();
    if let Some(body) = node.child_by_field_name("body") {
        walk_body(&body, source, &mut decl, &mut nested);
    }

    out.push(decl);
    for inner in nested {
        collect_type(&inner, source, package, Some(&full_name), out);
    }
}

/// `implements` list of classes/enums, `extends` list of interfaces.
fn implemented_types(node: &Node, source: &str) -> Vec<String> {
    let mut cursor = node.walk();
    let clause = node
        .children(&mut cursor)
        .find(|c| matches!(c.kind(), "super_interfaces" | "extends_interfaces"));
    let Some(clause) = clause else {
        return Vec::new();
    };

    let mut cursor = clause.walk();
    let list = clause
        .named_children(&mut cursor)
        .find(|c| c.kind() == "type_list");
    let Some(list) = list else {
        return Vec::new();
    };

    let mut cursor = list.walk();
    let types = list
        .named_children(&mut cursor)
        .map(|t| node_text(&t, source).to_string())
        .collect();
    types
}

fn walk_body<'t>(
    body: &Node<'t>,
    source: &str,
    decl: &mut TypeDeclaration,
    nested: &mut Vec<Node<'t>>,
) {
    let mut cursor = body.walk();
    for member in body.named_children(&mut cursor) {
        match member.kind() {
            "field_declaration" => decl.fields.extend(extract_fields(&member, source, false)),
            // interface constants are implicitly static final
            "constant_declaration" => decl.fields.extend(extract_fields(&member, source, true)),
            "constructor_declaration" => decl.constructors.push(Constructor {
                parameters: extract_parameters(&member, source),
                annotations: extract_annotations(&member, source),
            }),
            "method_declaration" => {
                if let Some(method) = extract_method(&member, source) {
                    decl.methods.push(method);
                }
            }
            "enum_constant" => {
                if let Some(name) = member.child_by_field_name("name") {
                    decl.enum_constants.push(node_text(&name, source).to_string());
                }
            }
            "enum_body_declarations" => walk_body(&member, source, decl, nested),
            "class_declaration" | "interface_declaration" | "enum_declaration" => {
                nested.push(member)
            }
            _ => {}
        }
    }
}

/// One [`Field`] per declarator: `int a, b;` yields `a` and `b`.
fn extract_fields(node: &Node, source: &str, implicit_constant: bool) -> Vec<Field> {
    let type_name = node
        .child_by_field_name("type")
        .map(|t| node_text(&t, source).to_string())
        .unwrap_or_default();
    let annotations = extract_annotations(node, source);
    let is_static = implicit_constant || has_modifier(node, "static");
    let is_final = implicit_constant || has_modifier(node, "final");

    let mut cursor = node.walk();
    let fields = node
        .named_children(&mut cursor)
        .filter(|c| c.kind() == "variable_declarator")
        .filter_map(|declarator| declarator.child_by_field_name("name"))
        .map(|name| Field {
            name: node_text(&name, source).to_string(),
            type_name: type_name.clone(),
            annotations: annotations.clone(),
            is_static,
            is_final,
        })
        .collect();
    fields
}

fn extract_method(node: &Node, source: &str) -> Option<Method> {
    let name = node_text(&node.child_by_field_name("name")?, source).to_string();
    let return_type = node
        .child_by_field_name("type")
        .map(|t| node_text(&t, source).to_string())
        .unwrap_or_default();

    Some(Method {
        name,
        return_type,
        parameters: extract_parameters(node, source),
        annotations: extract_annotations(node, source),
    })
}

/// Reads the `formal_parameters` of a constructor or method.
fn extract_parameters(node: &Node, source: &str) -> Vec<Parameter> {
    let Some(params) = node.child_by_field_name("parameters") else {
        return Vec::new();
    };

    let mut cursor = params.walk();
    let parameters = params
        .named_children(&mut cursor)
        .filter_map(|param| match param.kind() {
            "formal_parameter" => {
                let name = param.child_by_field_name("name")?;
                let ty = param.child_by_field_name("type")?;
                Some(Parameter {
                    name: node_text(&name, source).to_string(),
                    type_name: node_text(&ty, source).to_string(),
                    annotations: extract_annotations(&param, source),
                })
            }
            "spread_parameter" => spread_parameter(&param, source),
            _ => None,
        })
        .collect();
    parameters
}

/// `String... names` has no field names in the grammar; pick the pieces by kind.
fn spread_parameter(node: &Node, source: &str) -> Option<Parameter> {
    let mut cursor = node.walk();
    let children: Vec<_> = node.named_children(&mut cursor).collect();

    let ty = children
        .iter()
        .find(|c| !matches!(c.kind(), "modifiers" | "variable_declarator"))?;
    let name = children
        .iter()
        .find(|c| c.kind() == "variable_declarator")
        .and_then(|d| d.child_by_field_name("name"))?;

    Some(Parameter {
        name: node_text(&name, source).to_string(),
        type_name: format!("{}...", node_text(ty, source)),
        annotations: extract_annotations(node, source),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::models::Annotation;
    use crate::parser::tree::JavaParser;
    use crate::parser::SourceParser;
    use std::path::Path;

    fn walk(code: &str) -> Vec<TypeDeclaration> {
        let tree = JavaParser::new()
            .parse(code.to_string(), Path::new("Test.java"))
            .expect("valid java");
        JavaDeclarationWalker::new().walk(&tree)
    }

    #[test]
    fn test_class_with_fields_and_creator() {
        let code = r#"
package com.acme;

import com.fasterxml.jackson.annotation.JsonCreator;
import com.fasterxml.jackson.annotation.JsonProperty;

public class Foo extends Base implements Serializable, Cloneable {
    @JsonProperty("foo_id")
    private final UUID id;
    private List<String> tags, labels;

    public Foo() { this(null); }

    @JsonCreator
    public Foo(@JsonProperty("foo_id") final UUID id) {
        this.id = id;
    }

    public UUID getId() { return id; }
}
"#;
        let decls = walk(code);
        assert_eq!(decls.len(), 1);
        let foo = &decls[0];
        assert_eq!(foo.full_name, "com.acme.Foo");
        assert_eq!(foo.name, "Foo");
        assert_eq!(foo.package, "com.acme");
        assert_eq!(foo.kind, DeclarationKind::Class);
        assert_eq!(foo.superclass.as_deref(), Some("Base"));
        assert_eq!(foo.interfaces, vec!["Serializable", "Cloneable"]);

        let names: Vec<_> = foo.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "tags", "labels"]);
        assert_eq!(foo.fields[0].type_name, "UUID");
        assert!(foo.fields[0].is_final);
        assert_eq!(
            foo.fields[0].annotations,
            vec![Annotation::with_value("JsonProperty", "foo_id")]
        );
        assert_eq!(foo.fields[1].type_name, "List<String>");
        assert_eq!(foo.fields[2].type_name, "List<String>");

        assert_eq!(foo.constructors.len(), 2);
        assert!(foo.constructors[0].annotations.is_empty());
        assert!(foo.constructors[0].parameters.is_empty());
        assert_eq!(
            foo.constructors[1].annotations,
            vec![Annotation::marker("JsonCreator")]
        );
        let param = &foo.constructors[1].parameters[0];
        assert_eq!(param.name, "id");
        assert_eq!(param.type_name, "UUID");
        assert_eq!(
            param.annotations,
            vec![Annotation::with_value("JsonProperty", "foo_id")]
        );

        assert_eq!(foo.methods.len(), 1);
        assert_eq!(foo.methods[0].name, "getId");
        assert_eq!(foo.methods[0].return_type, "UUID");
    }

    #[test]
    fn test_enum_with_constants_and_members() {
        let code = r#"
package com.acme;

public enum Status implements Coded {
    PENDING("p"),
    ACTIVE("a");

    private final String code;

    Status(String code) { this.code = code; }
}
"#;
        let decls = walk(code);
        assert_eq!(decls.len(), 1);
        let status = &decls[0];
        assert_eq!(status.kind, DeclarationKind::Enum);
        assert_eq!(status.enum_constants, vec!["PENDING", "ACTIVE"]);
        assert_eq!(status.interfaces, vec!["Coded"]);
        assert_eq!(status.fields.len(), 1);
        assert_eq!(status.constructors.len(), 1);
        assert_eq!(status.constructors[0].parameters[0].name, "code");
    }

    #[test]
    fn test_interface_constants_and_methods() {
        let code = r#"
package com.acme.api;

public interface Account extends Entity, Auditable {
    int MAX = 10;

    String getName();

    void rename(String first, String... rest);
}
"#;
        let decls = walk(code);
        let account = &decls[0];
        assert_eq!(account.kind, DeclarationKind::Interface);
        assert_eq!(account.full_name, "com.acme.api.Account");
        assert_eq!(account.interfaces, vec!["Entity", "Auditable"]);
        assert_eq!(account.fields[0].name, "MAX");
        assert!(account.fields[0].is_static && account.fields[0].is_final);

        let rename = &account.methods[1];
        assert_eq!(rename.return_type, "void");
        assert_eq!(rename.parameters.len(), 2);
        assert_eq!(rename.parameters[1].name, "rest");
        assert_eq!(rename.parameters[1].type_name, "String...");
    }

    #[test]
    fn test_nested_types_follow_outer() {
        let code = r#"
package com.acme;

@JsonInclude
public abstract class Outer {
    public static class Inner {
        enum Deep { A }
    }
    interface Callback {}
}
"#;
        let decls = walk(code);
        let names: Vec<_> = decls.iter().map(|d| d.full_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "com.acme.Outer",
                "com.acme.Outer.Inner",
                "com.acme.Outer.Inner.Deep",
                "com.acme.Outer.Callback",
            ]
        );
        assert!(decls[0].is_abstract);
        assert_eq!(decls[0].annotations, vec![Annotation::marker("JsonInclude")]);
        assert_eq!(decls[1].name, "Inner");
        assert_eq!(decls[1].package, "com.acme");
    }

    #[test]
    fn test_default_package_and_multiple_top_level() {
        let code = "class A {}\nclass B {}\n";
        let decls = walk(code);
        let names: Vec<_> = decls.iter().map(|d| d.full_name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert!(decls[0].package.is_empty());
    }

    #[test]
    fn test_no_declarations() {
        let code = "package com.acme;\n\nimport java.util.List;\n";
        assert!(walk(code).is_empty());
    }
}
