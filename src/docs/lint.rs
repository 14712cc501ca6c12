//! Shape checks over a rendered OpenAPI document.
//!
//! The checks work on the JSON form so they apply equally to the document
//! built here and to any document loaded from disk.

use std::collections::BTreeSet;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

const METHODS: [&str; 8] = ["get", "put", "post", "delete", "options", "head", "patch", "trace"];

/// One problem found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    UnsupportedVersion(String),
    UnresolvedRef { location: String, reference: String },
    NoResponses { path: String, method: String },
    BlankExample { schema: String, property: String },
    UndeclaredTag { path: String, method: String, tag: String },
    UndeclaredSecurityScheme { path: String, method: String, scheme: String },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::UnsupportedVersion(version) => {
                write!(f, "openapi version '{}' is not 3.0.x", version)
            }
            Finding::UnresolvedRef { location, reference } => {
                write!(f, "{} references '{}', which is not a declared schema", location, reference)
            }
            Finding::NoResponses { path, method } => {
                write!(f, "{} {} declares no responses", method.to_uppercase(), path)
            }
            Finding::BlankExample { schema, property } => {
                write!(f, "required property {}.{} has a blank example", schema, property)
            }
            Finding::UndeclaredTag { path, method, tag } => {
                write!(f, "{} {} uses undeclared tag '{}'", method.to_uppercase(), path, tag)
            }
            Finding::UndeclaredSecurityScheme { path, method, scheme } => write!(
                f,
                "{} {} requires undeclared security scheme '{}'",
                method.to_uppercase(),
                path,
                scheme
            ),
        }
    }
}

/// Every finding from a failed [`lint`] run.
#[derive(Debug, Clone, Error)]
#[error("OpenAPI document has {} problem(s): {}", .findings.len(), render_findings(.findings))]
pub struct LintReport {
    pub findings: Vec<Finding>,
}

fn render_findings(findings: &[Finding]) -> String {
    findings
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Runs every check, collecting all findings rather than stopping at the first.
pub fn lint(doc: &Value) -> Result<(), LintReport> {
    let mut findings = Vec::new();

    check_version(doc, &mut findings);
    check_refs(doc, doc, String::new(), &mut findings);
    check_operations(doc, &mut findings);
    check_required_examples(doc, &mut findings);

    if findings.is_empty() {
        Ok(())
    } else {
        Err(LintReport { findings })
    }
}

fn check_version(doc: &Value, findings: &mut Vec<Finding>) {
    let version = doc.get("openapi").and_then(Value::as_str).unwrap_or_default();

    if !(version == "3.0" || version.starts_with("3.0.")) {
        findings.push(Finding::UnsupportedVersion(version.to_string()));
    }
}

fn check_refs(root: &Value, value: &Value, location: String, findings: &mut Vec<Finding>) {
    match value {
        Value::Object(map) => {
            if let Some(reference) = map.get("$ref").and_then(Value::as_str) {
                if !names_declared_schema(root, reference) {
                    findings.push(Finding::UnresolvedRef {
                        location: if location.is_empty() { "/".to_string() } else { location.clone() },
                        reference: reference.to_string(),
                    });
                }
            }

            for (key, child) in map {
                check_refs(root, child, format!("{}/{}", location, escape_pointer(key)), findings);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                check_refs(root, child, format!("{}/{}", location, index), findings);
            }
        }
        _ => {}
    }
}

/// Only `#/components/schemas/<name>` counts, and `<name>` must be declared.
fn names_declared_schema(root: &Value, reference: &str) -> bool {
    let Some(segment) = reference.strip_prefix(SCHEMA_REF_PREFIX) else {
        return false;
    };
    if segment.is_empty() || segment.contains('/') {
        return false;
    }

    root.pointer("/components/schemas")
        .and_then(Value::as_object)
        .is_some_and(|schemas| schemas.contains_key(&unescape_pointer(segment)))
}

fn escape_pointer(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

fn unescape_pointer(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

fn check_operations(doc: &Value, findings: &mut Vec<Finding>) {
    let Some(paths) = doc.get("paths").and_then(Value::as_object) else {
        return;
    };

    let declared_tags: BTreeSet<&str> = doc
        .get("tags")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|tag| tag.get("name").and_then(Value::as_str))
        .collect();

    let declared_schemes: BTreeSet<&str> = doc
        .pointer("/components/securitySchemes")
        .and_then(Value::as_object)
        .map(|schemes| schemes.keys().map(String::as_str).collect())
        .unwrap_or_default();

    for (path, item) in paths {
        for method in METHODS {
            let Some(operation) = item.get(method) else {
                continue;
            };

            let has_response = operation
                .get("responses")
                .and_then(Value::as_object)
                .is_some_and(|responses| !responses.is_empty());
            if !has_response {
                findings.push(Finding::NoResponses {
                    path: path.clone(),
                    method: method.to_string(),
                });
            }

            for tag in operation
                .get("tags")
                .and_then(Value::as_array)
                .into_iter()
                .flatten()
                .filter_map(Value::as_str)
            {
                if !declared_tags.contains(tag) {
                    findings.push(Finding::UndeclaredTag {
                        path: path.clone(),
                        method: method.to_string(),
                        tag: tag.to_string(),
                    });
                }
            }

            for requirement in operation
                .get("security")
                .and_then(Value::as_array)
                .into_iter()
                .flatten()
                .filter_map(Value::as_object)
            {
                for scheme in requirement.keys() {
                    if !declared_schemes.contains(scheme.as_str()) {
                        findings.push(Finding::UndeclaredSecurityScheme {
                            path: path.clone(),
                            method: method.to_string(),
                            scheme: scheme.clone(),
                        });
                    }
                }
            }
        }
    }
}

fn check_required_examples(doc: &Value, findings: &mut Vec<Finding>) {
    let Some(schemas) = doc.pointer("/components/schemas").and_then(Value::as_object) else {
        return;
    };

    for (name, schema) in schemas {
        let properties = schema.get("properties");

        for required in schema
            .get("required")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
        {
            let Some(example) = properties
                .and_then(|p| p.get(required))
                .and_then(|p| p.get("example"))
            else {
                continue;
            };

            let filled = example.as_str().is_some_and(|s| !s.trim().is_empty());
            if !filled {
                findings.push(Finding::BlankExample {
                    schema: name.clone(),
                    property: required.to_string(),
                });
            }
        }
    }
}
