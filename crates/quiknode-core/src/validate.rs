//! Generic input validation engine.
//!
//! Method schemas are data: a table of [`Field`] records plus optional
//! cross-field [`Refinement`] predicates, consumed by one generic
//! [`Schema::validate`] routine. Validation never short-circuits — every
//! violation in the input is collected into a single [`ValidationError`]
//! so callers see the complete picture in one round.
//!
//! Schemas are closed: keys not declared by the schema are violations,
//! never silently ignored.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

/// A single `(field path, message)` violation record.
///
/// The path is empty for object-level violations (unrecognized keys,
/// cross-field refinements).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// A violation attached to the object itself rather than a field.
    pub fn root(message: impl Into<String>) -> Self {
        Self::new("", message)
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Aggregate of every violation found in one validation run.
///
/// Either validation fully succeeds (no error) or the error lists every
/// violation; it is never partially constructed.
#[derive(Debug, Error)]
#[error("QuickNode SDK input validation error: {}", format_violations(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// The per-violation records, for programmatic inspection.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Primitive shape of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 42-character `0x`-prefixed hex address.
    EvmAddress,
    /// Any JSON string.
    Str,
    /// A number strictly greater than zero.
    PositiveNumber,
    /// Array of JSON strings.
    StringArray,
    /// Array of EVM addresses.
    EvmAddressArray,
}

/// One declared field of a method schema.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Field may be omitted or explicitly `null`.
    pub nullish: bool,
}

/// A cross-field predicate; returns a violation when the constraint fails.
pub type Refinement = fn(&Map<String, Value>) -> Option<Violation>;

/// Pagination fields shared by most list-returning methods.
const PAGINATION_FIELDS: [Field; 2] = [
    Field {
        name: "perPage",
        kind: FieldKind::PositiveNumber,
        nullish: true,
    },
    Field {
        name: "page",
        kind: FieldKind::PositiveNumber,
        nullish: true,
    },
];

/// Declarative description of one RPC method's expected input.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub fields: &'static [Field],
    /// Also declare the shared `perPage`/`page` fields.
    pub with_pagination: bool,
    pub refinements: &'static [Refinement],
}

impl Schema {
    /// Run every declared rule against `input`, collecting all violations.
    pub fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        let Some(obj) = input.as_object() else {
            return Err(ValidationError::new(vec![Violation::root(
                "expected an object",
            )]));
        };

        let mut violations = Vec::new();

        for field in self.declared_fields() {
            check_field(obj, field, &mut violations);
        }

        let unknown: Vec<String> = obj
            .keys()
            .filter(|key| !self.is_declared(key))
            .map(|key| format!("'{key}'"))
            .collect();
        if !unknown.is_empty() {
            violations.push(Violation::root(format!(
                "unrecognized key(s) in object: {}",
                unknown.join(", ")
            )));
        }

        for refinement in self.refinements {
            if let Some(violation) = refinement(obj) {
                violations.push(violation);
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(violations))
        }
    }

    fn declared_fields(&self) -> impl Iterator<Item = &Field> {
        let pagination: &'static [Field] = if self.with_pagination {
            &PAGINATION_FIELDS
        } else {
            &[]
        };
        self.fields.iter().chain(pagination.iter())
    }

    fn is_declared(&self, key: &str) -> bool {
        self.declared_fields().any(|field| field.name == key)
    }
}

fn check_field(obj: &Map<String, Value>, field: &Field, out: &mut Vec<Violation>) {
    match obj.get(field.name) {
        None | Some(Value::Null) => {
            if !field.nullish {
                out.push(Violation::new(field.name, "required"));
            }
        }
        Some(value) => check_value(field.name, value, field.kind, out),
    }
}

fn check_value(path: &str, value: &Value, kind: FieldKind, out: &mut Vec<Violation>) {
    match kind {
        FieldKind::Str => {
            if !value.is_string() {
                out.push(Violation::new(path, "expected a string"));
            }
        }
        FieldKind::EvmAddress => match value.as_str() {
            Some(s) => check_evm_address(path, s, out),
            None => out.push(Violation::new(path, "expected a string")),
        },
        FieldKind::PositiveNumber => match value.as_f64() {
            Some(n) if n > 0.0 => {}
            Some(_) => out.push(Violation::new(path, "must be greater than 0")),
            None => out.push(Violation::new(path, "expected a number")),
        },
        FieldKind::StringArray => match value.as_array() {
            Some(items) => {
                for (i, item) in items.iter().enumerate() {
                    if !item.is_string() {
                        out.push(Violation::new(format!("{path}.{i}"), "expected a string"));
                    }
                }
            }
            None => out.push(Violation::new(path, "expected an array")),
        },
        FieldKind::EvmAddressArray => match value.as_array() {
            Some(items) => {
                for (i, item) in items.iter().enumerate() {
                    check_value(&format!("{path}.{i}"), item, FieldKind::EvmAddress, out);
                }
            }
            None => out.push(Violation::new(path, "expected an array")),
        },
    }
}

/// Address shape checks run independently so a bad input reports every
/// failed check, not just the first.
fn check_evm_address(path: &str, s: &str, out: &mut Vec<Violation>) {
    if s.len() != 42 {
        out.push(Violation::new(path, "must contain exactly 42 characters"));
    }
    if !s.starts_with("0x") {
        out.push(Violation::new(path, "must start with \"0x\""));
    }
    if !address_pattern().is_match(s) {
        out.push(Violation::new(path, "not a valid address"));
    }
}

fn address_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("^0x[a-fA-F0-9]{40}$").expect("static address pattern"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const WALLET_ONLY: Schema = Schema {
        fields: &[Field {
            name: "wallet",
            kind: FieldKind::EvmAddress,
            nullish: false,
        }],
        with_pagination: true,
        refinements: &[],
    };

    fn good_address() -> String {
        format!("0x{}", "ab".repeat(20))
    }

    #[test]
    fn valid_address_passes() {
        let input = json!({"wallet": good_address()});
        assert!(WALLET_ONLY.validate(&input).is_ok());
    }

    #[test]
    fn short_address_fails_length_check() {
        let input = json!({"wallet": format!("0x{}", "a".repeat(39))});
        let err = WALLET_ONLY.validate(&input).unwrap_err();
        assert!(err
            .violations()
            .iter()
            .any(|v| v.path == "wallet" && v.message.contains("42 characters")));
    }

    #[test]
    fn unprefixed_address_collects_prefix_and_pattern_violations() {
        // 42 chars but no 0x prefix: both checks must fire, not just the first.
        let input = json!({"wallet": "ab".repeat(21)});
        let err = WALLET_ONLY.validate(&input).unwrap_err();
        let messages: Vec<&str> = err
            .violations()
            .iter()
            .map(|v| v.message.as_str())
            .collect();
        assert!(messages.contains(&"must start with \"0x\""));
        assert!(messages.contains(&"not a valid address"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let input = json!({"wallet": good_address(), "walet": "typo"});
        let err = WALLET_ONLY.validate(&input).unwrap_err();
        let unknown = &err.violations()[0];
        assert_eq!(unknown.path, "");
        assert!(unknown.message.contains("'walet'"));
    }

    #[test]
    fn missing_required_field_is_reported() {
        let err = WALLET_ONLY.validate(&json!({})).unwrap_err();
        assert_eq!(err.violations()[0].path, "wallet");
        assert_eq!(err.violations()[0].message, "required");
    }

    #[test]
    fn nullish_pagination_accepts_null_and_absence() {
        assert!(WALLET_ONLY
            .validate(&json!({"wallet": good_address(), "perPage": null}))
            .is_ok());
        assert!(WALLET_ONLY
            .validate(&json!({"wallet": good_address(), "page": 2}))
            .is_ok());
    }

    #[test]
    fn non_positive_pagination_is_rejected() {
        let err = WALLET_ONLY
            .validate(&json!({"wallet": good_address(), "perPage": 0}))
            .unwrap_err();
        assert_eq!(err.violations()[0].path, "perPage");
        assert_eq!(err.violations()[0].message, "must be greater than 0");
    }

    #[test]
    fn array_violations_carry_element_paths() {
        const CONTRACTS: Schema = Schema {
            fields: &[Field {
                name: "contracts",
                kind: FieldKind::EvmAddressArray,
                nullish: false,
            }],
            with_pagination: false,
            refinements: &[],
        };
        let input = json!({"contracts": [format!("0x{}", "ab".repeat(20)), "bogus"]});
        let err = CONTRACTS.validate(&input).unwrap_err();
        assert!(err.violations().iter().all(|v| v.path == "contracts.1"));
    }

    #[test]
    fn non_object_input_is_one_root_violation() {
        let err = WALLET_ONLY.validate(&json!("nope")).unwrap_err();
        assert_eq!(err.violations().len(), 1);
        assert_eq!(err.violations()[0].path, "");
    }

    #[test]
    fn message_joins_violations_with_paths() {
        let err = ValidationError::new(vec![
            Violation::new("wallet", "required"),
            Violation::root("fromBlock must be less than toBlock"),
        ]);
        assert_eq!(
            err.to_string(),
            "QuickNode SDK input validation error: wallet: required, fromBlock must be less than toBlock"
        );
    }
}
