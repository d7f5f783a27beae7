//! Resource identifiers and region names.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// A reference to an infrastructure resource such as a VPC or route table.
///
/// A resource is referenced in exactly one way: by its literal id, by a key
/// exported from another stack's outputs, or by a pre-formatted template
/// expression. An identifier with none of these is blank, and callers decide
/// what a blank identifier resolves to.
///
/// In cluster.yaml an identifier is written as a mapping with `id`,
/// `idFromStackOutput` or `idFromFn`. When more than one of those is filled
/// in, the first non-empty one in that order is used.
///
/// # Example
///
/// ```
/// use kaws_types::Identifier;
///
/// let vpc = Identifier::literal("vpc-xxxx");
/// assert_eq!(vpc.reference(|| String::new()), r#""vpc-xxxx""#);
///
/// let imported = Identifier::from_fields("", "output-key", "");
/// assert_eq!(
///     imported.reference(|| String::new()),
///     r#"{ "Fn::ImportValue" : "output-key" }"#
/// );
///
/// let blank = Identifier::default();
/// assert_eq!(blank.reference(|| r#"{"Ref" : "VPC"}"#.to_string()), r#"{"Ref" : "VPC"}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "IdentifierFields", into = "IdentifierFields")]
pub enum Identifier {
    /// Nothing specified
    #[default]
    Blank,
    /// A literal resource id, e.g. `vpc-0a1b2c3d`
    Literal(String),
    /// The key of a value exported by another stack
    ImportedOutput(String),
    /// A complete template expression, embedded verbatim
    RawExpression(String),
}

impl Identifier {
    /// Reference a resource by its literal id.
    pub fn literal(id: impl Into<String>) -> Self {
        Self::from_fields(id.into(), String::new(), String::new())
    }

    /// Reference a resource through another stack's exported output.
    pub fn imported_output(key: impl Into<String>) -> Self {
        Self::from_fields(String::new(), key.into(), String::new())
    }

    /// Reference a resource through a pre-formatted template expression.
    pub fn raw_expression(expr: impl Into<String>) -> Self {
        Self::from_fields(String::new(), String::new(), expr.into())
    }

    /// Build an identifier from its three document fields.
    ///
    /// The literal id takes precedence over the stack output key, which takes
    /// precedence over the raw expression. Empty strings count as unset.
    pub fn from_fields(
        id: impl Into<String>,
        id_from_stack_output: impl Into<String>,
        id_from_fn: impl Into<String>,
    ) -> Self {
        let (id, output, expr) = (id.into(), id_from_stack_output.into(), id_from_fn.into());
        if !id.is_empty() {
            Self::Literal(id)
        } else if !output.is_empty() {
            Self::ImportedOutput(output)
        } else if !expr.is_empty() {
            Self::RawExpression(expr)
        } else {
            Self::Blank
        }
    }

    /// Whether nothing usable was specified.
    pub fn is_blank(&self) -> bool {
        self.value().is_none()
    }

    /// Whether something usable was specified.
    pub fn is_not_blank(&self) -> bool {
        !self.is_blank()
    }

    /// The id, output key or expression carried by this identifier.
    pub fn value(&self) -> Option<&str> {
        let v = match self {
            Self::Blank => return None,
            Self::Literal(v) | Self::ImportedOutput(v) | Self::RawExpression(v) => v,
        };
        if v.is_empty() {
            None
        } else {
            Some(v)
        }
    }

    /// Render this identifier as a fragment to embed in a stack template.
    ///
    /// A blank identifier, or one whose payload is empty, renders as whatever
    /// `fallback` returns.
    pub fn reference<F>(&self, fallback: F) -> String
    where
        F: FnOnce() -> String,
    {
        match self {
            Self::Literal(id) if !id.is_empty() => format!("\"{}\"", id),
            Self::ImportedOutput(key) if !key.is_empty() => {
                format!("{{ \"Fn::ImportValue\" : \"{}\" }}", key)
            }
            Self::RawExpression(expr) if !expr.is_empty() => expr.clone(),
            _ => {
                trace!("identifier is blank, using fallback reference");
                fallback()
            }
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value().unwrap_or_default())
    }
}

/// Document form of [`Identifier`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdentifierFields {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    id_from_stack_output: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    id_from_fn: String,
}

impl From<IdentifierFields> for Identifier {
    fn from(fields: IdentifierFields) -> Self {
        Identifier::from_fields(fields.id, fields.id_from_stack_output, fields.id_from_fn)
    }
}

impl From<Identifier> for IdentifierFields {
    fn from(identifier: Identifier) -> Self {
        let mut fields = IdentifierFields::default();
        match identifier {
            Identifier::Blank => {}
            Identifier::Literal(v) => fields.id = v,
            Identifier::ImportedOutput(v) => fields.id_from_stack_output = v,
            Identifier::RawExpression(v) => fields.id_from_fn = v,
        }
        fields
    }
}

/// An AWS region name such as `us-west-2`.
///
/// # Example
///
/// ```
/// use kaws_types::Region;
///
/// assert_eq!(Region::new("us-west-2").partition(), "aws");
/// assert_eq!(Region::new("cn-north-1").partition(), "aws-cn");
/// assert!(Region::default().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Region(String);

impl Region {
    /// Wrap a region name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether no region was given.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether this region lives in the China partition.
    pub fn is_china(&self) -> bool {
        self.0.starts_with("cn-")
    }

    /// The ARN partition resources in this region belong to.
    pub fn partition(&self) -> &'static str {
        if self.is_china() {
            "aws-cn"
        } else {
            "aws"
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn no_fallback() -> String {
        String::new()
    }

    #[test]
    fn test_reference_literal() {
        let i = Identifier::literal("vpc-xxxx");
        assert_eq!(i.reference(no_fallback), r#""vpc-xxxx""#);
    }

    #[test]
    fn test_reference_imported_output() {
        let i = Identifier::imported_output("output-key");
        assert_eq!(i.reference(no_fallback), r#"{ "Fn::ImportValue" : "output-key" }"#);
    }

    #[test]
    fn test_reference_raw_expression() {
        let i = Identifier::raw_expression(r#"{ "Fn::Ref" : foo }"#);
        assert_eq!(i.reference(no_fallback), r#"{ "Fn::Ref" : foo }"#);
    }

    #[test]
    fn test_reference_blank_uses_fallback() {
        let i = Identifier::default();
        assert!(i.is_blank());
        assert_eq!(i.reference(|| "fallback".to_string()), "fallback");
    }

    #[test]
    fn test_reference_empty_payload_uses_fallback() {
        let i = Identifier::Literal(String::new());
        assert!(i.is_blank());
        assert_eq!(i.reference(|| "fallback".to_string()), "fallback");
    }

    #[test]
    fn test_fallback_not_called_when_set() {
        let i = Identifier::literal("rtb-1");
        let r = i.reference(|| panic!("fallback must not be invoked"));
        assert_eq!(r, r#""rtb-1""#);
    }

    #[test]
    fn test_literal_wins_over_stack_output() {
        let i = Identifier::from_fields("vpc-xxxx", "output-key", "");
        assert_eq!(i, Identifier::Literal("vpc-xxxx".to_string()));
    }

    #[test]
    fn test_stack_output_wins_over_fn() {
        let i = Identifier::from_fields("", "output-key", r#"{ "Fn::Ref" : foo }"#);
        assert_eq!(i.reference(no_fallback), r#"{ "Fn::ImportValue" : "output-key" }"#);
    }

    #[test]
    fn test_deserialize_document_form() {
        let i: Identifier = serde_yaml::from_str("idFromStackOutput: my-stack-VPC").unwrap();
        assert_eq!(i, Identifier::ImportedOutput("my-stack-VPC".to_string()));

        let i: Identifier = serde_yaml::from_str("{id: vpc-1, idFromStackOutput: ignored}").unwrap();
        assert_eq!(i, Identifier::Literal("vpc-1".to_string()));

        let i: Identifier = serde_yaml::from_str("{}").unwrap();
        assert!(i.is_blank());
    }

    #[test]
    fn test_serialize_document_form() {
        let yaml = serde_yaml::to_string(&Identifier::literal("igw-1")).unwrap();
        assert_eq!(yaml.trim(), "id: igw-1");
    }

    #[test]
    fn test_display_shows_payload() {
        assert_eq!(Identifier::literal("vpc-1").to_string(), "vpc-1");
        assert_eq!(Identifier::Blank.to_string(), "");
    }

    #[test]
    fn test_region_partition() {
        assert_eq!(Region::new("us-east-1").partition(), "aws");
        assert!(Region::new("cn-northwest-1").is_china());
        assert_eq!(Region::new("ap-northeast-1").to_string(), "ap-northeast-1");
    }

    proptest! {
        #[test]
        fn prop_non_empty_literal_always_wins(
            id in "[a-z0-9-]{1,16}",
            key in "[a-z0-9-]{0,16}",
            expr in "[a-z0-9-]{0,16}",
        ) {
            let i = Identifier::from_fields(id.clone(), key, expr);
            prop_assert_eq!(i.reference(no_fallback), format!("\"{}\"", id));
        }
    }
}
