//! Annotation usages.

use jgencode_codegen::{CodeFragment, Renderable};
use ordered_float::OrderedFloat;

use crate::{
    error::{Error, Result},
    types::TypeRef,
};

/// Value of one annotation attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeValue {
    /// Rendered as a class literal, `Widget.class`.
    Type(TypeRef),
    Integer(i64),
    Float(OrderedFloat<f64>),
    Bool(bool),
    /// Rendered quoted and escaped.
    Str(String),
}

impl AttributeValue {
    /// Source text of the value.
    pub fn literal(&self) -> String {
        match self {
            Self::Type(ty) => ty.class_literal(),
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => float_literal(value.into_inner()),
            Self::Bool(value) => value.to_string(),
            Self::Str(value) => quote(value),
        }
    }
}

fn float_literal(value: f64) -> String {
    if value.is_nan() {
        "Double.NaN".to_string()
    } else if value == f64::INFINITY {
        "Double.POSITIVE_INFINITY".to_string()
    } else if value == f64::NEG_INFINITY {
        "Double.NEGATIVE_INFINITY".to_string()
    } else {
        format!("{value:?}")
    }
}

fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

impl From<TypeRef> for AttributeValue {
    fn from(ty: TypeRef) -> Self {
        Self::Type(ty)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Float(OrderedFloat(value))
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// An annotation applied to a unit, field, method, constructor or parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnotationUsage {
    class_type: TypeRef,
    attributes: Vec<(String, AttributeValue)>,
    fragments: Vec<CodeFragment>,
}

impl AnnotationUsage {
    pub fn builder() -> AnnotationBuilder {
        AnnotationBuilder::default()
    }

    /// An annotation without attributes.
    pub fn marker(class_type: TypeRef) -> Self {
        let fragments = render(&class_type, &[]);
        Self {
            class_type,
            attributes: Vec::new(),
            fragments,
        }
    }

    /// `@Override`, which is never imported.
    pub fn override_marker() -> Self {
        Self::marker(TypeRef::native("Override"))
    }

    pub fn class_type(&self) -> &TypeRef {
        &self.class_type
    }

    pub fn attributes(&self) -> &[(String, AttributeValue)] {
        &self.attributes
    }

    /// Multi-line form used above declarations.
    pub fn fragments(&self) -> &[CodeFragment] {
        &self.fragments
    }

    /// Single-line form used in parameter lists, e.g. `@Size(min = 1, max = 8)`.
    pub fn inline(&self) -> String {
        let name = format!("@{}", self.class_type.simple_name());
        if self.attributes.is_empty() {
            return name;
        }
        let pairs: Vec<String> = self
            .attributes
            .iter()
            .map(|(key, value)| format!("{key} = {}", value.literal()))
            .collect();
        format!("{name}({})", pairs.join(", "))
    }
}

impl Renderable for AnnotationUsage {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.fragments.clone()
    }
}

fn render(class_type: &TypeRef, attributes: &[(String, AttributeValue)]) -> Vec<CodeFragment> {
    let name = format!("@{}", class_type.simple_name());
    if attributes.is_empty() {
        return vec![CodeFragment::line(name)];
    }
    let last = attributes.len() - 1;
    let body = attributes
        .iter()
        .enumerate()
        .map(|(i, (key, value))| {
            let comma = if i < last { "," } else { "" };
            CodeFragment::line(format!("{key} = {}{comma}", value.literal()))
        })
        .collect();
    vec![CodeFragment::block(
        format!("{name}("),
        body,
        Some(")".to_string()),
    )]
}

#[derive(Debug, Clone, Default)]
pub struct AnnotationBuilder {
    class_type: Option<TypeRef>,
    attributes: Vec<(String, AttributeValue)>,
}

impl AnnotationBuilder {
    /// The annotation type.
    pub fn class_type(mut self, class_type: TypeRef) -> Self {
        self.class_type = Some(class_type);
        self
    }

    /// Set an attribute. Setting an existing name replaces its value in place.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    pub fn build(self) -> Result<AnnotationUsage> {
        let class_type = self
            .class_type
            .ok_or_else(|| Error::missing("annotation", "class type"))?;
        let fragments = render(&class_type, &self.attributes);
        tracing::trace!(annotation = %class_type.simple_name(), "annotation built");
        Ok(AnnotationUsage {
            class_type,
            attributes: self.attributes,
            fragments,
        })
    }
}
