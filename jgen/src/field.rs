//! Field descriptors.

use jgencode_codegen::{CodeFragment, Renderable};
use jgencode_core::is_blank;

use crate::{
    annotation::AnnotationUsage,
    error::{Error, Result},
    method::{annotation_fragments, push_unique},
    modifier::{Modifier, ModifierSet, modifier_prefix},
    types::TypeRef,
};

/// A frozen field declaration.
///
/// Inside a record the field becomes a record component and only its type
/// and name are used.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    name: String,
    field_type: TypeRef,
    modifiers: ModifierSet,
    default_value: Option<String>,
    setter: bool,
    getter: bool,
    annotations: Vec<AnnotationUsage>,
    fragments: Vec<CodeFragment>,
}

impl FieldDescriptor {
    pub fn builder() -> FieldBuilder {
        FieldBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> &TypeRef {
        &self.field_type
    }

    pub fn modifiers(&self) -> &ModifierSet {
        &self.modifiers
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn has_setter(&self) -> bool {
        self.setter
    }

    pub fn has_getter(&self) -> bool {
        self.getter
    }

    pub fn annotations(&self) -> &[AnnotationUsage] {
        &self.annotations
    }

    pub fn fragments(&self) -> &[CodeFragment] {
        &self.fragments
    }

    /// `Type name`, as used in a record header.
    pub fn component(&self) -> String {
        format!("{} {}", self.field_type.full_name(), self.name)
    }
}

impl Renderable for FieldDescriptor {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.fragments.clone()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FieldBuilder {
    name: Option<String>,
    field_type: Option<TypeRef>,
    modifiers: ModifierSet,
    default_value: Option<String>,
    setter: bool,
    getter: bool,
    annotations: Vec<AnnotationUsage>,
}

impl FieldBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Use a native type such as `int` or `String`.
    pub fn native_type(self, name: impl Into<String>) -> Self {
        self.field_type(TypeRef::native(name))
    }

    /// Use a declared class type.
    pub fn class_type(self, class_type: TypeRef) -> Self {
        self.field_type(class_type)
    }

    /// Set the type. The last call wins.
    pub fn field_type(mut self, field_type: TypeRef) -> Self {
        self.field_type = Some(field_type);
        self
    }

    pub fn add_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    /// Initializer written after `=`, taken verbatim.
    pub fn default_value(mut self, literal: impl Into<String>) -> Self {
        self.default_value = Some(literal.into());
        self
    }

    /// Generate `setX` when the field lives in a class.
    pub fn setter(mut self, setter: bool) -> Self {
        self.setter = setter;
        self
    }

    /// Generate `getX` when the field lives in a class.
    pub fn getter(mut self, getter: bool) -> Self {
        self.getter = getter;
        self
    }

    pub fn add_annotation(mut self, annotation: AnnotationUsage) -> Self {
        push_unique(&mut self.annotations, annotation);
        self
    }

    pub fn build(self) -> Result<FieldDescriptor> {
        let field_type = self
            .field_type
            .ok_or_else(|| Error::missing("field", "type"))?;
        let name = self.name.ok_or_else(|| Error::missing("field", "name"))?;
        if is_blank(&name) {
            return Err(Error::BlankName { what: "field" });
        }
        let name = name.trim().to_string();

        let mut fragments = annotation_fragments(&self.annotations);
        let initializer = self
            .default_value
            .as_deref()
            .map(|value| format!(" = {value}"))
            .unwrap_or_default();
        fragments.push(CodeFragment::line(format!(
            "{}{} {}{};",
            modifier_prefix(&self.modifiers),
            field_type.full_name(),
            name,
            initializer
        )));
        fragments.push(CodeFragment::blank());

        tracing::trace!(field = %name, "field built");
        Ok(FieldDescriptor {
            name,
            field_type,
            modifiers: self.modifiers,
            default_value: self.default_value,
            setter: self.setter,
            getter: self.getter,
            annotations: self.annotations,
            fragments,
        })
    }
}

#[cfg(test)]
mod tests {
    use jgencode_codegen::CodeBuilder;

    use super::*;

    fn lines(field: &FieldDescriptor) -> Vec<String> {
        let mut builder = CodeBuilder::java();
        builder.emit(field);
        builder.build()
    }

    #[test]
    fn test_plain_field() {
        let field = FieldDescriptor::builder()
            .name("age")
            .native_type("int")
            .add_modifier(Modifier::Private)
            .build()
            .unwrap();

        assert_eq!(lines(&field), vec!["private int age;", ""]);
    }

    #[test]
    fn test_field_with_default_and_annotations() {
        let column = AnnotationUsage::builder()
            .class_type(TypeRef::declared("jakarta.persistence", "Column").unwrap())
            .attribute("nullable", false)
            .build()
            .unwrap();
        let field = FieldDescriptor::builder()
            .name("tags")
            .class_type(TypeRef::declared("", "List<String>").unwrap())
            .add_modifier(Modifier::Final)
            .add_modifier(Modifier::Private)
            .default_value("new ArrayList<>()")
            .add_annotation(column.clone())
            .add_annotation(column)
            .build()
            .unwrap();

        assert_eq!(field.annotations().len(), 1);
        assert_eq!(
            lines(&field),
            vec![
                "@Column(",
                "    nullable = false",
                ")",
                "private final List<String> tags = new ArrayList<>();",
                "",
            ]
        );
    }

    #[test]
    fn test_last_type_wins() {
        let field = FieldDescriptor::builder()
            .name("id")
            .native_type("long")
            .class_type(TypeRef::declared("", "UUID").unwrap())
            .build()
            .unwrap();

        assert_eq!(field.field_type().qualified_name(), "java.util.UUID");
        assert_eq!(field.component(), "UUID id");
    }

    #[test]
    fn test_missing_state() {
        let no_type = FieldDescriptor::builder().name("age").build().unwrap_err();
        assert!(matches!(
            no_type,
            Error::MissingState {
                descriptor: "field",
                field: "type"
            }
        ));

        let no_name = FieldDescriptor::builder().native_type("int").build().unwrap_err();
        assert!(matches!(
            no_name,
            Error::MissingState {
                descriptor: "field",
                field: "name"
            }
        ));

        let blank = FieldDescriptor::builder()
            .name(" ")
            .native_type("int")
            .build()
            .unwrap_err();
        assert!(matches!(blank, Error::BlankName { what: "field" }));
    }
}
