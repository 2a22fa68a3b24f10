//! Constructor descriptors.
//!
//! A constructor does not know the class it belongs to. Its rendered text
//! carries [`CLASSNAME_PLACEHOLDER`] where the class name goes, and the unit
//! renderer swaps in the real name.

use jgencode_codegen::{CodeFragment, Renderable};

use crate::{
    annotation::AnnotationUsage,
    error::Result,
    method::{annotation_fragments, body_block, push_unique},
    modifier::{Modifier, ModifierSet, modifier_prefix},
    parameter::{ParameterDescriptor, parameter_list},
};

/// Token standing in for the owning class name.
pub const CLASSNAME_PLACEHOLDER: &str = "{_CLASSNAME_}";

/// A frozen constructor declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstructorDescriptor {
    modifiers: ModifierSet,
    parameters: Vec<ParameterDescriptor>,
    body: Option<String>,
    annotations: Vec<AnnotationUsage>,
    fragments: Vec<CodeFragment>,
}

impl ConstructorDescriptor {
    pub fn builder() -> ConstructorBuilder {
        ConstructorBuilder::default()
    }

    pub fn modifiers(&self) -> &ModifierSet {
        &self.modifiers
    }

    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn annotations(&self) -> &[AnnotationUsage] {
        &self.annotations
    }

    /// Fragments with the class name still as a placeholder.
    pub fn fragments(&self) -> &[CodeFragment] {
        &self.fragments
    }

    /// Fragments for a class called `class_name`.
    pub fn fragments_for(&self, class_name: &str) -> Vec<CodeFragment> {
        self.fragments
            .iter()
            .map(|f| f.replace(CLASSNAME_PLACEHOLDER, class_name))
            .collect()
    }
}

impl Renderable for ConstructorDescriptor {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.fragments.clone()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConstructorBuilder {
    modifiers: ModifierSet,
    parameters: Vec<ParameterDescriptor>,
    body: Option<String>,
    annotations: Vec<AnnotationUsage>,
}

impl ConstructorBuilder {
    pub fn add_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    pub fn add_parameter(mut self, parameter: ParameterDescriptor) -> Self {
        push_unique(&mut self.parameters, parameter);
        self
    }

    pub fn add_parameters(mut self, parameters: impl IntoIterator<Item = ParameterDescriptor>) -> Self {
        for parameter in parameters {
            push_unique(&mut self.parameters, parameter);
        }
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn add_annotation(mut self, annotation: AnnotationUsage) -> Self {
        push_unique(&mut self.annotations, annotation);
        self
    }

    /// Freeze the constructor. Always succeeds; the `Result` keeps the
    /// signature in line with the other descriptor builders.
    pub fn build(self) -> Result<ConstructorDescriptor> {
        let signature = format!(
            "{}{}({})",
            modifier_prefix(&self.modifiers),
            CLASSNAME_PLACEHOLDER,
            parameter_list(&self.parameters)
        );
        let mut fragments = annotation_fragments(&self.annotations);
        fragments.push(body_block(signature, self.body.as_deref()));
        fragments.push(CodeFragment::blank());

        tracing::trace!(parameters = self.parameters.len(), "constructor built");
        Ok(ConstructorDescriptor {
            modifiers: self.modifiers,
            parameters: self.parameters,
            body: self.body,
            annotations: self.annotations,
            fragments,
        })
    }
}

#[cfg(test)]
mod tests {
    use jgencode_codegen::CodeBuilder;

    use super::*;
    use crate::types::TypeRef;

    #[test]
    fn test_placeholder_substitution() {
        let constructor = ConstructorDescriptor::builder()
            .add_modifier(Modifier::Public)
            .add_parameter(ParameterDescriptor::new("name", TypeRef::native("String")))
            .body("this.name = name;")
            .build()
            .unwrap();

        let mut raw = CodeBuilder::java();
        raw.emit(&constructor);
        assert_eq!(raw.lines()[0], "public {_CLASSNAME_}(String name){");

        let mut builder = CodeBuilder::java();
        builder.emit_fragments(&constructor.fragments_for("Widget"));
        assert_eq!(
            builder.build(),
            vec![
                "public Widget(String name){",
                "    this.name = name;",
                "}",
                "",
            ]
        );
    }
}
