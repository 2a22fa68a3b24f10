//! Method and constructor parameters.

use crate::{
    annotation::AnnotationUsage,
    error::{Error, Result},
    method::push_unique,
    types::TypeRef,
};

/// A frozen parameter.
///
/// A parameter without a name is kept by its owner but left out of the
/// rendered parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterDescriptor {
    name: Option<String>,
    param_type: TypeRef,
    annotations: Vec<AnnotationUsage>,
    declaration: Option<String>,
}

impl ParameterDescriptor {
    pub fn builder() -> ParameterBuilder {
        ParameterBuilder::default()
    }

    /// Shorthand for a named parameter without annotations.
    pub fn new(name: impl Into<String>, param_type: TypeRef) -> Self {
        let name = name.into();
        let declaration = declaration(Some(&name), &param_type, &[]);
        Self {
            name: Some(name),
            param_type,
            annotations: Vec::new(),
            declaration,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn param_type(&self) -> &TypeRef {
        &self.param_type
    }

    pub fn annotations(&self) -> &[AnnotationUsage] {
        &self.annotations
    }

    /// `[@A ]Type name`, or `None` when the parameter has no name.
    pub fn declaration(&self) -> Option<&str> {
        self.declaration.as_deref()
    }
}

fn declaration(
    name: Option<&str>,
    param_type: &TypeRef,
    annotations: &[AnnotationUsage],
) -> Option<String> {
    let name = name.map(str::trim).filter(|name| !name.is_empty())?;
    let mut out = String::new();
    for annotation in annotations {
        out.push_str(&annotation.inline());
        out.push(' ');
    }
    out.push_str(&param_type.full_name());
    out.push(' ');
    out.push_str(name);
    Some(out)
}

/// Render a parameter list without the surrounding parentheses.
pub(crate) fn parameter_list(parameters: &[ParameterDescriptor]) -> String {
    parameters
        .iter()
        .filter_map(ParameterDescriptor::declaration)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Default)]
pub struct ParameterBuilder {
    name: Option<String>,
    param_type: Option<TypeRef>,
    annotations: Vec<AnnotationUsage>,
}

impl ParameterBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn param_type(mut self, param_type: TypeRef) -> Self {
        self.param_type = Some(param_type);
        self
    }

    pub fn native_type(self, name: impl Into<String>) -> Self {
        self.param_type(TypeRef::native(name))
    }

    pub fn add_annotation(mut self, annotation: AnnotationUsage) -> Self {
        push_unique(&mut self.annotations, annotation);
        self
    }

    pub fn build(self) -> Result<ParameterDescriptor> {
        let param_type = self
            .param_type
            .ok_or_else(|| Error::missing("parameter", "type"))?;
        let declaration = declaration(self.name.as_deref(), &param_type, &self.annotations);
        Ok(ParameterDescriptor {
            name: self.name,
            param_type,
            annotations: self.annotations,
            declaration,
        })
    }
}
