//! Method descriptors.

use jgencode_codegen::{CodeFragment, Renderable};
use jgencode_core::is_blank;

use crate::{
    annotation::AnnotationUsage,
    error::{Error, Result},
    modifier::{Modifier, ModifierSet, modifier_prefix},
    parameter::{ParameterDescriptor, parameter_list},
    types::TypeRef,
};

/// A frozen method declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodDescriptor {
    name: String,
    return_type: Option<TypeRef>,
    modifiers: ModifierSet,
    parameters: Vec<ParameterDescriptor>,
    body: Option<String>,
    is_abstract: bool,
    annotations: Vec<AnnotationUsage>,
    fragments: Vec<CodeFragment>,
}

impl MethodDescriptor {
    pub fn builder() -> MethodBuilder {
        MethodBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared return type; `None` means `void`.
    pub fn return_type(&self) -> Option<&TypeRef> {
        self.return_type.as_ref()
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

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn annotations(&self) -> &[AnnotationUsage] {
        &self.annotations
    }

    pub fn fragments(&self) -> &[CodeFragment] {
        &self.fragments
    }
}

impl Renderable for MethodDescriptor {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.fragments.clone()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MethodBuilder {
    name: Option<String>,
    return_type: Option<TypeRef>,
    modifiers: ModifierSet,
    parameters: Vec<ParameterDescriptor>,
    body: Option<String>,
    is_abstract: bool,
    annotations: Vec<AnnotationUsage>,
}

impl MethodBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn return_type(mut self, return_type: TypeRef) -> Self {
        self.return_type = Some(return_type);
        self
    }

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

    /// Body text, one statement per line. Ignored for abstract methods.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Terminate the signature with `;` instead of a body block.
    pub fn is_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    pub fn add_annotation(mut self, annotation: AnnotationUsage) -> Self {
        push_unique(&mut self.annotations, annotation);
        self
    }

    pub fn build(self) -> Result<MethodDescriptor> {
        let name = self.name.ok_or_else(|| Error::missing("method", "name"))?;
        if is_blank(&name) {
            return Err(Error::BlankName { what: "method" });
        }
        let name = name.trim().to_string();

        let return_type = self
            .return_type
            .as_ref()
            .map(TypeRef::full_name)
            .unwrap_or_else(|| "void".to_string());
        let signature = format!(
            "{}{} {}({})",
            modifier_prefix(&self.modifiers),
            return_type,
            name,
            parameter_list(&self.parameters)
        );

        let mut fragments = annotation_fragments(&self.annotations);
        if self.is_abstract {
            fragments.push(CodeFragment::line(format!("{signature};")));
        } else {
            fragments.push(body_block(signature, self.body.as_deref()));
        }
        fragments.push(CodeFragment::blank());

        tracing::trace!(method = %name, "method built");
        Ok(MethodDescriptor {
            name,
            return_type: self.return_type,
            modifiers: self.modifiers,
            parameters: self.parameters,
            body: self.body,
            is_abstract: self.is_abstract,
            annotations: self.annotations,
            fragments,
        })
    }
}

pub(crate) fn push_unique<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if !items.contains(&item) {
        items.push(item);
    }
}

pub(crate) fn annotation_fragments(annotations: &[AnnotationUsage]) -> Vec<CodeFragment> {
    annotations
        .iter()
        .flat_map(|a| a.fragments().iter().cloned())
        .collect()
}

/// `signature{`, the body one level deeper, then `}`.
///
/// Leading and trailing blank lines of the body are dropped; blank lines
/// inside it are kept.
pub(crate) fn body_block(signature: String, body: Option<&str>) -> CodeFragment {
    let lines: Vec<&str> = body
        .map(|body| body.lines().map(str::trim_end).collect())
        .unwrap_or_default();
    let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
    let end = lines.iter().rposition(|l| !l.is_empty()).map_or(start, |i| i + 1);

    let body = lines[start..end]
        .iter()
        .map(|line| {
            if line.is_empty() {
                CodeFragment::blank()
            } else {
                CodeFragment::line(*line)
            }
        })
        .collect();
    CodeFragment::block(format!("{signature}{{"), body, Some("}".to_string()))
}

#[cfg(test)]
mod tests {
    use jgencode_codegen::CodeBuilder;

    use super::*;

    fn lines(method: &MethodDescriptor) -> Vec<String> {
        let mut builder = CodeBuilder::java();
        builder.emit(method);
        builder.build()
    }

    #[test]
    fn test_abstract_method_has_no_body() {
        let method = MethodDescriptor::builder()
            .name("findByName")
            .return_type(TypeRef::declared("", "Optional<com.acme.Widget>").unwrap())
            .add_parameter(ParameterDescriptor::new("name", TypeRef::native("String")))
            .body("return null;")
            .is_abstract(true)
            .build()
            .unwrap();

        assert_eq!(
            lines(&method),
            vec!["Optional<Widget> findByName(String name);", ""]
        );
    }

    #[test]
    fn test_concrete_method_with_blank_body() {
        let method = MethodDescriptor::builder()
            .name("reset")
            .add_modifier(Modifier::Public)
            .build()
            .unwrap();

        assert_eq!(lines(&method), vec!["public void reset(){", "}", ""]);
    }

    #[test]
    fn test_body_lines_are_indented() {
        let method = MethodDescriptor::builder()
            .name("describe")
            .add_modifier(Modifier::Public)
            .return_type(TypeRef::native("String"))
            .add_annotation(AnnotationUsage::override_marker())
            .body("\nvar text = name;\n\nreturn text;\n\n")
            .build()
            .unwrap();

        assert_eq!(
            lines(&method),
            vec![
                "@Override",
                "public String describe(){",
                "    var text = name;",
                "",
                "    return text;",
                "}",
                "",
            ]
        );
    }

    #[test]
    fn test_duplicate_parameters_collapse() {
        let id = ParameterDescriptor::new("id", TypeRef::native("long"));
        let method = MethodDescriptor::builder()
            .name("delete")
            .add_parameters([id.clone(), id])
            .build()
            .unwrap();

        assert_eq!(method.parameters().len(), 1);
        assert_eq!(method.return_type(), None);
    }

    #[test]
    fn test_missing_name() {
        let err = MethodDescriptor::builder().build().unwrap_err();
        assert!(matches!(
            err,
            Error::MissingState {
                descriptor: "method",
                field: "name"
            }
        ));
    }
}
