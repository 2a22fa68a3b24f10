//! Import resolution.
//!
//! Walks every type a unit's rendered text mentions and collects the
//! fully-qualified names that need an `import` line.

use jgencode_codegen::ImportSet;
use jgencode_core::split_qualified;

use crate::{
    annotation::{AnnotationUsage, AttributeValue},
    parameter::ParameterDescriptor,
    types::{GenericArg, TypeRef},
    unit::{UnitShape, UnitView},
};

/// Compute the imports of a unit.
///
/// Native types, unqualified names, `Override` and types from the unit's
/// own package are left out. The result is sorted lexicographically.
///
/// Short names were already resolved when the types were parsed, so every
/// type is imported under the package it carries.
pub fn resolve_imports(unit: &UnitView<'_>) -> ImportSet {
    let mut collector = Collector {
        imports: ImportSet::new(),
    };

    for ty in unit.imports {
        collector.add_type(ty);
    }
    collector.imports.extend(unit.import_names.iter().map(String::as_str));

    for annotation in unit.annotations {
        collector.add_annotation(annotation);
    }

    let record = matches!(unit.shape, UnitShape::Record);
    for field in unit.fields {
        collector.add_type(field.field_type());
        // Record components are rendered without their annotations.
        if !record {
            for annotation in field.annotations() {
                collector.add_annotation(annotation);
            }
        }
    }

    for method in unit.methods {
        if let Some(ty) = method.return_type() {
            collector.add_type(ty);
        }
        collector.add_parameters(method.parameters());
        for annotation in method.annotations() {
            collector.add_annotation(annotation);
        }
    }

    match unit.shape {
        UnitShape::Class {
            superclass,
            interfaces,
            constructors,
        } => {
            if let Some(superclass) = superclass {
                collector.add_type(superclass);
            }
            for interface in interfaces {
                collector.add_type(interface);
            }
            for constructor in constructors {
                collector.add_parameters(constructor.parameters());
                for annotation in constructor.annotations() {
                    collector.add_annotation(annotation);
                }
            }
        }
        UnitShape::Interface { extends } => {
            for interface in extends {
                collector.add_type(interface);
            }
        }
        UnitShape::Record => {}
    }

    let mut imports = collector.imports;
    imports.retain(|name| is_importable(name, unit.package));
    tracing::debug!(unit = %unit.name, imports = imports.len(), "resolved imports");
    imports
}

fn is_importable(name: &str, unit_package: &str) -> bool {
    let (package, simple_name) = split_qualified(name);
    !package.is_empty()
        && package != unit_package
        && !(simple_name == "Override" && package == "java.lang")
}

struct Collector {
    imports: ImportSet,
}

impl Collector {
    fn add_type(&mut self, ty: &TypeRef) {
        let TypeRef::Declared(declared) = ty else {
            return;
        };
        if !declared.package().is_empty() {
            self.imports.add(&ty.qualified_name());
        }
        for (_, arg) in declared.generics() {
            match arg {
                GenericArg::Type(inner) | GenericArg::Wildcard { ty: inner, .. } => {
                    self.add_type(inner)
                }
                GenericArg::Placeholder(_) => {}
            }
        }
    }

    fn add_annotation(&mut self, annotation: &AnnotationUsage) {
        self.add_type(annotation.class_type());
        for (_, value) in annotation.attributes() {
            if let AttributeValue::Type(ty) = value {
                self.add_type(ty);
            }
        }
    }

    fn add_parameters(&mut self, parameters: &[ParameterDescriptor]) {
        for parameter in parameters.iter().filter(|p| p.declaration().is_some()) {
            self.add_type(parameter.param_type());
            for annotation in parameter.annotations() {
                self.add_annotation(annotation);
            }
        }
    }
}
