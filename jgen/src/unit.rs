//! Unit builders: the entry point for generating one source file.
//!
//! A [`UnitBuilder`] is parameterized by its kind. Inputs a kind cannot
//! render are simply not offered: only class builders have
//! [`extends`](UnitBuilder::extends) or constructors, and only interface
//! builders can extend other interfaces.
//!
//! # Example
//!
//! ```
//! use jgencode::{FieldDescriptor, Modifier, new_class_builder};
//!
//! let definition = new_class_builder("com.acme", "Widget")
//!     .add_modifier(Modifier::Public)
//!     .add_field(
//!         FieldDescriptor::builder()
//!             .name("age")
//!             .native_type("int")
//!             .add_modifier(Modifier::Private)
//!             .getter(true)
//!             .build()
//!             .unwrap(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(definition.lines()[0], "package com.acme;");
//! assert!(definition.lines().contains(&"public class Widget{".to_string()));
//! ```

use std::fmt;

use indexmap::IndexSet;
use jgencode_core::{is_blank, package_path};

use crate::{
    annotation::AnnotationUsage,
    config::RenderConfig,
    constructor::ConstructorDescriptor,
    definition::Definition,
    error::{Error, Result},
    field::FieldDescriptor,
    method::MethodDescriptor,
    modifier::{Modifier, ModifierSet},
    render::render_unit,
    types::TypeRef,
};

/// Which kind of declaration a unit produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Class,
    Interface,
    Record,
}

impl DeclarationKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Record => "record",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Kind-specific state of a class.
#[derive(Debug, Clone, Default)]
pub struct Class {
    superclass: Option<TypeRef>,
    interfaces: IndexSet<TypeRef>,
    constructors: IndexSet<ConstructorDescriptor>,
}

/// Kind-specific state of an interface.
#[derive(Debug, Clone, Default)]
pub struct Interface {
    extends: IndexSet<TypeRef>,
}

/// Records carry no extra state; their fields form the component list.
#[derive(Debug, Clone, Copy, Default)]
pub struct Record;

/// Borrowed view of the kind-specific state, matched on by the renderer.
#[derive(Debug, Clone, Copy)]
pub enum UnitShape<'a> {
    Class {
        superclass: Option<&'a TypeRef>,
        interfaces: &'a IndexSet<TypeRef>,
        constructors: &'a IndexSet<ConstructorDescriptor>,
    },
    Interface {
        extends: &'a IndexSet<TypeRef>,
    },
    Record,
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Class {}
    impl Sealed for super::Interface {}
    impl Sealed for super::Record {}
}

/// Implemented by [`Class`], [`Interface`] and [`Record`].
pub trait UnitKind: sealed::Sealed + fmt::Debug + Clone + Default {
    const KIND: DeclarationKind;

    fn shape(&self) -> UnitShape<'_>;
}

impl UnitKind for Class {
    const KIND: DeclarationKind = DeclarationKind::Class;

    fn shape(&self) -> UnitShape<'_> {
        UnitShape::Class {
            superclass: self.superclass.as_ref(),
            interfaces: &self.interfaces,
            constructors: &self.constructors,
        }
    }
}

impl UnitKind for Interface {
    const KIND: DeclarationKind = DeclarationKind::Interface;

    fn shape(&self) -> UnitShape<'_> {
        UnitShape::Interface {
            extends: &self.extends,
        }
    }
}

impl UnitKind for Record {
    const KIND: DeclarationKind = DeclarationKind::Record;

    fn shape(&self) -> UnitShape<'_> {
        UnitShape::Record
    }
}

/// Start a class in `package` named `name`.
pub fn new_class_builder(package: impl Into<String>, name: impl Into<String>) -> UnitBuilder<Class> {
    UnitBuilder::new(package, name)
}

/// Start an interface in `package` named `name`.
pub fn new_interface_builder(
    package: impl Into<String>,
    name: impl Into<String>,
) -> UnitBuilder<Interface> {
    UnitBuilder::new(package, name)
}

/// Start a record in `package` named `name`.
pub fn new_record_builder(package: impl Into<String>, name: impl Into<String>) -> UnitBuilder<Record> {
    UnitBuilder::new(package, name)
}

/// Accumulates the members of one unit and renders it.
///
/// Collections keep insertion order and drop structurally equal duplicates.
#[derive(Debug, Clone)]
pub struct UnitBuilder<K: UnitKind> {
    package: String,
    name: String,
    modifiers: ModifierSet,
    annotations: IndexSet<AnnotationUsage>,
    fields: IndexSet<FieldDescriptor>,
    methods: IndexSet<MethodDescriptor>,
    imports: IndexSet<TypeRef>,
    import_names: IndexSet<String>,
    kind: K,
}

/// Read-only view of a unit, shared by the import resolver and renderer.
#[derive(Debug, Clone, Copy)]
pub struct UnitView<'a> {
    pub package: &'a str,
    pub name: &'a str,
    pub modifiers: &'a ModifierSet,
    pub annotations: &'a IndexSet<AnnotationUsage>,
    pub fields: &'a IndexSet<FieldDescriptor>,
    pub methods: &'a IndexSet<MethodDescriptor>,
    pub imports: &'a IndexSet<TypeRef>,
    pub import_names: &'a IndexSet<String>,
    pub shape: UnitShape<'a>,
}

impl<K: UnitKind> UnitBuilder<K> {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into().trim().to_string(),
            name: name.into().trim().to_string(),
            modifiers: ModifierSet::new(),
            annotations: IndexSet::new(),
            fields: IndexSet::new(),
            methods: IndexSet::new(),
            imports: IndexSet::new(),
            import_names: IndexSet::new(),
            kind: K::default(),
        }
    }

    pub fn add_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.insert(field);
        self
    }

    pub fn add_fields(mut self, fields: impl IntoIterator<Item = FieldDescriptor>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn add_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.insert(method);
        self
    }

    pub fn add_methods(mut self, methods: impl IntoIterator<Item = MethodDescriptor>) -> Self {
        self.methods.extend(methods);
        self
    }

    pub fn add_annotation(mut self, annotation: AnnotationUsage) -> Self {
        self.annotations.insert(annotation);
        self
    }

    pub fn add_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    /// Import a type even if no member refers to it.
    pub fn add_import(mut self, ty: TypeRef) -> Self {
        self.imports.insert(ty);
        self
    }

    /// Import a fully-qualified name, e.g. `java.util.stream.Collectors`.
    pub fn add_import_name(mut self, name: impl Into<String>) -> Self {
        self.import_names.insert(name.into());
        self
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn view(&self) -> UnitView<'_> {
        UnitView {
            package: &self.package,
            name: &self.name,
            modifiers: &self.modifiers,
            annotations: &self.annotations,
            fields: &self.fields,
            methods: &self.methods,
            imports: &self.imports,
            import_names: &self.import_names,
            shape: self.kind.shape(),
        }
    }

    /// Render with the default configuration.
    pub fn build(&self) -> Result<Definition> {
        self.build_with(&RenderConfig::default())
    }

    /// Render with an explicit configuration.
    ///
    /// The builder is left untouched, so repeated calls give identical output.
    pub fn build_with(&self, config: &RenderConfig) -> Result<Definition> {
        if is_blank(&self.name) {
            return Err(Error::BlankName {
                what: K::KIND.keyword(),
            });
        }
        let kind = K::KIND;
        let lines = render_unit(&self.view(), config);
        tracing::debug!(
            unit = %self.name,
            kind = %kind,
            lines = lines.len(),
            "unit built"
        );
        Ok(Definition {
            class_name: self.name.clone(),
            package_name: self.package.clone(),
            package_path: package_path(&self.package),
            modifiers: self.modifiers.clone(),
            kind,
            lines,
        })
    }
}

impl UnitBuilder<Class> {
    /// Set the superclass. The last call wins.
    pub fn extends(mut self, superclass: TypeRef) -> Self {
        self.kind.superclass = Some(superclass);
        self
    }

    pub fn add_interface_implements(mut self, interface: TypeRef) -> Self {
        self.kind.interfaces.insert(interface);
        self
    }

    pub fn add_constructor(mut self, constructor: ConstructorDescriptor) -> Self {
        self.kind.constructors.insert(constructor);
        self
    }
}

impl UnitBuilder<Interface> {
    pub fn add_interface_extend(mut self, interface: TypeRef) -> Self {
        self.kind.extends.insert(interface);
        self
    }
}
