//! Fluent builders that render Java classes, interfaces and records.
//!
//! Build type references and member descriptors, attach them to a unit
//! builder, and call `build()` to get a [`Definition`]: the rendered source
//! lines plus the package path a [`JavaFile`] writes them under.
//!
//! ```
//! use jgencode::{FieldDescriptor, Modifier, TypeRef, new_record_builder};
//!
//! let id = FieldDescriptor::builder()
//!     .name("id")
//!     .class_type(TypeRef::declared("", "UUID")?)
//!     .build()?;
//! let definition = new_record_builder("com.acme", "WidgetId")
//!     .add_modifier(Modifier::Public)
//!     .add_field(id)
//!     .build()?;
//!
//! assert_eq!(
//!     definition.lines(),
//!     &[
//!         "package com.acme;",
//!         "",
//!         "import java.util.UUID;",
//!         "",
//!         "public record WidgetId(UUID id){",
//!         "}",
//!     ]
//! );
//! # Ok::<(), jgencode::Error>(())
//! ```

mod annotation;
mod config;
mod constructor;
mod definition;
mod error;
mod field;
mod imports;
mod java_file;
mod method;
mod modifier;
mod parameter;
mod render;
mod types;
mod unit;

pub use annotation::{AnnotationBuilder, AnnotationUsage, AttributeValue};
pub use config::{RenderConfig, WellKnownTypes};
pub use constructor::{CLASSNAME_PLACEHOLDER, ConstructorBuilder, ConstructorDescriptor};
pub use definition::Definition;
pub use error::{Error, Result};
pub use field::{FieldBuilder, FieldDescriptor};
pub use imports::resolve_imports;
pub use java_file::JavaFile;
pub use method::{MethodBuilder, MethodDescriptor};
pub use modifier::{Modifier, ModifierSet};
pub use parameter::{ParameterBuilder, ParameterDescriptor};
pub use types::{
    DeclaredType, GenericArg, TypeParser, TypeRef, TypeRefBuilder, WildcardBound, is_native,
};
pub use unit::{
    Class, DeclarationKind, Interface, Record, UnitBuilder, UnitKind, UnitShape, UnitView,
    new_class_builder, new_interface_builder, new_record_builder,
};
