//! Unit rendering.

use jgencode_codegen::{CodeBuilder, CodeFragment};
use jgencode_core::capitalize;

use crate::{
    config::RenderConfig,
    field::FieldDescriptor,
    imports::resolve_imports,
    modifier::modifier_prefix,
    types::TypeRef,
    unit::{UnitShape, UnitView},
};

/// Render a whole unit to source lines.
///
/// Layout: package line, imports, unit annotations, the declaration header,
/// the members one level deep, and the closing brace. Class members come in
/// the order fields, accessors, constructors, methods.
pub(crate) fn render_unit(unit: &UnitView<'_>, config: &RenderConfig) -> Vec<String> {
    let imports = resolve_imports(unit);
    let mut code = CodeBuilder::new(config.indent);

    if !unit.package.is_empty() {
        code.push_line(&format!("package {};", unit.package));
        code.push_blank();
    }
    if !imports.is_empty() {
        for name in imports.iter() {
            code.push_line(&format!("import {name};"));
        }
        code.push_blank();
    }
    for annotation in unit.annotations {
        code.emit_fragments(annotation.fragments());
    }

    code.push_line(&header(unit));
    code.push_indent();
    match unit.shape {
        UnitShape::Class { constructors, .. } => {
            for field in unit.fields {
                code.emit(field);
            }
            for field in unit.fields {
                code.emit_fragments(&accessors(field));
            }
            for constructor in constructors {
                code.emit_fragments(&constructor.fragments_for(unit.name));
            }
            for method in unit.methods {
                code.emit(method);
            }
        }
        UnitShape::Interface { .. } => {
            for field in unit.fields {
                code.emit(field);
            }
            for method in unit.methods {
                code.emit(method);
            }
        }
        UnitShape::Record => {
            for method in unit.methods {
                code.emit(method);
            }
        }
    }
    code.push_dedent();
    code.push_line("}");

    code.build()
}

fn header(unit: &UnitView<'_>) -> String {
    let modifiers = modifier_prefix(unit.modifiers);
    match unit.shape {
        UnitShape::Class {
            superclass,
            interfaces,
            ..
        } => {
            let mut header = format!("{modifiers}class {}", unit.name);
            if let Some(superclass) = superclass {
                header.push_str(" extends ");
                header.push_str(&superclass.full_name());
            }
            if !interfaces.is_empty() {
                header.push_str(" implements ");
                header.push_str(&type_list(interfaces));
            }
            header.push('{');
            header
        }
        UnitShape::Interface { extends } => {
            let mut header = format!("{modifiers}interface {}", unit.name);
            if !extends.is_empty() {
                header.push_str(" extends ");
                header.push_str(&type_list(extends));
            }
            header.push('{');
            header
        }
        UnitShape::Record => {
            let components: Vec<String> = unit.fields.iter().map(FieldDescriptor::component).collect();
            format!("{modifiers}record {}({}){{", unit.name, components.join(", "))
        }
    }
}

fn type_list<'a>(types: impl IntoIterator<Item = &'a TypeRef>) -> String {
    types
        .into_iter()
        .map(TypeRef::full_name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Setter then getter, each followed by a blank line, as flagged on the field.
fn accessors(field: &FieldDescriptor) -> Vec<CodeFragment> {
    let name = field.name();
    let ty = field.field_type().full_name();
    let capitalized = capitalize(name);

    let mut fragments = Vec::new();
    if field.has_setter() {
        fragments.push(CodeFragment::block(
            format!("public void set{capitalized}({ty} {name}){{"),
            vec![CodeFragment::line(format!("this.{name} = {name};"))],
            Some("}".to_string()),
        ));
        fragments.push(CodeFragment::blank());
    }
    if field.has_getter() {
        fragments.push(CodeFragment::block(
            format!("public {ty} get{capitalized}(){{"),
            vec![CodeFragment::line(format!("return {name};"))],
            Some("}".to_string()),
        ));
        fragments.push(CodeFragment::blank());
    }
    fragments
}

#[cfg(test)]
mod tests {
    use jgencode_codegen::Indent;

    use super::*;
    use crate::{
        constructor::ConstructorDescriptor,
        method::MethodDescriptor,
        modifier::Modifier,
        parameter::ParameterDescriptor,
        unit::{new_class_builder, new_interface_builder, new_record_builder},
    };

    fn age() -> FieldDescriptor {
        FieldDescriptor::builder()
            .name("age")
            .native_type("int")
            .add_modifier(Modifier::Private)
            .setter(true)
            .getter(true)
            .build()
            .unwrap()
    }

    #[test]
    fn test_class_layout() {
        let unit = new_class_builder("com.acme", "Person")
            .add_modifier(Modifier::Public)
            .add_field(age())
            .add_constructor(
                ConstructorDescriptor::builder()
                    .add_modifier(Modifier::Public)
                    .build()
                    .unwrap(),
            );

        let lines = render_unit(&unit.view(), &RenderConfig::default());
        assert_eq!(
            lines,
            vec![
                "package com.acme;",
                "",
                "public class Person{",
                "    private int age;",
                "",
                "    public void setAge(int age){",
                "        this.age = age;",
                "    }",
                "",
                "    public int getAge(){",
                "        return age;",
                "    }",
                "",
                "    public Person(){",
                "    }",
                "",
                "}",
            ]
        );
    }

    #[test]
    fn test_interface_header_and_tab_indent() {
        let unit = new_interface_builder("", "Repository")
            .add_interface_extend(TypeRef::declared("", "Iterable<T>").unwrap())
            .add_interface_extend(TypeRef::declared("java.io", "Closeable").unwrap())
            .add_method(
                MethodDescriptor::builder()
                    .name("count")
                    .return_type(TypeRef::native("long"))
                    .is_abstract(true)
                    .build()
                    .unwrap(),
            );

        let config = RenderConfig::default().with_indent(Indent::Tab);
        let lines = render_unit(&unit.view(), &config);
        assert_eq!(
            lines,
            vec![
                "import java.io.Closeable;",
                "",
                "interface Repository extends Iterable<T>, Closeable{",
                "\tlong count();",
                "",
                "}",
            ]
        );
    }

    #[test]
    fn test_record_header_uses_fields() {
        let name = FieldDescriptor::builder()
            .name("name")
            .native_type("String")
            .getter(true)
            .build()
            .unwrap();
        let unit = new_record_builder("com.acme", "Foo")
            .add_modifier(Modifier::Public)
            .add_field(name)
            .add_field(age());

        let lines = render_unit(&unit.view(), &RenderConfig::default());
        assert_eq!(
            lines,
            vec![
                "package com.acme;",
                "",
                "public record Foo(String name, int age){",
                "}",
            ]
        );
    }

    #[test]
    fn test_class_extends_and_implements() {
        let unit = new_class_builder("com.acme", "WidgetService")
            .extends(TypeRef::declared("com.acme.base", "Service<com.acme.model.Widget, Long>").unwrap())
            .add_interface_implements(TypeRef::declared("java.io", "Serializable").unwrap())
            .add_interface_implements(TypeRef::declared("java.lang", "Cloneable").unwrap())
            .add_method(
                MethodDescriptor::builder()
                    .name("find")
                    .add_parameter(ParameterDescriptor::new("id", TypeRef::native("long")))
                    .body("return;")
                    .build()
                    .unwrap(),
            );

        let lines = render_unit(&unit.view(), &RenderConfig::default());
        assert_eq!(
            lines[7],
            "class WidgetService extends Service<Widget, Long> implements Serializable, Cloneable{"
        );
        assert_eq!(&lines[..6], &[
            "package com.acme;",
            "",
            "import com.acme.base.Service;",
            "import com.acme.model.Widget;",
            "import java.io.Serializable;",
            "import java.lang.Cloneable;",
        ]);
    }
}
