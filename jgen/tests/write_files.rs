//! Writing rendered units to an output directory.

use std::fs;

use jgencode::{FieldDescriptor, JavaFile, RenderConfig, TypeRef, new_class_builder, new_record_builder};
use jgencode_codegen::SourceTree;
use jgencode_core::{GeneratedFile, Overwrite};
use tempfile::TempDir;

#[test]
fn test_write_single_file() {
    let temp = TempDir::new().unwrap();
    let definition = new_class_builder("com.acme.model", "Widget").build().unwrap();

    JavaFile::new(&definition).write(temp.path()).unwrap();

    let written = fs::read_to_string(temp.path().join("com/acme/model/Widget.java")).unwrap();
    assert_eq!(written, definition.content());
    assert!(written.starts_with("package com.acme.model;"));
}

#[test]
fn test_write_with_loaded_config() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("jgencode.toml");
    fs::write(
        &config_path,
        r#"
        indent = "tab"
        extension = "jav"
        "#,
    )
    .unwrap();
    let config = RenderConfig::load(&config_path).unwrap();

    let definition = new_class_builder("com.acme", "Widget")
        .add_field(
            FieldDescriptor::builder()
                .name("count")
                .native_type("int")
                .build()
                .unwrap(),
        )
        .build_with(&config)
        .unwrap();
    let out = temp.path().join("out");
    JavaFile::new(&definition)
        .with_config(&config)
        .write(&out)
        .unwrap();

    let written = fs::read_to_string(out.join("com/acme/Widget.jav")).unwrap();
    assert!(written.contains("\n\tint count;\n"));
}

#[test]
fn test_source_tree_writes_all_units() {
    let temp = TempDir::new().unwrap();
    let widget = new_class_builder("com.acme.model", "Widget").build().unwrap();
    let widget_id = new_record_builder("com.acme.model", "WidgetId")
        .add_field(
            FieldDescriptor::builder()
                .name("value")
                .class_type(TypeRef::declared("", "UUID").unwrap())
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    let service = new_class_builder("com.acme.service", "WidgetService").build().unwrap();

    let mut tree = SourceTree::new();
    tree.register_generated(&JavaFile::new(&widget));
    tree.register_generated(&JavaFile::new(&widget_id));
    tree.register_generated(&JavaFile::new(&service).with_overwrite(Overwrite::IfMissing));
    assert_eq!(tree.len(), 3);

    let stats = tree.write_all(temp.path()).unwrap();
    assert_eq!(stats.written, 3);
    assert_eq!(stats.skipped, 0);

    // The service is a stub: a second pass must leave it alone.
    let service_path = temp.path().join("com/acme/service/WidgetService.java");
    fs::write(&service_path, "// hand written").unwrap();
    let stats = tree.write_all(temp.path()).unwrap();
    assert_eq!(stats.written, 2);
    assert_eq!(stats.skipped, 1);
    assert_eq!(fs::read_to_string(&service_path).unwrap(), "// hand written");

    let record = fs::read_to_string(temp.path().join("com/acme/model/WidgetId.java")).unwrap();
    assert!(record.contains("import java.util.UUID;"));
    assert!(record.contains("record WidgetId(UUID value){"));
}
