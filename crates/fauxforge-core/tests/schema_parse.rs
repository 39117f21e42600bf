use fauxforge_core::{
    ArraySpec, Error, Field, ImageSpec, PARSE_DEPTH_LIMIT, SchemaNode, parse_schema,
};
use serde_json::json;

#[test]
fn strings_become_scalar_tags() {
    let node = parse_schema(&json!({"name": "name", "mystery": "unheard-of"})).expect("parse");
    assert_eq!(
        node,
        SchemaNode::object([
            ("name", SchemaNode::scalar("name")),
            ("mystery", SchemaNode::scalar("unheard-of")),
        ])
    );
}

#[test]
fn object_fields_keep_declaration_order() {
    let node = parse_schema(&json!({"zeta": "name", "alpha": "city", "mid": "phone"}))
        .expect("parse");
    let SchemaNode::Object(fields) = node else {
        panic!("expected object node");
    };
    let names: Vec<&str> = fields.iter().map(|field| field.name.as_str()).collect();
    assert_eq!(names, ["zeta", "alpha", "mid"]);
}

#[test]
fn well_formed_array_is_recognized() {
    let node = parse_schema(&json!({
        "type": "array",
        "size": [1, 5],
        "schema": {"name": "name", "contact": {"email": "email"}}
    }))
    .expect("parse");

    assert_eq!(
        node,
        SchemaNode::Array(ArraySpec {
            min_size: 1,
            max_size: 5,
            element: Box::new(SchemaNode::object([
                ("name", SchemaNode::scalar("name")),
                (
                    "contact",
                    SchemaNode::object([("email", SchemaNode::scalar("email"))]),
                ),
            ])),
        })
    );
}

#[test]
fn array_with_scalar_element_schema() {
    let node = parse_schema(&json!({"type": "array", "size": [2, 2], "schema": "company"}))
        .expect("parse");
    assert_eq!(
        node,
        SchemaNode::Array(ArraySpec {
            min_size: 2,
            max_size: 2,
            element: Box::new(SchemaNode::scalar("company")),
        })
    );
}

#[test]
fn array_missing_schema_is_walked_as_object() {
    let node = parse_schema(&json!({"type": "array", "size": [1, 2]})).expect("parse");
    let SchemaNode::Object(fields) = node else {
        panic!("expected object fallback");
    };
    assert_eq!(
        fields[0],
        Field {
            name: "type".to_string(),
            node: SchemaNode::scalar("array"),
        }
    );
    assert_eq!(fields[1].name, "size");
    assert!(matches!(fields[1].node, SchemaNode::Scalar(_)));
}

#[test]
fn array_with_unusable_size_is_walked_as_object() {
    for size in [json!([3]), json!("many"), json!([1, -2]), json!(0), json!([])] {
        let node = parse_schema(&json!({"type": "array", "size": size, "schema": "name"}))
            .expect("parse");
        assert!(
            matches!(node, SchemaNode::Object(_)),
            "size {size} should fall back to an object walk"
        );
    }
}

#[test]
fn array_with_empty_string_schema_is_walked_as_object() {
    let node = parse_schema(&json!({"type": "array", "size": [1, 1], "schema": ""}))
        .expect("parse");
    assert!(matches!(node, SchemaNode::Object(_)));
}

#[test]
fn zero_length_array_is_accepted() {
    let node = parse_schema(&json!({"type": "array", "size": [0, 0], "schema": "name"}))
        .expect("parse");
    assert!(matches!(
        node,
        SchemaNode::Array(ArraySpec {
            min_size: 0,
            max_size: 0,
            ..
        })
    ));
}

#[test]
fn inverted_bounds_are_rejected() {
    let err = parse_schema(&json!({"tags": {"type": "array", "size": [4, 2], "schema": "name"}}))
        .expect_err("min > max");
    assert!(matches!(err, Error::InvalidSchema { .. }));
}

#[test]
fn image_defaults_and_overrides() {
    let defaults = parse_schema(&json!({"type": "image"})).expect("parse");
    assert_eq!(defaults, SchemaNode::Image(ImageSpec::default()));

    let custom = parse_schema(&json!({
        "type": "image",
        "width": 100,
        "height": 50,
        "category": "nature"
    }))
    .expect("parse");
    assert_eq!(
        custom,
        SchemaNode::Image(ImageSpec {
            width: 100,
            height: 50,
            category: "nature".to_string(),
        })
    );
}

#[test]
fn non_string_leaves_become_unknown_tags() {
    let node = parse_schema(&json!({"age": 42, "active": true, "nothing": null, "list": [1, 2]}))
        .expect("parse");
    assert_eq!(
        node,
        SchemaNode::object([
            ("age", SchemaNode::scalar("42")),
            ("active", SchemaNode::scalar("true")),
            ("nothing", SchemaNode::scalar("null")),
            ("list", SchemaNode::scalar("[1,2]")),
        ])
    );
}

#[test]
fn unknown_type_values_are_plain_objects() {
    let node = parse_schema(&json!({"type": "video", "length": "long"})).expect("parse");
    assert_eq!(
        node,
        SchemaNode::object([
            ("type", SchemaNode::scalar("video")),
            ("length", SchemaNode::scalar("long")),
        ])
    );
}

#[test]
fn programmatically_nested_values_hit_the_parse_ceiling() {
    let mut value = json!("name");
    for _ in 0..PARSE_DEPTH_LIMIT + 8 {
        value = json!({ "child": value });
    }

    match parse_schema(&value) {
        Err(Error::TooDeep { path, limit }) => {
            assert_eq!(limit, PARSE_DEPTH_LIMIT);
            assert!(path.starts_with("schema.child.child"), "{path}");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn float_spelled_array_bounds_are_honoured() {
    let node = parse_schema(&json!({"type": "array", "size": [2.0, 1e1], "schema": "name"}))
        .expect("parse");
    assert_eq!(
        node,
        SchemaNode::Array(ArraySpec {
            min_size: 2,
            max_size: 10,
            element: Box::new(SchemaNode::scalar("name")),
        })
    );
}
