use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use regex::Regex;
use serde_json::{Value, json};

use fauxforge_core::{ArraySpec, SchemaNode, parse_schema};
use fauxforge_generate::{
    GenerateOptions, GenerationEngine, GenerationError, GeneratorRegistry, ScalarGenerator,
};

fn engine() -> GenerationEngine {
    GenerationEngine::new(GenerateOptions::default())
}

fn run(schema: Value, count: usize, seed: u64) -> Vec<Value> {
    let schema = parse_schema(&schema).expect("parse schema");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    engine()
        .run(&schema, count, &mut rng, None)
        .expect("generation succeeds")
        .records
}

#[test]
fn fixed_size_array_of_company_names() {
    let records = run(
        json!({"name": "name", "tags": {"type": "array", "size": [2, 2], "schema": "company"}}),
        1,
        42,
    );

    assert_eq!(records.len(), 1);
    let record = &records[0];
    let name = record["name"].as_str().expect("name is a string");
    assert!(!name.is_empty());
    let tags = record["tags"].as_array().expect("tags is an array");
    assert_eq!(tags.len(), 2);
    assert!(tags.iter().all(|tag| tag.as_str().is_some_and(|s| !s.is_empty())));
}

#[test]
fn image_urls_carry_dimensions_and_nonce() {
    let records = run(json!({"photo": {"type": "image", "width": 100, "height": 50}}), 3, 7);
    let pattern = Regex::new(r".*/100/50\?random=\d+$").expect("valid regex");

    assert_eq!(records.len(), 3);
    for record in &records {
        let photo = record["photo"].as_str().expect("photo is a string");
        assert!(pattern.is_match(photo), "unexpected url {photo}");
        assert!(photo.starts_with("https://picsum.photos/"));
    }
}

#[test]
fn image_base_url_is_configurable() {
    let engine = GenerationEngine::new(GenerateOptions {
        image_base_url: "http://images.local".to_string(),
        ..GenerateOptions::default()
    });
    let schema = parse_schema(&json!({"type": "image"})).expect("parse");
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let value = engine.generate(&schema, &mut rng).expect("generate");
    let url = value.as_str().expect("url string");
    assert!(url.starts_with("http://images.local/200/200?random="), "{url}");
}

#[test]
fn empty_object_schema_yields_empty_records() {
    let records = run(json!({}), 5, 3);
    assert_eq!(records, vec![json!({}); 5]);
}

#[test]
fn array_lengths_stay_within_bounds() {
    let schema = parse_schema(&json!({
        "friends": {"type": "array", "size": [1, 4], "schema": {"name": "name"}}
    }))
    .expect("parse");
    let engine = engine();
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut seen = [false; 5];

    let records = engine.run(&schema, 400, &mut rng, None).expect("run").records;
    for record in &records {
        let len = record["friends"].as_array().expect("array").len();
        assert!((1..=4).contains(&len), "length {len} out of bounds");
        seen[len] = true;
    }
    // Inclusive draw: both bounds show up over enough samples.
    assert!(seen[1] && seen[4], "bounds never drawn: {seen:?}");
}

#[test]
fn equal_bounds_always_give_exact_length() {
    let records = run(
        json!({"items": {"type": "array", "size": [3, 3], "schema": "city"}}),
        50,
        5,
    );
    for record in &records {
        assert_eq!(record["items"].as_array().map(Vec::len), Some(3));
    }
}

#[test]
fn zero_bounds_give_empty_arrays() {
    let records = run(
        json!({"items": {"type": "array", "size": [0, 0], "schema": "city"}}),
        4,
        5,
    );
    for record in &records {
        assert_eq!(record["items"], json!([]));
    }
}

#[test]
fn nested_array_lengths_are_drawn_per_instance() {
    let records = run(
        json!({
            "groups": {
                "type": "array",
                "size": [6, 6],
                "schema": {"members": {"type": "array", "size": [0, 5], "schema": "name"}}
            }
        }),
        10,
        17,
    );

    let mut lengths = std::collections::BTreeSet::new();
    for record in &records {
        for group in record["groups"].as_array().expect("groups") {
            let len = group["members"].as_array().expect("members").len();
            assert!(len <= 5);
            lengths.insert(len);
        }
    }
    assert!(lengths.len() > 1, "inner lengths never varied: {lengths:?}");
}

#[test]
fn unknown_tags_fall_back_to_words() {
    let records = run(json!({"a": "flux-capacitor", "b": "", "c": 12, "d": null}), 20, 8);
    for record in &records {
        for key in ["a", "b", "c", "d"] {
            let value = record[key].as_str().expect("string value");
            assert!(!value.is_empty(), "{key} was empty");
        }
    }
}

#[test]
fn malformed_array_is_walked_as_object() {
    let records = run(json!({"list": {"type": "array", "size": [1, 2]}}), 1, 4);
    let list = record_object(&records[0]["list"]);
    assert_eq!(list, ["type", "size"]);
}

#[test]
fn output_preserves_declaration_order() {
    let records = run(
        json!({"zip": "address", "country": "country", "alpha": {"b": "phone", "a": "email"}}),
        1,
        6,
    );
    assert_eq!(record_object(&records[0]), ["zip", "country", "alpha"]);
    assert_eq!(record_object(&records[0]["alpha"]), ["b", "a"]);
}

#[test]
fn records_are_generated_independently() {
    let records = run(json!({"name": "name", "email": "email"}), 30, 12);
    let distinct: std::collections::BTreeSet<String> = records
        .iter()
        .map(|record| record["email"].as_str().unwrap_or_default().to_string())
        .collect();
    assert!(distinct.len() > 1);
}

#[test]
fn top_level_scalar_is_a_plain_string() {
    let records = run(json!("company"), 2, 2);
    assert!(records.iter().all(|record| record.is_string()));
}

#[test]
fn deep_schema_fails_with_depth_error() {
    let engine = GenerationEngine::new(GenerateOptions {
        max_depth: 8,
        ..GenerateOptions::default()
    });
    let mut node = SchemaNode::scalar("name");
    for _ in 0..10 {
        node = SchemaNode::Array(ArraySpec {
            min_size: 1,
            max_size: 1,
            element: Box::new(node),
        });
    }
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let err = engine.run(&node, 1, &mut rng, None).expect_err("too deep");
    assert!(matches!(err, GenerationError::DepthExceeded { limit: 8 }));
}

#[test]
fn cancelled_token_stops_generation() {
    let token = tokio_util::sync::CancellationToken::new();
    token.cancel();
    let schema = parse_schema(&json!({"name": "name"})).expect("parse");
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let err = engine()
        .run(&schema, 10, &mut rng, Some(&token))
        .expect_err("cancelled");
    assert!(matches!(err, GenerationError::Cancelled { records_done: 0 }));
}

#[test]
fn seeded_runs_are_reproducible() {
    let schema = json!({
        "name": "name",
        "friends": {"type": "array", "size": [0, 3], "schema": {"email": "email"}},
        "avatar": {"type": "image"}
    });
    assert_eq!(run(schema.clone(), 5, 1234), run(schema, 5, 1234));
}

#[test]
fn custom_generators_can_be_registered() {
    struct Constant;

    impl ScalarGenerator for Constant {
        fn tag(&self) -> &'static str {
            "sku"
        }

        fn generate(&self, _rng: &mut dyn RngCore) -> String {
            "SKU-1".to_string()
        }
    }

    let mut registry = GeneratorRegistry::new();
    registry.register_generator(Box::new(Constant));
    let engine = GenerationEngine::with_registry(GenerateOptions::default(), registry);
    let schema = parse_schema(&json!({"code": "sku"})).expect("parse");
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let result = engine.run(&schema, 2, &mut rng, None).expect("run");
    assert_eq!(result.records, vec![json!({"code": "SKU-1"}); 2]);
    assert_eq!(result.report.generator_usage.get("sku"), Some(&2));
    assert_eq!(result.report.fallback_count, 0);
}

#[test]
fn report_counts_images_and_array_elements() {
    let schema = parse_schema(&json!({
        "pics": {"type": "array", "size": [2, 2], "schema": {"type": "image"}}
    }))
    .expect("parse");
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let result = engine().run(&schema, 3, &mut rng, None).expect("run");
    assert_eq!(result.report.records_requested, 3);
    assert_eq!(result.report.records_generated, 3);
    assert_eq!(result.report.images_generated, 6);
    assert_eq!(result.report.array_elements, 6);
}

fn record_object(value: &Value) -> Vec<String> {
    value
        .as_object()
        .expect("object value")
        .keys()
        .cloned()
        .collect()
}
