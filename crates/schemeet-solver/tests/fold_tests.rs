use crate::{MergePolicy, Schema, TypeDescriptor, fold, fold_strict, fold_upcast, merge_upcast};

fn priority(value: f64) -> Schema {
    Schema::new()
        .with_field("priority", TypeDescriptor::number_literal(value))
        .with_field("title", TypeDescriptor::string())
}

#[test]
fn zero_schemas_return_the_supplied_default() {
    let default = Schema::new().with_field("fallback", TypeDescriptor::unknown());
    assert_eq!(fold_upcast(&[], default.clone()), default);
    assert_eq!(fold_strict(&[], default.clone()), default);
    assert_eq!(fold_upcast(&[], Schema::new()), Schema::new());
}

#[test]
fn one_schema_is_returned_unchanged() {
    let only = priority(1.0);
    assert_eq!(fold_upcast(std::slice::from_ref(&only), Schema::new()), only);
    assert_eq!(fold_strict(std::slice::from_ref(&only), Schema::new()), only);
}

#[test]
fn two_schemas_merge_directly() {
    let schemas = [priority(1.0), priority(2.0)];
    assert_eq!(
        fold_upcast(&schemas, Schema::new()),
        merge_upcast(&schemas[0], &schemas[1])
    );
}

#[test]
fn three_number_literals_fold_to_number() {
    let schemas = [
        Schema::new().with_field("priority", TypeDescriptor::number_literal(1.0)),
        Schema::new().with_field("priority", TypeDescriptor::number_literal(2.0)),
        Schema::new().with_field("priority", TypeDescriptor::number_literal(3.0)),
    ];
    assert_eq!(
        fold_upcast(&schemas, Schema::new()),
        Schema::new().with_field("priority", TypeDescriptor::number())
    );
    assert!(fold_strict(&schemas, Schema::new()).is_empty());
}

#[test]
fn strict_fold_keeps_fields_identical_everywhere() {
    let schemas = [priority(1.0), priority(1.0), priority(1.0)];
    assert_eq!(fold_strict(&schemas, Schema::new()), priority(1.0));

    let schemas = [priority(1.0), priority(1.0), priority(2.0)];
    assert_eq!(
        fold_strict(&schemas, Schema::new()),
        Schema::new().with_field("title", TypeDescriptor::string())
    );
}

#[test]
fn fold_is_a_left_fold() {
    let schemas = [
        Schema::new()
            .with_field("kind", TypeDescriptor::string_literal("a"))
            .with_field("size", TypeDescriptor::number_literal(1.0)),
        Schema::new()
            .with_field("kind", TypeDescriptor::string_literal("b"))
            .with_field("size", TypeDescriptor::number()),
        Schema::new()
            .with_field("kind", TypeDescriptor::string())
            .with_field("size", TypeDescriptor::string()),
        Schema::new()
            .with_field("kind", TypeDescriptor::string_literal("c"))
            .with_field("extra", TypeDescriptor::boolean()),
    ];
    let expected = merge_upcast(
        &merge_upcast(&merge_upcast(&schemas[0], &schemas[1]), &schemas[2]),
        &schemas[3],
    );
    assert_eq!(fold_upcast(&schemas, Schema::new()), expected);
    assert_eq!(
        expected,
        Schema::new().with_field("kind", TypeDescriptor::string())
    );
}

#[test]
fn default_is_ignored_when_schemas_are_present() {
    let default = Schema::new().with_field("fallback", TypeDescriptor::unknown());
    let schemas = [priority(1.0)];
    assert_eq!(fold(&schemas, MergePolicy::Upcast, default), priority(1.0));
}

#[test]
fn fold_result_is_order_independent() {
    let a = Schema::new()
        .with_field("flag", TypeDescriptor::boolean_literal(true))
        .with_field("id", TypeDescriptor::number());
    let b = Schema::new()
        .with_field("flag", TypeDescriptor::boolean_literal(false))
        .with_field("id", TypeDescriptor::number_literal(7.0));
    let c = Schema::new()
        .with_field("flag", TypeDescriptor::boolean())
        .with_field("id", TypeDescriptor::number_literal(8.0));

    let forward = fold_upcast(&[a.clone(), b.clone(), c.clone()], Schema::new());
    let backward = fold_upcast(&[c, b, a], Schema::new());
    assert_eq!(forward, backward);
    assert_eq!(
        forward,
        Schema::new()
            .with_field("flag", TypeDescriptor::boolean())
            .with_field("id", TypeDescriptor::number())
    );
}

#[test]
fn long_fold_stays_iterative() {
    let schemas: Vec<Schema> = (0..20_000).map(|i| priority(f64::from(i % 50))).collect();
    let folded = fold_upcast(&schemas, Schema::new());
    assert_eq!(folded.get("priority"), Some(&TypeDescriptor::number()));
    assert_eq!(folded.get("title"), Some(&TypeDescriptor::string()));
}

#[test]
fn fold_stops_early_once_nothing_is_shared() {
    let mut schemas = vec![
        Schema::new().with_field("a", TypeDescriptor::string()),
        Schema::new().with_field("b", TypeDescriptor::string()),
    ];
    schemas.extend((0..100).map(|_| Schema::new().with_field("a", TypeDescriptor::string())));
    assert!(fold_upcast(&schemas, Schema::new()).is_empty());
}
