use crate::{Specificity, TypeDescriptor, compare_specificity, is_assignable, is_exact_match};

#[test]
fn assignability_is_reflexive() {
    let samples = [
        TypeDescriptor::string_literal("cat"),
        TypeDescriptor::number_literal(2.0),
        TypeDescriptor::boolean_literal(true),
        TypeDescriptor::string(),
        TypeDescriptor::number(),
        TypeDescriptor::boolean(),
        TypeDescriptor::null(),
        TypeDescriptor::object([("a", TypeDescriptor::string())]),
    ];
    for sample in &samples {
        assert!(is_assignable(sample, sample), "{sample} should be assignable to itself");
        assert!(is_exact_match(sample, sample));
    }
}

#[test]
fn literal_is_assignable_to_its_primitive_only() {
    let cat = TypeDescriptor::string_literal("cat");
    assert!(is_assignable(&cat, &TypeDescriptor::string()));
    assert!(!is_assignable(&TypeDescriptor::string(), &cat));
    assert!(!is_assignable(&cat, &TypeDescriptor::number()));
    assert!(!is_assignable(&cat, &TypeDescriptor::boolean()));

    let one = TypeDescriptor::number_literal(1.0);
    assert!(is_assignable(&one, &TypeDescriptor::number()));
    assert!(!is_assignable(&one, &TypeDescriptor::string()));

    let yes = TypeDescriptor::boolean_literal(true);
    assert!(is_assignable(&yes, &TypeDescriptor::boolean()));
    assert!(!is_assignable(&TypeDescriptor::boolean(), &yes));
}

#[test]
fn distinct_literals_are_unrelated() {
    let cat = TypeDescriptor::string_literal("cat");
    let dog = TypeDescriptor::string_literal("dog");
    assert!(!is_assignable(&cat, &dog));
    assert_eq!(compare_specificity(&cat, &dog), Specificity::Unrelated);
}

#[test]
fn number_literal_equality_ignores_signed_zero() {
    let zero = TypeDescriptor::number_literal(0.0);
    let negative_zero = TypeDescriptor::number_literal(-0.0);
    assert!(is_exact_match(&zero, &negative_zero));
}

#[test]
fn opaque_is_only_assignable_to_identical_opaque() {
    let wide = TypeDescriptor::object([("a", TypeDescriptor::string())]);
    let narrow = TypeDescriptor::object([
        ("a", TypeDescriptor::string()),
        ("b", TypeDescriptor::number()),
    ]);
    // Structural record subtyping is not part of the relation.
    assert!(!is_assignable(&narrow, &wide));
    assert!(!is_assignable(&wide, &narrow));

    let literal_union = TypeDescriptor::union([
        TypeDescriptor::string_literal("a"),
        TypeDescriptor::string_literal("b"),
    ]);
    assert!(!is_assignable(&literal_union, &TypeDescriptor::string()));
    assert!(!is_assignable(&TypeDescriptor::null(), &TypeDescriptor::undefined()));
}

#[test]
fn object_identity_ignores_field_order() {
    let ab = TypeDescriptor::object([
        ("a", TypeDescriptor::string()),
        ("b", TypeDescriptor::number()),
    ]);
    let ba = TypeDescriptor::object([
        ("b", TypeDescriptor::number()),
        ("a", TypeDescriptor::string()),
    ]);
    assert!(is_exact_match(&ab, &ba));
}

#[test]
fn specificity_reports_direction() {
    let cat = TypeDescriptor::string_literal("cat");
    let string = TypeDescriptor::string();
    assert_eq!(compare_specificity(&cat, &string), Specificity::LeftNarrower);
    assert_eq!(compare_specificity(&string, &cat), Specificity::RightNarrower);
    assert_eq!(compare_specificity(&string, &string), Specificity::Identical);
}
