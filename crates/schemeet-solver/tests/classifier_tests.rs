use crate::{BaseKind, DescriptorClass, TypeDescriptor, base_kind, classify, is_upcastable};

#[test]
fn literals_are_upcastable() {
    assert!(is_upcastable(&TypeDescriptor::string_literal("cat")));
    assert!(is_upcastable(&TypeDescriptor::number_literal(1.0)));
    assert!(is_upcastable(&TypeDescriptor::boolean_literal(true)));
    assert!(is_upcastable(&TypeDescriptor::boolean_literal(false)));
}

#[test]
fn primitives_and_opaque_are_not_upcastable() {
    assert!(!is_upcastable(&TypeDescriptor::string()));
    assert!(!is_upcastable(&TypeDescriptor::number()));
    assert!(!is_upcastable(&TypeDescriptor::boolean()));
    assert!(!is_upcastable(&TypeDescriptor::null()));
    assert!(!is_upcastable(&TypeDescriptor::array(
        TypeDescriptor::string_literal("a")
    )));
}

#[test]
fn boolean_domain_classifies_as_primitive() {
    // `true | false` built through the factory is the primitive, not a literal.
    let domain = TypeDescriptor::union([
        TypeDescriptor::boolean_literal(true),
        TypeDescriptor::boolean_literal(false),
    ]);
    assert_eq!(domain, TypeDescriptor::boolean());
    assert_eq!(
        classify(&domain),
        DescriptorClass::Primitive(BaseKind::Boolean)
    );
    assert!(!is_upcastable(&domain));
}

#[test]
fn base_kind_of_literals_and_primitives() {
    assert_eq!(
        base_kind(&TypeDescriptor::string_literal("x")),
        Some(BaseKind::String)
    );
    assert_eq!(base_kind(&TypeDescriptor::string()), Some(BaseKind::String));
    assert_eq!(
        base_kind(&TypeDescriptor::number_literal(-3.5)),
        Some(BaseKind::Number)
    );
    assert_eq!(base_kind(&TypeDescriptor::number()), Some(BaseKind::Number));
    assert_eq!(
        base_kind(&TypeDescriptor::boolean_literal(false)),
        Some(BaseKind::Boolean)
    );
    assert_eq!(base_kind(&TypeDescriptor::boolean()), Some(BaseKind::Boolean));
}

#[test]
fn base_kind_of_opaque_is_none() {
    assert_eq!(base_kind(&TypeDescriptor::null()), None);
    assert_eq!(base_kind(&TypeDescriptor::named("Date")), None);
    let literal_union = TypeDescriptor::union([
        TypeDescriptor::string_literal("a"),
        TypeDescriptor::string_literal("b"),
    ]);
    assert_eq!(base_kind(&literal_union), None);
    assert_eq!(classify(&literal_union), DescriptorClass::Opaque);
}

#[test]
fn base_kind_primitive_round_trips() {
    for kind in [BaseKind::String, BaseKind::Number, BaseKind::Boolean] {
        assert_eq!(
            classify(&kind.primitive()),
            DescriptorClass::Primitive(kind)
        );
    }
}

#[test]
fn classify_agrees_with_is_upcastable() {
    let samples = [
        TypeDescriptor::string_literal("cat"),
        TypeDescriptor::number_literal(9.0),
        TypeDescriptor::boolean_literal(false),
        TypeDescriptor::string(),
        TypeDescriptor::number(),
        TypeDescriptor::boolean(),
        TypeDescriptor::null(),
        TypeDescriptor::array(TypeDescriptor::string()),
    ];
    for sample in &samples {
        assert_eq!(classify(sample).is_upcastable(), is_upcastable(sample), "{sample}");
        assert_eq!(
            matches!(classify(sample), DescriptorClass::Literal(_)),
            is_upcastable(sample)
        );
    }
}
