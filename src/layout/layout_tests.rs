use proptest::prelude::*;

use super::*;
use crate::model::{CompositeTypeDef, FieldDef, TypeKey, TypeRef, TypeTable};

fn table(defs: Vec<CompositeTypeDef>) -> TypeTable {
    defs.into_iter().map(|def| (def.key.clone(), def)).collect()
}

fn three_words() -> CompositeTypeDef {
    CompositeTypeDef::new(
        "Foo",
        vec![
            FieldDef::new("a", TypeRef::word("int")),
            FieldDef::new("b", TypeRef::word("int")),
            FieldDef::new("c", TypeRef::word("int")),
        ],
    )
}

// =============================================================================
// Scalars, indirections, arrays
// =============================================================================

#[test]
fn scalar_sizes_are_intrinsic() {
    let types = TypeTable::new();
    let mut calc = LayoutCalculator::new(&types, SizingConfig::new(4, 4));
    assert_eq!(calc.size_of(&TypeRef::scalar("int64", 8)).unwrap(), 8);
    assert_eq!(calc.size_of(&TypeRef::scalar("bool", 1)).unwrap(), 1);
    assert_eq!(calc.size_of(&TypeRef::word("uintptr")).unwrap(), 4);
}

#[test]
fn indirection_is_one_word_without_sizing_pointee() {
    // The pointee is not even defined: an indirection must never look at it.
    let types = TypeTable::new();
    let mut calc = LayoutCalculator::new(&types, SizingConfig::default());
    let ptr = TypeRef::pointer(TypeRef::named("Missing"));
    assert_eq!(calc.size_of(&ptr).unwrap(), 8);
}

#[test]
fn array_size_is_length_times_element() {
    let types = table(vec![three_words()]);
    let mut calc = LayoutCalculator::new(&types, SizingConfig::default());
    assert_eq!(
        calc.size_of(&TypeRef::array(TypeRef::scalar("int32", 4), 5))
            .unwrap(),
        20
    );
    assert_eq!(
        calc.size_of(&TypeRef::array(TypeRef::named("Foo"), 2)).unwrap(),
        48
    );
    assert_eq!(
        calc.size_of(&TypeRef::array(TypeRef::word("int"), 0)).unwrap(),
        0
    );
}

// =============================================================================
// Composites
// =============================================================================

#[test]
fn three_word_struct_is_24_bytes() {
    let types = table(vec![three_words()]);
    let mut calc = LayoutCalculator::new(&types, SizingConfig::default());
    assert_eq!(calc.composite_size(&TypeKey::new("Foo")).unwrap(), 24);
}

#[test]
fn mixed_width_fields_are_not_padded() {
    let types = table(vec![CompositeTypeDef::new(
        "Mixed",
        vec![
            FieldDef::new("flag", TypeRef::scalar("bool", 1)),
            FieldDef::new("n", TypeRef::scalar("int64", 8)),
            FieldDef::new("b", TypeRef::scalar("uint8", 1)),
        ],
    )]);
    let mut calc = LayoutCalculator::new(&types, SizingConfig::default());
    assert_eq!(calc.composite_size(&TypeKey::new("Mixed")).unwrap(), 10);
}

#[test]
fn nested_and_embedded_composites_recurse() {
    let types = table(vec![
        three_words(),
        CompositeTypeDef::new(
            "Outer",
            vec![
                FieldDef::embedded(TypeRef::named("Foo")),
                FieldDef::new("tag", TypeRef::scalar("int16", 2)),
            ],
        ),
    ]);
    let mut calc = LayoutCalculator::new(&types, SizingConfig::default());
    assert_eq!(calc.composite_size(&TypeKey::new("Outer")).unwrap(), 26);
}

#[test]
fn empty_composite_has_zero_size() {
    let types = table(vec![CompositeTypeDef::new("Unit", Vec::new())]);
    let mut calc = LayoutCalculator::new(&types, SizingConfig::default());
    assert_eq!(calc.composite_size(&TypeKey::new("Unit")).unwrap(), 0);
}

#[test]
fn self_reference_through_pointer_terminates() {
    let types = table(vec![CompositeTypeDef::new(
        "Node",
        vec![
            FieldDef::new("value", TypeRef::scalar("int64", 8)),
            FieldDef::new("next", TypeRef::pointer(TypeRef::named("Node"))),
        ],
    )]);
    let mut calc = LayoutCalculator::new(&types, SizingConfig::default());
    assert_eq!(calc.composite_size(&TypeKey::new("Node")).unwrap(), 16);
}

#[test]
fn value_cycle_is_an_invariant_violation() {
    let types = table(vec![
        CompositeTypeDef::new("A", vec![FieldDef::new("b", TypeRef::named("B"))]),
        CompositeTypeDef::new("B", vec![FieldDef::new("a", TypeRef::named("A"))]),
    ]);
    let mut calc = LayoutCalculator::new(&types, SizingConfig::default());
    let err = calc.composite_size(&TypeKey::new("A")).unwrap_err();
    assert!(matches!(err, CopyGuardError::Invariant(_)));
    assert!(err.to_string().contains("contains itself by value"));
}

#[test]
fn undefined_composite_is_an_invariant_violation() {
    let types = TypeTable::new();
    let mut calc = LayoutCalculator::new(&types, SizingConfig::default());
    let err = calc.size_of(&TypeRef::named("Ghost")).unwrap_err();
    assert!(matches!(err, CopyGuardError::Invariant(_)));
}

#[test]
fn failed_field_does_not_leave_type_marked_in_progress() {
    let types = table(vec![
        CompositeTypeDef::new("Outer", vec![FieldDef::new("inner", TypeRef::named("Broken"))]),
        CompositeTypeDef::new("Broken", vec![FieldDef::new("g", TypeRef::named("Ghost"))]),
    ]);
    let mut calc = LayoutCalculator::new(&types, SizingConfig::default());
    assert!(calc.composite_size(&TypeKey::new("Outer")).is_err());

    for key in ["Broken", "Outer"] {
        let err = calc.composite_size(&TypeKey::new(key)).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("Ghost is not defined"), "{key}: {text}");
        assert!(!text.contains("contains itself"), "{key}: {text}");
    }
}

#[test]
fn oversized_array_is_an_invariant_violation() {
    let types = TypeTable::new();
    let mut calc = LayoutCalculator::new(&types, SizingConfig::default());
    let huge = TypeRef::array(TypeRef::scalar("int64", 8), u64::MAX);
    assert!(matches!(
        calc.size_of(&huge),
        Err(CopyGuardError::Invariant(_))
    ));
}

#[test]
fn repeated_queries_hit_the_memo() {
    let types = table(vec![three_words()]);
    let mut calc = LayoutCalculator::new(&types, SizingConfig::default());
    let key = TypeKey::new("Foo");
    let first = calc.composite_size(&key).unwrap();
    let second = calc.composite_size(&key).unwrap();
    assert_eq!(first, second);
    assert_eq!(calc.sizes.len(), 1);
}

// =============================================================================
// Alignment
// =============================================================================

#[test]
fn alignment_is_clamped_to_max_align() {
    let types = table(vec![CompositeTypeDef::new(
        "Wide",
        vec![
            FieldDef::new("c", TypeRef::scalar("complex128", 16)),
            FieldDef::new("b", TypeRef::scalar("bool", 1)),
        ],
    )]);
    let mut calc = LayoutCalculator::new(&types, SizingConfig::new(8, 4));
    assert_eq!(calc.composite_align(&TypeKey::new("Wide")).unwrap(), 4);
    assert_eq!(calc.align_of(&TypeRef::scalar("bool", 1)).unwrap(), 1);
    assert_eq!(
        calc.align_of(&TypeRef::array(TypeRef::scalar("int16", 2), 7))
            .unwrap(),
        2
    );
}

#[test]
fn empty_composite_aligns_to_one() {
    let types = table(vec![CompositeTypeDef::new("Unit", Vec::new())]);
    let mut calc = LayoutCalculator::new(&types, SizingConfig::default());
    assert_eq!(calc.composite_align(&TypeKey::new("Unit")).unwrap(), 1);
}

// =============================================================================
// SizingConfig validation
// =============================================================================

#[test]
fn sizing_config_rejects_zero_word_size() {
    assert!(SizingConfig::new(0, 8).validate().is_err());
}

#[test]
fn sizing_config_rejects_non_power_of_two_alignment() {
    assert!(SizingConfig::new(8, 6).validate().is_err());
    assert!(SizingConfig::new(8, 0).validate().is_err());
    assert!(SizingConfig::new(4, 4).validate().is_ok());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn composite_size_is_flat_sum_for_any_max_align(
        widths in prop::collection::vec(prop_oneof![Just(1u64), Just(2), Just(4), Just(8), Just(16)], 0..12),
        align_shift in 0u32..6,
    ) {
        let fields = widths
            .iter()
            .enumerate()
            .map(|(i, w)| FieldDef::new(format!("f{i}"), TypeRef::scalar(format!("s{w}"), *w)))
            .collect();
        let types = table(vec![CompositeTypeDef::new("T", fields)]);
        let mut calc = LayoutCalculator::new(&types, SizingConfig::new(8, 1 << align_shift));
        let size = calc.composite_size(&TypeKey::new("T")).unwrap();
        prop_assert_eq!(size, widths.iter().sum::<u64>());
    }
}
