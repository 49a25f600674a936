//! Property-based tests using QuickCheck

use ferrum_resources::common::*;
use ferrum_resources::r4::ImplementationGuideDefinitionGrouping;
use ferrum_resources::r4::ImplementationGuideDefinitionGroupingBuilder;
use quickcheck::{QuickCheck, TestResult};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn grouping(name: &str, description: Option<&str>) -> Option<ImplementationGuideDefinitionGrouping> {
    let name = FhirString::new(name).ok()?;
    let description = match description {
        Some(d) => Some(FhirString::new(d).ok()?),
        None => None,
    };
    ImplementationGuideDefinitionGroupingBuilder {
        name: Some(name),
        description,
        ..Default::default()
    }
    .build()
    .ok()
}

/// Property: equal trees have equal hashes, different trees compare unequal
#[test]
fn prop_hash_agrees_with_equality() {
    fn prop(a: String, b: String, description: Option<String>) -> TestResult {
        let (Some(left), Some(again), Some(right)) = (
            grouping(&a, description.as_deref()),
            grouping(&a, description.as_deref()),
            grouping(&b, description.as_deref()),
        ) else {
            return TestResult::discard();
        };

        if left != again || hash_of(&left) != hash_of(&again) {
            return TestResult::failed();
        }
        TestResult::from_bool((a == b) == (left == right))
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(String, String, Option<String>) -> TestResult);
}

/// Property: rebuilding from `to_builder` yields an equal node
#[test]
fn prop_to_builder_round_trip() {
    fn prop(name: String) -> TestResult {
        let Some(original) = grouping(&name, None) else {
            return TestResult::discard();
        };
        let rebuilt = original.to_builder().build().unwrap();
        TestResult::from_bool(rebuilt == original && hash_of(&rebuilt) == hash_of(&original))
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(String) -> TestResult);
}

