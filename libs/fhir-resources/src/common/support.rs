//! Build-time validation helpers
//!
//! Every `build()` funnels its checks through these functions so the error
//! values and log output are the same for all model types.

use super::datatypes::{ChoiceValue, Reference, ValueKind};
use super::primitives;
use crate::config::ModelConfig;
use crate::error::{Error, Result};
use crate::r4::codes::ResourceType;
use regex::Regex;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

/// Structural checks applied to data types when their owner is built.
pub trait Validate {
    fn validate(&self, config: &ModelConfig) -> Result<()>;
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn validate(&self, config: &ModelConfig) -> Result<()> {
        (**self).validate(config)
    }
}

pub(crate) fn validate_all<T: Validate>(items: &[T], config: &ModelConfig) -> Result<()> {
    items.iter().try_for_each(|item| item.validate(config))
}

pub(crate) fn validate_opt<T: Validate>(item: Option<&T>, config: &ModelConfig) -> Result<()> {
    match item {
        Some(item) => item.validate(config),
        None => Ok(()),
    }
}

/// Take a required single-valued element out of a builder.
pub(crate) fn require<T>(value: Option<T>, element: &'static str) -> Result<T> {
    value.ok_or(Error::MissingElement { element })
}

/// A required repeating element must hold at least one value.
pub(crate) fn require_non_empty<T>(values: &[T], element: &'static str) -> Result<()> {
    if values.is_empty() {
        Err(Error::EmptyList { element })
    } else {
        Ok(())
    }
}

/// Element ids (`Element.id`) follow the `string` rules.
pub(crate) fn check_element_id(id: Option<&str>, config: &ModelConfig) -> Result<()> {
    match id {
        Some(id) => primitives::check_element_id(id, config),
        None => Ok(()),
    }
}

/// ele-1
pub(crate) fn require_value_or_children(has_children: bool, element: &'static str) -> Result<()> {
    if has_children {
        Ok(())
    } else {
        Err(Error::EmptyElement { element })
    }
}

/// Check the runtime type of an optional choice element.
pub(crate) fn check_choice(
    value: Option<&ChoiceValue>,
    element: &'static str,
    allowed: &'static [ValueKind],
) -> Result<()> {
    match value {
        Some(value) if !allowed.contains(&value.kind()) => Err(Error::InvalidChoiceType {
            element,
            found: value.kind().type_name(),
            allowed: allowed.iter().map(ValueKind::type_name).collect(),
        }),
        _ => Ok(()),
    }
}

/// Take a required choice element out of a builder and check its type.
pub(crate) fn require_choice(
    value: Option<ChoiceValue>,
    element: &'static str,
    allowed: &'static [ValueKind],
) -> Result<ChoiceValue> {
    let value = require(value, element)?;
    check_choice(Some(&value), element, allowed)?;
    Ok(value)
}

fn reference_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([A-Z][A-Za-z]+)/[A-Za-z0-9\-\.]{1,64}(/_history/[A-Za-z0-9\-\.]{1,64})?$")
            .expect("reference regex must compile")
    })
}

/// Absolute references (`http://...`, `urn:uuid:...`) are not checked.
fn has_scheme(value: &str) -> bool {
    match value.find(':') {
        Some(pos) if pos > 0 => value[..pos]
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')),
        _ => false,
    }
}

fn check_target(
    resource_type: &str,
    element: &'static str,
    targets: &'static [&'static str],
) -> Result<()> {
    if !ResourceType::is_resource_type(resource_type) {
        return Err(Error::UnknownResourceType {
            element,
            resource_type: resource_type.to_string(),
        });
    }
    if !targets.iter().any(|target| *target == resource_type) {
        return Err(Error::DisallowedReferenceTarget {
            element,
            resource_type: resource_type.to_string(),
            allowed: targets.to_vec(),
        });
    }
    Ok(())
}

/// Check the resource type a reference points at against the element's allow-list.
///
/// Contained (`#id`) and absolute references are skipped. Conditional
/// references (`Patient?identifier=...`) contribute the type before the `?`.
/// When both a literal reference and `Reference.type` are present they must
/// agree.
pub(crate) fn check_reference(
    reference: &Reference,
    element: &'static str,
    targets: &'static [&'static str],
    config: &ModelConfig,
) -> Result<()> {
    if !config.check_reference_types {
        tracing::trace!(element, "reference type checking disabled");
        return Ok(());
    }

    let mut literal_type = None;
    if let Some(value) = reference.reference.as_ref().map(|r| r.as_str()) {
        if value.starts_with('#') || has_scheme(value) {
            tracing::trace!(element, reference = value, "skipping non-relative reference");
        } else {
            let found = match value.find('?') {
                Some(pos) => Some(&value[..pos]),
                None => reference_pattern()
                    .captures(value)
                    .and_then(|caps| caps.get(1))
                    .map(|m| m.as_str()),
            };
            let resource_type = found.ok_or_else(|| Error::ReferenceTypeNotFound {
                element,
                reference: value.to_string(),
            })?;
            check_target(resource_type, element, targets)?;
            literal_type = Some((value, resource_type));
        }
    }

    if let Some(reference_type) = reference.type_.as_ref().map(|t| t.as_str()) {
        check_target(reference_type, element, targets)?;
        if let Some((value, resource_type)) = literal_type {
            if resource_type != reference_type {
                return Err(Error::ReferenceTypeMismatch {
                    element,
                    reference: value.to_string(),
                    reference_type: reference_type.to_string(),
                });
            }
        }
    }
    Ok(())
}

pub(crate) fn check_references(
    references: &[Reference],
    element: &'static str,
    targets: &'static [&'static str],
    config: &ModelConfig,
) -> Result<()> {
    references
        .iter()
        .try_for_each(|reference| check_reference(reference, element, targets, config))
}

pub(crate) fn check_optional_reference(
    reference: Option<&Reference>,
    element: &'static str,
    targets: &'static [&'static str],
    config: &ModelConfig,
) -> Result<()> {
    match reference {
        Some(reference) => check_reference(reference, element, targets, config),
        None => Ok(()),
    }
}

/// Reference checks for a choice element that currently holds a `Reference`.
pub(crate) fn check_choice_reference(
    value: Option<&ChoiceValue>,
    element: &'static str,
    targets: &'static [&'static str],
    config: &ModelConfig,
) -> Result<()> {
    match value.and_then(ChoiceValue::as_reference) {
        Some(reference) => check_reference(reference, element, targets, config),
        None => Ok(()),
    }
}

/// Structural hash of a builder, stored in the node it builds.
pub(crate) fn fingerprint<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Log a rejected build and hand the result back unchanged.
pub(crate) fn log_rejection<T>(type_name: &'static str, result: Result<T>) -> Result<T> {
    if let Err(err) = &result {
        tracing::debug!(type_name, element = ?err.element(), error = %err, "build rejected");
    }
    result
}

/// `Hash` for immutable nodes replays the fingerprint computed at build time.
macro_rules! impl_cached_hash {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ::std::hash::Hash for $ty {
                fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                    state.write_u64(self.hash);
                }
            }
        )+
    };
}

pub(crate) use impl_cached_hash;
