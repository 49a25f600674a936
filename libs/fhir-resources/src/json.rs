//! FHIR JSON output
//!
//! [`JsonWriter`] is a [`Visitor`] that assembles a `serde_json::Value` while a
//! model tree is walked:
//! - Resources start with their `resourceType`.
//! - Repeating elements become arrays, absent and empty elements are omitted.
//! - Choice elements carry their type suffix (`exampleBoolean`, `valueQuantity`).
//! - Members appear in element declaration order.

use crate::common::base::Resource;
use crate::common::datatypes::ValueKind;
use crate::config::ModelConfig;
use crate::error::Result;
use crate::model_info::type_info;
use crate::visitor::{Node, NodeKind, Visitor};
use serde_json::{Map, Number, Value};
use std::str::FromStr;

enum Slot {
    Object { kind: NodeKind, members: Map<String, Value> },
    Array(Vec<Value>),
}

/// Builds the JSON representation of the walked tree
#[derive(Default)]
pub struct JsonWriter {
    stack: Vec<Slot>,
    result: Option<Value>,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The finished document; `Null` if nothing was walked
    pub fn into_value(self) -> Value {
        self.result.unwrap_or(Value::Null)
    }

    fn emit(&mut self, name: &'static str, node: Node<'_>, value: Value) {
        match self.stack.last_mut() {
            None => self.result = Some(value),
            Some(Slot::Array(items)) => items.push(value),
            Some(Slot::Object { kind, members }) => {
                members.insert(element_key(*kind, name, node), value);
            }
        }
    }
}

impl<'a> Visitor<'a> for JsonWriter {
    fn visit_start(&mut self, _name: &'static str, _index: Option<usize>, node: Node<'a>) {
        if node.is_primitive() {
            return;
        }
        let mut members = Map::new();
        if node.is_resource() {
            members.insert(
                "resourceType".to_string(),
                Value::String(node.kind().type_name().to_string()),
            );
        }
        self.stack.push(Slot::Object {
            kind: node.kind(),
            members,
        });
    }

    fn visit_end(&mut self, name: &'static str, _index: Option<usize>, node: Node<'a>) {
        let value = if node.is_primitive() {
            primitive_value(node)
        } else {
            match self.stack.pop() {
                Some(Slot::Object { members, .. }) => Value::Object(members),
                _ => Value::Null,
            }
        };
        self.emit(name, node, value);
    }

    fn visit_list_start(&mut self, _name: &'static str, len: usize) {
        self.stack.push(Slot::Array(Vec::with_capacity(len)));
    }

    fn visit_list_end(&mut self, name: &'static str, _len: usize) {
        let items = match self.stack.pop() {
            Some(Slot::Array(items)) => items,
            _ => return,
        };
        // repeating elements are never choices
        if let Some(Slot::Object { members, .. }) = self.stack.last_mut() {
            members.insert(name.to_string(), Value::Array(items));
        }
    }
}

/// JSON member name of child `name` of a `parent` node holding `child`.
fn element_key(parent: NodeKind, name: &'static str, child: Node<'_>) -> String {
    if let Some(kind) = value_kind(child.kind()) {
        match parent {
            NodeKind::Extension | NodeKind::UsageContext if name == "value" => {
                return format!("value{}", kind.type_name());
            }
            _ => {
                let element = type_info(parent).and_then(|info| info.element(name));
                if let Some(element) = element.filter(|e| e.is_choice()) {
                    return element.choice_name(kind);
                }
            }
        }
    }
    name.to_string()
}

fn value_kind(kind: NodeKind) -> Option<ValueKind> {
    let kind = match kind {
        NodeKind::Boolean => ValueKind::Boolean,
        NodeKind::Integer => ValueKind::Integer,
        NodeKind::Decimal => ValueKind::Decimal,
        NodeKind::String => ValueKind::String,
        NodeKind::Uri => ValueKind::Uri,
        NodeKind::Url => ValueKind::Url,
        NodeKind::Canonical => ValueKind::Canonical,
        NodeKind::Code => ValueKind::Code,
        NodeKind::DateTime => ValueKind::DateTime,
        NodeKind::Coding => ValueKind::Coding,
        NodeKind::CodeableConcept => ValueKind::CodeableConcept,
        NodeKind::Identifier => ValueKind::Identifier,
        NodeKind::Reference => ValueKind::Reference,
        NodeKind::Quantity => ValueKind::Quantity,
        NodeKind::Range => ValueKind::Range,
        NodeKind::Ratio => ValueKind::Ratio,
        NodeKind::Period => ValueKind::Period,
        NodeKind::Attachment => ValueKind::Attachment,
        _ => return None,
    };
    Some(kind)
}

fn primitive_value(node: Node<'_>) -> Value {
    let text = match node {
        Node::Boolean(v) => return Value::Bool(*v),
        Node::Integer(v) => return Value::from(*v),
        Node::UnsignedInt(v) | Node::PositiveInt(v) => return Value::from(*v),
        // arbitrary_precision keeps the literal, trailing zeros included
        Node::Decimal(v) => {
            let text = v.to_string();
            return Number::from_str(&text)
                .map(Value::Number)
                .unwrap_or(Value::String(text));
        }
        Node::String(v) => v.as_str(),
        Node::Markdown(v) => v.as_str(),
        Node::Code(v) => v.as_str(),
        Node::Id(v) => v.as_str(),
        Node::Uri(v) => v.as_str(),
        Node::Url(v) => v.as_str(),
        Node::Canonical(v) => v.as_str(),
        Node::DateTime(v) => v.as_str(),
        Node::Instant(v) => v.as_str(),
        Node::Base64Binary(v) => v.as_str(),
        Node::Xhtml(v) => v.as_str(),
        Node::ElementId(v) => v,
        Node::PublicationStatus(v) => v.as_str(),
        Node::FhirVersion(v) => v.as_str(),
        Node::GuidePageGeneration(v) => v.as_str(),
        Node::GuideParameterCode(v) => v.as_str(),
        Node::ResourceType(v) => v.as_str(),
        Node::SpdxLicense(v) => v.as_str(),
        Node::NarrativeStatus(v) => v.as_str(),
        _ => return Value::Null,
    };
    Value::String(text.to_string())
}

/// JSON value of any node.
pub fn to_json(node: Node<'_>) -> Value {
    let mut writer = JsonWriter::new();
    node.accept(&mut writer);
    writer.into_value()
}

/// JSON value of a resource.
pub fn resource_to_json<R: Resource>(resource: &R) -> Value {
    to_json(resource.as_node())
}

/// Serialized JSON text of any node, indented when `config.pretty_print` is set.
pub fn to_json_string(node: Node<'_>, config: &ModelConfig) -> Result<String> {
    let value = to_json(node);
    let text = if config.pretty_print {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    tracing::trace!(kind = node.kind().type_name(), bytes = text.len(), "serialized node");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::datatypes::*;
    use crate::common::primitives::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    #[test]
    fn test_data_type() {
        let concept = CodeableConcept {
            coding: vec![Coding::new(
                Uri::new("http://loinc.org").unwrap(),
                Code::new("1234-5").unwrap(),
            )],
            text: Some(FhirString::new("label").unwrap()),
            ..Default::default()
        };
        assert_eq!(
            to_json(Node::CodeableConcept(&concept)),
            json!({
                "coding": [{"system": "http://loinc.org", "code": "1234-5"}],
                "text": "label"
            })
        );
    }

    #[test]
    fn test_extension_value_suffix() {
        let ext = Extension::with_value(Uri::new("http://example.org/flag").unwrap(), true);
        assert_eq!(
            to_json(Node::Extension(&ext)),
            json!({"url": "http://example.org/flag", "valueBoolean": true})
        );
    }

    #[test]
    fn test_numbers() {
        let quantity = Quantity::ucum(Decimal::new(125, 1), "mg").unwrap();
        let value = to_json(Node::Quantity(&quantity));
        assert_eq!(value["value"], json!(12.5));
        assert_eq!(value["unit"], "mg");

        let attachment = Attachment {
            size: Some(42),
            ..Default::default()
        };
        assert_eq!(to_json(Node::Attachment(&attachment)), json!({"size": 42}));
    }

    #[test]
    fn test_decimal_keeps_scale() {
        let quantity = Quantity::ucum(Decimal::new(150, 2), "mg").unwrap();
        let text = to_json_string(Node::Quantity(&quantity), &ModelConfig::default()).unwrap();
        assert!(text.contains(r#""value":1.50"#), "{text}");

        let precise = Quantity::ucum(Decimal::new(1_000_000_000_000_000_001, 18), "g").unwrap();
        let text = to_json_string(Node::Quantity(&precise), &ModelConfig::default()).unwrap();
        assert!(text.contains(r#""value":1.000000000000000001"#), "{text}");
    }

    #[test]
    fn test_pretty_print() {
        let coding = Coding::new(
            Uri::new("http://loinc.org").unwrap(),
            Code::new("1").unwrap(),
        );
        let compact = to_json_string(Node::Coding(&coding), &ModelConfig::default()).unwrap();
        assert_eq!(compact, r#"{"system":"http://loinc.org","code":"1"}"#);

        let config = ModelConfig {
            pretty_print: true,
            ..Default::default()
        };
        let pretty = to_json_string(Node::Coding(&coding), &config).unwrap();
        assert!(pretty.contains('\n'));
    }
}
