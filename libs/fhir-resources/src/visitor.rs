//! Depth-first traversal of model trees
//!
//! Every value reachable from a resource is exposed as a [`Node`]. [`walk`]
//! drives a [`Visitor`] over a node and its descendants:
//!
//! ```text
//! pre_visit ─┬─ false ──────────────────────────────────────────────▶ (skipped)
//!            └─ true ─▶ visit_start ─▶ visit ─┬─ true ─▶ children ─┐
//!                                             └─ false ────────────┴▶ visit_end ─▶ post_visit
//! ```
//!
//! Children are produced in element declaration order, base elements first.
//! Repeating elements are bracketed by `visit_list_start`/`visit_list_end` and
//! each item carries its index; empty lists and absent values are not visited.
//! The walk keeps its own stack, so nesting depth is limited by memory only.

use crate::common::base::{BackboneElement, ContainedResource, ResourceBase};
use crate::common::datatypes::*;
use crate::common::primitives::*;
use crate::r4::codes::{
    FhirVersion, GuidePageGeneration, GuideParameterCode, NarrativeStatus, PublicationStatus,
    ResourceType, SpdxLicense,
};
use crate::r4::implementation_guide::*;
use crate::r4::substance_specification::*;
use rust_decimal::Decimal;

macro_rules! nodes {
    ($($variant:ident($ty:ty) => $type_name:literal),+ $(,)?) => {
        /// Borrowed view of any value in a model tree
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub enum Node<'a> {
            $($variant(&'a $ty)),+
        }

        /// The kind of a [`Node`], without the value
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum NodeKind {
            $($variant),+
        }

        impl<'a> Node<'a> {
            pub fn kind(&self) -> NodeKind {
                match self {
                    $(Node::$variant(_) => NodeKind::$variant),+
                }
            }
        }

        impl NodeKind {
            /// FHIR type name; backbone elements use their element path
            pub fn type_name(&self) -> &'static str {
                match self {
                    $(NodeKind::$variant => $type_name),+
                }
            }
        }
    };
}

nodes! {
    ImplementationGuide(ImplementationGuide) => "ImplementationGuide",
    ImplementationGuideDependsOn(ImplementationGuideDependsOn) => "ImplementationGuide.dependsOn",
    ImplementationGuideGlobal(ImplementationGuideGlobal) => "ImplementationGuide.global",
    ImplementationGuideDefinition(ImplementationGuideDefinition) => "ImplementationGuide.definition",
    ImplementationGuideDefinitionGrouping(ImplementationGuideDefinitionGrouping) => "ImplementationGuide.definition.grouping",
    ImplementationGuideDefinitionResource(ImplementationGuideDefinitionResource) => "ImplementationGuide.definition.resource",
    ImplementationGuideDefinitionPage(ImplementationGuideDefinitionPage) => "ImplementationGuide.definition.page",
    ImplementationGuideDefinitionParameter(ImplementationGuideDefinitionParameter) => "ImplementationGuide.definition.parameter",
    ImplementationGuideDefinitionTemplate(ImplementationGuideDefinitionTemplate) => "ImplementationGuide.definition.template",
    ImplementationGuideManifest(ImplementationGuideManifest) => "ImplementationGuide.manifest",
    ImplementationGuideManifestResource(ImplementationGuideManifestResource) => "ImplementationGuide.manifest.resource",
    ImplementationGuideManifestPage(ImplementationGuideManifestPage) => "ImplementationGuide.manifest.page",

    SubstanceSpecification(SubstanceSpecification) => "SubstanceSpecification",
    SubstanceSpecificationMoiety(SubstanceSpecificationMoiety) => "SubstanceSpecification.moiety",
    SubstanceSpecificationProperty(SubstanceSpecificationProperty) => "SubstanceSpecification.property",
    SubstanceSpecificationStructure(SubstanceSpecificationStructure) => "SubstanceSpecification.structure",
    SubstanceSpecificationStructureIsotope(SubstanceSpecificationStructureIsotope) => "SubstanceSpecification.structure.isotope",
    SubstanceSpecificationStructureIsotopeMolecularWeight(SubstanceSpecificationStructureIsotopeMolecularWeight) => "SubstanceSpecification.structure.isotope.molecularWeight",
    SubstanceSpecificationStructureRepresentation(SubstanceSpecificationStructureRepresentation) => "SubstanceSpecification.structure.representation",
    SubstanceSpecificationCode(SubstanceSpecificationCode) => "SubstanceSpecification.code",
    SubstanceSpecificationName(SubstanceSpecificationName) => "SubstanceSpecification.name",
    SubstanceSpecificationNameOfficial(SubstanceSpecificationNameOfficial) => "SubstanceSpecification.name.official",
    SubstanceSpecificationRelationship(SubstanceSpecificationRelationship) => "SubstanceSpecification.relationship",

    Extension(Extension) => "Extension",
    Coding(Coding) => "Coding",
    CodeableConcept(CodeableConcept) => "CodeableConcept",
    Identifier(Identifier) => "Identifier",
    Reference(Reference) => "Reference",
    Period(Period) => "Period",
    Quantity(Quantity) => "Quantity",
    Range(Range) => "Range",
    Ratio(Ratio) => "Ratio",
    Attachment(Attachment) => "Attachment",
    ContactPoint(ContactPoint) => "ContactPoint",
    ContactDetail(ContactDetail) => "ContactDetail",
    UsageContext(UsageContext) => "UsageContext",
    Meta(Meta) => "Meta",
    Narrative(Narrative) => "Narrative",

    Boolean(bool) => "boolean",
    Integer(i32) => "integer",
    UnsignedInt(u32) => "unsignedInt",
    PositiveInt(u32) => "positiveInt",
    Decimal(Decimal) => "decimal",
    String(FhirString) => "string",
    Markdown(Markdown) => "markdown",
    Code(Code) => "code",
    Id(Id) => "id",
    Uri(Uri) => "uri",
    Url(Url) => "url",
    Canonical(Canonical) => "canonical",
    DateTime(DateTime) => "dateTime",
    Instant(Instant) => "instant",
    Base64Binary(Base64Binary) => "base64Binary",
    Xhtml(Xhtml) => "xhtml",
    ElementId(str) => "string",

    PublicationStatus(PublicationStatus) => "code",
    FhirVersion(FhirVersion) => "code",
    GuidePageGeneration(GuidePageGeneration) => "code",
    GuideParameterCode(GuideParameterCode) => "code",
    ResourceType(ResourceType) => "code",
    SpdxLicense(SpdxLicense) => "code",
    NarrativeStatus(NarrativeStatus) => "code",
}

/// A child element of a node
#[derive(Debug, Clone, PartialEq)]
pub enum Child<'a> {
    Single { name: &'static str, node: Node<'a> },
    List { name: &'static str, nodes: Vec<Node<'a>> },
}

impl<'a> Child<'a> {
    pub fn name(&self) -> &'static str {
        match self {
            Child::Single { name, .. } | Child::List { name, .. } => *name,
        }
    }
}

/// Accumulates the children of a node in declaration order
#[derive(Debug, Default)]
pub struct Children<'a> {
    items: Vec<Child<'a>>,
}

impl<'a> Children<'a> {
    pub(crate) fn one(&mut self, name: &'static str, node: Node<'a>) -> &mut Self {
        self.items.push(Child::Single { name, node });
        self
    }

    pub(crate) fn opt<T: ?Sized>(
        &mut self,
        name: &'static str,
        value: Option<&'a T>,
        node: impl Fn(&'a T) -> Node<'a>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.one(name, node(value));
        }
        self
    }

    pub(crate) fn many<T>(
        &mut self,
        name: &'static str,
        values: &'a [T],
        node: impl Fn(&'a T) -> Node<'a>,
    ) -> &mut Self {
        if !values.is_empty() {
            self.items.push(Child::List {
                name,
                nodes: values.iter().map(node).collect(),
            });
        }
        self
    }

    pub(crate) fn choice(&mut self, name: &'static str, value: Option<&'a ChoiceValue>) -> &mut Self {
        self.opt(name, value, ChoiceValue::as_node)
    }

    /// `id` and `extension` of a data type
    pub(crate) fn element(&mut self, id: Option<&'a str>, extension: &'a [Extension]) -> &mut Self {
        self.opt("id", id, Node::ElementId)
            .many("extension", extension, Node::Extension)
    }

    pub(crate) fn backbone(&mut self, base: &'a BackboneElement) -> &mut Self {
        self.element(base.id.as_deref(), &base.extension)
            .many("modifierExtension", &base.modifier_extension, Node::Extension)
    }

    pub(crate) fn resource(&mut self, base: &'a ResourceBase) -> &mut Self {
        self.opt("id", base.id.as_ref(), Node::Id)
            .opt("meta", base.meta.as_ref(), Node::Meta)
            .opt("implicitRules", base.implicit_rules.as_ref(), Node::Uri)
            .opt("language", base.language.as_ref(), Node::Code)
            .opt("text", base.text.as_ref(), Node::Narrative)
            .many("contained", &base.contained, ContainedResource::as_node)
            .many("extension", &base.extension, Node::Extension)
            .many("modifierExtension", &base.modifier_extension, Node::Extension)
    }

    pub fn into_vec(self) -> Vec<Child<'a>> {
        self.items
    }
}

impl ChoiceValue {
    pub fn as_node(&self) -> Node<'_> {
        match self {
            ChoiceValue::Boolean(v) => Node::Boolean(v),
            ChoiceValue::Integer(v) => Node::Integer(v),
            ChoiceValue::Decimal(v) => Node::Decimal(v),
            ChoiceValue::String(v) => Node::String(v),
            ChoiceValue::Uri(v) => Node::Uri(v),
            ChoiceValue::Url(v) => Node::Url(v),
            ChoiceValue::Canonical(v) => Node::Canonical(v),
            ChoiceValue::Code(v) => Node::Code(v),
            ChoiceValue::DateTime(v) => Node::DateTime(v),
            ChoiceValue::Coding(v) => Node::Coding(v),
            ChoiceValue::CodeableConcept(v) => Node::CodeableConcept(v),
            ChoiceValue::Identifier(v) => Node::Identifier(v),
            ChoiceValue::Reference(v) => Node::Reference(v),
            ChoiceValue::Quantity(v) => Node::Quantity(v),
            ChoiceValue::Range(v) => Node::Range(v),
            ChoiceValue::Ratio(v) => Node::Ratio(v),
            ChoiceValue::Period(v) => Node::Period(v),
            ChoiceValue::Attachment(v) => Node::Attachment(v),
        }
    }
}

impl<'a> Node<'a> {
    /// Child elements in declaration order; empty for primitives and codes.
    pub fn children(self) -> Vec<Child<'a>> {
        let mut out = Children::default();
        match self {
            Node::ImplementationGuide(n) => n.push_children(&mut out),
            Node::ImplementationGuideDependsOn(n) => n.push_children(&mut out),
            Node::ImplementationGuideGlobal(n) => n.push_children(&mut out),
            Node::ImplementationGuideDefinition(n) => n.push_children(&mut out),
            Node::ImplementationGuideDefinitionGrouping(n) => n.push_children(&mut out),
            Node::ImplementationGuideDefinitionResource(n) => n.push_children(&mut out),
            Node::ImplementationGuideDefinitionPage(n) => n.push_children(&mut out),
            Node::ImplementationGuideDefinitionParameter(n) => n.push_children(&mut out),
            Node::ImplementationGuideDefinitionTemplate(n) => n.push_children(&mut out),
            Node::ImplementationGuideManifest(n) => n.push_children(&mut out),
            Node::ImplementationGuideManifestResource(n) => n.push_children(&mut out),
            Node::ImplementationGuideManifestPage(n) => n.push_children(&mut out),

            Node::SubstanceSpecification(n) => n.push_children(&mut out),
            Node::SubstanceSpecificationMoiety(n) => n.push_children(&mut out),
            Node::SubstanceSpecificationProperty(n) => n.push_children(&mut out),
            Node::SubstanceSpecificationStructure(n) => n.push_children(&mut out),
            Node::SubstanceSpecificationStructureIsotope(n) => n.push_children(&mut out),
            Node::SubstanceSpecificationStructureIsotopeMolecularWeight(n) => {
                n.push_children(&mut out)
            }
            Node::SubstanceSpecificationStructureRepresentation(n) => n.push_children(&mut out),
            Node::SubstanceSpecificationCode(n) => n.push_children(&mut out),
            Node::SubstanceSpecificationName(n) => n.push_children(&mut out),
            Node::SubstanceSpecificationNameOfficial(n) => n.push_children(&mut out),
            Node::SubstanceSpecificationRelationship(n) => n.push_children(&mut out),

            Node::Extension(n) => {
                out.element(n.id.as_deref(), &n.extension)
                    .one("url", Node::Uri(&n.url))
                    .choice("value", n.value.as_deref());
            }
            Node::Coding(n) => {
                out.element(n.id.as_deref(), &n.extension)
                    .opt("system", n.system.as_ref(), Node::Uri)
                    .opt("version", n.version.as_ref(), Node::String)
                    .opt("code", n.code.as_ref(), Node::Code)
                    .opt("display", n.display.as_ref(), Node::String)
                    .opt("userSelected", n.user_selected.as_ref(), Node::Boolean);
            }
            Node::CodeableConcept(n) => {
                out.element(n.id.as_deref(), &n.extension)
                    .many("coding", &n.coding, Node::Coding)
                    .opt("text", n.text.as_ref(), Node::String);
            }
            Node::Identifier(n) => {
                out.element(n.id.as_deref(), &n.extension)
                    .opt("use", n.use_.as_ref(), Node::Code)
                    .opt("type", n.type_.as_ref(), Node::CodeableConcept)
                    .opt("system", n.system.as_ref(), Node::Uri)
                    .opt("value", n.value.as_ref(), Node::String)
                    .opt("period", n.period.as_ref(), Node::Period)
                    .opt("assigner", n.assigner.as_deref(), Node::Reference);
            }
            Node::Reference(n) => {
                out.element(n.id.as_deref(), &n.extension)
                    .opt("reference", n.reference.as_ref(), Node::String)
                    .opt("type", n.type_.as_ref(), Node::Uri)
                    .opt("identifier", n.identifier.as_deref(), Node::Identifier)
                    .opt("display", n.display.as_ref(), Node::String);
            }
            Node::Period(n) => {
                out.element(n.id.as_deref(), &n.extension)
                    .opt("start", n.start.as_ref(), Node::DateTime)
                    .opt("end", n.end.as_ref(), Node::DateTime);
            }
            Node::Quantity(n) => {
                out.element(n.id.as_deref(), &n.extension)
                    .opt("value", n.value.as_ref(), Node::Decimal)
                    .opt("comparator", n.comparator.as_ref(), Node::Code)
                    .opt("unit", n.unit.as_ref(), Node::String)
                    .opt("system", n.system.as_ref(), Node::Uri)
                    .opt("code", n.code.as_ref(), Node::Code);
            }
            Node::Range(n) => {
                out.element(n.id.as_deref(), &n.extension)
                    .opt("low", n.low.as_ref(), Node::Quantity)
                    .opt("high", n.high.as_ref(), Node::Quantity);
            }
            Node::Ratio(n) => {
                out.element(n.id.as_deref(), &n.extension)
                    .opt("numerator", n.numerator.as_ref(), Node::Quantity)
                    .opt("denominator", n.denominator.as_ref(), Node::Quantity);
            }
            Node::Attachment(n) => {
                out.element(n.id.as_deref(), &n.extension)
                    .opt("contentType", n.content_type.as_ref(), Node::Code)
                    .opt("language", n.language.as_ref(), Node::Code)
                    .opt("data", n.data.as_ref(), Node::Base64Binary)
                    .opt("url", n.url.as_ref(), Node::Url)
                    .opt("size", n.size.as_ref(), Node::UnsignedInt)
                    .opt("hash", n.hash.as_ref(), Node::Base64Binary)
                    .opt("title", n.title.as_ref(), Node::String)
                    .opt("creation", n.creation.as_ref(), Node::DateTime);
            }
            Node::ContactPoint(n) => {
                out.element(n.id.as_deref(), &n.extension)
                    .opt("system", n.system.as_ref(), Node::Code)
                    .opt("value", n.value.as_ref(), Node::String)
                    .opt("use", n.use_.as_ref(), Node::Code)
                    .opt("rank", n.rank.as_ref(), Node::PositiveInt)
                    .opt("period", n.period.as_ref(), Node::Period);
            }
            Node::ContactDetail(n) => {
                out.element(n.id.as_deref(), &n.extension)
                    .opt("name", n.name.as_ref(), Node::String)
                    .many("telecom", &n.telecom, Node::ContactPoint);
            }
            Node::UsageContext(n) => {
                out.element(n.id.as_deref(), &n.extension)
                    .one("code", Node::Coding(&n.code))
                    .choice("value", Some(&n.value));
            }
            Node::Meta(n) => {
                out.element(n.id.as_deref(), &n.extension)
                    .opt("versionId", n.version_id.as_ref(), Node::Id)
                    .opt("lastUpdated", n.last_updated.as_ref(), Node::Instant)
                    .opt("source", n.source.as_ref(), Node::Uri)
                    .many("profile", &n.profile, Node::Canonical)
                    .many("security", &n.security, Node::Coding)
                    .many("tag", &n.tag, Node::Coding);
            }
            Node::Narrative(n) => {
                out.element(n.id.as_deref(), &n.extension)
                    .one("status", Node::NarrativeStatus(&n.status))
                    .one("div", Node::Xhtml(&n.div));
            }

            Node::Boolean(_)
            | Node::Integer(_)
            | Node::UnsignedInt(_)
            | Node::PositiveInt(_)
            | Node::Decimal(_)
            | Node::String(_)
            | Node::Markdown(_)
            | Node::Code(_)
            | Node::Id(_)
            | Node::Uri(_)
            | Node::Url(_)
            | Node::Canonical(_)
            | Node::DateTime(_)
            | Node::Instant(_)
            | Node::Base64Binary(_)
            | Node::Xhtml(_)
            | Node::ElementId(_)
            | Node::PublicationStatus(_)
            | Node::FhirVersion(_)
            | Node::GuidePageGeneration(_)
            | Node::GuideParameterCode(_)
            | Node::ResourceType(_)
            | Node::SpdxLicense(_)
            | Node::NarrativeStatus(_) => {}
        }
        out.into_vec()
    }

    /// Primitive and code values have no children of their own.
    pub fn is_primitive(&self) -> bool {
        self.kind().is_primitive()
    }

    pub fn is_resource(&self) -> bool {
        matches!(self, Node::ImplementationGuide(_) | Node::SubstanceSpecification(_))
    }

    /// Walk this node with its type name as element name.
    pub fn accept<V: Visitor<'a> + ?Sized>(self, visitor: &mut V) {
        walk(self.kind().type_name(), None, self, visitor);
    }
}

impl NodeKind {
    pub fn is_primitive(&self) -> bool {
        *self >= NodeKind::Boolean
    }
}

/// Callbacks invoked by [`walk`]; every method has a no-op default.
pub trait Visitor<'a> {
    /// Return `false` to skip the node entirely.
    fn pre_visit(&mut self, _node: Node<'a>) -> bool {
        true
    }

    fn visit_start(&mut self, _name: &'static str, _index: Option<usize>, _node: Node<'a>) {}

    /// Return `false` to skip the children of the node.
    fn visit(&mut self, _name: &'static str, _index: Option<usize>, _node: Node<'a>) -> bool {
        true
    }

    fn visit_end(&mut self, _name: &'static str, _index: Option<usize>, _node: Node<'a>) {}

    fn post_visit(&mut self, _node: Node<'a>) {}

    fn visit_list_start(&mut self, _name: &'static str, _len: usize) {}

    fn visit_list_end(&mut self, _name: &'static str, _len: usize) {}
}

enum Frame<'a> {
    Enter {
        name: &'static str,
        index: Option<usize>,
        node: Node<'a>,
    },
    Exit {
        name: &'static str,
        index: Option<usize>,
        node: Node<'a>,
    },
    ListStart {
        name: &'static str,
        len: usize,
    },
    ListEnd {
        name: &'static str,
        len: usize,
    },
}

/// Drive `visitor` over `node` and everything below it.
pub fn walk<'a, V: Visitor<'a> + ?Sized>(
    name: &'static str,
    index: Option<usize>,
    node: Node<'a>,
    visitor: &mut V,
) {
    let mut stack = vec![Frame::Enter { name, index, node }];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter { name, index, node } => {
                if !visitor.pre_visit(node) {
                    continue;
                }
                visitor.visit_start(name, index, node);
                stack.push(Frame::Exit { name, index, node });
                if !visitor.visit(name, index, node) {
                    continue;
                }
                for child in node.children().into_iter().rev() {
                    match child {
                        Child::Single { name, node } => stack.push(Frame::Enter {
                            name,
                            index: None,
                            node,
                        }),
                        Child::List { name, nodes } => {
                            let len = nodes.len();
                            stack.push(Frame::ListEnd { name, len });
                            for (i, node) in nodes.into_iter().enumerate().rev() {
                                stack.push(Frame::Enter {
                                    name,
                                    index: Some(i),
                                    node,
                                });
                            }
                            stack.push(Frame::ListStart { name, len });
                        }
                    }
                }
            }
            Frame::Exit { name, index, node } => {
                visitor.visit_end(name, index, node);
                visitor.post_visit(node);
            }
            Frame::ListStart { name, len } => visitor.visit_list_start(name, len),
            Frame::ListEnd { name, len } => visitor.visit_list_end(name, len),
        }
    }
}

/// Collects every node of one kind
#[derive(Debug)]
pub struct CollectingVisitor<'a> {
    kind: NodeKind,
    nodes: Vec<Node<'a>>,
}

impl<'a> CollectingVisitor<'a> {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            nodes: Vec::new(),
        }
    }

    pub fn nodes(&self) -> &[Node<'a>] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Node<'a>> {
        self.nodes
    }
}

impl<'a> Visitor<'a> for CollectingVisitor<'a> {
    fn visit_start(&mut self, _name: &'static str, _index: Option<usize>, node: Node<'a>) {
        if node.kind() == self.kind {
            self.nodes.push(node);
        }
    }
}

/// All nodes of `kind` under `root` (including `root` itself), in document order.
pub fn collect(root: Node<'_>, kind: NodeKind) -> Vec<Node<'_>> {
    let mut visitor = CollectingVisitor::new(kind);
    root.accept(&mut visitor);
    visitor.into_nodes()
}

/// Every `Reference` under `root`, in document order.
pub fn collect_references(root: Node<'_>) -> Vec<&Reference> {
    collect(root, NodeKind::Reference)
        .into_iter()
        .filter_map(|node| match node {
            Node::Reference(reference) => Some(reference),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
        skip_children_of: Option<NodeKind>,
    }

    impl<'a> Visitor<'a> for Recorder {
        fn visit_start(&mut self, name: &'static str, index: Option<usize>, _node: Node<'a>) {
            match index {
                Some(i) => self.events.push(format!("start {name}[{i}]")),
                None => self.events.push(format!("start {name}")),
            }
        }

        fn visit(&mut self, _name: &'static str, _index: Option<usize>, node: Node<'a>) -> bool {
            self.skip_children_of != Some(node.kind())
        }

        fn visit_end(&mut self, name: &'static str, _index: Option<usize>, _node: Node<'a>) {
            self.events.push(format!("end {name}"));
        }

        fn visit_list_start(&mut self, name: &'static str, len: usize) {
            self.events.push(format!("list {name} {len}"));
        }

        fn visit_list_end(&mut self, name: &'static str, _len: usize) {
            self.events.push(format!("/list {name}"));
        }
    }

    fn concept() -> CodeableConcept {
        CodeableConcept {
            coding: vec![
                Coding::new(Uri::new("http://loinc.org").unwrap(), Code::new("1").unwrap()),
                Coding::new(Uri::new("http://loinc.org").unwrap(), Code::new("2").unwrap()),
            ],
            text: Some(FhirString::new("two codes").unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn test_walk_order() {
        let concept = concept();
        let mut recorder = Recorder::default();
        Node::CodeableConcept(&concept).accept(&mut recorder);

        assert_eq!(
            recorder.events,
            vec![
                "start CodeableConcept",
                "list coding 2",
                "start coding[0]",
                "start system",
                "end system",
                "start code",
                "end code",
                "end coding",
                "start coding[1]",
                "start system",
                "end system",
                "start code",
                "end code",
                "end coding",
                "/list coding",
                "start text",
                "end text",
                "end CodeableConcept",
            ]
        );
    }

    #[test]
    fn test_visit_gate_skips_children_only() {
        let concept = concept();
        let mut recorder = Recorder {
            skip_children_of: Some(NodeKind::Coding),
            ..Default::default()
        };
        Node::CodeableConcept(&concept).accept(&mut recorder);

        assert!(recorder.events.contains(&"start coding[1]".to_string()));
        assert!(recorder.events.contains(&"end coding".to_string()));
        assert!(!recorder.events.contains(&"start system".to_string()));
    }

    #[test]
    fn test_pre_visit_gate_skips_node() {
        struct SkipCodings(Vec<NodeKind>);
        impl<'a> Visitor<'a> for SkipCodings {
            fn pre_visit(&mut self, node: Node<'a>) -> bool {
                node.kind() != NodeKind::Coding
            }
            fn visit_start(&mut self, _: &'static str, _: Option<usize>, node: Node<'a>) {
                self.0.push(node.kind());
            }
        }

        let concept = concept();
        let mut visitor = SkipCodings(Vec::new());
        Node::CodeableConcept(&concept).accept(&mut visitor);
        assert_eq!(visitor.0, vec![NodeKind::CodeableConcept, NodeKind::String]);
    }

    #[test]
    fn test_collect() {
        let concept = concept();
        let codes = collect(Node::CodeableConcept(&concept), NodeKind::Code);
        assert_eq!(codes.len(), 2);
        assert!(matches!(codes[1], Node::Code(code) if code.as_str() == "2"));
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        let url = Uri::new("http://example.org/nested").unwrap();
        let mut ext = Extension::with_value(url.clone(), true);
        for _ in 0..50_000 {
            ext = Extension::with_extensions(url.clone(), vec![ext]);
        }
        let found = collect(Node::Extension(&ext), NodeKind::Boolean);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_primitive_kinds() {
        assert!(NodeKind::Boolean.is_primitive());
        assert!(NodeKind::NarrativeStatus.is_primitive());
        assert!(NodeKind::ElementId.is_primitive());
        assert!(!NodeKind::Narrative.is_primitive());
        assert!(!NodeKind::ImplementationGuide.is_primitive());
        assert_eq!(NodeKind::ImplementationGuideDefinitionPage.type_name(), "ImplementationGuide.definition.page");
    }
}
