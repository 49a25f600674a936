//! Traversal over resource trees

use ferrum_resources::r4::*;
use ferrum_resources::visitor::{walk, Node, NodeKind, Visitor};
use ferrum_resources::Resource;

mod test_support;

use test_support::*;

/// Records element paths as they are entered
#[derive(Default)]
struct PathRecorder {
    stack: Vec<String>,
    paths: Vec<String>,
}

impl<'a> Visitor<'a> for PathRecorder {
    fn visit_start(&mut self, name: &'static str, index: Option<usize>, _node: Node<'a>) {
        self.stack.push(match index {
            Some(i) => format!("{name}[{i}]"),
            None => name.to_string(),
        });
        self.paths.push(self.stack.join("."));
    }

    fn visit_end(&mut self, _name: &'static str, _index: Option<usize>, _node: Node<'a>) {
        self.stack.pop();
    }
}

#[test]
fn test_paths_in_declaration_order() {
    let ig = guide_builder().build().unwrap();
    let mut recorder = PathRecorder::default();
    ig.as_node().accept(&mut recorder);

    assert_eq!(
        recorder.paths,
        vec![
            "ImplementationGuide",
            "ImplementationGuide.url",
            "ImplementationGuide.name",
            "ImplementationGuide.status",
            "ImplementationGuide.packageId",
            "ImplementationGuide.fhirVersion[0]",
        ]
    );
}

#[test]
fn test_choice_children_use_element_name() {
    let ig = full_guide();
    let mut recorder = PathRecorder::default();
    walk("ig", None, ig.as_node(), &mut recorder);

    assert!(recorder
        .paths
        .contains(&"ig.definition.resource[0].example".to_string()));
    assert!(recorder
        .paths
        .contains(&"ig.definition.page.page[0].name.reference".to_string()));
}

#[test]
fn test_pre_visit_prunes_subtrees() {
    struct SkipDefinition(Vec<NodeKind>);

    impl<'a> Visitor<'a> for SkipDefinition {
        fn pre_visit(&mut self, node: Node<'a>) -> bool {
            node.kind() != NodeKind::ImplementationGuideDefinition
        }

        fn post_visit(&mut self, node: Node<'a>) {
            self.0.push(node.kind());
        }
    }

    let mut visitor = SkipDefinition(Vec::new());
    full_guide().as_node().accept(&mut visitor);

    assert_eq!(visitor.0.last(), Some(&NodeKind::ImplementationGuide));
    assert!(!visitor.0.contains(&NodeKind::ImplementationGuideDefinitionPage));
    assert!(!visitor.0.contains(&NodeKind::Boolean));
}

#[test]
fn test_list_events_bracket_items() {
    #[derive(Default)]
    struct Lists(Vec<(String, usize)>);

    impl<'a> Visitor<'a> for Lists {
        fn visit_list_start(&mut self, name: &'static str, len: usize) {
            self.0.push((format!("start {name}"), len));
        }

        fn visit_list_end(&mut self, name: &'static str, len: usize) {
            self.0.push((format!("end {name}"), len));
        }
    }

    let substance = full_substance();
    let mut lists = Lists::default();
    Node::SubstanceSpecificationName(&substance.name()[0]).accept(&mut lists);

    assert_eq!(
        lists.0,
        vec![
            ("start synonym".to_string(), 1),
            ("end synonym".to_string(), 1),
        ]
    );
}

#[test]
fn test_deep_page_tree() {
    let mut current = page(reference("Binary/leaf"), "Leaf").build().unwrap();
    for depth in 0..2_000 {
        current = ImplementationGuideDefinitionPageBuilder {
            page: vec![current],
            ..page(reference(&format!("Binary/p{depth}")), "Section")
        }
        .build()
        .unwrap();
    }

    #[derive(Default)]
    struct Depth {
        current: usize,
        max: usize,
        titles: usize,
    }

    impl<'a> Visitor<'a> for Depth {
        fn visit_start(&mut self, name: &'static str, _index: Option<usize>, _node: Node<'a>) {
            self.current += 1;
            self.max = self.max.max(self.current);
            if name == "title" {
                self.titles += 1;
            }
        }

        fn visit_end(&mut self, _name: &'static str, _index: Option<usize>, _node: Node<'a>) {
            self.current -= 1;
        }
    }

    let mut depth = Depth::default();
    Node::ImplementationGuideDefinitionPage(&current).accept(&mut depth);

    assert_eq!(depth.max, 2_003);
    assert_eq!(depth.titles, 2_001);
    assert_eq!(depth.current, 0);
}
