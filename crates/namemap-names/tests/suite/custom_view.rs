//! A caller-supplied view: string paths stand in for syntax nodes.

use std::collections::HashMap;

use namemap_names::{AnonymousChildProvider, NameError, QualifiedNameBuilder, StructuralView};

#[derive(Default)]
struct PathView {
    // node -> (lexical parent, is class, simple name, is named member)
    nodes: HashMap<&'static str, (Option<&'static str>, bool, Option<&'static str>, bool)>,
    top_level: HashMap<&'static str, &'static str>,
}

impl StructuralView for PathView {
    type Node = &'static str;

    fn containing_class(&self, node: &&'static str) -> Option<&'static str> {
        let (parent, _, _, member) = self.nodes.get(node)?;
        if *member {
            *parent
        } else {
            None
        }
    }

    fn lexical_parent(&self, node: &&'static str) -> Option<&'static str> {
        self.nodes.get(node)?.0
    }

    fn is_class(&self, node: &&'static str) -> bool {
        self.nodes.get(node).is_some_and(|(_, class, _, _)| *class)
    }

    fn simple_name(&self, node: &&'static str) -> Option<String> {
        self.nodes.get(node)?.2.map(str::to_string)
    }

    fn top_level_name(&self, node: &&'static str) -> Option<String> {
        self.top_level.get(node).map(|name| name.to_string())
    }
}

/// Anonymous children listed explicitly, the way a language front-end would report them.
struct FixedChildren(HashMap<&'static str, Vec<&'static str>>);

impl AnonymousChildProvider<PathView> for FixedChildren {
    fn anonymous_children_of(&self, _view: &PathView, container: &&'static str) -> Vec<&'static str> {
        self.0.get(container).cloned().unwrap_or_default()
    }
}

#[test]
fn builder_is_agnostic_to_the_front_end() {
    let mut view = PathView::default();
    view.nodes.insert("Outer", (None, true, Some("Outer"), false));
    view.nodes.insert("Outer/m", (Some("Outer"), false, None, false));
    view.nodes.insert("Outer/m/anon", (Some("Outer/m"), true, None, false));
    view.top_level.insert("Outer", "x.y.Outer");

    let provider = FixedChildren(HashMap::from([("Outer", vec!["other", "Outer/m/anon"])]));
    let builder = QualifiedNameBuilder::new(&view, &provider);

    assert_eq!(builder.internal_name(&"Outer/m/anon").unwrap(), "x/y/Outer$2");
}

#[test]
fn member_without_simple_name_is_inconsistent() {
    let mut view = PathView::default();
    view.nodes.insert("Outer", (None, true, Some("Outer"), false));
    view.nodes.insert("Outer/?", (Some("Outer"), true, None, true));
    view.top_level.insert("Outer", "Outer");

    let provider = FixedChildren(HashMap::new());
    let builder = QualifiedNameBuilder::new(&view, &provider);

    assert_eq!(
        builder.qualified_name(&"Outer/?"),
        Err(NameError::StructuralInconsistency {
            node: "\"Outer/?\"".to_string(),
            reason: "member class has no simple name",
        })
    );
}

#[test]
fn cyclic_containment_is_reported_not_looped() {
    let mut view = PathView::default();
    view.nodes.insert("A", (Some("B"), true, Some("A"), true));
    view.nodes.insert("B", (Some("A"), true, Some("B"), true));

    let provider = FixedChildren(HashMap::new());
    let builder = QualifiedNameBuilder::new(&view, &provider);

    assert!(matches!(
        builder.binary_name(&"A"),
        Err(NameError::StructuralInconsistency {
            reason: "class nesting does not terminate",
            ..
        })
    ));
}
