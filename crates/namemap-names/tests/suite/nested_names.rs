use namemap_names::{ClassTree, NameError, QualifiedNameBuilder};
use pretty_assertions::assert_eq;

#[test]
fn second_anonymous_class_gets_ordinal_two() {
    let mut tree = ClassTree::new();
    let outer = tree.add_top_level("a.b.Outer");
    let init = tree.add_scope(Some(outer), "<init>");
    let _first = tree.add_anonymous_class(init);
    let second = tree.add_anonymous_class(init);

    let builder = QualifiedNameBuilder::new(&tree, &tree);
    assert_eq!(builder.internal_name(&second).unwrap(), "a/b/Outer$2");
    assert_eq!(builder.qualified_name(&second).unwrap(), "a.b.Outer.2");
    assert_eq!(builder.binary_name(&second).unwrap(), "a.b.Outer$2");
    assert_eq!(builder.short_name(&second).unwrap(), "Outer.2");
}

#[test]
fn named_members_join_with_style_separator() {
    let mut tree = ClassTree::new();
    let outer = tree.add_top_level("net.example.Outer");
    let inner = tree.add_member_class(outer, "Inner");
    let deepest = tree.add_member_class(inner, "Deepest");

    let builder = QualifiedNameBuilder::new(&tree, &tree);
    assert_eq!(
        builder.qualified_name(&deepest).unwrap(),
        "net.example.Outer.Inner.Deepest"
    );
    assert_eq!(
        builder.internal_name(&deepest).unwrap(),
        "net/example/Outer$Inner$Deepest"
    );
}

#[test]
fn anonymous_inside_member_inside_anonymous() {
    let mut tree = ClassTree::new();
    let outer = tree.add_top_level("p.Outer");
    let run = tree.add_scope(Some(outer), "run()");
    let anon = tree.add_anonymous_class(run);
    let member = tree.add_member_class(anon, "Helper");
    let call = tree.add_scope(Some(member), "call()");
    let block = tree.add_scope(Some(call), "if");
    let _a = tree.add_anonymous_class(block);
    let b = tree.add_anonymous_class(call);

    let builder = QualifiedNameBuilder::new(&tree, &tree);
    assert_eq!(builder.internal_name(&b).unwrap(), "p/Outer$1$Helper$2");
    assert_eq!(builder.qualified_name(&b).unwrap(), "p.Outer.1.Helper.2");
}

#[test]
fn anonymous_ordinals_count_across_methods_in_declaration_order() {
    let mut tree = ClassTree::new();
    let outer = tree.add_top_level("Main");
    let first_method = tree.add_scope(Some(outer), "a()");
    let a1 = tree.add_anonymous_class(first_method);
    let second_method = tree.add_scope(Some(outer), "b()");
    let b1 = tree.add_anonymous_class(second_method);

    let builder = QualifiedNameBuilder::new(&tree, &tree);
    assert_eq!(builder.anonymous_index(&outer, &a1).unwrap(), 1);
    assert_eq!(builder.anonymous_index(&outer, &b1).unwrap(), 2);
    assert_eq!(builder.internal_name(&b1).unwrap(), "Main$2");
}

#[test]
fn anonymous_index_of_foreign_child_is_an_error() {
    let mut tree = ClassTree::new();
    let left = tree.add_top_level("p.Left");
    let right = tree.add_top_level("p.Right");
    let anon = tree.add_anonymous_class(right);

    let builder = QualifiedNameBuilder::new(&tree, &tree);
    let err = builder.anonymous_index(&left, &anon).unwrap_err();
    assert!(matches!(err, NameError::StructuralInconsistency { .. }));
}

#[test]
fn local_classes_share_the_anonymous_numbering() {
    let mut tree = ClassTree::new();
    let outer = tree.add_top_level("p.Outer");
    let body = tree.add_scope(Some(outer), "main()");
    let _anon = tree.add_anonymous_class(body);
    let local = tree.add_local_class(body, "Local");

    let builder = QualifiedNameBuilder::new(&tree, &tree);
    assert_eq!(builder.internal_name(&local).unwrap(), "p/Outer$2");
}

#[test]
fn node_from_another_tree_is_inconsistent_not_a_panic() {
    let mut other = ClassTree::new();
    other.add_top_level("p.A");
    let foreign = other.add_top_level("p.B");

    let empty = ClassTree::new();
    let builder = QualifiedNameBuilder::new(&empty, &empty);
    let err = builder.qualified_name(&foreign).unwrap_err();
    assert!(
        matches!(err, NameError::StructuralInconsistency { .. }),
        "got {err:?}"
    );
}
