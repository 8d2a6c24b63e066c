use namemap_descriptor::{PrimitiveKind, TypeDescriptor};
use namemap_names::{ClassTree, QualifiedNameBuilder};
use namemap_srg::{parse_srg_str, MemberReference, MethodSignature};
use pretty_assertions::assert_eq;

#[test]
fn anonymous_class_resolves_through_binary_name() {
    let mut tree = ClassTree::new();
    let entity = tree.add_top_level("net.minecraft.Entity");
    let tick = tree.add_scope(Some(entity), "tick()");
    let _first = tree.add_anonymous_class(tick);
    let second = tree.add_anonymous_class(tick);
    let names = QualifiedNameBuilder::new(&tree, &tree);

    let map = parse_srg_str(
        "CL: net/minecraft/Entity a/b/C\n\
         CL: net/minecraft/Entity$2 a/b/C$2\n\
         FD: net/minecraft/Entity$2/this$0 a/b/C$2/field_5\n",
    )
    .unwrap();

    assert_eq!(map.find_mapped_class(&names, &entity).unwrap(), Some("a.b.C"));
    assert_eq!(map.find_mapped_class(&names, &second).unwrap(), Some("a.b.C$2"));
    assert_eq!(
        map.find_mapped_field(&names, &second, "this$0").unwrap(),
        Some(&MemberReference::field("a.b.C$2", "field_5"))
    );
}

#[test]
fn methods_resolve_from_signatures() {
    let mut tree = ClassTree::new();
    let outer = tree.add_top_level("p.Outer");
    let inner = tree.add_member_class(outer, "Inner");
    let names = QualifiedNameBuilder::new(&tree, &tree);

    let map = parse_srg_str(
        "MD: p/Outer$Inner/<init> (I)V x/Y$Z/<init> (I)V\n\
         MD: p/Outer$Inner/apply ([Ljava/lang/String;J)Lp/Outer; x/Y$Z/func_9 ([Ljava/lang/String;J)Lx/Y;\n",
    )
    .unwrap();

    let int = [TypeDescriptor::Primitive(PrimitiveKind::Int)];
    assert_eq!(
        map.find_mapped_method(&names, &inner, &MethodSignature::constructor(&int))
            .unwrap(),
        Some(&MemberReference::method("x.Y$Z", "<init>", "(I)V"))
    );

    let params = [
        TypeDescriptor::array_of(TypeDescriptor::class("java.lang.String")),
        TypeDescriptor::Primitive(PrimitiveKind::Long),
    ];
    let ret = TypeDescriptor::class("p.Outer");
    let apply = MethodSignature::new("apply", &params, Some(&ret));
    let mapped = map.find_mapped_method(&names, &inner, &apply).unwrap().unwrap();
    assert_eq!(mapped.name, "func_9");
    assert_eq!(mapped.descriptor.as_deref(), Some("([Ljava/lang/String;J)Lx/Y;"));

    let missing = MethodSignature::new("apply", &[], None);
    assert_eq!(map.find_mapped_method(&names, &inner, &missing).unwrap(), None);
}

#[test]
fn structural_errors_surface_before_lookup() {
    let mut tree = ClassTree::new();
    let block = tree.add_scope(None, "detached");
    let orphan = tree.add_anonymous_class(block);
    let names = QualifiedNameBuilder::new(&tree, &tree);

    let map = parse_srg_str("CL: a/B c/D\n").unwrap();
    assert!(map.find_mapped_class(&names, &orphan).is_err());
}
