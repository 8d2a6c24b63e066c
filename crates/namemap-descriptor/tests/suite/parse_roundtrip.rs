use namemap_descriptor::{parse_field_descriptor, parse_method_descriptor, Error};
use pretty_assertions::assert_eq;

#[test]
fn parsed_method_descriptors_render_back_unchanged() {
    for desc in [
        "()V",
        "(I)V",
        "(IJLjava/lang/String;)Z",
        "([[B[Ljava/util/Map$Entry;)[Ljava/lang/Object;",
    ] {
        let parsed = parse_method_descriptor(desc).expect("valid method descriptor");
        assert_eq!(parsed.to_string(), desc);
    }
}

#[test]
fn parsed_field_descriptors_render_back_unchanged() {
    for desc in ["Z", "[D", "Lnet/minecraft/Entity;", "[[Lnet/minecraft/Entity$1;"] {
        let parsed = parse_field_descriptor(desc).expect("valid field descriptor");
        assert_eq!(parsed.descriptor(), desc);
    }
}

#[test]
fn invalid_descriptor_reports_input() {
    assert_eq!(
        parse_method_descriptor("(Q)V"),
        Err(Error::InvalidDescriptor("(Q)V".to_string()))
    );
}
