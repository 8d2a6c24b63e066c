#![no_main]

use libfuzzer_sys::fuzz_target;
use namemap_descriptor::{parse_field_descriptor, parse_method_descriptor, remap_descriptor};

mod utils;

fuzz_target!(|data: &[u8]| {
    let Some(text) = utils::truncate_utf8(data) else {
        return;
    };

    // Rendering a parsed descriptor reaches a fixpoint after one step (`.` in class names
    // becomes `/`).
    if let Ok(ty) = parse_field_descriptor(text) {
        let rendered = ty.descriptor();
        let again = parse_field_descriptor(&rendered).expect("rendered field descriptor must parse");
        assert_eq!(again.descriptor(), rendered);
    }
    if let Ok(method) = parse_method_descriptor(text) {
        let rendered = method.to_string();
        let again =
            parse_method_descriptor(&rendered).expect("rendered method descriptor must parse");
        assert_eq!(again.to_string(), rendered);
    }

    if let Ok(remapped) = remap_descriptor(text, |_| None) {
        assert_eq!(remapped, text);
    }
});
