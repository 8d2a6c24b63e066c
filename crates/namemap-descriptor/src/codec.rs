use crate::descriptor::TypeDescriptor;

/// Bytecode name of every constructor.
pub const INTERNAL_CONSTRUCTOR_NAME: &str = "<init>";

/// Bytecode name of a class's static initializer.
pub const STATIC_INITIALIZER_NAME: &str = "<clinit>";

/// Descriptor string for `ty`, e.g. `[Lfoo/Bar;`.
pub fn descriptor_of(ty: &TypeDescriptor) -> String {
    let mut out = String::new();
    append_descriptor(ty, &mut out);
    out
}

pub fn append_descriptor(ty: &TypeDescriptor, out: &mut String) {
    match ty {
        TypeDescriptor::Primitive(kind) => out.push(kind.descriptor_char()),
        TypeDescriptor::Array(component) => {
            out.push('[');
            append_descriptor(component, out);
        }
        TypeDescriptor::ClassRef(name) => append_class_descriptor(name, out),
    }
}

/// Internal (slash separated) form of a binary class name: `a.b.Outer$Inner` -> `a/b/Outer$Inner`.
///
/// Nested-class `$` separators are kept as-is; internal names pass through unchanged.
pub fn internal_name_of(class_name: &str) -> String {
    class_name.replace('.', "/")
}

/// `L<internal name>;` for a class.
pub fn class_descriptor(class_name: &str) -> String {
    let mut out = String::with_capacity(class_name.len() + 2);
    append_class_descriptor(class_name, &mut out);
    out
}

fn append_class_descriptor(class_name: &str, out: &mut String) {
    out.push('L');
    out.extend(class_name.chars().map(|c| if c == '.' { '/' } else { c }));
    out.push(';');
}

/// Method descriptor from parameter types and an optional return type (`None` is `void`).
pub fn method_descriptor(params: &[TypeDescriptor], return_type: Option<&TypeDescriptor>) -> String {
    let mut out = String::from("(");
    for param in params {
        append_descriptor(param, &mut out);
    }
    out.push(')');
    match return_type {
        Some(ty) => append_descriptor(ty, &mut out),
        None => out.push('V'),
    }
    out
}

/// Name a method carries in bytecode; constructors are always `<init>`.
pub fn internal_method_name(name: &str, is_constructor: bool) -> &str {
    if is_constructor {
        INTERNAL_CONSTRUCTOR_NAME
    } else {
        name
    }
}
