//! JVM type descriptors.
//!
//! Converts structural type descriptions ([`TypeDescriptor`]) into bytecode descriptor strings
//! (`I`, `[Ljava/lang/String;`, `(IJ)V`, ...), parses descriptor strings back, and rewrites the
//! class names embedded in descriptors.

#![forbid(unsafe_code)]

mod codec;
mod descriptor;
mod error;
mod remap;

pub use crate::codec::{
    append_descriptor, class_descriptor, descriptor_of, internal_method_name, internal_name_of,
    method_descriptor, INTERNAL_CONSTRUCTOR_NAME, STATIC_INITIALIZER_NAME,
};
pub use crate::descriptor::{parse_field_descriptor, parse_method_descriptor};
pub use crate::descriptor::{MethodDescriptor, PrimitiveKind, TypeDescriptor};
pub use crate::error::{Error, Result};
pub use crate::remap::remap_descriptor;
