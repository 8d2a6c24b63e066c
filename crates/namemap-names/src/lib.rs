//! Canonical names for nested, local and anonymous JVM classes.
//!
//! Source-level scoping is not available here. Names are rebuilt from two structural
//! relations supplied by the caller through [`StructuralView`]: named-member containment and
//! lexical parentage. Anonymous and local classes are numbered together: each gets its 1-based
//! position among the anonymous and local classes of its enclosing class, in the order an
//! [`AnonymousChildProvider`] enumerates them. Unlike javac, which names a local class
//! `Outer$1Helper`, a local class here takes an ordinal like `Outer$2`.

#![forbid(unsafe_code)]

mod builder;
mod error;
mod tree;
mod view;

pub use crate::builder::{NameStyle, QualifiedNameBuilder};
pub use crate::error::{NameError, Result};
pub use crate::tree::{ClassTree, NodeId, NodeKind};
pub use crate::view::{AnonymousChildProvider, ClassResolver, StructuralView};
