//! Bidirectional SRG-style name mapping.
//!
//! A mapping file relates human-readable ("MCP") names of classes, fields and methods to
//! mapped ("SRG") names:
//!
//! ```text
//! CL: net/minecraft/Entity a/b/C
//! FD: net/minecraft/Entity/world a/b/C/field_1
//! MD: net/minecraft/Entity/tick ()V a/b/C/func_2 ()V
//! ```
//!
//! [`parse_srg`] turns such a file into an immutable [`SymbolMap`] that answers lookups in
//! both directions.

#![forbid(unsafe_code)]

mod bijection;
mod error;
mod lookup;
mod map;
mod member;
mod parse;
mod write;

pub use crate::bijection::{Bijection, BijectionBuilder, Collision};
pub use crate::error::{MappingError, MappingTable, Result};
pub use crate::map::SymbolMap;
pub use crate::member::{MemberReference, MethodSignature};
pub use crate::parse::{parse_srg, parse_srg_str, parse_srg_with, ParseOptions};
