use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// JVM primitive kinds, including `void` (only valid as a return type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Boolean,
    Void,
}

impl PrimitiveKind {
    /// Single-character descriptor code, e.g. `J` for `long`.
    pub const fn descriptor_char(self) -> char {
        match self {
            PrimitiveKind::Byte => 'B',
            PrimitiveKind::Char => 'C',
            PrimitiveKind::Double => 'D',
            PrimitiveKind::Float => 'F',
            PrimitiveKind::Int => 'I',
            PrimitiveKind::Long => 'J',
            PrimitiveKind::Short => 'S',
            PrimitiveKind::Boolean => 'Z',
            PrimitiveKind::Void => 'V',
        }
    }

    pub const fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Void => "void",
        }
    }

    /// Map a Java source keyword to its primitive kind.
    pub fn from_keyword(keyword: &str) -> Result<Self> {
        Ok(match keyword {
            "byte" => PrimitiveKind::Byte,
            "char" => PrimitiveKind::Char,
            "double" => PrimitiveKind::Double,
            "float" => PrimitiveKind::Float,
            "int" => PrimitiveKind::Int,
            "long" => PrimitiveKind::Long,
            "short" => PrimitiveKind::Short,
            "boolean" => PrimitiveKind::Boolean,
            "void" => PrimitiveKind::Void,
            other => return Err(Error::UnsupportedPrimitiveKind(other.to_string())),
        })
    }

    fn from_descriptor_char(ch: u8) -> Option<Self> {
        Some(match ch {
            b'B' => PrimitiveKind::Byte,
            b'C' => PrimitiveKind::Char,
            b'D' => PrimitiveKind::Double,
            b'F' => PrimitiveKind::Float,
            b'I' => PrimitiveKind::Int,
            b'J' => PrimitiveKind::Long,
            b'S' => PrimitiveKind::Short,
            b'Z' => PrimitiveKind::Boolean,
            _ => return None,
        })
    }
}

impl FromStr for PrimitiveKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_keyword(s)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// An erased, already-resolved type.
///
/// `ClassRef` holds either a binary name (`java.util.Map$Entry`) or an internal name
/// (`java/util/Map$Entry`); descriptor synthesis accepts both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    Primitive(PrimitiveKind),
    Array(Box<TypeDescriptor>),
    ClassRef(String),
}

impl TypeDescriptor {
    pub fn class(name: impl Into<String>) -> Self {
        TypeDescriptor::ClassRef(name.into())
    }

    pub fn array_of(component: TypeDescriptor) -> Self {
        TypeDescriptor::Array(Box::new(component))
    }

    /// Number of array dimensions (`0` for non-array types).
    pub fn dimensions(&self) -> usize {
        let mut ty = self;
        let mut dims = 0;
        while let TypeDescriptor::Array(component) = ty {
            dims += 1;
            ty = component;
        }
        dims
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TypeDescriptor::Primitive(PrimitiveKind::Void))
    }

    pub fn descriptor(&self) -> String {
        crate::codec::descriptor_of(self)
    }
}

impl From<PrimitiveKind> for TypeDescriptor {
    fn from(kind: PrimitiveKind) -> Self {
        TypeDescriptor::Primitive(kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodDescriptor {
    pub params: Vec<TypeDescriptor>,
    pub return_type: TypeDescriptor,
}

impl fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ret = (!self.return_type.is_void()).then_some(&self.return_type);
        f.write_str(&crate::codec::method_descriptor(&self.params, ret))
    }
}

pub fn parse_field_descriptor(desc: &str) -> Result<TypeDescriptor> {
    let (ty, rest) = parse_field_type(desc)?;
    if !rest.is_empty() {
        return Err(Error::InvalidDescriptor(desc.to_string()));
    }
    Ok(ty)
}

pub fn parse_method_descriptor(desc: &str) -> Result<MethodDescriptor> {
    let Some(mut rest) = desc.strip_prefix('(') else {
        return Err(Error::InvalidDescriptor(desc.to_string()));
    };

    let mut params = Vec::new();
    loop {
        if let Some(after) = rest.strip_prefix(')') {
            rest = after;
            break;
        }
        if rest.is_empty() {
            return Err(Error::InvalidDescriptor(desc.to_string()));
        }
        let (param, after) = parse_field_type(rest).map_err(|_| invalid(desc))?;
        params.push(param);
        rest = after;
    }

    let (return_type, rest) = if let Some(rest) = rest.strip_prefix('V') {
        (TypeDescriptor::Primitive(PrimitiveKind::Void), rest)
    } else {
        parse_field_type(rest).map_err(|_| invalid(desc))?
    };

    if !rest.is_empty() {
        return Err(Error::InvalidDescriptor(desc.to_string()));
    }

    Ok(MethodDescriptor {
        params,
        return_type,
    })
}

fn invalid(desc: &str) -> Error {
    Error::InvalidDescriptor(desc.to_string())
}

fn parse_field_type(input: &str) -> Result<(TypeDescriptor, &str)> {
    let Some(&first) = input.as_bytes().first() else {
        return Err(invalid(input));
    };
    if let Some(kind) = PrimitiveKind::from_descriptor_char(first) {
        return Ok((TypeDescriptor::Primitive(kind), &input[1..]));
    }
    match first {
        b'L' => match input.find(';') {
            Some(end) if end > 1 => {
                let name = &input[1..end];
                Ok((TypeDescriptor::ClassRef(name.to_string()), &input[end + 1..]))
            }
            _ => Err(invalid(input)),
        },
        b'[' => {
            let (component, rest) = parse_field_type(&input[1..])?;
            Ok((TypeDescriptor::Array(Box::new(component)), rest))
        }
        _ => Err(invalid(input)),
    }
}
