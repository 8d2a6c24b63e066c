use std::fmt;

use namemap_descriptor::{internal_method_name, method_descriptor, TypeDescriptor};

/// A field or method of a class.
///
/// `owner` is a dotted binary class name (`net.minecraft.Entity$1`). `descriptor` is `None`
/// for field references; method references carry their full descriptor (`(I)V`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberReference {
    pub owner: String,
    pub name: String,
    pub descriptor: Option<String>,
}

impl MemberReference {
    pub fn new(
        owner: impl Into<String>,
        name: impl Into<String>,
        descriptor: Option<impl Into<String>>,
    ) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            descriptor: descriptor.map(Into::into),
        }
    }

    pub fn field(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            descriptor: None,
        }
    }

    pub fn method(
        owner: impl Into<String>,
        name: impl Into<String>,
        descriptor: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            descriptor: Some(descriptor.into()),
        }
    }

    /// Split a member mention such as `tick` or `tick(I)V` into name and descriptor.
    ///
    /// Everything from the first `(` on is the descriptor. Owner separators are normalized
    /// from `/` to `.`.
    pub fn from_text(owner: &str, member_text: &str) -> Self {
        let owner = owner.replace('/', ".");
        match member_text.find('(') {
            Some(pos) => Self {
                owner,
                name: member_text[..pos].to_string(),
                descriptor: Some(member_text[pos..].to_string()),
            },
            None => Self {
                owner,
                name: member_text.to_string(),
                descriptor: None,
            },
        }
    }

    /// Parse an SRG operand `owner/path/name`, splitting on the last `/`.
    ///
    /// Returns `None` when there is no separator or either side is empty.
    pub fn parse_srg(owner_and_name: &str, descriptor: Option<&str>) -> Option<Self> {
        let (owner, name) = owner_and_name.rsplit_once('/')?;
        if owner.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self {
            owner: owner.replace('/', "."),
            name: name.to_string(),
            descriptor: descriptor.map(str::to_string),
        })
    }

    /// Reference to a method described structurally.
    pub fn for_method(owner: impl Into<String>, method: &MethodSignature<'_>) -> Self {
        Self::method(owner, method.internal_name(), method.descriptor())
    }

    pub fn is_method(&self) -> bool {
        self.descriptor.is_some()
    }

    pub fn without_descriptor(&self) -> Self {
        Self {
            owner: self.owner.clone(),
            name: self.name.clone(),
            descriptor: None,
        }
    }
}

impl fmt::Display for MemberReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.owner, self.name)?;
        if let Some(descriptor) = &self.descriptor {
            f.write_str(descriptor)?;
        }
        Ok(())
    }
}

/// Erased shape of a method declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodSignature<'a> {
    pub name: &'a str,
    pub is_constructor: bool,
    pub params: &'a [TypeDescriptor],
    /// `None` for `void` methods and constructors.
    pub return_type: Option<&'a TypeDescriptor>,
}

impl<'a> MethodSignature<'a> {
    pub fn new(
        name: &'a str,
        params: &'a [TypeDescriptor],
        return_type: Option<&'a TypeDescriptor>,
    ) -> Self {
        Self {
            name,
            is_constructor: false,
            params,
            return_type,
        }
    }

    pub fn constructor(params: &'a [TypeDescriptor]) -> Self {
        Self {
            name: "",
            is_constructor: true,
            params,
            return_type: None,
        }
    }

    pub fn internal_name(&self) -> &'a str {
        internal_method_name(self.name, self.is_constructor)
    }

    pub fn descriptor(&self) -> String {
        method_descriptor(self.params, self.return_type)
    }
}
