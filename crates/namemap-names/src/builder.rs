use std::fmt;

use crate::error::{NameError, Result};
use crate::view::{AnonymousChildProvider, ClassResolver, StructuralView};

// Upper bound on nesting levels walked for a single name. Real code never gets close; hitting
// it means the snapshot contains a cycle.
const MAX_NESTING_DEPTH: usize = 1024;

/// Which flavour of class name to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameStyle {
    /// `a.b.Outer.Inner.1`
    Qualified,
    /// `a.b.Outer$Inner$1`, the form used as mapping-table keys.
    Binary,
    /// `a/b/Outer$Inner$1`
    Internal,
    /// `Outer.Inner.1`
    Short,
}

impl NameStyle {
    pub const fn separator(self) -> char {
        match self {
            NameStyle::Qualified | NameStyle::Short => '.',
            NameStyle::Binary | NameStyle::Internal => '$',
        }
    }

    fn root_name<V: StructuralView + ?Sized>(self, view: &V, node: &V::Node) -> Option<String> {
        let qualified = view.top_level_name(node)?;
        match self {
            NameStyle::Qualified | NameStyle::Binary => Some(qualified),
            NameStyle::Internal => Some(qualified.replace('.', "/")),
            NameStyle::Short => view.simple_name(node),
        }
    }
}

/// Builds names for arbitrarily nested classes over a [`StructuralView`].
///
/// The builder holds no state of its own. Anonymous ordinals are recomputed from the provider
/// on every call.
pub struct QualifiedNameBuilder<'a, V: ?Sized, P: ?Sized> {
    view: &'a V,
    provider: &'a P,
}

impl<V: ?Sized, P: ?Sized> fmt::Debug for QualifiedNameBuilder<'_, V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QualifiedNameBuilder").finish_non_exhaustive()
    }
}

impl<'a, V, P> QualifiedNameBuilder<'a, V, P>
where
    V: StructuralView + ?Sized,
    P: AnonymousChildProvider<V> + ?Sized,
{
    pub fn new(view: &'a V, provider: &'a P) -> Self {
        Self { view, provider }
    }

    pub fn view(&self) -> &'a V {
        self.view
    }

    /// Dotted display name, e.g. `a.b.Outer.2`.
    pub fn qualified_name(&self, class: &V::Node) -> Result<String> {
        self.name(class, NameStyle::Qualified)
    }

    /// Bytecode internal name, e.g. `a/b/Outer$2`.
    pub fn internal_name(&self, class: &V::Node) -> Result<String> {
        self.name(class, NameStyle::Internal)
    }

    /// Binary name, e.g. `a.b.Outer$2`.
    pub fn binary_name(&self, class: &V::Node) -> Result<String> {
        self.name(class, NameStyle::Binary)
    }

    /// Name relative to the package, e.g. `Outer.2`.
    pub fn short_name(&self, class: &V::Node) -> Result<String> {
        self.name(class, NameStyle::Short)
    }

    /// 1-based ordinal of `child` among the anonymous and local classes of `parent`.
    pub fn anonymous_index(&self, parent: &V::Node, child: &V::Node) -> Result<usize> {
        self.provider
            .anonymous_children_of(self.view, parent)
            .iter()
            .position(|candidate| candidate == child)
            .map(|idx| idx + 1)
            .ok_or_else(|| {
                NameError::inconsistent(child, "class is not among its container's anonymous classes")
            })
    }

    pub fn name(&self, class: &V::Node, style: NameStyle) -> Result<String> {
        if let Some(root) = style.root_name(self.view, class) {
            return Ok(root);
        }

        // Innermost fragment first.
        let mut fragments: Vec<String> = Vec::new();
        let mut current = class.clone();
        let root = loop {
            if fragments.len() >= MAX_NESTING_DEPTH {
                return Err(NameError::inconsistent(class, "class nesting does not terminate"));
            }

            let parent = match self.view.containing_class(&current) {
                Some(parent) => {
                    let name = self.view.simple_name(&current).ok_or_else(|| {
                        NameError::inconsistent(&current, "member class has no simple name")
                    })?;
                    fragments.push(name);
                    parent
                }
                None => {
                    let parent = self.enclosing_class(&current)?;
                    fragments.push(self.anonymous_index(&parent, &current)?.to_string());
                    parent
                }
            };

            current = parent;
            if let Some(root) = style.root_name(self.view, &current) {
                break root;
            }
        };

        let separator = style.separator();
        let mut out = root;
        for fragment in fragments.iter().rev() {
            out.push(separator);
            out.push_str(fragment);
        }

        tracing::trace!(target: "namemap.names", ?style, name = %out, "built nested class name");
        Ok(out)
    }

    /// Nearest class-like node on the lexical parent chain of an anonymous or local class.
    fn enclosing_class(&self, node: &V::Node) -> Result<V::Node> {
        let mut cursor = self.view.lexical_parent(node);
        for _ in 0..MAX_NESTING_DEPTH {
            match cursor {
                Some(candidate) if self.view.is_class(&candidate) => return Ok(candidate),
                Some(candidate) => cursor = self.view.lexical_parent(&candidate),
                None => break,
            }
        }
        Err(NameError::inconsistent(
            node,
            "anonymous class has no enclosing class",
        ))
    }
}

impl<V, P> QualifiedNameBuilder<'_, V, P>
where
    V: ClassResolver + ?Sized,
    P: AnonymousChildProvider<V> + ?Sized,
{
    /// Resolve a binary (`a.b.Outer$Inner$1`) or internal (`a/b/Outer$Inner$1`) name back to a
    /// class node.
    ///
    /// Numeric segments are anonymous ordinals. Unknown names and out-of-range ordinals
    /// resolve to `None`.
    pub fn find_class(&self, name: &str) -> Option<V::Node> {
        let name = name.replace('/', ".");
        let mut segments = name.split('$');
        let mut current = self.view.find_top_level_class(segments.next()?)?;

        for segment in segments {
            current = match segment.parse::<usize>() {
                Ok(ordinal) => {
                    let idx = ordinal.checked_sub(1)?;
                    self.provider
                        .anonymous_children_of(self.view, &current)
                        .into_iter()
                        .nth(idx)?
                }
                Err(_) => self.view.find_member_class(&current, segment)?,
            };
        }

        Some(current)
    }
}
