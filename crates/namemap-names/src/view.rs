use std::fmt;

/// Read-only structural view over class-like nodes.
///
/// Implementations describe a point-in-time snapshot; they must not change while a single
/// naming call is running.
pub trait StructuralView {
    type Node: Clone + Eq + fmt::Debug;

    /// The class that declares `node` as a named member. `None` for top-level, local and
    /// anonymous classes.
    fn containing_class(&self, node: &Self::Node) -> Option<Self::Node>;

    /// The immediately enclosing syntax node (class, method, initializer, block, ...).
    fn lexical_parent(&self, node: &Self::Node) -> Option<Self::Node>;

    fn is_class(&self, node: &Self::Node) -> bool;

    /// Declared simple name; `None` for anonymous classes and non-class nodes.
    fn simple_name(&self, node: &Self::Node) -> Option<String>;

    /// Dotted fully qualified name of a top-level class (`a.b.Outer`).
    ///
    /// Returns `None` for every class that is nested, local or anonymous.
    fn top_level_name(&self, node: &Self::Node) -> Option<String>;
}

/// Enumerates the anonymous and local classes lexically declared inside a container class,
/// in declaration order. Position `i` in the returned list has ordinal `i + 1`.
pub trait AnonymousChildProvider<V: StructuralView + ?Sized> {
    fn anonymous_children_of(&self, view: &V, container: &V::Node) -> Vec<V::Node>;
}

/// Lookup of classes by name, used to resolve binary names back to nodes.
pub trait ClassResolver: StructuralView {
    fn find_top_level_class(&self, qualified_name: &str) -> Option<Self::Node>;

    fn find_member_class(&self, container: &Self::Node, simple_name: &str) -> Option<Self::Node>;
}
