//! Mapping queries keyed by class structure instead of by name strings.

use namemap_names::{AnonymousChildProvider, QualifiedNameBuilder, StructuralView};

use crate::map::SymbolMap;
use crate::member::{MemberReference, MethodSignature};

impl SymbolMap {
    /// Mapped binary name of `class`, or `None` if the class has no mapping.
    pub fn find_mapped_class<V, P>(
        &self,
        names: &QualifiedNameBuilder<'_, V, P>,
        class: &V::Node,
    ) -> namemap_names::Result<Option<&str>>
    where
        V: StructuralView + ?Sized,
        P: AnonymousChildProvider<V> + ?Sized,
    {
        let binary = names.binary_name(class)?;
        Ok(self.lookup_mapped_class(&binary))
    }

    pub fn find_mapped_field<V, P>(
        &self,
        names: &QualifiedNameBuilder<'_, V, P>,
        owner: &V::Node,
        field_name: &str,
    ) -> namemap_names::Result<Option<&MemberReference>>
    where
        V: StructuralView + ?Sized,
        P: AnonymousChildProvider<V> + ?Sized,
    {
        let key = MemberReference::field(names.binary_name(owner)?, field_name);
        Ok(self.lookup_mapped_field(&key))
    }

    /// Mapped reference for a method of `owner`. Constructors are looked up as `<init>`.
    pub fn find_mapped_method<V, P>(
        &self,
        names: &QualifiedNameBuilder<'_, V, P>,
        owner: &V::Node,
        method: &MethodSignature<'_>,
    ) -> namemap_names::Result<Option<&MemberReference>>
    where
        V: StructuralView + ?Sized,
        P: AnonymousChildProvider<V> + ?Sized,
    {
        let key = MemberReference::for_method(names.binary_name(owner)?, method);
        tracing::trace!(target: "namemap.srg", method = %key, "structural method lookup");
        Ok(self.lookup_mapped_method(&key))
    }
}
