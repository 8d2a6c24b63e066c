use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Immutable one-to-one map, queryable from either side.
#[derive(Clone)]
pub struct Bijection<K, V> {
    forward: HashMap<K, V>,
    inverse: HashMap<V, K>,
}

impl<K, V> Default for Bijection<K, V> {
    fn default() -> Self {
        Self {
            forward: HashMap::new(),
            inverse: HashMap::new(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Bijection<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.forward.iter()).finish()
    }
}

impl<K: Eq + Hash, V: Eq + Hash> PartialEq for Bijection<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.forward == other.forward
    }
}

impl<K: Eq + Hash, V: Eq + Hash> Eq for Bijection<K, V> {}

impl<K, V> Bijection<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    pub fn builder() -> BijectionBuilder<K, V> {
        BijectionBuilder::default()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.forward.get(key)
    }

    pub fn get_inverse<Q>(&self, value: &Q) -> Option<&K>
    where
        V: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.inverse.get(value)
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.forward.iter()
    }
}

/// Which side of a bijection an insertion collided on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Key,
    Value,
}

/// Mutable accumulator for a [`Bijection`]; [`BijectionBuilder::build`] freezes it.
pub struct BijectionBuilder<K, V> {
    inner: Bijection<K, V>,
}

impl<K, V> Default for BijectionBuilder<K, V> {
    fn default() -> Self {
        Self {
            inner: Bijection::default(),
        }
    }
}

impl<K, V> BijectionBuilder<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    /// Insert a pair. Fails without modifying the builder if either side is already present,
    /// including when the exact same pair was inserted before.
    pub fn insert(&mut self, key: K, value: V) -> Result<(), Collision> {
        if self.inner.forward.contains_key(&key) {
            return Err(Collision::Key);
        }
        if self.inner.inverse.contains_key(&value) {
            return Err(Collision::Value);
        }
        self.inner.inverse.insert(value.clone(), key.clone());
        self.inner.forward.insert(key, value);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn build(self) -> Bijection<K, V> {
        self.inner
    }
}
