//! Shared utilities and strongly-typed common values for workspace crates.
//!
//! ```rust
//! use pcommon::{Generation, Registry, ToolId};
//!
//! let tool = ToolId::from("rotate-pages");
//! let first = Generation::initial();
//! let mut registry = Registry::new();
//! registry.insert(tool.clone(), 1_u32);
//!
//! assert_eq!(tool.as_str(), "rotate-pages");
//! assert!(first.next() > first);
//! assert_eq!(registry.get(&tool), Some(&1));
//! ```

pub mod future {
    //! Shared async future aliases.
    //!
    //! ```rust
    //! use pcommon::BoxFuture;
    //!
    //! fn str_len<'a>(value: &'a str) -> BoxFuture<'a, usize> {
    //!     Box::pin(async move { value.len() })
    //! }
    //!
    //! let _future = str_len("hello");
    //! ```

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod context {
    //! Cross-crate identifier newtypes.
    //!
    //! ```rust
    //! use pcommon::{Generation, ToolId};
    //!
    //! let tool = ToolId::new("merge");
    //! let generation = Generation::initial().next();
    //!
    //! assert_eq!(tool.to_string(), "merge");
    //! assert_eq!(generation.value(), 1);
    //! ```

    use std::fmt::{Display, Formatter};

    #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct ToolId(String);

    impl ToolId {
        pub fn new(value: impl Into<String>) -> Self {
            Self(value.into())
        }

        pub fn as_str(&self) -> &str {
            self.0.as_str()
        }
    }

    impl Display for ToolId {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl From<String> for ToolId {
        fn from(value: String) -> Self {
            Self(value)
        }
    }

    impl From<&str> for ToolId {
        fn from(value: &str) -> Self {
            Self(value.to_string())
        }
    }

    impl std::borrow::Borrow<str> for ToolId {
        fn borrow(&self) -> &str {
            self.0.as_str()
        }
    }

    /// Monotonic tag for one activation/attachment cycle of a session.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
    pub struct Generation(u64);

    impl Generation {
        pub fn initial() -> Self {
            Self(0)
        }

        pub fn next(self) -> Self {
            Self(self.0.saturating_add(1))
        }

        pub fn value(self) -> u64 {
            self.0
        }
    }

    impl Display for Generation {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "g{}", self.0)
        }
    }
}

pub mod registry {
    //! Insertion-ordered registry map wrapper used by catalogs.
    //!
    //! ```rust
    //! use pcommon::Registry;
    //!
    //! let mut registry = Registry::new();
    //! registry.insert("beta".to_string(), 2_u32);
    //! registry.insert("alpha".to_string(), 1_u32);
    //!
    //! assert_eq!(registry.get("alpha"), Some(&1));
    //! assert_eq!(registry.values().copied().collect::<Vec<_>>(), vec![2, 1]);
    //! ```

    use std::borrow::Borrow;
    use std::collections::HashMap;
    use std::hash::Hash;

    #[derive(Debug, Clone)]
    pub struct Registry<K, V> {
        items: HashMap<K, V>,
        order: Vec<K>,
    }

    impl<K, V> Default for Registry<K, V>
    where
        K: Eq + Hash,
    {
        fn default() -> Self {
            Self {
                items: HashMap::new(),
                order: Vec::new(),
            }
        }
    }

    impl<K, V> Registry<K, V>
    where
        K: Eq + Hash + Clone,
    {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn insert(&mut self, key: K, value: V) -> Option<V> {
            let previous = self.items.insert(key.clone(), value);
            if previous.is_none() {
                self.order.push(key);
            }
            previous
        }

        pub fn get<Q>(&self, key: &Q) -> Option<&V>
        where
            K: Borrow<Q>,
            Q: Eq + Hash + ?Sized,
        {
            self.items.get(key)
        }

        pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
        where
            K: Borrow<Q>,
            Q: Eq + Hash + ?Sized,
        {
            let removed = self.items.remove(key)?;
            self.order
                .retain(|existing| <K as Borrow<Q>>::borrow(existing) != key);
            Some(removed)
        }

        pub fn contains_key<Q>(&self, key: &Q) -> bool
        where
            K: Borrow<Q>,
            Q: Eq + Hash + ?Sized,
        {
            self.items.contains_key(key)
        }

        /// Values in insertion order.
        pub fn values(&self) -> impl Iterator<Item = &V> {
            self.order.iter().filter_map(|key| self.items.get(key))
        }

        pub fn keys(&self) -> impl Iterator<Item = &K> {
            self.order.iter()
        }

        pub fn len(&self) -> usize {
            self.items.len()
        }

        pub fn is_empty(&self) -> bool {
            self.items.is_empty()
        }
    }
}

pub use context::{Generation, ToolId};
pub use future::BoxFuture;
pub use registry::Registry;

#[cfg(test)]
mod tests {
    use super::{Generation, Registry, ToolId};

    #[test]
    fn tool_id_round_trips_strings() {
        let tool = ToolId::new("protect");

        assert_eq!(tool.as_str(), "protect");
        assert_eq!(tool.to_string(), "protect");
        assert_eq!(ToolId::from("protect".to_string()), tool);
    }

    #[test]
    fn generations_increase_monotonically() {
        let first = Generation::initial();
        let second = first.next();
        let third = second.next();

        assert!(first < second && second < third);
        assert_eq!(third.value(), 2);
        assert_eq!(third.to_string(), "g2");
    }

    #[test]
    fn registry_keeps_insertion_order_across_removals() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());

        registry.insert("c".to_string(), 3_u32);
        registry.insert("a".to_string(), 1_u32);
        registry.insert("b".to_string(), 2_u32);
        assert_eq!(registry.insert("a".to_string(), 10), Some(1));

        let removed = registry.remove("c");
        assert_eq!(removed, Some(3));
        assert_eq!(registry.len(), 2);
        assert!(registry.contains_key("b"));
        assert_eq!(registry.values().copied().collect::<Vec<_>>(), vec![10, 2]);
    }
}
