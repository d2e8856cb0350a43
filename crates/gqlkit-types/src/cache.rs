//! Identity-keyed wrapper memoization
//!
//! Every type node carries a [`WrapperCache`]: one slot for the `[T]` built over it
//! and one for `T!`. Because the record lives on the inner node, the lookup key is
//! the inner instance itself and never its name or shape.
//!
//! Slots hold [`Weak`] references. A wrapper keeps its inner type alive through a
//! strong reference, so a wrapper can never outlive the type it wraps and no
//! reference cycle exists. Once every handle to a wrapper is dropped its slot goes
//! stale and the next request builds a new one.

use crate::ty::{GraphQLType, TypeNode};
use log::trace;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Weak;

/// Which wrapper a cache slot holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WrapperKind {
    List,
    NonNull,
}

impl fmt::Display for WrapperKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WrapperKind::List => f.write_str("List"),
            WrapperKind::NonNull => f.write_str("NonNull"),
        }
    }
}

#[derive(Default)]
pub(crate) struct WrapperCache {
    list_of: RwLock<Weak<TypeNode>>,
    non_null_of: RwLock<Weak<TypeNode>>,
}

impl WrapperCache {
    fn slot(&self, kind: WrapperKind) -> &RwLock<Weak<TypeNode>> {
        match kind {
            WrapperKind::List => &self.list_of,
            WrapperKind::NonNull => &self.non_null_of,
        }
    }

    /// Live wrapper of `kind`, if one exists
    pub(crate) fn get(&self, kind: WrapperKind) -> Option<GraphQLType> {
        self.slot(kind).read().upgrade().map(GraphQLType::from_node)
    }

    /// Return the live wrapper of `kind` or build one with `construct`.
    ///
    /// Concurrent callers for the same slot serialize on its write lock and the
    /// loser of the race sees the winner's instance on re-check.
    pub(crate) fn get_or_create(
        &self,
        kind: WrapperKind,
        construct: impl FnOnce() -> GraphQLType,
    ) -> GraphQLType {
        if let Some(existing) = self.get(kind) {
            trace!("wrapper cache hit: {} {}", kind, existing);
            return existing;
        }

        let mut slot = self.slot(kind).write();
        if let Some(node) = slot.upgrade() {
            return GraphQLType::from_node(node);
        }

        let wrapper = construct();
        *slot = wrapper.downgrade();
        trace!("wrapper cache fill: {} {}", kind, wrapper);
        wrapper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ty::{ListType, TypeKind};

    fn make_list(inner: &GraphQLType) -> GraphQLType {
        GraphQLType::alloc(TypeKind::List(ListType::new(inner.clone())))
    }

    #[test]
    fn test_get_or_create_runs_constructor_once() {
        let inner = GraphQLType::scalar("Int");
        let cache = &inner.node().wrappers;
        let mut calls = 0;

        let first = cache.get_or_create(WrapperKind::List, || {
            calls += 1;
            make_list(&inner)
        });
        let second = cache.get_or_create(WrapperKind::List, || {
            calls += 1;
            make_list(&inner)
        });

        assert_eq!(calls, 1);
        assert_eq!(first, second);
        assert!(cache.get(WrapperKind::NonNull).is_none());
    }

    #[test]
    fn test_slot_goes_stale_after_drop() {
        let inner = GraphQLType::scalar("Int");
        let cache = &inner.node().wrappers;

        let wrapper = cache.get_or_create(WrapperKind::List, || make_list(&inner));
        assert!(cache.get(WrapperKind::List).is_some());

        drop(wrapper);
        assert!(cache.get(WrapperKind::List).is_none());
    }
}
