//! Memoized boundary and hierarchy computation
//!
//! A [`Session`] owns the two caches that make hierarchy assembly
//! tractable: ordinary boundaries and assembled hierarchies, both keyed
//! by the structure of the tree. Entries are never evicted; dropping the
//! session (or calling [`Session::clear`]) releases them.

use crate::boundary::{self, contract_runs};
use crate::config::SessionConfig;
use crate::hierarchy::{Hierarchy, RawHierarchy};
use crate::model::Tree;
use crate::{Error, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, instrument, trace};

/// Cache occupancy and effectiveness
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub boundary_entries: usize,
    pub hierarchy_entries: usize,
    pub hits: u64,
    pub misses: u64,
}

/// A computation context holding the boundary and hierarchy caches
///
/// Sessions are `Send + Sync`. Two threads asking for the same tree at
/// once may both compute it; the values they store are equal.
#[derive(Default)]
pub struct Session {
    config: SessionConfig,
    boundaries: RwLock<HashMap<Tree, Vec<Tree>>>,
    hierarchies: RwLock<HashMap<Tree, Arc<RawHierarchy>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Session {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    // === Boundary ===

    /// Ordinary boundary of `tree`, cached together with the boundaries
    /// of every nested child it needed
    pub fn normal_boundary(&self, tree: &Tree) -> Vec<Tree> {
        if !self.config.memoize {
            return boundary::normal_boundary(tree);
        }
        if let Some(faces) = self.lookup(&self.boundaries, tree) {
            return faces;
        }

        let faces = contract_runs(tree, |sub| self.normal_boundary(sub));
        self.boundaries.write().insert(tree.clone(), faces.clone());
        faces
    }

    /// Unit-law boundary of `tree` (cheap, so never cached)
    pub fn unit_boundary(&self, tree: &Tree) -> Vec<Tree> {
        boundary::unit_boundary(tree)
    }

    /// Ordinary faces followed by unit-law faces
    pub fn boundary(&self, tree: &Tree) -> Vec<Tree> {
        let mut faces = self.normal_boundary(tree);
        faces.extend(self.unit_boundary(tree));
        faces
    }

    // === Hierarchy ===

    /// The hierarchy structure below `tree`
    ///
    /// Fails with [`Error::DepthExceeded`] when the boundary relation
    /// nests deeper than the configured `max_depth`.
    pub fn hierarchy_raw(&self, tree: &Tree) -> Result<Arc<RawHierarchy>> {
        self.assemble(tree, 0)
    }

    #[instrument(level = "trace", skip(self, tree), fields(tree = %tree))]
    pub fn hierarchy(&self, tree: &Tree) -> Result<Hierarchy> {
        let raw = self.hierarchy_raw(tree)?;
        Ok(Hierarchy::new(tree.clone(), raw))
    }

    fn assemble(&self, tree: &Tree, depth: usize) -> Result<Arc<RawHierarchy>> {
        if depth > self.config.max_depth {
            return Err(Error::DepthExceeded {
                limit: self.config.max_depth,
            });
        }
        if self.config.memoize {
            if let Some(raw) = self.lookup(&self.hierarchies, tree) {
                return Ok(raw);
            }
        }

        let faces = self.boundary(tree);
        if faces.is_empty() {
            return Ok(Arc::new(RawHierarchy::default()));
        }

        let mut lower = Vec::new();
        for face in &faces {
            let sub = self.assemble(face, depth + 1)?;
            if !sub.is_empty() {
                lower.push(sub);
            }
        }

        debug!(
            tree = %tree,
            faces = faces.len(),
            nested = lower.len(),
            "assembled hierarchy"
        );
        let raw = Arc::new(RawHierarchy { faces, lower });
        if self.config.memoize {
            self.hierarchies.write().insert(tree.clone(), Arc::clone(&raw));
        }
        Ok(raw)
    }

    // === Cache management ===

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            boundary_entries: self.boundaries.read().len(),
            hierarchy_entries: self.hierarchies.read().len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Drop all cached entries and reset the counters
    pub fn clear(&self) {
        self.boundaries.write().clear();
        self.hierarchies.write().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    fn lookup<V: Clone>(&self, cache: &RwLock<HashMap<Tree, V>>, tree: &Tree) -> Option<V> {
        let found = cache.read().get(tree).cloned();
        if found.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(tree = %tree, "cache hit");
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            trace!(tree = %tree, "cache miss");
        }
        found
    }
}

impl Tree {
    /// Hierarchy of this tree, computed in a fresh default session
    pub fn hierarchy(&self) -> Result<Hierarchy> {
        Session::default().hierarchy(self)
    }
}
