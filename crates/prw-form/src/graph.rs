//! Declared dependencies between form fields.
//!
//! A dependent select is driven by its parent's value. The links are declared
//! once when the form is built, checked for cycles, and then only queried.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt::Debug;

use tracing::debug;

use crate::error::{FormError, Result};

/// Directed parent -> child links between fields.
#[derive(Debug, Clone)]
pub struct FieldGraph<F> {
    children: BTreeMap<F, Vec<F>>,
    parents: BTreeMap<F, Vec<F>>,
}

/// Collects links for a [`FieldGraph`].
#[derive(Debug, Clone)]
pub struct FieldGraphBuilder<F> {
    links: Vec<(F, F)>,
}

impl<F: Copy + Ord + Debug> FieldGraph<F> {
    pub fn builder() -> FieldGraphBuilder<F> {
        FieldGraphBuilder { links: Vec::new() }
    }

    /// Direct dependents of `field`, in declaration order.
    pub fn children(&self, field: F) -> &[F] {
        self.children.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Fields `field` depends on directly.
    pub fn parents(&self, field: F) -> &[F] {
        self.parents.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every field reachable from `field`, nearest first.
    pub fn dependents(&self, field: F) -> Vec<F> {
        let mut seen = BTreeSet::new();
        let mut order = Vec::new();
        let mut queue: VecDeque<F> = self.children(field).iter().copied().collect();

        while let Some(next) = queue.pop_front() {
            if seen.insert(next) {
                order.push(next);
                queue.extend(self.children(next).iter().copied());
            }
        }
        order
    }

    /// Fields that drive at least one dependent.
    pub fn roots(&self) -> impl Iterator<Item = F> + '_ {
        self.children.keys().copied().filter(|f| !self.parents.contains_key(f))
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<F: Copy + Ord + Debug> FieldGraphBuilder<F> {
    /// Declare that `child` loads its options from `parent`'s value.
    #[must_use]
    pub fn link(mut self, parent: F, child: F) -> Self {
        self.links.push((parent, child));
        self
    }

    /// Validate the declared links. Fails on self-links and cycles.
    pub fn build(self) -> Result<FieldGraph<F>> {
        let mut children: BTreeMap<F, Vec<F>> = BTreeMap::new();
        let mut parents: BTreeMap<F, Vec<F>> = BTreeMap::new();

        for (parent, child) in self.links {
            if parent == child {
                return Err(FormError::SelfDependency {
                    field: format!("{parent:?}"),
                });
            }
            let siblings = children.entry(parent).or_default();
            if !siblings.contains(&child) {
                siblings.push(child);
                parents.entry(child).or_default().push(parent);
            }
        }

        let graph = FieldGraph { children, parents };
        if let Some(field) = graph.find_cycle() {
            return Err(FormError::CyclicDependency {
                field: format!("{field:?}"),
            });
        }
        debug!(links = graph.children.values().map(Vec::len).sum::<usize>(), "field graph built");
        Ok(graph)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
}

impl<F: Copy + Ord + Debug> FieldGraph<F> {
    /// A field on some cycle, if the graph has one.
    fn find_cycle(&self) -> Option<F> {
        let mut marks: BTreeMap<F, Mark> = BTreeMap::new();
        self.children
            .keys()
            .copied()
            .find_map(|start| self.visit(start, &mut marks))
    }

    fn visit(&self, field: F, marks: &mut BTreeMap<F, Mark>) -> Option<F> {
        match marks.get(&field) {
            Some(Mark::Visiting) => return Some(field),
            Some(Mark::Done) => return None,
            None => {}
        }
        marks.insert(field, Mark::Visiting);
        for &child in self.children(field) {
            if let Some(hit) = self.visit(child, marks) {
                return Some(hit);
            }
        }
        marks.insert(field, Mark::Done);
        None
    }
}
