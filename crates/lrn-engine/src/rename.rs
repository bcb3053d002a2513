//! Recursive renaming.
//!
//! The walk is pre-order, depth-first, left-to-right. Component-like nodes
//! keep their name but their subtree is still visited. A node that fails is
//! journaled and skipped together with its subtree; the walk carries on with
//! its siblings.

use futures::FutureExt;
use futures::future::BoxFuture;
use lrn_core::node::Node;
use lrn_core::responses::{RenameChange, RenameFailure, RenameOutcome, RenameReport};
use lrn_core::{NodeClass, Settings};

use crate::engine::NameEngine;
use crate::error::RenameError;
use crate::style::StyleResolver;

/// Ordered record of every write and every failure during one walk.
#[derive(Debug, Default)]
pub struct RenameJournal {
    pub changes: Vec<RenameChange>,
    pub failures: Vec<RenameFailure>,
}

impl RenameJournal {
    fn into_report(self, renamed_count: usize) -> RenameReport {
        RenameReport {
            outcome: RenameOutcome::from_count(renamed_count),
            renamed_count,
            changes: self.changes,
            failures: self.failures,
        }
    }
}

impl<R: StyleResolver> NameEngine<R> {
    /// Rename `node` and its subtree in place.
    ///
    /// Never fails: a node that cannot be visited is logged, recorded in
    /// `journal.failures`, and left as it was.
    pub fn rename_node<'a>(
        &'a self,
        node: &'a mut Node,
        journal: &'a mut RenameJournal,
    ) -> BoxFuture<'a, ()> {
        async move {
            if let Err(error) = self.try_visit(node, journal).await {
                tracing::warn!(id = node.id(), name = node.name(), %error, "skipping node");
                journal.failures.push(RenameFailure {
                    id: node.id().to_string(),
                    name: node.name().to_string(),
                    reason: error.to_string(),
                });
            }
        }
        .boxed()
    }

    async fn try_visit(
        &self,
        node: &mut Node,
        journal: &mut RenameJournal,
    ) -> Result<(), RenameError> {
        if let Node::Unreadable(unreadable) = node {
            return Err(RenameError::Unreadable {
                id: unreadable.id.clone(),
                reason: unreadable.reason.clone(),
            });
        }

        let class = node.class();
        if class != NodeClass::Component {
            let name = self.generate_name(node).await;
            if name != node.name() {
                let from = node.name().to_string();
                node.set_name(name.clone())?;
                journal.changes.push(RenameChange {
                    id: node.id().to_string(),
                    from,
                    to: name,
                });
            }
        }

        if !matches!(class, NodeClass::Container | NodeClass::Component) {
            return Ok(());
        }
        if let Some(children) = node.children_mut() {
            for child in children {
                self.rename_node(child, journal).await;
            }
        }
        Ok(())
    }

    /// Rename every selected root and its subtree.
    ///
    /// A root counts as renamed when it is not component-like and its final
    /// name differs from the name it had before the walk.
    pub async fn rename_selection(&self, nodes: &mut [Node]) -> RenameReport {
        if nodes.is_empty() {
            tracing::debug!("empty selection, nothing to rename");
            return RenameReport::empty_selection();
        }

        let mut journal = RenameJournal::default();
        let mut renamed_count = 0;

        for node in nodes.iter_mut() {
            let original = node.name().to_string();
            self.rename_node(node, &mut journal).await;
            if node.class() != NodeClass::Component && node.name() != original {
                renamed_count += 1;
            }
        }

        tracing::debug!(
            roots = nodes.len(),
            renamed_count,
            changes = journal.changes.len(),
            failures = journal.failures.len(),
            "rename finished"
        );
        journal.into_report(renamed_count)
    }

    /// The report [`rename_selection`](Self::rename_selection) would produce,
    /// computed on a copy of `nodes`.
    pub async fn preview_selection(&self, nodes: &[Node]) -> RenameReport {
        let mut copy = nodes.to_vec();
        self.rename_selection(&mut copy).await
    }
}

/// Rename a selection with one snapshot of `settings`.
pub async fn rename_selection<R: StyleResolver>(
    nodes: &mut [Node],
    settings: &Settings,
    styles: &R,
) -> RenameReport {
    NameEngine::with_styles(*settings, styles)
        .rename_selection(nodes)
        .await
}
