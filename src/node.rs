//! Tree structure: panels, child slots and tab groups.
//!
//! A [`TabNode`] is one tab group. Its children are either all panels or
//! all nested groups; the two kinds never mix under one node. Children
//! keep insertion order and are addressed by index or by label, labels
//! being unique among siblings.
//!
//! Panels are lazy: a [`Panel`] starts out as an empty shell and only
//! receives its drawing surface (and runs its builder) the first time it
//! is realized. Realization happens at most once per panel, even when the
//! builder fails.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Result, TabError};
use crate::label::TabLabel;
use crate::path::{FocusPath, Selector};

static NEXT_PANEL_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique panel identifier, assigned at insertion time.
///
/// Stable for the lifetime of the panel, independent of its position in
/// the tree, so it survives reordering and is safe to use as a widget id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelId(u64);

impl PanelId {
    pub(crate) fn next() -> Self {
        PanelId(NEXT_PANEL_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panel-{}", self.0)
    }
}

/// Outcome of a builder callback.
pub type BuildResult = std::result::Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Deferred drawing routine for one panel.
///
/// Runs at most once, when the panel is first realized. The closure gets
/// the freshly created surface and the panel's resolved coordinates.
pub type PanelBuilder<S> = Box<dyn FnOnce(&mut S, &FocusPath) -> BuildResult>;

/// One leaf of the tab tree.
///
/// Holds the drawing surface once realized, and the pending builder until
/// then. Panels created from an existing surface count as realized from
/// the start and never run any builder.
pub struct Panel<S> {
    id: PanelId,
    surface: Option<S>,
    builder: Option<PanelBuilder<S>>,
}

impl<S> Panel<S> {
    /// An empty shell; the surface is created on first realization.
    pub(crate) fn deferred(builder: Option<PanelBuilder<S>>) -> Self {
        Panel {
            id: PanelId::next(),
            surface: None,
            builder,
        }
    }

    /// A panel wrapping an already populated surface.
    pub(crate) fn prebuilt(surface: S) -> Self {
        Panel {
            id: PanelId::next(),
            surface: Some(surface),
            builder: None,
        }
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn is_realized(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Create the surface and run the builder, once, then hand the
    /// surface out. Later calls skip straight to the hand-out.
    ///
    /// When no panel-specific builder was registered, `fallback` fills
    /// the surface instead. A failing builder still leaves the panel
    /// realized with whatever it managed to draw; the builder itself is
    /// consumed and will not run again.
    pub(crate) fn realize(
        &mut self,
        path: &FocusPath,
        factory: &mut dyn FnMut() -> S,
        fallback: Option<&mut dyn FnMut(&mut S, &FocusPath) -> BuildResult>,
    ) -> Result<&mut S> {
        let first = self.surface.is_none();
        let surface = self.surface.get_or_insert_with(|| factory());
        if !first {
            return Ok(surface);
        }
        let outcome = match self.builder.take() {
            Some(build) => build(surface, path),
            None => match fallback {
                Some(build) => build(surface, path),
                None => Ok(()),
            },
        };
        match outcome {
            Ok(()) => {
                log::debug!("realized {} at {path}", self.id);
                Ok(surface)
            }
            Err(source) => Err(TabError::Builder {
                path: path.clone(),
                source,
            }),
        }
    }
}

impl<S> fmt::Debug for Panel<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panel")
            .field("id", &self.id)
            .field("realized", &self.surface.is_some())
            .field("pending_builder", &self.builder.is_some())
            .finish()
    }
}

/// Either a leaf panel or a nested tab group.
pub enum Child<S> {
    Panel(Panel<S>),
    Group(TabNode<S>),
}

impl<S> Child<S> {
    pub fn is_panel(&self) -> bool {
        matches!(self, Child::Panel(_))
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Child::Group(_))
    }
}

/// A labeled child of a tab group.
pub struct ChildSlot<S> {
    pub(crate) label: TabLabel,
    pub(crate) child: Child<S>,
}

impl<S> ChildSlot<S> {
    pub fn label(&self) -> &TabLabel {
        &self.label
    }

    pub fn child(&self) -> &Child<S> {
        &self.child
    }
}

/// One tab group: ordered, uniquely labeled children plus the active index.
///
/// The first child added becomes active; later insertions never steal the
/// active slot. An empty group has no active child.
pub struct TabNode<S> {
    name: String,
    depth: usize,
    children: Vec<ChildSlot<S>>,
    active: Option<usize>,
}

impl<S> TabNode<S> {
    pub(crate) fn new(name: impl Into<String>, depth: usize) -> Self {
        TabNode {
            name: name.into(),
            depth,
            children: Vec::new(),
            active: None,
        }
    }

    pub(crate) fn new_root() -> Self {
        TabNode::new("(root)", 0)
    }

    /// Display name of this group, `"(root)"` for the tree root.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Levels above this node; the root sits at depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Levels from here to the deepest leaf: 0 when empty, 1 for a node
    /// of panels, more for nested groups.
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|slot| match &slot.child {
                Child::Panel(_) => 1,
                Child::Group(node) => 1 + node.height(),
            })
            .max()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// True when the children are nested groups rather than panels.
    pub fn has_groups(&self) -> bool {
        self.children.first().is_some_and(|s| s.child.is_group())
    }

    pub fn labels(&self) -> impl Iterator<Item = &TabLabel> {
        self.children.iter().map(|s| &s.label)
    }

    pub fn label_at(&self, index: usize) -> Option<&TabLabel> {
        self.children.get(index).map(|s| &s.label)
    }

    pub fn children(&self) -> &[ChildSlot<S>] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [ChildSlot<S>] {
        &mut self.children
    }

    pub fn child_at(&self, index: usize) -> Option<&ChildSlot<S>> {
        self.children.get(index)
    }

    pub(crate) fn child_at_mut(&mut self, index: usize) -> Option<&mut ChildSlot<S>> {
        self.children.get_mut(index)
    }

    pub(crate) fn group_at_mut(&mut self, index: usize) -> Option<&mut TabNode<S>> {
        match self.children.get_mut(index) {
            Some(ChildSlot {
                child: Child::Group(node),
                ..
            }) => Some(node),
            _ => None,
        }
    }

    /// The index a selector points at, if any.
    ///
    /// Label selectors match on display text, so accelerator markers are
    /// ignored on both sides.
    pub fn index_of(&self, selector: &Selector) -> Option<usize> {
        match selector {
            Selector::Index(i) => (*i < self.children.len()).then_some(*i),
            Selector::Label(text) => {
                let wanted = TabLabel::new(text.as_str());
                self.children
                    .iter()
                    .position(|s| s.label.text() == wanted.text())
            }
        }
    }

    pub(crate) fn index_of_text(&self, text: &str) -> Option<usize> {
        self.children.iter().position(|s| s.label.text() == text)
    }

    /// Resolve a selector or report which child is missing.
    pub(crate) fn resolve_child(&self, selector: &Selector) -> Result<usize> {
        self.index_of(selector).ok_or_else(|| TabError::NoSuchChild {
            selector: selector.clone(),
            at: self.name.clone(),
        })
    }

    fn check_slot(&self, label: &TabLabel, panel: bool) -> Result<()> {
        if self.index_of_text(label.text()).is_some() {
            return Err(TabError::DuplicateLabel {
                label: label.text().to_owned(),
                at: self.name.clone(),
            });
        }
        let clashes = match self.children.first() {
            Some(first) => first.child.is_panel() != panel,
            None => false,
        };
        if clashes {
            return Err(TabError::MixedChildren {
                at: self.name.clone(),
            });
        }
        Ok(())
    }

    fn push_slot(&mut self, label: TabLabel, child: Child<S>) -> usize {
        self.children.push(ChildSlot { label, child });
        let index = self.children.len() - 1;
        if self.active.is_none() {
            self.active = Some(index);
        }
        index
    }

    /// Append a panel child; errors on duplicate labels and kind mixing.
    pub(crate) fn add_panel(&mut self, label: TabLabel, panel: Panel<S>) -> Result<usize> {
        self.check_slot(&label, true)?;
        Ok(self.push_slot(label, Child::Panel(panel)))
    }

    /// Append a nested group child; errors on duplicate labels and kind mixing.
    pub(crate) fn add_group(&mut self, label: TabLabel) -> Result<usize> {
        self.check_slot(&label, false)?;
        let node = TabNode::new(label.text(), self.depth + 1);
        Ok(self.push_slot(label, Child::Group(node)))
    }

    // ── Active child ─────────────────────────────────────────────────────

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_slot(&self) -> Option<&ChildSlot<S>> {
        self.active.and_then(|i| self.children.get(i))
    }

    pub(crate) fn set_active(&mut self, index: usize) -> Result<()> {
        if index >= self.children.len() {
            return Err(TabError::NoSuchChild {
                selector: Selector::Index(index),
                at: self.name.clone(),
            });
        }
        self.active = Some(index);
        Ok(())
    }

    /// Focus the child a selector names and return its index.
    pub(crate) fn focus_selector(&mut self, selector: &Selector) -> Result<usize> {
        let index = self.resolve_child(selector)?;
        self.active = Some(index);
        Ok(index)
    }

    /// Focus by index without validation; the caller has already checked
    /// the bounds.
    pub(crate) fn force_active(&mut self, index: usize) {
        debug_assert!(index < self.children.len());
        self.active = Some(index);
    }

    /// Active indices from this node down, following nested groups.
    pub(crate) fn focus_chain(&self, out: &mut FocusPath) {
        if let Some(index) = self.active {
            out.push(index);
            if let Some(ChildSlot {
                child: Child::Group(node),
                ..
            }) = self.children.get(index)
            {
                node.focus_chain(out);
            }
        }
    }

    /// Adopt a relative focus chain, level by level.
    ///
    /// Levels the branch does not have, and indices past the end of a
    /// group, are skipped without error; deeper levels of the chain are
    /// then dropped as well. Only the active indices change, no panel is
    /// realized by this.
    pub(crate) fn apply_focus_tail(&mut self, tail: &[usize]) {
        let Some(&first) = tail.first() else {
            return;
        };
        if first >= self.children.len() {
            log::trace!(
                "focus link skipped in '{}': no child at index {first}",
                self.name
            );
            return;
        }
        self.active = Some(first);
        if let Some(node) = self.group_at_mut(first) {
            node.apply_focus_tail(&tail[1..]);
        }
    }

    // ── Reordering ───────────────────────────────────────────────────────

    /// Rearrange the children into `order`, a permutation of `0..len`.
    ///
    /// The active child follows its slot to the new position. Returns
    /// false and leaves the node untouched when `order` is not a valid
    /// permutation.
    pub(crate) fn apply_order(&mut self, order: &[usize]) -> bool {
        if order.len() != self.children.len() {
            return false;
        }
        let mut seen = vec![false; order.len()];
        for &i in order {
            if i >= seen.len() || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        let mut old: Vec<Option<ChildSlot<S>>> =
            std::mem::take(&mut self.children).into_iter().map(Some).collect();
        for &i in order {
            if let Some(slot) = old[i].take() {
                self.children.push(slot);
            }
        }
        if let Some(active) = self.active {
            self.active = order.iter().position(|&i| i == active);
        }
        true
    }

    /// Move the child at `from` so it ends up at position `to`.
    ///
    /// `to` is clamped to the valid range. The active child follows the
    /// move, as do the positions of everything in between.
    pub(crate) fn move_child(&mut self, from: usize, to: usize) -> Result<()> {
        if from >= self.children.len() {
            return Err(TabError::NoSuchChild {
                selector: Selector::Index(from),
                at: self.name.clone(),
            });
        }
        let to = to.min(self.children.len() - 1);
        if from == to {
            return Ok(());
        }
        let slot = self.children.remove(from);
        self.children.insert(to, slot);
        if let Some(active) = self.active {
            self.active = Some(if active == from {
                to
            } else if from < active && to >= active {
                active - 1
            } else if from > active && to <= active {
                active + 1
            } else {
                active
            });
        }
        Ok(())
    }
}

impl<S> fmt::Debug for TabNode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabNode")
            .field("name", &self.name)
            .field(
                "children",
                &self.children.iter().map(|s| s.label.text()).collect::<Vec<_>>(),
            )
            .field("active", &self.active)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> Panel<()> {
        Panel::deferred(None)
    }

    #[test]
    fn first_child_becomes_active_later_ones_do_not() {
        let mut node: TabNode<()> = TabNode::new_root();
        node.add_panel("A".into(), panel()).unwrap();
        assert_eq!(node.active_index(), Some(0));
        node.add_panel("B".into(), panel()).unwrap();
        assert_eq!(node.active_index(), Some(0));
    }

    #[test]
    fn duplicate_label_is_rejected() {
        let mut node: TabNode<()> = TabNode::new_root();
        node.add_panel("A".into(), panel()).unwrap();
        let err = node.add_panel("A".into(), panel()).unwrap_err();
        assert!(matches!(err, TabError::DuplicateLabel { label, .. } if label == "A"));
    }

    #[test]
    fn duplicate_check_ignores_accelerator_markers() {
        let mut node: TabNode<()> = TabNode::new_root();
        node.add_panel("&A".into(), panel()).unwrap();
        let err = node.add_panel("A".into(), panel()).unwrap_err();
        assert!(matches!(err, TabError::DuplicateLabel { .. }));
    }

    #[test]
    fn panels_and_groups_do_not_mix() {
        let mut node: TabNode<()> = TabNode::new_root();
        node.add_panel("A".into(), panel()).unwrap();
        let err = node.add_group("G".into()).unwrap_err();
        assert!(matches!(err, TabError::MixedChildren { .. }));

        let mut node: TabNode<()> = TabNode::new_root();
        node.add_group("G".into()).unwrap();
        let err = node.add_panel("A".into(), panel()).unwrap_err();
        assert!(matches!(err, TabError::MixedChildren { .. }));
    }

    #[test]
    fn label_selector_matches_display_text() {
        let mut node: TabNode<()> = TabNode::new_root();
        node.add_panel("&Colour".into(), panel()).unwrap();
        assert_eq!(node.index_of(&Selector::from("Colour")), Some(0));
        assert_eq!(node.index_of(&Selector::from("&Colour")), Some(0));
        assert_eq!(node.index_of(&Selector::from("colour")), None);
    }

    #[test]
    fn move_child_carries_active_slot_along() {
        let mut node: TabNode<()> = TabNode::new_root();
        for l in ["A", "B", "C"] {
            node.add_panel(l.into(), panel()).unwrap();
        }
        node.set_active(1).unwrap();
        node.move_child(1, 0).unwrap();
        assert_eq!(node.active_index(), Some(0));
        assert_eq!(
            node.labels().map(|l| l.text()).collect::<Vec<_>>(),
            ["B", "A", "C"]
        );
    }

    #[test]
    fn move_child_shifts_active_neighbours() {
        let mut node: TabNode<()> = TabNode::new_root();
        for l in ["A", "B", "C"] {
            node.add_panel(l.into(), panel()).unwrap();
        }
        node.set_active(2).unwrap();
        node.move_child(0, 2).unwrap();
        assert_eq!(node.active_index(), Some(1));
    }

    #[test]
    fn apply_order_rejects_bad_permutations() {
        let mut node: TabNode<()> = TabNode::new_root();
        for l in ["A", "B"] {
            node.add_panel(l.into(), panel()).unwrap();
        }
        assert!(!node.apply_order(&[0]));
        assert!(!node.apply_order(&[1, 1]));
        assert!(node.apply_order(&[1, 0]));
        assert_eq!(
            node.labels().map(|l| l.text()).collect::<Vec<_>>(),
            ["B", "A"]
        );
    }
}
