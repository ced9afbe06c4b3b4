//! The tab tree engine.
//!
//! [`TabTree`] owns the root [`TabNode`] and the surface factory. It grows
//! the tree level by level as tabs are added, resolves selector paths,
//! moves focus, realizes panels lazily and, when linking is enabled,
//! mirrors focus changes onto sibling branches.
//!
//! The tree is generic over the surface type `S`; nothing in here knows
//! about figures or egui. Realization is the only place surfaces are
//! created: the focused leaf gets one the first time it is shown, and its
//! builder runs exactly once. Everything else is bookkeeping on indices
//! and labels.

use std::collections::HashMap;
use std::fmt;

use crate::error::{invalid_path, Result, TabError};
use crate::label::TabLabel;
use crate::node::{BuildResult, Child, Panel, TabNode};
use crate::path::{join_selectors, FocusPath, Selector};

/// Wildcard builder shared by panels that have none of their own.
pub type FallbackBuilder<S> = Box<dyn FnMut(&mut S, &FocusPath) -> BuildResult>;

/// Nested tab manager, generic over the panel surface type.
pub struct TabTree<S> {
    root: TabNode<S>,
    factory: Box<dyn FnMut() -> S>,
    default_builder: Option<FallbackBuilder<S>>,
    depth_builders: HashMap<usize, FallbackBuilder<S>>,
    linked: bool,
}

impl<S> TabTree<S> {
    /// An empty tree. `factory` creates the blank surface for each panel
    /// at the moment it is first realized.
    pub fn new(factory: impl FnMut() -> S + 'static) -> Self {
        TabTree {
            root: TabNode::new_root(),
            factory: Box::new(factory),
            default_builder: None,
            depth_builders: HashMap::new(),
            linked: false,
        }
    }

    /// A flat tree over already populated surfaces, auto-labeled
    /// `"Tab 1"`, `"Tab 2"`, ... in order.
    pub fn from_figures(
        factory: impl FnMut() -> S + 'static,
        surfaces: impl IntoIterator<Item = S>,
    ) -> Self {
        let mut tree = TabTree::new(factory);
        for surface in surfaces {
            let label = auto_label(&tree.root, "Tab");
            match tree.insert_leaf(vec![label], Panel::prebuilt(surface)) {
                Ok(_) => {}
                Err(err) => log::warn!("skipping figure: {err}"),
            }
        }
        tree
    }

    /// A flat tree over labeled, already populated surfaces.
    pub fn from_named<L>(
        factory: impl FnMut() -> S + 'static,
        pairs: impl IntoIterator<Item = (L, S)>,
    ) -> Result<Self>
    where
        L: Into<TabLabel>,
    {
        let mut tree = TabTree::new(factory);
        for (label, surface) in pairs {
            tree.insert_leaf(vec![label.into()], Panel::prebuilt(surface))?;
        }
        Ok(tree)
    }

    // ── Introspection ────────────────────────────────────────────────────

    pub fn root(&self) -> &TabNode<S> {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut TabNode<S> {
        &mut self.root
    }

    /// Number of top level tabs.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Levels from the root to the deepest leaf.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// All leaf panels, depth first in insertion order.
    pub fn leaves(&self) -> impl Iterator<Item = (FocusPath, &Panel<S>)> {
        let mut out = Vec::new();
        let mut prefix = FocusPath::default();
        collect_leaves(&self.root, &mut prefix, &mut out);
        out.into_iter()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// Display labels along a pure-index path, root first. `None` when
    /// the path leaves the tree.
    pub fn labels_for(&self, path: &FocusPath) -> Option<Vec<String>> {
        let mut node = &self.root;
        let mut out = Vec::with_capacity(path.len());
        let indices = path.indices();
        for (level, &index) in indices.iter().enumerate() {
            let slot = node.child_at(index)?;
            out.push(slot.label().text().to_owned());
            if level + 1 < indices.len() {
                match &slot.child {
                    Child::Group(group) => node = group,
                    Child::Panel(_) => return None,
                }
            }
        }
        Some(out)
    }

    /// The group node a pure-index path points at, if it exists.
    pub fn node_at(&self, path: &FocusPath) -> Option<&TabNode<S>> {
        let mut node = &self.root;
        for index in path {
            match node.child_at(index).map(|slot| &slot.child) {
                Some(Child::Group(group)) => node = group,
                _ => return None,
            }
        }
        Some(node)
    }

    pub(crate) fn node_at_mut(&mut self, path: &FocusPath) -> Option<&mut TabNode<S>> {
        let mut node = &mut self.root;
        for index in path {
            match node.child_at_mut(index).map(|slot| &mut slot.child) {
                Some(Child::Group(group)) => node = group,
                _ => return None,
            }
        }
        Some(node)
    }

    // ── Growing the tree ─────────────────────────────────────────────────

    /// Add an unrealized tab at the end of `labels`, creating missing
    /// interior groups on the way. An empty `labels` auto-names a new top
    /// level tab. Returns the new leaf's coordinates.
    pub fn add_tab<L>(&mut self, labels: impl IntoIterator<Item = L>) -> Result<FocusPath>
    where
        L: Into<TabLabel>,
    {
        let labels = labels.into_iter().map(Into::into).collect();
        self.insert_leaf(labels, Panel::deferred(None))
    }

    /// Like [`add_tab`](Self::add_tab), with a builder that fills the
    /// panel when it is first shown.
    pub fn add_tab_with<L>(
        &mut self,
        labels: impl IntoIterator<Item = L>,
        builder: impl FnOnce(&mut S, &FocusPath) -> BuildResult + 'static,
    ) -> Result<FocusPath>
    where
        L: Into<TabLabel>,
    {
        let labels = labels.into_iter().map(Into::into).collect();
        self.insert_leaf(labels, Panel::deferred(Some(Box::new(builder))))
    }

    /// Eager variant: the panel is realized right away with a blank
    /// surface and no builder will ever run on it. Returns the surface
    /// for direct drawing.
    pub fn add_figure<L>(&mut self, labels: impl IntoIterator<Item = L>) -> Result<&mut S>
    where
        L: Into<TabLabel>,
    {
        let labels = labels.into_iter().map(Into::into).collect();
        let path = self.insert_leaf(labels, Panel::deferred(None))?;
        self.realize_inner(&path, false)
    }

    /// Insert an already populated surface; the panel is born realized.
    pub fn insert_figure<L>(
        &mut self,
        labels: impl IntoIterator<Item = L>,
        surface: S,
    ) -> Result<FocusPath>
    where
        L: Into<TabLabel>,
    {
        let labels = labels.into_iter().map(Into::into).collect();
        self.insert_leaf(labels, Panel::prebuilt(surface))
    }

    /// Pre-create a chain of groups without adding a leaf. An empty
    /// `labels` auto-names a new top level group.
    pub fn add_group<L>(&mut self, labels: impl IntoIterator<Item = L>) -> Result<()>
    where
        L: Into<TabLabel>,
    {
        let labels: Vec<TabLabel> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            let label = auto_label(&self.root, "Group");
            self.root.add_group(label)?;
            return Ok(());
        }
        let mut node = &mut self.root;
        let mut trail = String::new();
        for label in &labels {
            push_trail(&mut trail, label.text());
            let (_, next) = ensure_group_step(node, label, &trail)?;
            node = next;
        }
        Ok(())
    }

    fn insert_leaf(&mut self, mut labels: Vec<TabLabel>, panel: Panel<S>) -> Result<FocusPath> {
        let leaf_label = labels.pop();
        let mut path = FocusPath::default();
        let mut node = &mut self.root;
        let mut trail = String::new();
        for label in &labels {
            push_trail(&mut trail, label.text());
            let (index, next) = ensure_group_step(node, label, &trail)?;
            path.push(index);
            node = next;
        }
        let label = leaf_label.unwrap_or_else(|| auto_label(node, "Tab"));
        let text = label.text().to_owned();
        let index = node.add_panel(label, panel)?;
        path.push(index);
        log::debug!("added tab '{text}' at {path}");
        Ok(path)
    }

    // ── Builders ─────────────────────────────────────────────────────────

    /// Register the global wildcard builder, run for any panel realized
    /// without a builder of its own. Replaces a previously registered one.
    pub fn add_callback(&mut self, builder: impl FnMut(&mut S, &FocusPath) -> BuildResult + 'static) {
        self.default_builder = Some(Box::new(builder));
    }

    /// Wildcard builder for leaves at one depth only (a top level tab has
    /// depth 1). Takes precedence over the global wildcard; a panel's own
    /// builder beats both.
    pub fn add_callback_for_depth(
        &mut self,
        depth: usize,
        builder: impl FnMut(&mut S, &FocusPath) -> BuildResult + 'static,
    ) {
        self.depth_builders.insert(depth, Box::new(builder));
    }

    // ── Focus ────────────────────────────────────────────────────────────

    /// Move focus to the leaf `selectors` names and realize it.
    ///
    /// A path shorter than its branch is completed through each node's
    /// current focus; a path descending through a leaf is invalid. The
    /// focus trail is validated before anything moves. The realized
    /// panel's builder error, if any, surfaces here after focus and
    /// linking have been applied. Returns the canonical coordinates.
    pub fn set_focus<I>(&mut self, selectors: I) -> Result<FocusPath>
    where
        I: IntoIterator,
        I::Item: Into<Selector>,
    {
        let segments: Vec<Selector> = selectors.into_iter().map(Into::into).collect();
        let path = self.resolve_focus_target(&segments)?;
        self.apply_focus_path(&path);
        log::debug!("focus -> {path}");
        let realized = self.realize_inner(&path, true).map(|_| ());
        if self.linked {
            self.propagate_focus(&path);
        }
        realized.map(|()| path)
    }

    /// Entry point for the UI: the tab at `index` inside the container at
    /// `container` was activated. Equivalent to focusing
    /// `container + [index]`, completed through the branch's current
    /// focus below that point.
    pub fn on_tab_activated(&mut self, container: &FocusPath, index: usize) -> Result<FocusPath> {
        let mut segments: Vec<Selector> =
            container.indices().iter().map(|&i| Selector::Index(i)).collect();
        segments.push(Selector::Index(index));
        self.set_focus(segments)
    }

    /// Enable or disable cross-branch focus linking.
    ///
    /// While enabled, every explicit focus change copies its relative
    /// index tail onto the sibling groups at each level of the focused
    /// path. Branches lacking a child at some index are skipped. Linking
    /// moves focus only and never realizes sibling panels.
    pub fn link_focus(&mut self, enable: bool) {
        self.linked = enable;
    }

    pub fn is_linked(&self) -> bool {
        self.linked
    }

    /// The currently focused chain of indices, root first. Empty for an
    /// empty tree; may end at a group when a branch has no leaf yet.
    pub fn focus_path(&self) -> FocusPath {
        let mut path = FocusPath::default();
        self.root.focus_chain(&mut path);
        path
    }

    fn resolve_focus_target(&self, segments: &[Selector]) -> Result<FocusPath> {
        let mut node = &self.root;
        let mut path = FocusPath::default();
        let mut landed = false;
        for selector in segments {
            if landed {
                return Err(invalid_path(
                    join_selectors(segments),
                    "path descends through a leaf panel",
                ));
            }
            let index = node.resolve_child(selector)?;
            path.push(index);
            match &node.children()[index].child {
                Child::Panel(_) => landed = true,
                Child::Group(group) => node = group,
            }
        }
        if !landed {
            loop {
                let Some(index) = node.active_index() else {
                    return Err(invalid_path(
                        join_selectors(segments),
                        format!("group '{}' has nothing to focus", node.name()),
                    ));
                };
                path.push(index);
                match &node.children()[index].child {
                    Child::Panel(_) => break,
                    Child::Group(group) => node = group,
                }
            }
        }
        Ok(path)
    }

    fn apply_focus_path(&mut self, path: &FocusPath) {
        let mut node = &mut self.root;
        for (level, &index) in path.indices().iter().enumerate() {
            node.force_active(index);
            if level + 1 == path.len() {
                break;
            }
            node = match &mut node.children_mut()[index].child {
                Child::Group(group) => group,
                Child::Panel(_) => break,
            };
        }
    }

    /// Copy the focused path's relative index tails onto sibling groups,
    /// level by level.
    fn propagate_focus(&mut self, path: &FocusPath) {
        let indices = path.indices();
        let mut node = &mut self.root;
        for (level, &index) in indices.iter().enumerate() {
            let tail = &indices[level + 1..];
            if !tail.is_empty() {
                for (i, slot) in node.children_mut().iter_mut().enumerate() {
                    if i == index {
                        continue;
                    }
                    if let Child::Group(group) = &mut slot.child {
                        group.apply_focus_tail(tail);
                    }
                }
            }
            node = match &mut node.children_mut()[index].child {
                Child::Group(group) => group,
                Child::Panel(_) => break,
            };
        }
    }

    // ── Resolution & realization ─────────────────────────────────────────

    /// Resolve selectors to canonical coordinates without touching focus.
    /// The path must land exactly on a leaf panel.
    pub fn resolve<I>(&self, selectors: I) -> Result<FocusPath>
    where
        I: IntoIterator,
        I::Item: Into<Selector>,
    {
        let segments: Vec<Selector> = selectors.into_iter().map(Into::into).collect();
        self.resolve_leaf(&segments)
    }

    /// The panel a full leaf path points at.
    pub fn panel<I>(&self, selectors: I) -> Result<&Panel<S>>
    where
        I: IntoIterator,
        I::Item: Into<Selector>,
    {
        let segments: Vec<Selector> = selectors.into_iter().map(Into::into).collect();
        let path = self.resolve_leaf(&segments)?;
        resolve_panel(&self.root, &path)
    }

    /// Realize the addressed panel without moving focus and return its
    /// surface. No-op (beyond the lookup) when already realized.
    pub fn realize<I>(&mut self, selectors: I) -> Result<&mut S>
    where
        I: IntoIterator,
        I::Item: Into<Selector>,
    {
        let segments: Vec<Selector> = selectors.into_iter().map(Into::into).collect();
        let path = self.resolve_leaf(&segments)?;
        self.realize_inner(&path, true)
    }

    /// Realize the currently focused leaf, if the focus chain reaches one.
    pub fn realize_active(&mut self) -> Result<Option<&mut S>> {
        let path = self.focus_path();
        if path.is_empty() || resolve_panel(&self.root, &path).is_err() {
            return Ok(None);
        }
        self.realize_inner(&path, true).map(Some)
    }

    /// The addressed panel's surface, `None` while unrealized.
    pub fn surface<I>(&self, selectors: I) -> Result<Option<&S>>
    where
        I: IntoIterator,
        I::Item: Into<Selector>,
    {
        self.panel(selectors).map(Panel::surface)
    }

    pub fn surface_mut<I>(&mut self, selectors: I) -> Result<Option<&mut S>>
    where
        I: IntoIterator,
        I::Item: Into<Selector>,
    {
        let segments: Vec<Selector> = selectors.into_iter().map(Into::into).collect();
        let path = self.resolve_leaf(&segments)?;
        resolve_panel_mut(&mut self.root, &path).map(Panel::surface_mut)
    }

    fn resolve_leaf(&self, segments: &[Selector]) -> Result<FocusPath> {
        if segments.is_empty() {
            return Err(invalid_path("(root)", "empty path"));
        }
        let mut node = &self.root;
        let mut path = FocusPath::default();
        for (pos, selector) in segments.iter().enumerate() {
            let index = node.resolve_child(selector)?;
            path.push(index);
            let last = pos + 1 == segments.len();
            match &node.children()[index].child {
                Child::Panel(_) if last => {}
                Child::Panel(_) => {
                    return Err(invalid_path(
                        join_selectors(segments),
                        "path descends through a leaf panel",
                    ));
                }
                Child::Group(group) if last => {
                    return Err(invalid_path(
                        join_selectors(segments),
                        format!("ends on group '{}', not a panel", group.name()),
                    ));
                }
                Child::Group(group) => node = group,
            }
        }
        Ok(path)
    }

    fn realize_inner(&mut self, path: &FocusPath, allow_fallback: bool) -> Result<&mut S> {
        let TabTree {
            root,
            factory,
            default_builder,
            depth_builders,
            ..
        } = self;
        let panel = resolve_panel_mut(root, path)?;
        let fallback: Option<&mut dyn FnMut(&mut S, &FocusPath) -> BuildResult> =
            if allow_fallback {
                match depth_builders.get_mut(&path.len()) {
                    Some(builder) => Some(builder.as_mut()),
                    None => match default_builder {
                        Some(builder) => Some(builder.as_mut()),
                        None => None,
                    },
                }
            } else {
                None
            };
        panel.realize(path, factory.as_mut(), fallback)
    }

    // ── Reordering ───────────────────────────────────────────────────────

    /// Move a tab within the group `parent` names (empty = root) from
    /// position `from` to position `to`. Focus follows the moved child.
    pub fn move_tab<I>(&mut self, parent: I, from: usize, to: usize) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Selector>,
    {
        let segments: Vec<Selector> = parent.into_iter().map(Into::into).collect();
        let node = self.group_node_mut(&segments)?;
        node.move_child(from, to)
    }

    /// Apply a drag-reorder permutation to the group at `container`.
    pub(crate) fn apply_order_at(&mut self, container: &FocusPath, order: &[usize]) -> bool {
        match self.node_at_mut(container) {
            Some(node) => node.apply_order(order),
            None => false,
        }
    }

    fn group_node_mut(&mut self, segments: &[Selector]) -> Result<&mut TabNode<S>> {
        let mut node = &mut self.root;
        for selector in segments {
            let index = node.resolve_child(selector)?;
            node = match &mut node.children_mut()[index].child {
                Child::Group(group) => group,
                Child::Panel(_) => {
                    return Err(invalid_path(
                        join_selectors(segments),
                        "names a panel, not a group",
                    ));
                }
            };
        }
        Ok(node)
    }
}

impl<S> fmt::Debug for TabTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabTree")
            .field("root", &self.root)
            .field("linked", &self.linked)
            .finish()
    }
}

// ── Free helpers ─────────────────────────────────────────────────────────

fn push_trail(trail: &mut String, segment: &str) {
    if !trail.is_empty() {
        trail.push('/');
    }
    trail.push_str(segment);
}

/// Next free auto-generated label, `"{stem} {n}"` with n starting at
/// child-count + 1.
fn auto_label<S>(node: &TabNode<S>, stem: &str) -> TabLabel {
    let mut n = node.len() + 1;
    loop {
        let text = format!("{stem} {n}");
        if node.index_of_text(&text).is_none() {
            return TabLabel::plain(text);
        }
        n += 1;
    }
}

/// Step one level down towards `label`, creating the group if missing.
/// Errors when `label` already names a leaf panel.
fn ensure_group_step<'a, S>(
    node: &'a mut TabNode<S>,
    label: &TabLabel,
    trail: &str,
) -> Result<(usize, &'a mut TabNode<S>)> {
    let index = match node.index_of_text(label.text()) {
        Some(index) => index,
        None => node.add_group(label.clone())?,
    };
    match &mut node.children_mut()[index].child {
        Child::Group(group) => Ok((index, group)),
        Child::Panel(_) => Err(invalid_path(
            trail,
            format!("'{}' is a panel, not a group", label.text()),
        )),
    }
}

fn collect_leaves<'a, S>(
    node: &'a TabNode<S>,
    prefix: &mut FocusPath,
    out: &mut Vec<(FocusPath, &'a Panel<S>)>,
) {
    for (index, slot) in node.children().iter().enumerate() {
        prefix.push(index);
        match &slot.child {
            Child::Panel(panel) => out.push((prefix.clone(), panel)),
            Child::Group(group) => collect_leaves(group, prefix, out),
        }
        prefix.pop();
    }
}

fn resolve_panel<'a, S>(root: &'a TabNode<S>, path: &FocusPath) -> Result<&'a Panel<S>> {
    let indices = path.indices();
    if indices.is_empty() {
        return Err(invalid_path("(root)", "empty path"));
    }
    let mut node = root;
    for (level, &index) in indices.iter().enumerate() {
        let last = level + 1 == indices.len();
        let Some(slot) = node.child_at(index) else {
            return Err(TabError::NoSuchChild {
                selector: Selector::Index(index),
                at: node.name().to_owned(),
            });
        };
        match &slot.child {
            Child::Panel(panel) if last => return Ok(panel),
            Child::Panel(_) => {
                return Err(invalid_path(
                    path.to_string(),
                    "path descends through a leaf panel",
                ));
            }
            Child::Group(group) if last => {
                return Err(invalid_path(
                    path.to_string(),
                    format!("ends on group '{}', not a panel", group.name()),
                ));
            }
            Child::Group(group) => node = group,
        }
    }
    Err(invalid_path(path.to_string(), "empty path"))
}

fn resolve_panel_mut<'a, S>(root: &'a mut TabNode<S>, path: &FocusPath) -> Result<&'a mut Panel<S>> {
    let indices = path.indices();
    if indices.is_empty() {
        return Err(invalid_path("(root)", "empty path"));
    }
    let mut node = root;
    for (level, &index) in indices.iter().enumerate() {
        let last = level + 1 == indices.len();
        if index >= node.len() {
            return Err(TabError::NoSuchChild {
                selector: Selector::Index(index),
                at: node.name().to_owned(),
            });
        }
        match &mut node.children_mut()[index].child {
            Child::Panel(panel) if last => return Ok(panel),
            Child::Panel(_) => {
                return Err(invalid_path(
                    path.to_string(),
                    "path descends through a leaf panel",
                ));
            }
            Child::Group(group) if last => {
                return Err(invalid_path(
                    path.to_string(),
                    format!("ends on group '{}', not a panel", group.name()),
                ));
            }
            Child::Group(group) => node = group,
        }
    }
    Err(invalid_path(path.to_string(), "empty path"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> TabTree<Vec<&'static str>> {
        TabTree::new(Vec::new)
    }

    #[test]
    fn interior_groups_are_created_on_demand() {
        let mut t = tree();
        let path = t.add_tab(["Outer", "Inner", "Leaf"]).unwrap();
        assert_eq!(path.indices(), [0, 0, 0]);
        assert_eq!(t.height(), 3);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn empty_labels_auto_name_tabs() {
        let mut t = tree();
        t.add_tab(Vec::<&str>::new()).unwrap();
        t.add_tab(Vec::<&str>::new()).unwrap();
        let labels: Vec<_> = t.root().labels().map(|l| l.text().to_owned()).collect();
        assert_eq!(labels, ["Tab 1", "Tab 2"]);
    }

    #[test]
    fn auto_names_skip_taken_labels() {
        let mut t = tree();
        t.add_tab(["Tab 2"]).unwrap();
        t.add_tab(Vec::<&str>::new()).unwrap();
        let labels: Vec<_> = t.root().labels().map(|l| l.text().to_owned()).collect();
        assert_eq!(labels, ["Tab 2", "Tab 3"]);
    }

    #[test]
    fn resolve_rejects_groups_and_overlong_paths() {
        let mut t = tree();
        t.add_tab(["G", "leaf"]).unwrap();
        let err = t.resolve(["G"]).unwrap_err();
        assert!(matches!(err, TabError::InvalidPath { .. }));
        let err = t.resolve(vec![0usize, 0, 0]).unwrap_err();
        assert!(matches!(err, TabError::InvalidPath { .. }));
    }

    #[test]
    fn descending_through_a_leaf_is_invalid() {
        let mut t = tree();
        t.add_tab(["A"]).unwrap();
        let err = t.add_tab(["A", "deeper"]).unwrap_err();
        assert!(matches!(err, TabError::InvalidPath { .. }));
    }

    #[test]
    fn failed_leaf_insert_rolls_nothing_back() {
        let mut t = tree();
        t.add_tab(["G", "x"]).unwrap();
        let err = t.add_tab(["G", "x"]).unwrap_err();
        assert!(matches!(err, TabError::DuplicateLabel { .. }));
        assert_eq!(t.leaf_count(), 1);
        assert!(t.resolve(["G", "x"]).is_ok());
    }

    #[test]
    fn focus_completion_follows_active_indices() {
        let mut t = tree();
        t.add_tab(["G", "a"]).unwrap();
        t.add_tab(["G", "b"]).unwrap();
        t.add_tab(["H", "c"]).unwrap();
        t.set_focus(["G", "b"]).unwrap();
        let path = t.set_focus(["G"]).unwrap();
        assert_eq!(path.indices(), [0, 1]);
    }
}
