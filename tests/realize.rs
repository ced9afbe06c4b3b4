//! Lazy panel realization and builder dispatch.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use multitab::{BuildResult, FocusPath, TabError, TabTree};

type Surface = Vec<String>;

fn tree() -> TabTree<Surface> {
    TabTree::new(Vec::new)
}

fn push(text: &'static str) -> impl FnMut(&mut Surface, &FocusPath) -> BuildResult {
    move |surface, _| {
        surface.push(text.to_string());
        Ok(())
    }
}

#[test]
fn panels_stay_unrealized_until_focused() {
    let mut t = tree();
    t.add_tab(["A"]).unwrap();
    t.add_tab(["B"]).unwrap();

    // The first tab holds focus but nothing has been drawn yet.
    assert_eq!(t.focus_path().indices(), [0]);
    assert!(t.surface(["A"]).unwrap().is_none());
    assert!(t.surface(["B"]).unwrap().is_none());

    t.set_focus(["B"]).unwrap();
    assert!(t.surface(["A"]).unwrap().is_none());
    assert!(t.surface(["B"]).unwrap().is_some());
}

#[test]
fn a_builder_runs_exactly_once() {
    let runs = Rc::new(Cell::new(0));
    let counter = runs.clone();

    let mut t = tree();
    t.add_tab_with(["A"], move |surface, _| {
        counter.set(counter.get() + 1);
        surface.push("drawn".to_string());
        Ok(())
    })
    .unwrap();
    t.add_tab(["B"]).unwrap();
    assert_eq!(runs.get(), 0);

    t.set_focus(["A"]).unwrap();
    assert_eq!(runs.get(), 1);

    // Refocusing does not re-run the builder.
    t.set_focus(["B"]).unwrap();
    t.set_focus(["A"]).unwrap();
    assert_eq!(runs.get(), 1);
    assert_eq!(t.surface(["A"]).unwrap().unwrap(), &["drawn"]);
}

#[test]
fn duplicate_inserts_cannot_replace_a_builder() {
    let mut t = tree();
    t.add_tab_with(["A"], push("original")).unwrap();
    t.add_tab_with(["A"], push("usurper")).unwrap_err();

    t.set_focus(["A"]).unwrap();
    assert_eq!(t.surface(["A"]).unwrap().unwrap(), &["original"]);
}

#[test]
fn builders_receive_the_canonical_path() {
    let seen = Rc::new(RefCell::new(None));
    let slot = seen.clone();

    let mut t = tree();
    t.add_tab(["G", "first"]).unwrap();
    t.add_tab_with(["G", "second"], move |_, path| {
        *slot.borrow_mut() = Some(path.to_string());
        Ok(())
    })
    .unwrap();

    t.set_focus(["G", "second"]).unwrap();
    assert_eq!(seen.borrow().as_deref(), Some("0/1"));
}

#[test]
fn eager_figures_never_run_wildcard_builders() {
    let mut t = tree();
    t.add_callback(push("wildcard"));

    t.add_figure(["A"]).unwrap().push("hand-drawn".to_string());
    assert_eq!(t.surface(["A"]).unwrap().unwrap(), &["hand-drawn"]);

    // Already realized, so focusing it later changes nothing.
    t.set_focus(["A"]).unwrap();
    assert_eq!(t.surface(["A"]).unwrap().unwrap(), &["hand-drawn"]);
}

#[test]
fn prebuilt_surfaces_are_born_realized() {
    let mut t = tree();
    t.add_callback(push("wildcard"));
    t.insert_figure(["A"], vec!["ready".to_string()]).unwrap();

    assert_eq!(t.surface(["A"]).unwrap().unwrap(), &["ready"]);
    t.set_focus(["A"]).unwrap();
    assert_eq!(t.surface(["A"]).unwrap().unwrap(), &["ready"]);
}

#[test]
fn the_wildcard_builder_fills_unclaimed_panels() {
    let mut t = tree();
    t.add_callback(push("wildcard"));
    t.add_tab(["A"]).unwrap();
    t.add_tab(["B"]).unwrap();

    t.set_focus(["B"]).unwrap();
    assert_eq!(t.surface(["B"]).unwrap().unwrap(), &["wildcard"]);
    assert!(t.surface(["A"]).unwrap().is_none());
}

#[test]
fn depth_builders_beat_the_global_wildcard() {
    let mut t = tree();
    t.add_callback(push("global"));
    t.add_callback_for_depth(2, push("depth-2"));

    t.add_tab(["G", "nested"]).unwrap();
    t.set_focus(["G", "nested"]).unwrap();
    assert_eq!(t.surface(["G", "nested"]).unwrap().unwrap(), &["depth-2"]);
}

#[test]
fn unmatched_depths_fall_back_to_the_global_wildcard() {
    let mut t = tree();
    t.add_callback(push("global"));
    t.add_callback_for_depth(3, push("depth-3"));

    t.add_tab(["G", "nested"]).unwrap();
    t.set_focus(["G", "nested"]).unwrap();
    assert_eq!(t.surface(["G", "nested"]).unwrap().unwrap(), &["global"]);
}

#[test]
fn a_panels_own_builder_beats_every_wildcard() {
    let mut t = tree();
    t.add_callback(push("global"));
    t.add_callback_for_depth(1, push("depth-1"));
    t.add_tab_with(["A"], |surface, _| {
        surface.push("own".to_string());
        Ok(())
    })
    .unwrap();
    t.add_tab(["B"]).unwrap();

    t.set_focus(["A"]).unwrap();
    assert_eq!(t.surface(["A"]).unwrap().unwrap(), &["own"]);
    t.set_focus(["B"]).unwrap();
    assert_eq!(t.surface(["B"]).unwrap().unwrap(), &["depth-1"]);
}

#[test]
fn a_failing_builder_reports_but_keeps_its_output() {
    let mut t = tree();
    t.add_tab(["A"]).unwrap();
    t.add_tab_with(["B"], |surface, _| {
        surface.push("partial".to_string());
        Err("plot data missing".into())
    })
    .unwrap();

    let err = t.set_focus(["B"]).unwrap_err();
    match err {
        TabError::Builder { path, source } => {
            assert_eq!(path.indices(), [1]);
            assert_eq!(source.to_string(), "plot data missing");
        }
        other => panic!("unexpected error: {other}"),
    }

    // Focus moved before the builder ran, and the panel counts as
    // realized with whatever it managed to draw.
    assert_eq!(t.focus_path().indices(), [1]);
    assert_eq!(t.surface(["B"]).unwrap().unwrap(), &["partial"]);

    // The consumed builder never runs again.
    t.set_focus(["A"]).unwrap();
    t.set_focus(["B"]).unwrap();
    assert_eq!(t.surface(["B"]).unwrap().unwrap(), &["partial"]);
}

#[test]
fn realize_fills_a_panel_without_moving_focus() {
    let mut t = tree();
    t.add_tab(["A"]).unwrap();
    t.add_tab(["B"]).unwrap();
    t.set_focus(["A"]).unwrap();

    t.realize(["B"]).unwrap().push("offscreen".to_string());
    assert_eq!(t.focus_path().indices(), [0]);
    assert_eq!(t.surface(["B"]).unwrap().unwrap(), &["offscreen"]);
}

#[test]
fn realize_active_follows_the_focus_chain() {
    let mut t = tree();
    assert!(t.realize_active().unwrap().is_none());

    t.add_tab(["G", "leaf"]).unwrap();
    t.realize_active().unwrap().unwrap().push("drawn".to_string());
    assert_eq!(t.surface(["G", "leaf"]).unwrap().unwrap(), &["drawn"]);
}

#[test]
fn realize_active_skips_branches_without_a_leaf() {
    let mut t = tree();
    t.add_group(["Empty"]).unwrap();
    assert!(t.realize_active().unwrap().is_none());
}

#[test]
fn surfaces_can_be_edited_in_place() {
    let mut t = tree();
    t.add_figure(["A"]).unwrap();
    t.surface_mut(["A"]).unwrap().unwrap().push("later".to_string());
    assert_eq!(t.surface(["A"]).unwrap().unwrap(), &["later"]);

    // Unrealized panels expose no surface to edit.
    t.add_tab(["B"]).unwrap();
    assert!(t.surface_mut(["B"]).unwrap().is_none());
}
