//! egui rendering of the tab tree.
//!
//! [`TabsUi`] draws a [`TabTree`] of figures as nested tab strips around
//! the focused plot. Each tree level along the focused branch contributes
//! one strip, placed according to [`TabPosition`]; clicking a tab moves
//! focus through [`TabTree::on_tab_activated`], which realizes the panel
//! it lands on. Strips support Alt+key accelerators, drag reordering and
//! a context menu for saving figure data or a window screenshot.

use eframe::egui;
use egui_dnd::dnd;
use egui_phosphor::regular::DOTS_SIX_VERTICAL;
use image::{Rgba, RgbaImage};

use crate::config::{MultiTabConfig, TabPosition};
use crate::error::TabError;
use crate::export::{save_figure_csv, save_figure_json};
use crate::figure::Figure;
use crate::node::Child;
use crate::path::FocusPath;
use crate::tree::TabTree;

/// One tab of a rendered strip.
struct TabEntry {
    text: String,
    key: Option<char>,
    key_pos: Option<usize>,
    /// Stable per-child salt for drag-and-drop row ids: the panel id for
    /// leaves, the label text for groups. Survives reordering.
    id_salt: String,
    is_panel: bool,
}

/// Snapshot of one strip level along the focused branch.
struct StripLevel {
    prefix: FocusPath,
    position: TabPosition,
    entries: Vec<TabEntry>,
    active: Option<usize>,
}

/// Interactions collected during a frame, applied to the tree afterwards.
#[derive(Default)]
struct StripActions {
    activate: Option<(FocusPath, usize)>,
    reorder: Option<(FocusPath, Vec<usize>)>,
    save_data: Option<FocusPath>,
    save_image: bool,
}

/// Widget state for rendering one tab tree.
///
/// The tree and configuration stay with the caller and are passed to
/// [`show`](Self::show) each frame; this struct only keeps what the UI
/// needs to remember between frames.
pub struct TabsUi {
    widget_id: egui::Id,
    builder_error: Option<(FocusPath, String)>,
    request_window_shot: bool,
    awaiting_window_shot: bool,
}

impl TabsUi {
    /// `id_salt` distinguishes multiple tab widgets in one application.
    pub fn new(id_salt: impl std::hash::Hash) -> Self {
        TabsUi {
            widget_id: egui::Id::new(("multitab", id_salt)),
            builder_error: None,
            request_window_shot: false,
            awaiting_window_shot: false,
        }
    }

    /// Capture the whole window on the next frame and offer to save it
    /// as a PNG.
    pub fn request_window_screenshot(&mut self) {
        self.request_window_shot = true;
    }

    /// Render the tab strips and the focused figure into `ui`.
    ///
    /// This is the embedding entry point; [`run_multitab`] wraps it in a
    /// plain window for standalone use.
    ///
    /// [`run_multitab`]: crate::app::run_multitab
    pub fn show(&mut self, ui: &mut egui::Ui, tree: &mut TabTree<Figure>, cfg: &MultiTabConfig) {
        let strips = collect_strips(tree, cfg);
        let mut actions = StripActions::default();

        self.handle_accelerators(ui.ctx(), &strips, &mut actions);

        if let Some(headline) = cfg.headline.as_deref() {
            egui::TopBottomPanel::top(self.widget_id.with("headline")).show_inside(ui, |ui| {
                ui.heading(headline);
            });
        }
        self.render_levels(ui, tree, &strips, cfg.movable_tabs, &mut actions);
        self.apply_actions(ui.ctx(), tree, actions);
    }

    /// Strips nest outside in: each level claims a side panel and the
    /// remaining central area recurses into the next level.
    fn render_levels(
        &mut self,
        ui: &mut egui::Ui,
        tree: &mut TabTree<Figure>,
        strips: &[StripLevel],
        movable: bool,
        actions: &mut StripActions,
    ) {
        let Some((strip, rest)) = strips.split_first() else {
            self.render_panel_body(ui, tree);
            return;
        };

        let salt = strip.prefix.to_string();
        match strip.position {
            TabPosition::North => {
                egui::TopBottomPanel::top(self.widget_id.with(("strip_n", salt)))
                    .show_inside(ui, |ui| {
                        self.strip_row(ui, strip, true, movable, actions);
                    });
            }
            TabPosition::South => {
                egui::TopBottomPanel::bottom(self.widget_id.with(("strip_s", salt)))
                    .show_inside(ui, |ui| {
                        self.strip_row(ui, strip, true, movable, actions);
                    });
            }
            TabPosition::West => {
                egui::SidePanel::left(self.widget_id.with(("strip_w", salt)))
                    .resizable(true)
                    .default_width(140.0)
                    .width_range(60.0..=400.0)
                    .show_inside(ui, |ui| {
                        self.strip_row(ui, strip, false, movable, actions);
                    });
            }
            TabPosition::East => {
                egui::SidePanel::right(self.widget_id.with(("strip_e", salt)))
                    .resizable(true)
                    .default_width(140.0)
                    .width_range(60.0..=400.0)
                    .show_inside(ui, |ui| {
                        self.strip_row(ui, strip, false, movable, actions);
                    });
            }
        }

        egui::CentralPanel::default().show_inside(ui, |ui| {
            self.render_levels(ui, tree, rest, movable, actions);
        });
    }

    fn strip_row(
        &self,
        ui: &mut egui::Ui,
        strip: &StripLevel,
        horizontal: bool,
        movable: bool,
        actions: &mut StripActions,
    ) {
        let draw = |ui: &mut egui::Ui| {
            if movable && strip.entries.len() > 1 {
                self.draggable_tabs(ui, strip, actions);
            } else {
                self.plain_tabs(ui, strip, actions);
            }
        };
        if horizontal {
            ui.horizontal_wrapped(draw);
        } else {
            ui.vertical(draw);
        }
    }

    fn plain_tabs(&self, ui: &mut egui::Ui, strip: &StripLevel, actions: &mut StripActions) {
        for (index, entry) in strip.entries.iter().enumerate() {
            let selected = strip.active == Some(index);
            let text = accelerator_text(ui, &entry.text, entry.key_pos);
            let resp = ui.selectable_label(selected, text);
            if resp.clicked() {
                actions.activate = Some((strip.prefix.clone(), index));
            }
            self.tab_context_menu(&resp, strip, index, entry.is_panel, actions);
        }
    }

    /// Tabs with a drag grip, reorderable within their strip. The grip
    /// keeps dragging separate from plain clicks.
    fn draggable_tabs(&self, ui: &mut egui::Ui, strip: &StripLevel, actions: &mut StripActions) {
        let mut order: Vec<usize> = (0..strip.entries.len()).collect();
        let before = order.clone();

        let dnd_id = self.widget_id.with(("tab_strip_dnd", strip.prefix.to_string()));
        let dnd_resp = dnd(ui, dnd_id).show_custom_vec(&mut order, |ui, order, iter| {
            for (slot, &entry_index) in order.iter().enumerate() {
                let entry = &strip.entries[entry_index];
                let row_id = self
                    .widget_id
                    .with(("tab_strip_row", entry.id_salt.as_str()));
                iter.next(ui, row_id, slot, true, |ui, item_handle| {
                    item_handle.ui(ui, |ui, handle, _state| {
                        ui.horizontal(|ui| {
                            handle.ui(ui, |ui| {
                                ui.label(DOTS_SIX_VERTICAL);
                            });
                            let selected = strip.active == Some(entry_index);
                            let text = accelerator_text(ui, &entry.text, entry.key_pos);
                            let resp = ui.selectable_label(selected, text);
                            if resp.clicked() {
                                actions.activate = Some((strip.prefix.clone(), entry_index));
                            }
                            self.tab_context_menu(
                                &resp,
                                strip,
                                entry_index,
                                entry.is_panel,
                                actions,
                            );
                        });
                    })
                });
            }
        });

        if dnd_resp.is_dragging() {
            ui.ctx().request_repaint();
        }
        if order != before {
            actions.reorder = Some((strip.prefix.clone(), order));
        }
    }

    fn tab_context_menu(
        &self,
        resp: &egui::Response,
        strip: &StripLevel,
        index: usize,
        is_panel: bool,
        actions: &mut StripActions,
    ) {
        resp.context_menu(|ui| {
            if is_panel {
                if ui
                    .button("🗠 Save data")
                    .on_hover_text("Export this figure's series as CSV or JSON")
                    .clicked()
                {
                    ui.close();
                    let mut path = strip.prefix.clone();
                    path.push(index);
                    actions.save_data = Some(path);
                }
            }
            if ui
                .button("🖼 Save PNG")
                .on_hover_text("Take a screenshot of the entire window")
                .clicked()
            {
                ui.close();
                actions.save_image = true;
            }
        });
    }

    /// The central area: the focused panel's figure, realized on first
    /// display, or a placeholder while nothing is focused.
    fn render_panel_body(&mut self, ui: &mut egui::Ui, tree: &mut TabTree<Figure>) {
        let path = tree.focus_path();

        let stale = self
            .builder_error
            .as_ref()
            .is_some_and(|(err_path, _)| *err_path != path);
        if stale {
            self.builder_error = None;
        }
        if let Some((_, message)) = &self.builder_error {
            ui.colored_label(
                ui.visuals().error_fg_color,
                format!("Panel builder failed: {message}"),
            );
        }

        let salt = tree.panel(&path).map(|p| p.id().raw()).unwrap_or_default();
        match tree.realize_active() {
            Ok(Some(figure)) => {
                figure.show(ui, salt);
            }
            Ok(None) => {
                ui.centered_and_justified(|ui| {
                    ui.label("No panel active");
                });
            }
            Err(TabError::Builder { path, source }) => {
                log::error!("builder failed at {path}: {source}");
                self.builder_error = Some((path, source.to_string()));
            }
            Err(err) => log::error!("realization failed: {err}"),
        }
    }

    /// Alt+key presses activate the first matching tab along the focused
    /// branch, outermost strip first.
    fn handle_accelerators(
        &self,
        ctx: &egui::Context,
        strips: &[StripLevel],
        actions: &mut StripActions,
    ) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let input = ctx.input(|i| i.clone());
        if !input.modifiers.alt || input.modifiers.ctrl {
            return;
        }
        for strip in strips {
            for (index, entry) in strip.entries.iter().enumerate() {
                let Some(key) = entry.key.and_then(key_from_char) else {
                    continue;
                };
                if input.key_pressed(key) {
                    actions.activate = Some((strip.prefix.clone(), index));
                    return;
                }
            }
        }
    }

    fn apply_actions(
        &mut self,
        ctx: &egui::Context,
        tree: &mut TabTree<Figure>,
        actions: StripActions,
    ) {
        if let Some((prefix, index)) = actions.activate {
            match tree.on_tab_activated(&prefix, index) {
                Ok(path) => {
                    let stale = self
                        .builder_error
                        .as_ref()
                        .is_some_and(|(err_path, _)| *err_path != path);
                    if stale {
                        self.builder_error = None;
                    }
                }
                Err(TabError::Builder { path, source }) => {
                    log::error!("builder failed at {path}: {source}");
                    self.builder_error = Some((path, source.to_string()));
                }
                Err(err) => log::error!("tab activation failed: {err}"),
            }
        }
        if let Some((prefix, order)) = actions.reorder {
            if !tree.apply_order_at(&prefix, &order) {
                log::warn!("tab reorder rejected under {prefix}");
            }
        }
        if let Some(path) = actions.save_data {
            self.prompt_and_save_figure(tree, &path);
        }
        if actions.save_image {
            self.request_window_shot = true;
        }
        self.handle_screenshot_result(ctx);
    }

    /// Show a save dialog for one figure's data; the extension picks the
    /// format. Realizes the figure first if needed.
    fn prompt_and_save_figure(&self, tree: &mut TabTree<Figure>, path: &FocusPath) {
        let figure = match tree.realize(path) {
            Ok(figure) => figure,
            Err(err) => {
                log::error!("cannot save figure at {path}: {err}");
                return;
            }
        };
        if let Some(out) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .add_filter("JSON", &["json"])
            .set_file_name("figure_data.csv")
            .save_file()
        {
            let result = match out.extension().and_then(|s| s.to_str()).unwrap_or("") {
                "json" => save_figure_json(&out, figure),
                _ => save_figure_csv(&out, figure),
            };
            if let Err(e) = result {
                log::error!("failed to save figure data: {e}");
            }
        }
    }

    /// Handle a pending screenshot request and save the captured image to
    /// a chosen path.
    fn handle_screenshot_result(&mut self, ctx: &egui::Context) {
        if self.request_window_shot {
            self.request_window_shot = false;
            self.awaiting_window_shot = true;
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
        }
        if !self.awaiting_window_shot {
            return;
        }
        if let Some(image_arc) = ctx.input(|i| {
            i.events.iter().rev().find_map(|e| {
                if let egui::Event::Screenshot { image, .. } = e {
                    Some(image.clone())
                } else {
                    None
                }
            })
        }) {
            self.awaiting_window_shot = false;
            let default_name = format!(
                "multitab_{}.png",
                chrono::Local::now().format("%Y%m%d_%H%M%S")
            );
            if let Some(path) = rfd::FileDialog::new()
                .set_file_name(&default_name)
                .add_filter("PNG", &["png"])
                .save_file()
            {
                let egui::ColorImage {
                    size: [w, h],
                    pixels,
                    ..
                } = &*image_arc;
                let mut out = RgbaImage::new(*w as u32, *h as u32);
                for y in 0..*h {
                    for x in 0..*w {
                        let p = pixels[y * *w + x];
                        out.put_pixel(x as u32, y as u32, Rgba([p.r(), p.g(), p.b(), p.a()]));
                    }
                }
                if let Err(e) = out.save(&path) {
                    log::error!("failed to save window screenshot: {e}");
                } else {
                    log::info!("saved window screenshot to {}", path.display());
                }
            }
        }
    }
}

/// Walk the focused branch and snapshot one strip per level.
fn collect_strips(tree: &TabTree<Figure>, cfg: &MultiTabConfig) -> Vec<StripLevel> {
    let mut strips = Vec::new();
    let mut node = tree.root();
    let mut prefix = FocusPath::default();
    loop {
        if node.is_empty() {
            break;
        }
        let entries = node
            .children()
            .iter()
            .map(|slot| TabEntry {
                text: slot.label().text().to_owned(),
                key: slot.label().key(),
                key_pos: slot.label().key_pos(),
                id_salt: match slot.child() {
                    Child::Panel(panel) => panel.id().to_string(),
                    Child::Group(_) => format!("group-{}", slot.label().text()),
                },
                is_panel: slot.child().is_panel(),
            })
            .collect();
        strips.push(StripLevel {
            prefix: prefix.clone(),
            position: cfg.position_for(strips.len()),
            entries,
            active: node.active_index(),
        });

        let Some(active) = node.active_index() else {
            break;
        };
        match node.child_at(active).map(|slot| slot.child()) {
            Some(Child::Group(group)) => {
                prefix.push(active);
                node = group;
            }
            _ => break,
        }
    }
    strips
}

/// Tab text with the accelerator key underlined, when the label has one.
fn accelerator_text(ui: &egui::Ui, text: &str, key_pos: Option<usize>) -> egui::WidgetText {
    let Some(pos) = key_pos else {
        return text.into();
    };
    let before: String = text.chars().take(pos).collect();
    let key: String = text.chars().skip(pos).take(1).collect();
    let after: String = text.chars().skip(pos + 1).collect();

    let style = ui.style();
    let mut job = egui::text::LayoutJob::default();
    let mut append = |job: &mut egui::text::LayoutJob, rich: egui::RichText| {
        rich.append_to(
            job,
            style,
            egui::FontSelection::Style(egui::TextStyle::Button),
            egui::Align::Center,
        );
    };
    append(&mut job, egui::RichText::new(before));
    append(&mut job, egui::RichText::new(key).underline());
    append(&mut job, egui::RichText::new(after));
    job.into()
}

fn key_from_char(c: char) -> Option<egui::Key> {
    match c.to_ascii_uppercase() {
        'A' => Some(egui::Key::A),
        'B' => Some(egui::Key::B),
        'C' => Some(egui::Key::C),
        'D' => Some(egui::Key::D),
        'E' => Some(egui::Key::E),
        'F' => Some(egui::Key::F),
        'G' => Some(egui::Key::G),
        'H' => Some(egui::Key::H),
        'I' => Some(egui::Key::I),
        'J' => Some(egui::Key::J),
        'K' => Some(egui::Key::K),
        'L' => Some(egui::Key::L),
        'M' => Some(egui::Key::M),
        'N' => Some(egui::Key::N),
        'O' => Some(egui::Key::O),
        'P' => Some(egui::Key::P),
        'Q' => Some(egui::Key::Q),
        'R' => Some(egui::Key::R),
        'S' => Some(egui::Key::S),
        'T' => Some(egui::Key::T),
        'U' => Some(egui::Key::U),
        'V' => Some(egui::Key::V),
        'W' => Some(egui::Key::W),
        'X' => Some(egui::Key::X),
        'Y' => Some(egui::Key::Y),
        'Z' => Some(egui::Key::Z),
        '0' => Some(egui::Key::Num0),
        '1' => Some(egui::Key::Num1),
        '2' => Some(egui::Key::Num2),
        '3' => Some(egui::Key::Num3),
        '4' => Some(egui::Key::Num4),
        '5' => Some(egui::Key::Num5),
        '6' => Some(egui::Key::Num6),
        '7' => Some(egui::Key::Num7),
        '8' => Some(egui::Key::Num8),
        '9' => Some(egui::Key::Num9),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_digits_map_to_keys() {
        assert_eq!(key_from_char('a'), Some(egui::Key::A));
        assert_eq!(key_from_char('Z'), Some(egui::Key::Z));
        assert_eq!(key_from_char('7'), Some(egui::Key::Num7));
        assert_eq!(key_from_char('ü'), None);
    }

    #[test]
    fn strip_snapshot_follows_the_focused_branch() {
        let mut tree = TabTree::new(Figure::new);
        tree.add_tab(["&Left", "inner a"]).unwrap();
        tree.add_tab(["&Left", "inner b"]).unwrap();
        tree.add_tab(["&Right", "other"]).unwrap();
        tree.set_focus(["Left", "inner b"]).unwrap();

        let cfg = MultiTabConfig::default();
        let strips = collect_strips(&tree, &cfg);
        assert_eq!(strips.len(), 2);
        assert_eq!(
            strips[0]
                .entries
                .iter()
                .map(|e| e.text.as_str())
                .collect::<Vec<_>>(),
            ["Left", "Right"]
        );
        assert_eq!(strips[0].entries[0].key, Some('L'));
        assert_eq!(strips[1].prefix.indices(), [0]);
        assert_eq!(strips[1].active, Some(1));
        assert!(strips[1].entries.iter().all(|e| e.is_panel));
    }
}
