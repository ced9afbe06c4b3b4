//! Standalone application wrapper.
//!
//! [`run_multitab`] opens a native window around one [`TabTree`] of
//! figures and blocks until it is closed. [`MultiTabApp`] is the eframe
//! glue: a small menu bar for exports, screenshots and runtime settings,
//! with the tab widget filling the rest of the window. For embedding
//! into an existing egui application use [`TabsUi`] directly instead.

use eframe::egui;

use crate::config::{MultiTabConfig, TabPosition, UserSettings};
use crate::export::{ExportFormat, Filenames};
use crate::figure::Figure;
use crate::tree::TabTree;
use crate::ui::TabsUi;

/// eframe application driving one tab tree.
pub struct MultiTabApp {
    tree: TabTree<Figure>,
    cfg: MultiTabConfig,
    tabs_ui: TabsUi,
}

impl MultiTabApp {
    pub fn new(mut tree: TabTree<Figure>, cfg: MultiTabConfig) -> Self {
        tree.link_focus(cfg.link_focus);
        let tabs_ui = TabsUi::new(cfg.title.clone());
        MultiTabApp { tree, cfg, tabs_ui }
    }

    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("multitab_menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("🗁 File", |ui| {
                    if ui
                        .button("🖼 Save PNG")
                        .on_hover_text("Take a screenshot of the entire window")
                        .clicked()
                    {
                        self.tabs_ui.request_window_screenshot();
                        ui.close();
                    }
                    ui.separator();
                    if ui
                        .button("🗠 Export all as CSV…")
                        .on_hover_text("Save every plotted figure's data as CSV files")
                        .clicked()
                    {
                        self.prompt_and_export_all(ExportFormat::Csv);
                        ui.close();
                    }
                    if ui
                        .button("🗠 Export all as JSON…")
                        .on_hover_text("Save every plotted figure's data as JSON files")
                        .clicked()
                    {
                        self.prompt_and_export_all(ExportFormat::Json);
                        ui.close();
                    }
                });
                ui.menu_button("⚙ Settings", |ui| {
                    self.settings_menu(ui);
                });
            });
        });
    }

    fn settings_menu(&mut self, ui: &mut egui::Ui) {
        let mut linked = self.cfg.link_focus;
        if ui
            .checkbox(&mut linked, "Link focus across groups")
            .on_hover_text("Mirror tab changes onto sibling groups at the same level")
            .changed()
        {
            self.cfg.link_focus = linked;
            self.tree.link_focus(linked);
        }
        ui.checkbox(&mut self.cfg.movable_tabs, "Movable tabs")
            .on_hover_text("Allow reordering tabs by dragging");

        ui.separator();
        ui.horizontal(|ui| {
            ui.label("Top-level tabs:");
            let mut pos = self.cfg.position_for(0);
            let before = pos;
            ui.selectable_value(&mut pos, TabPosition::North, "North");
            ui.selectable_value(&mut pos, TabPosition::South, "South");
            ui.selectable_value(&mut pos, TabPosition::West, "West");
            ui.selectable_value(&mut pos, TabPosition::East, "East");
            if pos != before {
                if self.cfg.tab_positions.is_empty() {
                    self.cfg.tab_positions.push(pos);
                } else {
                    self.cfg.tab_positions[0] = pos;
                }
            }
        });

        ui.separator();
        if ui
            .button("Save settings")
            .on_hover_text("Persist these settings to ~/.multitab/settings.yaml")
            .clicked()
        {
            let settings = UserSettings {
                link_focus: self.cfg.link_focus,
                movable_tabs: self.cfg.movable_tabs,
                tab_positions: self.cfg.tab_positions.clone(),
            };
            if let Err(err) = settings.save_to_default_path() {
                log::error!("failed to save settings: {err}");
            }
            ui.close();
        }
        if ui.button("Reset defaults").clicked() {
            self.cfg.apply_settings(&UserSettings::default());
            // apply_settings keeps a non-empty placement list, so clear
            // it explicitly to restore the per-level fallbacks.
            self.cfg.tab_positions.clear();
            self.tree.link_focus(self.cfg.link_focus);
            ui.close();
        }
    }

    /// Pick a directory and save every realized figure's data into it.
    fn prompt_and_export_all(&mut self, format: ExportFormat) {
        if let Some(dir) = rfd::FileDialog::new().pick_folder() {
            match self.tree.save_data(&dir, Filenames::Default, format) {
                Ok(report) => log::info!(
                    "exported {} figure(s) to {}, {} unrealized skipped",
                    report.written.len(),
                    dir.display(),
                    report.skipped
                ),
                Err(err) => log::error!("export failed: {err}"),
            }
        }
    }
}

impl eframe::App for MultiTabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_menu_bar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.tabs_ui.show(ui, &mut self.tree, &self.cfg);
        });
    }
}

/// Launch the tab tree in a native window.
///
/// Saved user settings, when present, override the corresponding fields
/// of `cfg` before the window opens. The call blocks until the window is
/// closed.
pub fn run_multitab(tree: TabTree<Figure>, mut cfg: MultiTabConfig) -> eframe::Result<()> {
    match UserSettings::load_from_default_path() {
        Ok(settings) => cfg.apply_settings(&settings),
        Err(err) => log::debug!("using default settings: {err}"),
    }

    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Set a bigger default window size if one is not provided by config.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1200.0, 800.0));
    }

    let app = MultiTabApp::new(tree, cfg);
    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
