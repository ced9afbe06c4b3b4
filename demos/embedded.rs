//! Example: Embedding the tab widget into your own egui application
//!
//! What it demonstrates
//! - Driving `TabsUi` inside an existing `eframe` app instead of calling
//!   `run_multitab`, with host-side controls next to it.
//! - Growing the tree at runtime while the widget is live.
//!
//! How to run
//! ```bash
//! cargo run --example embedded
//! ```

use eframe::{egui, NativeOptions};
use multitab::{Figure, MultiTabConfig, TabTree, TabsUi};

struct DemoApp {
    tree: TabTree<Figure>,
    cfg: MultiTabConfig,
    tabs: TabsUi,
    added: usize,
}

fn draw_wave(fig: &mut Figure, f_hz: f64) {
    fig.set_title(format!("{f_hz} Hz")).set_x_label("t [s]");
    let points = (0..400).map(move |i| {
        let t = i as f64 * 0.01;
        [t, (2.0 * std::f64::consts::PI * f_hz * t).sin()]
    });
    fig.line("wave", points);
}

impl DemoApp {
    fn new() -> Self {
        let mut tree = TabTree::figures();
        for (g, group) in ["&Coarse", "&Fine"].into_iter().enumerate() {
            for (i, leaf) in ["&One", "&Two"].into_iter().enumerate() {
                tree.add_tab_with([group, leaf], move |fig, _| {
                    draw_wave(fig, (g * 2 + i + 1) as f64 * 0.5);
                    Ok(())
                })
                .unwrap();
            }
        }
        let cfg = MultiTabConfig::default();
        Self {
            tree,
            cfg,
            tabs: TabsUi::new("embedded_demo"),
            added: 0,
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("demo_controls")
            .default_width(180.0)
            .show(ctx, |ui| {
                ui.heading("Host controls");
                if ui.checkbox(&mut self.cfg.link_focus, "Link focus").changed() {
                    self.tree.link_focus(self.cfg.link_focus);
                }
                ui.checkbox(&mut self.cfg.movable_tabs, "Movable tabs");
                if ui.button("Add a tab to Fine").clicked() {
                    self.added += 1;
                    let f_hz = 3.0 + self.added as f64;
                    let labels = ["Fine".to_string(), format!("Extra {}", self.added)];
                    if let Err(err) = self.tree.add_tab_with(labels, move |fig, _| {
                        draw_wave(fig, f_hz);
                        Ok(())
                    }) {
                        log::warn!("could not add tab: {err}");
                    }
                }
            });

        egui::CentralPanel::default()
            .show(ctx, |ui| self.tabs.show(ui, &mut self.tree, &self.cfg));
    }
}

fn main() -> eframe::Result<()> {
    eframe::run_native(
        "multitab embedded demo",
        NativeOptions::default(),
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(DemoApp::new()))
        }),
    )
}
