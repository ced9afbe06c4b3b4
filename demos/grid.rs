//! Example: A two-level grid of runs and metrics with linked focus
//!
//! What it demonstrates
//! - Group tabs ("Run A".."Run C") each holding the same metric tabs,
//!   built lazily with `add_tab_with` so a figure is only computed when
//!   its tab is first shown.
//! - Focus linking: switching the metric inside one run switches it in
//!   every run. Toggle it live under Settings.
//!
//! How to run
//! ```bash
//! cargo run --example grid
//! ```

use multitab::{run_multitab, Figure, MultiTabConfig, TabPosition, TabTree};

fn draw_metric(fig: &mut Figure, run: usize, metric: &str) {
    let f_hz = 0.5 + run as f64 * 0.5;
    let gain = match metric {
        "Power" => 1.0,
        "Torque" => 0.6,
        _ => 0.3,
    };
    fig.set_title(format!("Run {run}: {metric}"))
        .set_x_label("t [s]")
        .set_y_label(metric.to_lowercase());
    let points = (0..400).map(|i| {
        let t = i as f64 * 0.01;
        [t, gain * (2.0 * std::f64::consts::PI * f_hz * t).sin()]
    });
    fig.line(metric.to_lowercase(), points);
}

fn main() -> eframe::Result<()> {
    let mut tabs = TabTree::figures();

    for (run, group) in ["Run &A", "Run &B", "Run &C"].iter().enumerate() {
        for metric in ["&Power", "&Torque", "&Speed"] {
            let name = metric.trim_start_matches('&');
            tabs.add_tab_with([*group, metric], move |fig, _| {
                draw_metric(fig, run + 1, name);
                Ok(())
            })
            .unwrap();
        }
    }

    let mut cfg = MultiTabConfig::default();
    cfg.title = "multitab grid demo".to_string();
    cfg.headline = Some("Engine test runs".to_string());
    cfg.link_focus = true;
    cfg.tab_positions = vec![TabPosition::North, TabPosition::West];
    run_multitab(tabs, cfg)
}
