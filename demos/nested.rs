//! Example: Three nesting levels with a preselected tab
//!
//! What it demonstrates
//! - Arbitrary nesting depth: year / month / metric, with interior
//!   groups created on demand by `add_tab_with`.
//! - Strip placement per level and `set_focus` before the window opens.
//!
//! How to run
//! ```bash
//! cargo run --example nested
//! ```

use multitab::{run_multitab, MultiTabConfig, TabPosition, TabTree};

fn main() -> eframe::Result<()> {
    let mut tabs = TabTree::figures();

    for year in ["2022", "2023"] {
        for (m, month) in ["&Jan", "&Feb", "&Mar"].into_iter().enumerate() {
            for metric in ["&Power", "&Torque"] {
                let name = metric.trim_start_matches('&').to_string();
                tabs.add_tab_with([year, month, metric], move |fig, path| {
                    let f_hz = 1.0 + m as f64;
                    fig.set_title(format!("{name} at {path}")).set_x_label("t [s]");
                    let points = (0..300).map(|i| {
                        let t = i as f64 * 0.01;
                        [t, (2.0 * std::f64::consts::PI * f_hz * t).sin() / (1.0 + t)]
                    });
                    fig.line(name.to_lowercase(), points);
                    Ok(())
                })
                .unwrap();
            }
        }
    }

    tabs.set_focus(["2023", "Feb", "Torque"]).unwrap();

    let mut cfg = MultiTabConfig::default();
    cfg.title = "multitab nested demo".to_string();
    cfg.tab_positions = vec![TabPosition::North, TabPosition::West, TabPosition::South];
    run_multitab(tabs, cfg)
}
