//! Example: Delayed plotting via wildcard builders
//!
//! What it demonstrates
//! - Tabs created up front with `add_tab` and no figure of their own;
//!   a depth-wide callback registered with `add_callback_for_depth`
//!   draws each figure the first time its tab is shown.
//! - Builders run at most once; watch the realization log lines.
//!
//! How to run
//! ```bash
//! RUST_LOG=multitab=debug cargo run --example delayed
//! ```

use multitab::{run_multitab, MultiTabConfig, TabTree};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let mut tabs = TabTree::figures();
    for group in ["Slow", "Medium", "Fast"] {
        for harmonic in ["Fundamental", "Second", "Third"] {
            tabs.add_tab([group, harmonic]).unwrap();
        }
    }

    // One builder covers every leaf; the path tells it what to draw.
    tabs.add_callback_for_depth(2, |fig, path| {
        let base_hz = [0.5, 1.0, 2.0][path.level(0).unwrap_or(0)];
        let harmonic = path.level(1).unwrap_or(0) as f64 + 1.0;
        fig.set_title(format!("{} Hz", base_hz * harmonic))
            .set_x_label("t [s]");
        let points = (0..600).map(|i| {
            let t = i as f64 * 0.005;
            [t, (2.0 * std::f64::consts::PI * base_hz * harmonic * t).sin()]
        });
        fig.line("wave", points);
        Ok(())
    });

    let mut cfg = MultiTabConfig::default();
    cfg.title = "multitab delayed demo".to_string();
    cfg.headline = Some("Figures are drawn on first view".to_string());
    run_multitab(tabs, cfg)
}
