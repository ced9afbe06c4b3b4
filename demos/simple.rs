//! Example: A flat row of pre-drawn figure tabs
//!
//! What it demonstrates
//! - Creating a tab per figure with `add_figure` and drawing into the
//!   returned surface right away.
//! - `&` markers in tab labels: press Alt+S / Alt+C / Alt+D to switch tabs.
//!
//! How to run
//! ```bash
//! cargo run --example simple
//! ```

use multitab::{run_multitab, MultiTabConfig, TabTree};

fn wave(f_hz: f64, phase: f64) -> Vec<[f64; 2]> {
    let n = 500usize;
    let dt = 4.0 / n as f64;
    (0..n)
        .map(|i| {
            let t = i as f64 * dt;
            [t, (2.0 * std::f64::consts::PI * f_hz * t + phase).sin()]
        })
        .collect()
}

fn main() -> eframe::Result<()> {
    let mut tabs = TabTree::figures();

    let fig = tabs.add_figure(["&Sine"]).unwrap();
    fig.set_title("Sine").set_x_label("t [s]").set_y_label("amplitude");
    fig.line("sine", wave(1.0, 0.0));

    let fig = tabs.add_figure(["&Cosine"]).unwrap();
    fig.set_title("Cosine").set_x_label("t [s]").set_y_label("amplitude");
    fig.line("cosine", wave(1.0, std::f64::consts::FRAC_PI_2));

    let fig = tabs.add_figure(["&Dots"]).unwrap();
    fig.set_title("Scatter");
    fig.scatter("samples", wave(0.5, 0.0).into_iter().step_by(25));

    let mut cfg = MultiTabConfig::default();
    cfg.title = "multitab simple demo".to_string();
    run_multitab(tabs, cfg)
}
