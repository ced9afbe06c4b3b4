//! Figure: a retained plot scene drawn with egui_plot.
//!
//! A `Figure` is what panel builders draw into: named line and scatter
//! series, text annotations, axis labels. The tab engine never looks
//! inside; only the UI layer renders it, re-feeding the retained data to
//! `egui_plot` each frame.

use eframe::egui::{self, Color32};
use egui_plot::{Legend, Line, LineStyle, MarkerShape, Plot, PlotPoint, Points, Text};

use crate::tree::TabTree;

/// A tab tree of plot figures, the concrete flavor the demos use.
pub type TabbedFigures = TabTree<Figure>;

impl TabTree<Figure> {
    /// A tree whose panels start out as blank figures.
    pub fn figures() -> Self {
        TabTree::new(Figure::new)
    }
}

/// Visual styling of one data series.
#[derive(Debug, Clone)]
pub struct SeriesLook {
    pub color: Color32,
    pub width: f32,
    pub style: LineStyle,
    pub point_size: f32,
    pub marker: MarkerShape,
}

impl Default for SeriesLook {
    fn default() -> Self {
        Self {
            color: Color32::GRAY,
            width: 1.5,
            style: LineStyle::Solid,
            point_size: 4.0,
            marker: MarkerShape::Circle,
        }
    }
}

impl SeriesLook {
    /// Styling with a distinct color allocated from the series index.
    pub fn indexed(index: usize) -> Self {
        Self {
            color: Self::alloc_color(index),
            ..Default::default()
        }
    }

    /// Allocate a distinct color for the given series index.
    pub fn alloc_color(index: usize) -> Color32 {
        const PALETTE: [Color32; 10] = [
            Color32::from_rgb(31, 119, 180),
            Color32::from_rgb(255, 127, 14),
            Color32::from_rgb(44, 160, 44),
            Color32::from_rgb(214, 39, 40),
            Color32::from_rgb(148, 103, 189),
            Color32::from_rgb(140, 86, 75),
            Color32::from_rgb(227, 119, 194),
            Color32::from_rgb(127, 127, 127),
            Color32::from_rgb(188, 189, 34),
            Color32::from_rgb(23, 190, 207),
        ];
        PALETTE[index % PALETTE.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Line,
    Scatter,
}

/// One named data series of a figure.
#[derive(Debug, Clone)]
pub struct FigureSeries {
    name: String,
    points: Vec<[f64; 2]>,
    kind: SeriesKind,
    pub look: SeriesLook,
}

impl FigureSeries {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    pub fn kind(&self) -> SeriesKind {
        self.kind
    }

    pub fn color(&mut self, color: Color32) -> &mut Self {
        self.look.color = color;
        self
    }

    pub fn width(&mut self, width: f32) -> &mut Self {
        self.look.width = width;
        self
    }

    pub fn dashed(&mut self, length: f32) -> &mut Self {
        self.look.style = LineStyle::Dashed { length };
        self
    }

    pub fn dotted(&mut self, spacing: f32) -> &mut Self {
        self.look.style = LineStyle::Dotted { spacing };
        self
    }

    pub fn radius(&mut self, radius: f32) -> &mut Self {
        self.look.point_size = radius;
        self
    }

    pub fn marker(&mut self, marker: MarkerShape) -> &mut Self {
        self.look.marker = marker;
        self
    }
}

#[derive(Debug, Clone)]
struct Annotation {
    text: String,
    at: [f64; 2],
}

/// A retained plot scene: series, annotations and axis decoration.
#[derive(Debug, Clone)]
pub struct Figure {
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    series: Vec<FigureSeries>,
    annotations: Vec<Annotation>,
    legend: bool,
}

impl Default for Figure {
    fn default() -> Self {
        Self {
            title: None,
            x_label: None,
            y_label: None,
            series: Vec::new(),
            annotations: Vec::new(),
            legend: true,
        }
    }
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_x_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn x_label(&self) -> Option<&str> {
        self.x_label.as_deref()
    }

    pub fn set_y_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.y_label = Some(label.into());
        self
    }

    pub fn y_label(&self) -> Option<&str> {
        self.y_label.as_deref()
    }

    /// Hide or show the plot legend (shown by default).
    pub fn show_legend(&mut self, on: bool) -> &mut Self {
        self.legend = on;
        self
    }

    /// Append a line series; colors cycle through the palette in series
    /// order. Returns the series for style tweaks.
    pub fn line(
        &mut self,
        name: impl Into<String>,
        points: impl IntoIterator<Item = [f64; 2]>,
    ) -> &mut FigureSeries {
        self.push_series(name.into(), points.into_iter().collect(), SeriesKind::Line)
    }

    /// Append a scatter series.
    pub fn scatter(
        &mut self,
        name: impl Into<String>,
        points: impl IntoIterator<Item = [f64; 2]>,
    ) -> &mut FigureSeries {
        self.push_series(name.into(), points.into_iter().collect(), SeriesKind::Scatter)
    }

    fn push_series(
        &mut self,
        name: String,
        points: Vec<[f64; 2]>,
        kind: SeriesKind,
    ) -> &mut FigureSeries {
        let look = SeriesLook::indexed(self.series.len());
        self.series.push(FigureSeries {
            name,
            points,
            kind,
            look,
        });
        let index = self.series.len() - 1;
        &mut self.series[index]
    }

    /// Place a text annotation at plot coordinates.
    pub fn annotate(&mut self, text: impl Into<String>, at: [f64; 2]) -> &mut Self {
        self.annotations.push(Annotation {
            text: text.into(),
            at,
        });
        self
    }

    pub fn series(&self) -> &[FigureSeries] {
        &self.series
    }

    pub fn series_mut(&mut self) -> &mut [FigureSeries] {
        &mut self.series
    }

    /// True when nothing has been drawn into the figure yet.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty() && self.annotations.is_empty()
    }

    pub fn clear(&mut self) {
        self.series.clear();
        self.annotations.clear();
    }

    /// Draw the scene into the given ui. `id_salt` must be unique per
    /// visible figure so egui keeps separate pan/zoom state per plot.
    pub fn show(&self, ui: &mut egui::Ui, id_salt: impl std::hash::Hash) {
        if let Some(title) = &self.title {
            ui.vertical_centered(|ui| {
                ui.strong(title);
            });
        }
        let mut plot = Plot::new(id_salt);
        if self.legend {
            plot = plot.legend(Legend::default());
        }
        if let Some(label) = &self.x_label {
            plot = plot.x_axis_label(label.clone());
        }
        if let Some(label) = &self.y_label {
            plot = plot.y_axis_label(label.clone());
        }
        plot.show(ui, |plot_ui| {
            for s in &self.series {
                match s.kind {
                    SeriesKind::Line => {
                        let line = Line::new(&s.name, s.points.clone())
                            .color(s.look.color)
                            .width(s.look.width.max(0.1))
                            .style(s.look.style);
                        plot_ui.line(line);
                    }
                    SeriesKind::Scatter => {
                        let points = Points::new(&s.name, s.points.clone())
                            .radius(s.look.point_size.max(0.5))
                            .shape(s.look.marker)
                            .color(s.look.color);
                        plot_ui.points(points);
                    }
                }
            }
            for (i, annotation) in self.annotations.iter().enumerate() {
                let rich = egui::RichText::new(&annotation.text).size(12.0);
                plot_ui.text(Text::new(
                    format!("annotation_{i}"),
                    PlotPoint::new(annotation.at[0], annotation.at[1]),
                    rich,
                ));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_colors_cycle_through_the_palette() {
        let mut fig = Figure::new();
        for i in 0..12 {
            fig.line(format!("s{i}"), [[0.0, 0.0], [1.0, 1.0]]);
        }
        assert_eq!(fig.series()[0].look.color, SeriesLook::alloc_color(0));
        assert_eq!(fig.series()[10].look.color, SeriesLook::alloc_color(0));
        assert_eq!(fig.series()[11].look.color, SeriesLook::alloc_color(1));
    }

    #[test]
    fn drawing_marks_the_figure_non_empty() {
        let mut fig = Figure::new();
        assert!(fig.is_empty());
        fig.scatter("pts", [[1.0, 2.0]]).radius(3.0);
        assert!(!fig.is_empty());
        fig.clear();
        assert!(fig.is_empty());
    }

    #[test]
    fn style_tweaks_land_on_the_new_series() {
        let mut fig = Figure::new();
        fig.line("a", [[0.0, 0.0]]).width(3.0).dashed(6.0);
        let s = &fig.series()[0];
        assert_eq!(s.look.width, 3.0);
        assert!(matches!(s.look.style, LineStyle::Dashed { .. }));
    }
}
