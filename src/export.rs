//! Saving figure data to disk (CSV and JSON).

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::figure::{Figure, SeriesKind};
use crate::path::FocusPath;
use crate::tree::TabTree;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("JSON serialization failed")]
    Json(#[from] serde_json::Error),

    #[error("expected {expected} filenames, got {got}")]
    FilenameCount { expected: usize, got: usize },

    #[error("filename template '{0}' is missing the '{{}}' placeholder")]
    Template(String),

    #[error("no realized figures to save")]
    NothingToSave,
}

/// How `save_data` names the file for each tab.
pub enum Filenames {
    /// Sanitized label path plus the format's extension, e.g.
    /// `Group_A_Tab_1.csv`.
    Default,
    /// A pattern whose `{}` placeholder receives the sanitized label path.
    Template(String),
    /// One explicit path per leaf, in depth-first tab order. The count
    /// must match the number of leaves; entries for unrealized leaves are
    /// accepted but left unwritten.
    List(Vec<PathBuf>),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// What a tree-wide save actually did.
#[derive(Debug, Default)]
pub struct SaveReport {
    /// Files written, in tab order.
    pub written: Vec<PathBuf>,
    /// Leaves skipped because their figure was never realized.
    pub skipped: usize,
}

// ─────────────────────────────────────────────────────────────────────────────
// Serializable figure data
// ─────────────────────────────────────────────────────────────────────────────

/// The data content of a figure, stripped of styling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FigureData {
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub series: Vec<SeriesData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesData {
    pub name: String,
    pub kind: String,
    pub points: Vec<[f64; 2]>,
}

impl From<&Figure> for FigureData {
    fn from(figure: &Figure) -> Self {
        FigureData {
            title: figure.title().map(str::to_owned),
            x_label: figure.x_label().map(str::to_owned),
            y_label: figure.y_label().map(str::to_owned),
            series: figure
                .series()
                .iter()
                .map(|s| SeriesData {
                    name: s.name().to_owned(),
                    kind: match s.kind() {
                        SeriesKind::Line => "line".to_owned(),
                        SeriesKind::Scatter => "scatter".to_owned(),
                    },
                    points: s.points().to_vec(),
                })
                .collect(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Per-figure writers
// ─────────────────────────────────────────────────────────────────────────────

/// Write one figure's data as `series,x,y` CSV rows.
pub fn write_figure_csv<W: Write>(mut w: W, figure: &Figure) -> io::Result<()> {
    writeln!(w, "series,x,y")?;
    for s in figure.series() {
        for p in s.points() {
            writeln!(w, "{},{},{}", s.name(), p[0], p[1])?;
        }
    }
    Ok(())
}

pub fn save_figure_csv<P: AsRef<Path>>(path: P, figure: &Figure) -> Result<(), ExportError> {
    let f = std::fs::File::create(path)?;
    write_figure_csv(f, figure)?;
    Ok(())
}

pub fn write_figure_json<W: Write>(w: W, figure: &Figure) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(w, &FigureData::from(figure))?;
    Ok(())
}

pub fn save_figure_json<P: AsRef<Path>>(path: P, figure: &Figure) -> Result<(), ExportError> {
    let f = std::fs::File::create(path)?;
    write_figure_json(f, figure)?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tree-wide export
// ─────────────────────────────────────────────────────────────────────────────

impl TabTree<Figure> {
    /// Save every realized figure's data under `dir`.
    ///
    /// Leaves are visited depth first in tab order; unrealized figures are
    /// skipped and counted in the report. With [`Filenames::List`] the
    /// number of entries must match the total number of leaves, realized
    /// or not.
    pub fn save_data(
        &self,
        dir: impl AsRef<Path>,
        filenames: Filenames,
        format: ExportFormat,
    ) -> Result<SaveReport, ExportError> {
        let dir = dir.as_ref();
        let leaves: Vec<(FocusPath, Option<&Figure>)> = self
            .leaves()
            .map(|(path, panel)| (path, panel.surface()))
            .collect();
        let realized = leaves.iter().filter(|(_, fig)| fig.is_some()).count();
        if realized == 0 {
            return Err(ExportError::NothingToSave);
        }
        if let Filenames::List(list) = &filenames {
            if list.len() != leaves.len() {
                return Err(ExportError::FilenameCount {
                    expected: leaves.len(),
                    got: list.len(),
                });
            }
        }
        if let Filenames::Template(template) = &filenames {
            if !template.contains("{}") {
                return Err(ExportError::Template(template.clone()));
            }
        }

        let mut report = SaveReport::default();
        for (index, (path, figure)) in leaves.iter().enumerate() {
            let Some(figure) = figure else {
                report.skipped += 1;
                continue;
            };
            let file = match &filenames {
                Filenames::Default => {
                    dir.join(format!("{}.{}", self.slug_for(path), format.extension()))
                }
                Filenames::Template(template) => {
                    dir.join(template.replacen("{}", &self.slug_for(path), 1))
                }
                Filenames::List(list) => dir.join(&list[index]),
            };
            match format {
                ExportFormat::Csv => save_figure_csv(&file, figure)?,
                ExportFormat::Json => save_figure_json(&file, figure)?,
            }
            log::debug!("saved {} to {}", path, file.display());
            report.written.push(file);
        }
        Ok(report)
    }

    /// Filesystem-safe name derived from a leaf's label path.
    fn slug_for(&self, path: &FocusPath) -> String {
        match self.labels_for(path) {
            Some(labels) => labels
                .iter()
                .map(|l| sanitize(l))
                .collect::<Vec<_>>()
                .join("_"),
            None => path
                .indices()
                .iter()
                .map(usize::to_string)
                .collect::<Vec<_>>()
                .join("_"),
        }
    }
}

fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_replaces_awkward_characters() {
        assert_eq!(sanitize("Group A/1:2"), "Group_A_1_2");
        assert_eq!(sanitize("plain-name_7"), "plain-name_7");
    }

    #[test]
    fn csv_rows_follow_series_order() {
        let mut fig = Figure::new();
        fig.line("a", [[0.0, 1.0], [1.0, 2.0]]);
        fig.scatter("b", [[5.0, 6.0]]);
        let mut buf = Vec::new();
        write_figure_csv(&mut buf, &fig).unwrap();
        let s = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = s.trim().split('\n').collect();
        assert_eq!(lines[0], "series,x,y");
        assert_eq!(lines[1], "a,0,1");
        assert_eq!(lines[3], "b,5,6");
    }

    #[test]
    fn json_keeps_data_and_drops_styling() {
        let mut fig = Figure::new();
        fig.set_title("T").set_x_label("x");
        fig.line("a", [[0.0, 1.0]]).width(4.0);
        let mut buf = Vec::new();
        write_figure_json(&mut buf, &fig).unwrap();
        let data: FigureData = serde_json::from_slice(&buf).unwrap();
        assert_eq!(data.title.as_deref(), Some("T"));
        assert_eq!(data.series.len(), 1);
        assert_eq!(data.series[0].kind, "line");
        assert_eq!(data.series[0].points, vec![[0.0, 1.0]]);
    }
}
