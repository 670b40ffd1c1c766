// src/vis/mod.rs
//
// Terminal rendering for classifier output: confusion matrices, training
// history curves, and label-confidence bars. Everything renders to a String;
// color is plain ANSI via `colored` and can be disabled process-wide with
// colored::control::set_override(false).

use colored::Colorize;
use thiserror::Error;

use crate::capabilities::Classification;

#[derive(Error, Debug)]
pub enum VisError {
    #[error("Confusion matrix must be square with one row per label: {0}")]
    BadMatrix(String),

    #[error("Nothing to render: {0}")]
    Empty(String),
}

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const BAR_WIDTH: usize = 30;

/// Render an NxN confusion matrix as an aligned table. Entry [i][j] counts
/// samples with true label i predicted as label j.
pub fn render_confusion_matrix(labels: &[String], matrix: &[Vec<u64>]) -> Result<String, VisError> {
    let n = labels.len();
    if n == 0 {
        return Err(VisError::Empty("no labels".into()));
    }
    if matrix.len() != n || matrix.iter().any(|row| row.len() != n) {
        return Err(VisError::BadMatrix(format!(
            "expected {}x{}, got {} rows",
            n,
            n,
            matrix.len()
        )));
    }

    let width = labels.iter().map(|l| l.len()).max().unwrap_or(4).max(6) + 2;

    let mut out = String::new();
    out.push_str(&format!("{:>width$}", "", width = width));
    for label in labels {
        out.push_str(&format!("{:>width$}", label, width = width));
    }
    out.push('\n');

    for (i, label) in labels.iter().enumerate() {
        out.push_str(&format!("{:>width$}", label, width = width));
        for (j, &count) in matrix[i].iter().enumerate() {
            let cell = format!("{:>width$}", count, width = width);
            if i == j {
                out.push_str(&cell.green().to_string());
            } else if count > 0 {
                out.push_str(&cell.red().to_string());
            } else {
                out.push_str(&cell);
            }
        }
        out.push('\n');
    }
    Ok(out)
}

/// Render a metric history (loss, accuracy, ...) as a one-line sparkline.
pub fn render_history(values: &[f32]) -> Result<String, VisError> {
    if values.is_empty() {
        return Err(VisError::Empty("history has no values".into()));
    }
    let lo = values.iter().cloned().fold(f32::INFINITY, f32::min);
    let hi = values.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let span = if hi > lo { hi - lo } else { 1.0 };

    let line: String = values
        .iter()
        .map(|&v| {
            let t = (v - lo) / span;
            let idx = ((t * (SPARK_LEVELS.len() - 1) as f32).round() as usize)
                .min(SPARK_LEVELS.len() - 1);
            SPARK_LEVELS[idx]
        })
        .collect();

    Ok(format!("{} (min {:.4}, max {:.4})", line.cyan(), lo, hi))
}

/// Render ranked classifications as horizontal confidence bars.
pub fn render_classifications(results: &[Classification]) -> Result<String, VisError> {
    if results.is_empty() {
        return Err(VisError::Empty("no classifications".into()));
    }
    let label_width = results.iter().map(|c| c.label.len()).max().unwrap_or(0);

    let mut out = String::new();
    for c in results {
        let filled = ((c.confidence.clamp(0.0, 1.0)) * BAR_WIDTH as f32).round() as usize;
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
        // pad before coloring so ANSI codes don't break the alignment
        let padded = format!("{:>width$}", c.label, width = label_width);
        out.push_str(&format!(
            "{}  {} {:>6.2}%\n",
            padded.bold(),
            bar.cyan(),
            c.confidence * 100.0
        ));
    }
    Ok(out)
}
