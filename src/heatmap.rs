use std::io::Write;

use anyhow::Result;
use crossterm::style::{Color, Stylize};
use ndarray::Array2;

use crate::pipeline::PipelineRun;

/// Anchor colors for the two-stop heatmap scale. `LOW_ANCHOR` is rendered
/// at the run's minimum value (t = 0), `HIGH_ANCHOR` at the maximum (t = 1);
/// each RGB channel is interpolated independently in between.
pub const LOW_ANCHOR: (u8, u8, u8) = (237, 242, 255);
pub const HIGH_ANCHOR: (u8, u8, u8) = (30, 64, 175);

const LIGHT_TEXT: (u8, u8, u8) = (240, 240, 240);
const DARK_TEXT: (u8, u8, u8) = (24, 24, 24);

const PLACEHOLDER: &str = "\u{2014}";
const LABEL_WIDTH: usize = 9;
const CELL_WIDTH: usize = 6;

/// Owns the four output regions (token summary, id summary, shape summary,
/// grid) and fully overwrites all of them on every run. One instance lives
/// for the whole process; the sink is generic so tests can capture output.
pub struct HeatmapRenderer<W: Write> {
    out: W,
    has_data: bool,
}

impl<W: Write> HeatmapRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, has_data: false }
    }

    /// Whether the last render left a populated grid on screen.
    pub fn has_data(&self) -> bool {
        self.has_data
    }

    /// Consume the renderer and return its sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render one pipeline run. An empty run clears the previous visual
    /// state and prints placeholders; a populated run prints the three
    /// summaries followed by the heatmap grid.
    pub fn render(&mut self, run: &PipelineRun) -> Result<()> {
        if run.is_empty() {
            return self.clear();
        }
        self.has_data = true;

        let ids: Vec<String> = run.ids.iter().map(u32::to_string).collect();
        writeln!(self.out, "tokens: {}", run.tokens.join(" "))?;
        writeln!(self.out, "ids:    {}", ids.join(" "))?;
        writeln!(self.out, "shape:  {}", shape_summary(&run.matrix))?;
        writeln!(self.out)?;
        self.render_grid(run)?;
        self.out.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.has_data = false;
        writeln!(self.out, "tokens: {PLACEHOLDER}")?;
        writeln!(self.out, "ids:    {PLACEHOLDER}")?;
        writeln!(self.out, "shape:  {PLACEHOLDER}")?;
        self.out.flush()?;
        Ok(())
    }

    fn render_grid(&mut self, run: &PipelineRun) -> Result<()> {
        let cols = run.matrix.ncols();
        let (min, range) = heat_scale(&run.matrix);

        // Header: empty corner cell, then one label per dimension.
        write!(self.out, "{:>LABEL_WIDTH$} ", "")?;
        for d in 0..cols {
            write!(self.out, "{:>CELL_WIDTH$}", format!("d{d}"))?;
        }
        writeln!(self.out)?;

        for (r, token) in run.tokens.iter().enumerate() {
            write!(self.out, "{:>LABEL_WIDTH$} ", row_label(token))?;
            for c in 0..cols {
                let v = run.matrix[[r, c]];
                let t = (v - min) / range;
                let (br, bg, bb) = heat_color(t);
                let (fr, fg, fb) = text_color(v);
                let cell = format!("{v:>width$.2}", width = CELL_WIDTH);
                write!(
                    self.out,
                    "{}",
                    cell.with(Color::Rgb { r: fr, g: fg, b: fb })
                        .on(Color::Rgb { r: br, g: bg, b: bb })
                )?;
            }
            writeln!(self.out)?;
        }
        Ok(())
    }
}

/// Min of all values plus the scale divisor, substituting 1 when every
/// value is equal so the normalization never divides by zero.
pub fn heat_scale(matrix: &Array2<f64>) -> (f64, f64) {
    let min = matrix.iter().copied().fold(f64::INFINITY, f64::min);
    let max = matrix.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if max > min { max - min } else { 1.0 };
    (min, range)
}

/// Two-stop linear interpolation between the anchor colors, per channel.
pub fn heat_color(t: f64) -> (u8, u8, u8) {
    let lerp = |low: u8, high: u8| -> u8 {
        (f64::from(low) + (f64::from(high) - f64::from(low)) * t).round() as u8
    };
    (
        lerp(LOW_ANCHOR.0, HIGH_ANCHOR.0),
        lerp(LOW_ANCHOR.1, HIGH_ANCHOR.1),
        lerp(LOW_ANCHOR.2, HIGH_ANCHOR.2),
    )
}

/// Binary contrast rule: high values sit on dark cells and get light text,
/// keyed on the raw value rather than a true luminance computation.
pub fn text_color(v: f64) -> (u8, u8, u8) {
    if v > 0.5 {
        LIGHT_TEXT
    } else {
        DARK_TEXT
    }
}

/// Row label for a token: shown in full up to 10 characters, otherwise the
/// first 8 characters plus an ellipsis.
pub fn row_label(token: &str) -> String {
    if token.chars().count() > 10 {
        let head: String = token.chars().take(8).collect();
        format!("{head}\u{2026}")
    } else {
        token.to_string()
    }
}

/// `"{rows} × {cols} (tokens × dimensions)"`.
pub fn shape_summary(matrix: &Array2<f64>) -> String {
    format!(
        "{} \u{d7} {} (tokens \u{d7} dimensions)",
        matrix.nrows(),
        matrix.ncols()
    )
}
