//! Terminal rendering of answers, tables and charts.

use crossterm::style::{Color as TermColor, Stylize};
use kesra_charts::{BarChart, Color, PieChart};
use kesra_core::{Answer, Block, Indicator, IndicatorAverages};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Renders core/chart data as styled terminal text.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    width: usize,
    color: bool,
}

impl Renderer {
    /// Create a renderer. `width` is the cell budget for bars and strips;
    /// `color` toggles ANSI styling.
    #[must_use]
    pub const fn new(width: usize, color: bool) -> Self {
        Self {
            width: if width == 0 { 1 } else { width },
            color,
        }
    }

    /// Render an answer, block by block.
    ///
    /// # Errors
    ///
    /// Propagates IO errors from the writer.
    pub fn answer(&self, out: &mut dyn Write, answer: &Answer) -> io::Result<()> {
        for block in answer.blocks() {
            match block {
                Block::Heading(text) => writeln!(out, "{}", self.bold(text))?,
                Block::Paragraph(text) => writeln!(out, "{text}")?,
                Block::Success(text) => {
                    writeln!(out, "{}", self.tinted(text, TermColor::Green))?;
                }
                Block::Warning(text) => {
                    writeln!(out, "{}", self.tinted(text, TermColor::Yellow))?;
                }
                Block::Error(text) => writeln!(out, "{}", self.tinted(text, TermColor::Red))?,
            }
        }
        Ok(())
    }

    /// Render a pie chart as a proportional strip plus a legend.
    ///
    /// # Errors
    ///
    /// Propagates IO errors from the writer.
    pub fn pie(&self, out: &mut dyn Write, chart: &PieChart) -> io::Result<()> {
        if let Some(title) = chart.get_title() {
            writeln!(out, "{}", self.bold(title))?;
        }
        if !chart.has_data() {
            return writeln!(out, "(tidak ada data)");
        }

        // Proportional strip: allot cells by cumulative rounding so they sum
        // exactly to the width.
        let total = chart.total();
        let mut strip = String::new();
        let mut cum = 0.0;
        let mut prev_end = 0usize;
        for slice in chart.slices() {
            cum += slice.value.max(0.0) / total;
            let end = (cum * self.width as f64).round() as usize;
            let cells = "\u{2588}".repeat(end.saturating_sub(prev_end));
            strip.push_str(&self.tinted(&cells, rgb(slice.color)));
            prev_end = end;
        }
        writeln!(out, "{strip}")?;

        let label_width = chart
            .slices()
            .iter()
            .map(|s| s.label.width())
            .max()
            .unwrap_or(0);
        for (slice, pct) in chart.slices().iter().zip(chart.percentages()) {
            writeln!(
                out,
                "{} {} {:>5.1}%  ({} daerah)",
                self.tinted("\u{25a0}", rgb(slice.color)),
                pad(&slice.label, label_width),
                pct,
                slice.value
            )?;
        }
        Ok(())
    }

    /// Render a grouped bar chart as horizontal bars.
    ///
    /// # Errors
    ///
    /// Propagates IO errors from the writer.
    pub fn bar(&self, out: &mut dyn Write, chart: &BarChart) -> io::Result<()> {
        if let Some(title) = chart.get_title() {
            writeln!(out, "{}", self.bold(title))?;
        }
        if !chart.has_data() {
            return writeln!(out, "(tidak ada data)");
        }

        let max = chart.max_value();
        let label_width = chart
            .groups()
            .iter()
            .flat_map(|g| g.bars.iter())
            .map(|b| b.label.width())
            .max()
            .unwrap_or(0);
        for group in chart.groups() {
            writeln!(out, "{}", self.bold(&group.label))?;
            for bar in &group.bars {
                let cells = ((bar.value.max(0.0) / max) * self.width as f64).round() as usize;
                // A positive value always gets at least one cell.
                let cells = if bar.value > 0.0 { cells.max(1) } else { cells };
                writeln!(
                    out,
                    "  {} {} {:.2}",
                    pad(&bar.label, label_width),
                    self.tinted(&"\u{2588}".repeat(cells), rgb(bar.color)),
                    bar.value
                )?;
            }
        }
        Ok(())
    }

    /// Render the per-category averages table.
    ///
    /// # Errors
    ///
    /// Propagates IO errors from the writer.
    pub fn averages_table(
        &self,
        out: &mut dyn Write,
        averages: &IndicatorAverages,
    ) -> io::Result<()> {
        let headers: Vec<String> = std::iter::once("Kategori".to_string())
            .chain(Indicator::ALL.iter().map(|i| format!("Rata-rata {}", i.label())))
            .collect();

        let mut rows: Vec<Vec<String>> = Vec::with_capacity(averages.rows().len());
        for row in averages.rows() {
            rows.push(
                std::iter::once(row.category.label().to_string())
                    .chain(Indicator::ALL.iter().map(|&i| format!("{:.2}", row.get(i))))
                    .collect(),
            );
        }

        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                rows.iter()
                    .map(|r| r[i].width())
                    .chain(std::iter::once(h.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let header_line = headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| pad(h, *w))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(out, "{}", self.bold(header_line.trim_end()))?;
        for row in &rows {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(cell, w)| pad(cell, *w))
                .collect::<Vec<_>>()
                .join("  ");
            writeln!(out, "{}", line.trim_end())?;
        }
        Ok(())
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn tinted(&self, text: &str, color: TermColor) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Crossterm color from a chart color.
fn rgb(color: Color) -> TermColor {
    let (r, g, b) = color.to_rgb8();
    TermColor::Rgb { r, g, b }
}

/// Pad to a display width with trailing spaces.
fn pad(text: &str, width: usize) -> String {
    let deficit = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(deficit))
}
