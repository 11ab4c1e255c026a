//! Hand-rolled SVG charts for the analysis subcommands: a binned
//! histogram of mutation positions and a labeled bar chart for context
//! and signature counts.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

const MARGIN: u32 = 50;

struct SvgTag {
    name: &'static str,
    attributes: HashMap<&'static str, String>,
}

impl SvgTag {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: HashMap::new(),
        }
    }

    fn attr(mut self, key: &'static str, value: impl ToString) -> Self {
        self.attributes.insert(key, value.to_string());
        self
    }

    fn render(&self, self_closing: bool) -> String {
        let mut attrs: Vec<(&'static str, &str)> = self
            .attributes
            .iter()
            .map(|(&k, v)| (k, v.as_str()))
            .collect();
        attrs.sort_by_key(|(k, _)| *k);
        let attrs: String = attrs
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, escape_xml(v)))
            .collect::<Vec<_>>()
            .join(" ");

        if self_closing {
            format!("<{} {}/>", self.name, attrs)
        } else {
            format!("<{} {}>", self.name, attrs)
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('\'', "&apos;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn svg_header(width: u32, height: u32) -> String {
    let mut svg = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");
    svg.push_str(
        &SvgTag::new("svg")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("width", width)
            .attr("height", height)
            .attr("style", "background:#ffffff")
            .render(false),
    );
    svg.push('\n');
    svg
}

fn text_element(x: u32, y: u32, size: u32, anchor: &str, content: &str) -> String {
    format!(
        "{}{}</text>\n",
        SvgTag::new("text")
            .attr("x", x)
            .attr("y", y)
            .attr("font-family", "sans-serif")
            .attr("font-size", size)
            .attr("text-anchor", anchor.to_string())
            .render(false),
        escape_xml(content)
    )
}

/// Histogram of positions binned over a fixed domain.
pub struct HistogramPlot {
    pub bins: usize,
    pub width: u32,
    pub height: u32,
}

impl HistogramPlot {
    pub fn new(bins: usize) -> Self {
        Self {
            bins: bins.max(1),
            width: 1000,
            height: 400,
        }
    }

    fn bin_positions(&self, positions: &[usize], domain: usize) -> Vec<u64> {
        let mut counts = vec![0u64; self.bins];
        if domain == 0 {
            return counts;
        }
        for &pos in positions {
            let idx = (pos * self.bins / domain).min(self.bins - 1);
            counts[idx] += 1;
        }
        counts
    }

    pub fn render(&self, positions: &[usize], domain: usize, title: &str) -> String {
        let counts = self.bin_positions(positions, domain);
        let max_count = counts.iter().copied().max().unwrap_or(0).max(1);

        let plot_width = self.width - 2 * MARGIN;
        let plot_height = self.height - 2 * MARGIN;
        let bar_width = plot_width as f32 / self.bins as f32;

        let mut svg = svg_header(self.width, self.height);
        svg.push_str(&text_element(self.width / 2, MARGIN / 2, 16, "middle", title));

        for (idx, &count) in counts.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let bar_height = (count as f32 / max_count as f32 * plot_height as f32) as u32;
            let x = MARGIN as f32 + idx as f32 * bar_width;
            svg.push_str(
                &SvgTag::new("rect")
                    .attr("x", format!("{:.1}", x))
                    .attr("y", MARGIN + plot_height - bar_height)
                    .attr("width", format!("{:.1}", bar_width.max(1.0)))
                    .attr("height", bar_height)
                    .attr("fill", "#3465a4")
                    .render(true),
            );
            svg.push('\n');
        }

        // Baseline and domain labels
        svg.push_str(
            &SvgTag::new("line")
                .attr("x1", MARGIN)
                .attr("y1", MARGIN + plot_height)
                .attr("x2", MARGIN + plot_width)
                .attr("y2", MARGIN + plot_height)
                .attr("stroke", "#000000")
                .render(true),
        );
        svg.push('\n');
        svg.push_str(&text_element(MARGIN, self.height - MARGIN / 4, 12, "start", "0"));
        svg.push_str(&text_element(
            MARGIN + plot_width,
            self.height - MARGIN / 4,
            12,
            "end",
            &domain.to_string(),
        ));
        svg.push_str(&text_element(
            self.width / 2,
            self.height - MARGIN / 4,
            12,
            "middle",
            "Genome position",
        ));

        svg.push_str("</svg>\n");
        svg
    }
}

/// Labeled vertical bar chart.
pub struct BarChart {
    pub width: u32,
    pub height: u32,
}

impl Default for BarChart {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 500,
        }
    }
}

impl BarChart {
    pub fn render(&self, bars: &[(String, f64)], title: &str) -> String {
        let max_value = bars.iter().map(|(_, v)| *v).fold(0.0f64, f64::max).max(1e-9);

        let plot_width = self.width - 2 * MARGIN;
        let plot_height = self.height - 2 * MARGIN;
        let slot = plot_width as f32 / bars.len().max(1) as f32;
        let bar_width = (slot * 0.8).max(1.0);

        let mut svg = svg_header(self.width, self.height);
        svg.push_str(&text_element(self.width / 2, MARGIN / 2, 16, "middle", title));

        for (idx, (label, value)) in bars.iter().enumerate() {
            let bar_height = (value / max_value * plot_height as f64) as u32;
            let x = MARGIN as f32 + idx as f32 * slot + (slot - bar_width) / 2.0;
            svg.push_str(
                &SvgTag::new("rect")
                    .attr("x", format!("{:.1}", x))
                    .attr("y", MARGIN + plot_height - bar_height)
                    .attr("width", format!("{:.1}", bar_width))
                    .attr("height", bar_height)
                    .attr("fill", "#73d216")
                    .render(true),
            );
            svg.push('\n');

            let label_x = (x + bar_width / 2.0) as u32;
            svg.push_str(&text_element(
                label_x,
                MARGIN + plot_height + 16,
                11,
                "middle",
                label,
            ));
            svg.push_str(&text_element(
                label_x,
                MARGIN + plot_height - bar_height.saturating_add(4).min(plot_height),
                10,
                "middle",
                &trim_value(*value),
            ));
        }

        svg.push_str(
            &SvgTag::new("line")
                .attr("x1", MARGIN)
                .attr("y1", MARGIN + plot_height)
                .attr("x2", MARGIN + plot_width)
                .attr("y2", MARGIN + plot_height)
                .attr("stroke", "#000000")
                .render(true),
        );
        svg.push('\n');

        svg.push_str("</svg>\n");
        svg
    }
}

fn trim_value(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{:.2}", value)
    }
}

pub fn write_svg(path: &Path, svg: &str) -> Result<()> {
    std::fs::write(path, svg)
        .with_context(|| format!("Failed to write plot {}", path.display()))
}

/// Genome ids can contain characters that are unsafe in file names.
pub fn sanitize_file_stem(id: &str) -> String {
    id.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
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
    fn escapes_attribute_values() {
        assert_eq!(escape_xml("C>T & \"q\""), "C&gt;T &amp; &quot;q&quot;");
    }

    #[test]
    fn histogram_bins_cover_the_domain() {
        let plot = HistogramPlot::new(4);
        let counts = plot.bin_positions(&[0, 1, 99, 50, 75], 100);
        assert_eq!(counts, vec![2, 0, 1, 2]);
    }

    #[test]
    fn histogram_renders_valid_svg_shell() {
        let plot = HistogramPlot::new(10);
        let svg = plot.render(&[5, 6, 7], 100, "Mutations in q<1>");
        assert!(svg.starts_with("<?xml"));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.contains("Mutations in q&lt;1&gt;"));
        assert!(svg.contains("<rect"));
    }

    #[test]
    fn bar_chart_handles_empty_input() {
        let chart = BarChart::default();
        let svg = chart.render(&[], "Empty");
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn sanitizes_awkward_genome_ids() {
        assert_eq!(
            sanitize_file_stem("hMPXV/USA|2022.1"),
            "hMPXV_USA_2022.1"
        );
    }
}
