//! Renders reduced cells into a single output artifact.

use serde::Deserialize;

use crate::reducer::{CellKind, Reduced, ReducedCell};

const MARKDOWN_TITLE: &str = "# Extracted Content from Jupyter Notebook\n";

/// Output artifact flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// A script: code cells verbatim, markdown cells turned into `#` comments.
    #[default]
    Python,
    /// A markdown document: code cells fenced, markdown cells as prose.
    Markdown,
}

impl OutputFormat {
    /// File extension without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            OutputFormat::Python => "py",
            OutputFormat::Markdown => "md",
        }
    }

    /// Render `reduced` in this format.
    #[must_use]
    pub fn render(self, reduced: &Reduced) -> String {
        match self {
            OutputFormat::Python => render_python(reduced),
            OutputFormat::Markdown => render_markdown(reduced),
        }
    }
}

fn rendered_cells(reduced: &Reduced) -> impl Iterator<Item = &ReducedCell> {
    reduced
        .cells
        .iter()
        .filter(|cell| cell.kind != CellKind::Raw && !cell.text.trim().is_empty())
}

fn heading(cell: &ReducedCell) -> String {
    format!("Cell {} ({})", cell.index + 1, cell.kind.label())
}

/// Render as a script. Sections are separated by one blank line.
#[must_use]
pub fn render_python(reduced: &Reduced) -> String {
    let sections: Vec<String> = rendered_cells(reduced)
        .map(|cell| {
            let body = match cell.kind {
                CellKind::Markdown => comment_out(&cell.text),
                _ => cell.text.clone(),
            };
            format!("# {}\n{body}", heading(cell))
        })
        .collect();
    sections.join("\n\n")
}

/// Prefix every line with `# `; blank lines become a bare `#`.
fn comment_out(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                "#".to_owned()
            } else {
                format!("# {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render as a markdown document with fenced code cells.
#[must_use]
pub fn render_markdown(reduced: &Reduced) -> String {
    let mut parts: Vec<String> = vec![MARKDOWN_TITLE.to_owned()];
    for cell in rendered_cells(reduced) {
        parts.push(format!("## {}\n", heading(cell)));
        match cell.kind {
            CellKind::Code => {
                parts.push("```python".to_owned());
                parts.push(cell.text.clone());
                parts.push("```\n".to_owned());
            }
            _ => {
                parts.push(cell.text.clone());
                parts.push("\n".to_owned());
            }
        }
    }
    parts.join("\n")
}
