use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::format::{self, PREVIEW_COUNT, RULE};
use crate::output;
use crate::rng::Generator;

/// Outcome of an export run: where it went, how many rows, and the preview
/// lines for the first few samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub output: PathBuf,
    pub rows: usize,
    pub preview: Vec<String>,
}

impl Report {
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in &self.preview {
            writeln!(out, "{}", line)?;
        }
        writeln!(out, "{}", RULE)?;
        writeln!(out, "Success! Data exported to '{}'.", self.output.display())
    }
}

/// Writes `samples` rows to `path` and collects the preview. `on_row` sees
/// every written index, e.g. to drive a progress bar.
pub fn run<P, F>(
    generator: &mut Generator,
    samples: usize,
    path: P,
    mut on_row: F,
) -> Result<Report>
where
    P: AsRef<Path>,
    F: FnMut(usize),
{
    let path = path.as_ref();
    let mut preview = Vec::with_capacity(PREVIEW_COUNT.min(samples));
    let rows = output::export(path, generator, samples, |index, value| {
        if index < PREVIEW_COUNT {
            preview.push(format::preview_line(index, value));
        }
        on_row(index);
    })?;

    Ok(Report {
        output: path.to_path_buf(),
        rows,
        preview,
    })
}
