use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::format::{csv_row, CSV_HEADER};
use crate::rng::Generator;

/// Writes the `Index,Value` table. Rows are numbered from zero in the order
/// they are pushed.
pub struct CsvWriter<W: Write> {
    inner: BufWriter<W>,
    rows: usize,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(inner: W) -> Result<Self> {
        let mut inner = BufWriter::new(inner);
        writeln!(inner, "{}", CSV_HEADER)?;
        Ok(Self { inner, rows: 0 })
    }

    /// Appends one row and returns its index.
    pub fn push(&mut self, value: f64) -> Result<usize> {
        let index = self.rows;
        writeln!(self.inner, "{}", csv_row(index, value))?;
        self.rows += 1;
        Ok(index)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flushes buffered rows so late write errors are reported here.
    pub fn finish(mut self) -> Result<usize> {
        self.inner.flush()?;
        Ok(self.rows)
    }
}

/// Writes `samples` values from `generator`, calling `on_row` with each
/// row's index and value after it is written.
pub fn write_samples<W, F>(
    inner: W,
    generator: &mut Generator,
    samples: usize,
    mut on_row: F,
) -> Result<usize>
where
    W: Write,
    F: FnMut(usize, f64),
{
    let mut writer = CsvWriter::new(inner)?;
    for value in generator.take(samples) {
        let index = writer.push(value)?;
        on_row(index, value);
    }
    writer.finish()
}

pub fn export<P, F>(
    path: P,
    generator: &mut Generator,
    samples: usize,
    on_row: F,
) -> Result<usize>
where
    P: AsRef<Path>,
    F: FnMut(usize, f64),
{
    let path = path.as_ref();
    tracing::debug!("Creating {}", path.display());
    let file = File::create(path)?;
    let rows = write_samples(file, generator, samples, on_row)?;
    tracing::info!("Wrote {} rows to {}", rows, path.display());
    Ok(rows)
}
