// Diagnostic printing for the statistics exercise.
// Output is produced only when the reporter is verbose; the sink is any
// `io::Write`, so tests capture it in a Vec<u8>.

use std::io::{self, Write};

use crate::error::Result;
use crate::stats::Statistics;

/// Number of array cells printed per row.
pub const CELLS_PER_ROW: usize = 8;

pub struct Reporter<W: Write> {
    sink: W,
    verbose: bool,
}

impl Reporter<io::Stdout> {
    pub fn stdout(verbose: bool) -> Self {
        Reporter::new(io::stdout(), verbose)
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(sink: W, verbose: bool) -> Self {
        Reporter { sink, verbose }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Write one line of free text.
    pub fn line(&mut self, text: &str) -> Result<()> {
        if self.verbose {
            writeln!(self.sink, "{}", text)?;
        }
        Ok(())
    }

    /// Print `data` as right-aligned cells, eight per row.
    pub fn print_array(&mut self, data: &[u8]) -> Result<()> {
        if !self.verbose {
            return Ok(());
        }

        for (i, value) in data.iter().enumerate() {
            write!(self.sink, "{:3} ", value)?;
            if (i + 1) % CELLS_PER_ROW == 0 {
                writeln!(self.sink)?;
            }
        }
        self.sink.flush()?;
        Ok(())
    }

    /// Compute and print maximum, minimum, mean and median of `data`.
    ///
    /// Computing the median sorts `data`. When the reporter is quiet nothing is
    /// computed and `data` is left as it was.
    pub fn print_statistics(&mut self, data: &mut [u8]) -> Result<Option<Statistics>> {
        if !self.verbose {
            return Ok(None);
        }

        let stats = Statistics::compute(data)?;
        writeln!(self.sink, "\nStatistics:")?;
        writeln!(self.sink, "Maximum: {}", stats.maximum)?;
        writeln!(self.sink, "Minimum: {}", stats.minimum)?;
        writeln!(self.sink, "Mean: {}", stats.mean)?;
        writeln!(self.sink, "Median: {}", stats.median)?;
        self.sink.flush()?;
        Ok(Some(stats))
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}
