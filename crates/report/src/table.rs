use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    str::FromStr,
};

use odestep_core::Trajectory;

use crate::Error;

/// Relative tolerance when checking that trajectories share an x-grid.
const GRID_TOL: f64 = 1e-12;

/// Output layout for a [`Table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Format {
    /// Right-aligned, whitespace-separated columns with four decimals and a
    /// `#`-prefixed header, suitable for gnuplot and similar tools.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "dat", alias = "txt"))]
    Columns,

    /// Comma-separated values with a plain header and full precision.
    Csv,
}

/// Error returned when parsing an unknown format name.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("unknown format `{0}` (expected columns or csv)")]
pub struct ParseFormatError(String);

impl FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "columns" | "dat" | "txt" => Ok(Format::Columns),
            "csv" => Ok(Format::Csv),
            _ => Err(ParseFormatError(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Column {
    name: String,
    values: Vec<f64>,
}

/// Trajectory values lined up by sample index.
///
/// One row per sample, the first column holding `x` and one further column
/// per method (and optionally a closed-form solution) being compared.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    xs: Vec<f64>,
    columns: Vec<Column>,
}

impl Table {
    /// Creates a table with the given x column and no value columns.
    #[must_use]
    pub fn new(xs: Vec<f64>) -> Self {
        Self {
            xs,
            columns: Vec::new(),
        }
    }

    /// Creates a table with one column per named trajectory.
    ///
    /// The x column comes from the first trajectory.
    ///
    /// # Errors
    ///
    /// Returns an error if `trajectories` is empty, or if any trajectory has a
    /// different length or x-grid than the first.
    pub fn from_trajectories(trajectories: &[(&str, &Trajectory)]) -> Result<Self, Error> {
        let (_, first) = trajectories.first().ok_or(Error::Empty)?;
        let xs = first.xs();

        let mut table = Self::new(xs);
        for (name, trajectory) in trajectories {
            table.check_grid(name, trajectory)?;
            table = table.column(*name, trajectory.ys())?;
        }
        Ok(table)
    }

    /// Appends a named column of values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if `values` is not one per row.
    pub fn column(mut self, name: impl Into<String>, values: Vec<f64>) -> Result<Self, Error> {
        let name = name.into();
        if values.len() != self.xs.len() {
            return Err(Error::LengthMismatch {
                column: name,
                expected: self.xs.len(),
                found: values.len(),
            });
        }
        self.columns.push(Column { name, values });
        Ok(self)
    }

    /// Appends a column evaluated from `f(x)` at every row.
    #[must_use]
    pub fn computed(mut self, name: impl Into<String>, f: impl Fn(f64) -> f64) -> Self {
        let values = self.xs.iter().copied().map(f).collect();
        self.columns.push(Column {
            name: name.into(),
            values,
        });
        self
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns `true` if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Returns the column names, starting with `x`.
    #[must_use]
    pub fn headers(&self) -> Vec<&str> {
        std::iter::once("x")
            .chain(self.columns.iter().map(|c| c.name.as_str()))
            .collect()
    }

    /// Returns row `i` as `[x, values...]`, if it exists.
    #[must_use]
    pub fn row(&self, i: usize) -> Option<Vec<f64>> {
        let x = *self.xs.get(i)?;
        Some(
            std::iter::once(x)
                .chain(self.columns.iter().map(|c| c.values[i]))
                .collect(),
        )
    }

    /// Writes the table, header first, one line per row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if writing fails.
    pub fn write<W: Write>(&self, writer: &mut W, format: Format) -> Result<(), Error> {
        match format {
            Format::Columns => self.write_columns(writer)?,
            Format::Csv => self.write_csv(writer)?,
        }
        Ok(())
    }

    /// Creates (or truncates) a file at `path` and writes the table to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created or written.
    pub fn write_file(&self, path: impl AsRef<Path>, format: Format) -> Result<(), Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write(&mut writer, format)?;
        writer.flush()?;
        Ok(())
    }

    fn check_grid(&self, name: &str, trajectory: &Trajectory) -> Result<(), Error> {
        if trajectory.len() != self.xs.len() {
            return Err(Error::LengthMismatch {
                column: name.to_owned(),
                expected: self.xs.len(),
                found: trajectory.len(),
            });
        }
        let off_grid = self
            .xs
            .iter()
            .zip(trajectory)
            .position(|(x, sample)| (x - sample.x).abs() > GRID_TOL * x.abs().max(1.0));
        match off_grid {
            Some(row) => Err(Error::GridMismatch {
                column: name.to_owned(),
                row,
            }),
            None => Ok(()),
        }
    }

    fn write_columns<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        write!(w, "#{:>8}", "x")?;
        for column in &self.columns {
            write!(w, " {:>9}", column.name)?;
        }
        writeln!(w)?;

        for (i, x) in self.xs.iter().enumerate() {
            write!(w, "{x:9.4}")?;
            for column in &self.columns {
                write!(w, " {:9.4}", column.values[i])?;
            }
            writeln!(w)?;
        }
        Ok(())
    }

    fn write_csv<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        writeln!(w, "{}", self.headers().join(","))?;

        for (i, x) in self.xs.iter().enumerate() {
            write!(w, "{x}")?;
            for column in &self.columns {
                write!(w, ",{}", column.values[i])?;
            }
            writeln!(w)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use odestep_core::Sample;

    fn trajectory(points: &[(f64, f64)]) -> Trajectory {
        points.iter().copied().map(Sample::from).collect()
    }

    fn render(table: &Table, format: Format) -> String {
        let mut out = Vec::new();
        table.write(&mut out, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn columns_format_matches_fixed_width_layout() {
        let rk1 = trajectory(&[(0.0, 3.0), (0.1, 2.4)]);
        let rk2 = trajectory(&[(0.0, 3.0), (0.1, 2.46)]);

        let table = Table::from_trajectories(&[("RK1", &rk1), ("RK2", &rk2)])
            .unwrap()
            .computed("Exact", |x| 3.0 * (-2.0 * x).exp());

        let text = render(&table, Format::Columns);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "#       x       RK1       RK2     Exact");
        assert_eq!(lines[1], "   0.0000    3.0000    3.0000    3.0000");
        assert_eq!(lines[2], "   0.1000    2.4000    2.4600    2.4562");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn csv_format_keeps_full_precision() {
        let table = Table::new(vec![0.0, 0.5])
            .column("y", vec![1.0, 1.0 / 3.0])
            .unwrap();

        let text = render(&table, Format::Csv);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "x,y");
        assert_eq!(lines[1], "0,1");
        assert_eq!(lines[2], format!("0.5,{}", 1.0_f64 / 3.0));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(Table::from_trajectories(&[]), Err(Error::Empty)));
    }

    #[test]
    fn rejects_length_mismatch() {
        let short = trajectory(&[(0.0, 1.0)]);
        let long = trajectory(&[(0.0, 1.0), (1.0, 2.0)]);

        let err = Table::from_trajectories(&[("a", &long), ("b", &short)]).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthMismatch {
                expected: 2,
                found: 1,
                ..
            }
        ));

        let err = Table::new(vec![0.0]).column("c", vec![]).unwrap_err();
        assert_eq!(err.to_string(), "column `c` has 0 values, expected 1");
    }

    #[test]
    fn rejects_grid_mismatch() {
        let a = trajectory(&[(0.0, 1.0), (1.0, 2.0)]);
        let b = trajectory(&[(0.0, 1.0), (1.5, 2.0)]);

        let err = Table::from_trajectories(&[("a", &a), ("b", &b)]).unwrap_err();
        assert!(matches!(err, Error::GridMismatch { row: 1, .. }));
    }

    #[test]
    fn rows_and_headers() {
        let table = Table::new(vec![1.0, 2.0])
            .column("a", vec![10.0, 20.0])
            .unwrap()
            .computed("b", |x| -x);

        assert_eq!(table.len(), 2);
        assert_eq!(table.headers(), ["x", "a", "b"]);
        assert_eq!(table.row(1), Some(vec![2.0, 20.0, -2.0]));
        assert_eq!(table.row(2), None);
    }

    #[test]
    fn parses_format_names() {
        assert_eq!("csv".parse::<Format>(), Ok(Format::Csv));
        assert_eq!("Columns".parse::<Format>(), Ok(Format::Columns));
        assert_eq!("dat".parse::<Format>(), Ok(Format::Columns));

        let err = "xml".parse::<Format>().unwrap_err();
        assert_eq!(err, ParseFormatError("xml".into()));
        assert!(err.to_string().contains("`xml`"));
    }
}
