//! Plain-text table rendering.
//!
//! Three layouts are supported:
//! - `Delimited`: cells joined by commas, no padding
//! - `Aligned`: cells padded to column width, separated by a space
//! - `Pretty`: like `Aligned` with a `|` between row cells
//!
//! Rendered lines carry no trailing whitespace.

use clap::ValueEnum;

const DELIMITER: &str = ",";
const SEPARATOR: &str = "|";
const SPACING: usize = 1;

/// Table layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TableFormat {
    #[default]
    Delimited,
    Aligned,
    Pretty,
}

/// A titled grid of text cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render header and rows in the given layout
    pub fn render(&self, format: TableFormat) -> String {
        let lines: Vec<String> = match format {
            TableFormat::Delimited => std::iter::once(&self.columns)
                .chain(&self.rows)
                .map(|row| row.join(DELIMITER))
                .collect(),
            TableFormat::Aligned => {
                let widths = self.widths();
                std::iter::once(&self.columns)
                    .chain(&self.rows)
                    .map(|row| self.pad_row(row, &widths, " "))
                    .collect()
            }
            TableFormat::Pretty => {
                let widths = self.widths();
                let header_gap = " ".repeat(SPACING * 2 + SEPARATOR.len());
                let row_gap = format!("{0}{1}{0}", " ".repeat(SPACING), SEPARATOR);

                std::iter::once(self.pad_row(&self.columns, &widths, &header_gap))
                    .chain(self.rows.iter().map(|row| self.pad_row(row, &widths, &row_gap)))
                    .collect()
            }
        };

        lines
            .iter()
            .map(|line| line.trim_end())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Widest cell per column, header included
    ///
    /// **Private** - internal layout helper
    fn widths(&self) -> Vec<usize> {
        (0..self.columns.len())
            .map(|index| {
                std::iter::once(&self.columns)
                    .chain(&self.rows)
                    .filter_map(|row| row.get(index))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Pad every cell to its column width and join with `gap`
    ///
    /// **Private** - internal layout helper
    fn pad_row(&self, row: &[String], widths: &[usize], gap: &str) -> String {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map(String::as_str).unwrap_or("");
                format!("{:<width$}", cell, width = width)
            })
            .collect::<Vec<_>>()
            .join(gap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Table {
        let mut table = Table::new(["Function", "Occurences", "Sender"]);
        for row in [
            ["hey", "world", "foobar"],
            ["this is", "a test", "my man!"],
            ["roar", "grr", "zzzz"],
        ] {
            table.push_row(row.iter().map(|s| s.to_string()).collect());
        }
        table
    }

    #[test]
    fn test_render_pretty() {
        let expected = "\
Function   Occurences   Sender
hey      | world      | foobar
this is  | a test     | my man!
roar     | grr        | zzzz";
        assert_eq!(sample().render(TableFormat::Pretty), expected);
    }

    #[test]
    fn test_render_aligned() {
        let expected = "\
Function Occurences Sender
hey      world      foobar
this is  a test     my man!
roar     grr        zzzz";
        assert_eq!(sample().render(TableFormat::Aligned), expected);
    }

    #[test]
    fn test_render_delimited() {
        let expected = "\
Function,Occurences,Sender
hey,world,foobar
this is,a test,my man!
roar,grr,zzzz";
        assert_eq!(sample().render(TableFormat::Delimited), expected);
    }

    #[test]
    fn test_render_header_only() {
        let table = Table::new(["Services", "Occurrence"]);
        assert!(table.is_empty());
        assert_eq!(table.render(TableFormat::Pretty), "Services   Occurrence");
        assert_eq!(table.render(TableFormat::Delimited), "Services,Occurrence");
    }

    #[test]
    fn test_short_row_is_padded() {
        let mut table = Table::new(["a", "b"]);
        table.push_row(vec!["long".to_string()]);
        assert_eq!(table.render(TableFormat::Aligned), "a    b\nlong");
    }
}
