//! Plain-text table of command parameters.
//!
//! Callers build the table explicitly from the values they validated, then
//! log each rendered line.

use std::fmt::Display;

const NAME_HEADER: &str = "parameter_name";
const VALUE_HEADER: &str = "value";
const COLUMN_GAP: &str = "  ";

/// Ordered `{parameter name, value}` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterTable {
    rows: Vec<(String, String)>,
}

impl ParameterTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter, rendering its value with `Display`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.rows.push((name.into(), value.to_string()));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render header, dash rule, and one line per parameter.
    ///
    /// ```
    /// use cliseed_cli::ParameterTable;
    /// let lines = ParameterTable::new().with("nth_number", 19).render();
    /// assert_eq!(lines, ["parameter_name  value", "--------------  -----", "nth_number      19"]);
    /// ```
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        let name_width = column_width(NAME_HEADER, self.rows.iter().map(|(n, _)| n.as_str()));
        let value_width = column_width(VALUE_HEADER, self.rows.iter().map(|(_, v)| v.as_str()));

        let line = |name: &str, value: &str| {
            let pad = name_width - name.chars().count();
            format!("{name}{:pad$}{COLUMN_GAP}{value}", "")
                .trim_end()
                .to_string()
        };

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(line(NAME_HEADER, VALUE_HEADER));
        lines.push(format!(
            "{}{COLUMN_GAP}{}",
            "-".repeat(name_width),
            "-".repeat(value_width)
        ));
        for (name, value) in &self.rows {
            lines.push(line(name, value));
        }
        lines
    }
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(|c| c.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}
