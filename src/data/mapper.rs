//! Selection-to-Series Mapper
//! Turns the selected cells of a table into X/Y series for one chart.

use super::{CellIndex, CsvTable, Selection};
use crate::charts::{ChartKind, Marker};
use std::collections::BTreeMap;
use thiserror::Error;

pub const X_LABEL: &str = "X-values";
pub const Y_LABEL: &str = "Y values";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapperError {
    #[error("Selected cell ({row}, {column}) is outside the table")]
    OutOfBounds { row: usize, column: usize },
    #[error("Cell ({row}, {column}) is not a number: {value:?}")]
    NotNumeric {
        row: usize,
        column: usize,
        value: String,
    },
    #[error("Select at least two columns: the first is X, the rest are Y")]
    SingleColumn,
}

/// Values of one table column, in ascending row order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub column: usize,
    pub label: String,
    pub values: Vec<f64>,
}

/// Selected cells grouped per column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesGroup {
    /// Column index to selected values; iterates in ascending column order.
    pub columns: BTreeMap<usize, Vec<f64>>,
    /// Header of every grouped column except the X column.
    pub annotations: Vec<String>,
}

/// Everything the renderer needs for one plot.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotRequest {
    pub x: Series,
    pub ys: Vec<(Series, Marker)>,
    pub x_label: String,
    pub y_label: String,
    pub annotations: Vec<String>,
}

/// Maps a selection onto plot series.
///
/// The X series is always the lowest selected column index; every other
/// selected column becomes a Y series in ascending column order.
pub struct SeriesMapper;

impl SeriesMapper {
    /// Group selected cells by column and parse them as numbers.
    pub fn group(table: &CsvTable, selection: &Selection) -> Result<SeriesGroup, MapperError> {
        let mut columns: BTreeMap<usize, Vec<f64>> = BTreeMap::new();

        // Selection iterates row-major, so each column's values come out in row order.
        for CellIndex { row, column } in selection.iter() {
            let raw = table
                .cell(row, column)
                .ok_or(MapperError::OutOfBounds { row, column })?;
            // NaN and infinities parse but cannot be placed on an axis.
            let value = raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| MapperError::NotNumeric {
                    row,
                    column,
                    value: raw.to_string(),
                })?;
            columns.entry(column).or_default().push(value);
        }

        let annotations = columns
            .keys()
            .skip(1)
            .filter_map(|&c| table.column_name(c))
            .map(str::to_string)
            .collect();

        Ok(SeriesGroup {
            columns,
            annotations,
        })
    }

    /// Build a plot request, or `None` when nothing is selected.
    pub fn map(
        table: &CsvTable,
        selection: &Selection,
        kind: ChartKind,
    ) -> Result<Option<PlotRequest>, MapperError> {
        if selection.is_empty() {
            return Ok(None);
        }

        let SeriesGroup {
            columns,
            annotations,
        } = Self::group(table, selection)?;
        let mut series = columns.into_iter().map(|(column, values)| Series {
            column,
            label: table.column_name(column).unwrap_or_default().to_string(),
            values,
        });

        let Some(x) = series.next() else {
            return Ok(None);
        };
        let marker = kind.marker();
        let ys: Vec<(Series, Marker)> = series.map(|s| (s, marker)).collect();
        if ys.is_empty() {
            return Err(MapperError::SingleColumn);
        }

        Ok(Some(PlotRequest {
            x,
            ys,
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            annotations,
        }))
    }
}
