//! Data module - CSV loading, cell selection and series mapping

mod loader;
mod mapper;
mod selection;
mod table;

pub use loader::{CsvLoader, LoaderError};
pub use mapper::{MapperError, PlotRequest, Series, SeriesMapper};
pub use selection::{CellIndex, Selection};
pub use table::CsvTable;
