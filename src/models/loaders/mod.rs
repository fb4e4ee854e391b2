pub mod xlsx_loader;

pub use xlsx_loader::{load_xlsx_rows, parse_table, table_from_range, InputLayout, InputTable};
