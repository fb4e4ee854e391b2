pub mod coordinate;
pub mod loaders;
pub mod location;
pub mod report;
pub mod row;
pub mod travel_mode;

pub use coordinate::{Coordinate, RouteMetrics};
pub use loaders::{load_xlsx_rows, InputLayout, InputTable};
pub use location::LocationKey;
pub use report::{BatchReport, BatchStats};
pub use row::{Endpoint, LogEntry, RouteRow, RowResult};
pub use travel_mode::{TravelMode, TravelModeAdvisory};
