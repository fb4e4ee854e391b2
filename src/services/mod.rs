pub mod coordinate_resolver;
pub mod report_exporter;
pub mod route_calculator;

pub use coordinate_resolver::{CoordinateExtractor, CoordinateResolver, GpsMarkerExtractor, ScrapingResolver};
pub use report_exporter::ReportExporter;
pub use route_calculator::RouteCalculator;
