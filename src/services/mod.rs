pub mod line_parser;
pub mod log_aggregator;
pub mod log_reader;
pub mod report;


pub use line_parser::{parse_line, LineParser};
pub use log_aggregator::{aggregate, LogAggregator};
pub use log_reader::read_log_file;
pub use report::{render, TextReport};
