pub mod reading;
pub mod search;

pub use reading::join_readings;
pub use search::{SearchResponse, parse_search_response};
