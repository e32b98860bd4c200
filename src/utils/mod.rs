pub mod date;
pub mod hours;
pub mod path;

pub use date::parse_date;
pub use hours::format_hours;
pub use path::display_path;
