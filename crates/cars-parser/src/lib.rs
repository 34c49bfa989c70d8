pub mod errors;
pub mod make;
pub mod model;
mod reader;

pub use errors::{ParseError, Result};
pub use make::manufacturer_label;
pub use model::{FieldValue, Record, RecordBuilder, MAKE_FIELD};
pub use reader::{coerce_integer, parse_file, parse_records, ParseOptions};
