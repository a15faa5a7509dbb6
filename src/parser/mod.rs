//! CSV parsers producing typed records for the engine

pub mod bank_statement;
pub mod csv_file;
pub mod dates;
pub mod error;
pub mod transaction;

pub use bank_statement::*;
pub use dates::parse_date;
pub use error::*;
pub use transaction::*;
