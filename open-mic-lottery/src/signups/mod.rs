mod models;

pub use models::{SignupRow, COMEDIAN_SIGNUP, REQUIRED_COLUMNS};

pub use crate::utils::csv::Error;

use crate::utils::csv::{load_data_from_csv, load_data_from_reader};
use std::io::Read;
use std::path::Path;

/// Load every row of a signup sheet, in sheet order.
pub fn load_signups(filepath: &Path) -> Result<Vec<SignupRow>, Error> {
    load_data_from_csv::<_, b','>(filepath, &REQUIRED_COLUMNS)
}

pub fn load_signups_from_reader<R: Read>(input: R) -> Result<Vec<SignupRow>, Error> {
    load_data_from_reader::<_, _, b','>(input, &REQUIRED_COLUMNS)
}
