use itertools::Itertools;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid or unreadable csv data: {0}")]
    Csv(#[from] csv::Error),

    #[error("csv data is missing required columns: {}", .0.iter().join(", "))]
    MissingColumns(BTreeSet<String>),
}

pub fn load_data_from_csv<T: DeserializeOwned, const DELIMITER: u8>(
    filepath: &Path,
    required_columns: &[&str],
) -> Result<Vec<T>, Error> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(DELIMITER)
        .from_path(filepath)?;
    load_data(reader, required_columns)
}

pub fn load_data_from_reader<T: DeserializeOwned, R: Read, const DELIMITER: u8>(
    input: R,
    required_columns: &[&str],
) -> Result<Vec<T>, Error> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(DELIMITER)
        .from_reader(input);
    load_data(reader, required_columns)
}

fn load_data<T: DeserializeOwned, R: Read>(
    mut reader: csv::Reader<R>,
    required_columns: &[&str],
) -> Result<Vec<T>, Error> {
    let headers = reader.headers()?.clone();

    // Checked up front so a sheet without data rows still reports its bad header.
    let missing_columns: BTreeSet<String> = required_columns
        .iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .map(|column| column.to_string())
        .collect();
    if !missing_columns.is_empty() {
        return Err(Error::MissingColumns(missing_columns));
    }

    let mut res = Vec::new();
    for record in reader.records() {
        let mut record = record?;
        // Trailing cells left out of a row read as empty cells.
        while record.len() < headers.len() {
            record.push_field("");
        }
        res.push(record.deserialize(Some(&headers))?);
    }
    Ok(res)
}

pub fn dump_data_to_csv<T: Serialize>(data: &[T], filepath: &Path) -> Result<(), Error> {
    let mut writer = csv::Writer::from_path(filepath)?;
    for entry in data {
        writer.serialize(entry)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
