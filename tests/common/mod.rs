use std::io::Error;
use tempfile::NamedTempFile;

/// Writes `rows` (provider, amount, currency, description, customer_id) to a
/// temporary CSV file with the expected header.
pub fn charges_csv(rows: &[[&str; 5]]) -> Result<NamedTempFile, Error> {
    let file = NamedTempFile::new()?;
    let mut wtr = csv::WriterBuilder::new().from_path(file.path())?;

    wtr.write_record(["provider", "amount", "currency", "description", "customer_id"])?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(file)
}
