use std::io::Write;

use super::domain::AssessmentRecord;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush csv output: {0}")]
    Io(#[from] std::io::Error),
}

const HEADER: [&str; 8] = [
    "When", "School", "Room", "Assessor", "Score", "Status", "Photos", "Notes",
];

/// Write the dashboard table as CSV, one row per record in the given order.
pub fn write_csv<W: Write>(records: &[AssessmentRecord], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    for record in records {
        csv_writer.write_record([
            record.created_at().to_rfc3339(),
            record.school().to_string(),
            record.room().to_string(),
            record.assessor().to_string(),
            record.total().to_string(),
            record.status().label().to_string(),
            record.photo_refs().len().to_string(),
            record.notes().to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
