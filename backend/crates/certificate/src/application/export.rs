//! CSV Export
//!
//! Spreadsheet-friendly dump of the repository: UTF-8 with a byte order mark
//! so Excel detects the encoding of the Thai text.

use chrono::NaiveDate;

use crate::domain::entity::certificate_request::CertificateRequest;
use crate::error::{CertificateError, CertificateResult};

const BOM: &str = "\u{FEFF}";
const HEADERS: [&str; 5] = ["ID", "ชื่อ-นามสกุล", "รายการ", "สถานะ", "วันที่ยื่น"];

pub struct CsvExport {
    pub filename: String,
    pub content: Vec<u8>,
}

/// One row per request, in the order given
pub fn export_csv(
    requests: &[CertificateRequest],
    prefix: &str,
    date: NaiveDate,
) -> CertificateResult<CsvExport> {
    let csv_err = |e: csv::Error| CertificateError::Internal(format!("CSV export failed: {e}"));

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(BOM.as_bytes().to_vec());

    writer.write_record(HEADERS).map_err(csv_err)?;
    for r in requests {
        writer
            .write_record([
                r.id.to_string(),
                r.full_name.clone(),
                r.types_label(),
                r.status.to_string(),
                r.submission_date.clone(),
            ])
            .map_err(csv_err)?;
    }

    let content = writer
        .into_inner()
        .map_err(|e| CertificateError::Internal(format!("CSV export failed: {}", e.error())))?;

    Ok(CsvExport {
        filename: format!("{prefix}_{}.csv", date.format("%Y-%m-%d")),
        content,
    })
}
