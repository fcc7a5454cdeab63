use std::io::Write;
use tempfile::NamedTempFile;

pub const RECORD_HEADER: &str = "case_id,billed_total,exchange_rate,\
method_1,amount_1,reference_1,method_2,amount_2,reference_2,\
method_3,amount_3,reference_3,method_4,amount_4,reference_4";

/// Writes a case records CSV with the standard header and the given rows.
#[allow(dead_code)]
pub fn records_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{RECORD_HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file
}

/// Writes a payment entries CSV (`method,amount,reference`).
#[allow(dead_code)]
pub fn entries_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "method,amount,reference").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file
}

/// Writes `rows` fully paid cases, each with one base and one local payment.
#[allow(dead_code)]
pub fn generate_records(rows: usize) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    let mut wtr = csv::Writer::from_path(file.path()).unwrap();
    wtr.write_record(RECORD_HEADER.split(',')).unwrap();

    for i in 1..=rows {
        let case_id = format!("P-{i}");
        let reference = format!("REF-{i}");
        wtr.write_record([
            case_id.as_str(),
            "120.00",
            "50",
            "card",
            "80",
            reference.as_str(),
            "pos",
            "2000",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
        ])
        .unwrap();
    }

    wtr.flush().unwrap();
    file
}
