use crate::domain::money::ExchangeRate;
use crate::domain::ports::AmountParser;
use crate::domain::record::{DenormalizedPaymentRecord, PaymentSlot};
use crate::error::{ReconError, Result};
use crate::infrastructure::locale_parser::LocaleAmountParser;
use serde::Deserialize;
use std::io::Read;

/// One persisted case as it appears in a CSV export, amounts still as text.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RecordRow {
    case_id: String,
    billed_total: String,
    exchange_rate: Option<String>,
    method_1: Option<String>,
    amount_1: Option<String>,
    reference_1: Option<String>,
    method_2: Option<String>,
    amount_2: Option<String>,
    reference_2: Option<String>,
    method_3: Option<String>,
    amount_3: Option<String>,
    reference_3: Option<String>,
    method_4: Option<String>,
    amount_4: Option<String>,
    reference_4: Option<String>,
}

impl RecordRow {
    fn into_record<P: AmountParser>(self, parser: &P) -> Result<DenormalizedPaymentRecord> {
        let billed_total = parser.parse_amount(&self.billed_total).ok_or_else(|| {
            ReconError::Parse(format!(
                "case '{}': cannot parse billed total '{}'",
                self.case_id, self.billed_total
            ))
        })?;

        let exchange_rate = ExchangeRate::parse(self.exchange_rate.as_deref(), parser);

        let slot = |method: Option<String>, amount: Option<String>, reference: Option<String>| {
            PaymentSlot {
                method,
                amount: amount.as_deref().and_then(|text| parser.parse_amount(text)),
                reference,
            }
        };

        Ok(DenormalizedPaymentRecord {
            case_id: self.case_id,
            billed_total,
            exchange_rate,
            slots: [
                slot(self.method_1, self.amount_1, self.reference_1),
                slot(self.method_2, self.amount_2, self.reference_2),
                slot(self.method_3, self.amount_3, self.reference_3),
                slot(self.method_4, self.amount_4, self.reference_4),
            ],
        })
    }
}

/// Reads persisted case records from a CSV source.
///
/// Fields are trimmed and rows may omit trailing slot columns. Slot amounts
/// that do not parse leave the slot unused; a billed total that does not
/// parse makes the whole row an error.
pub struct RecordReader<R: Read, P: AmountParser = LocaleAmountParser> {
    reader: csv::Reader<R>,
    parser: P,
}

impl<R: Read> RecordReader<R> {
    pub fn new(source: R) -> Self {
        Self::with_parser(source, LocaleAmountParser::new())
    }
}

impl<R: Read, P: AmountParser> RecordReader<R, P> {
    pub fn with_parser(source: R, parser: P) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader, parser }
    }

    /// Lazily reads and converts records, one `Result` per row.
    pub fn records(self) -> impl Iterator<Item = Result<DenormalizedPaymentRecord>> {
        let parser = self.parser;
        self.reader
            .into_deserialize::<RecordRow>()
            .map(move |row| row.map_err(ReconError::from)?.into_record(&parser))
    }
}
