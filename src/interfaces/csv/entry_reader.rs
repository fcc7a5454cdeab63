use crate::domain::payment::PaymentEntry;
use crate::domain::ports::AmountParser;
use crate::error::{ReconError, Result};
use crate::infrastructure::locale_parser::LocaleAmountParser;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EntryRow {
    method: Option<String>,
    amount: Option<String>,
    reference: Option<String>,
}

/// Reads submitted payment rows (`method,amount,reference`) from CSV.
///
/// An amount that does not parse leaves the entry without an amount, which
/// makes it inert.
pub struct EntryReader<R: Read, P: AmountParser = LocaleAmountParser> {
    reader: csv::Reader<R>,
    parser: P,
}

impl<R: Read> EntryReader<R> {
    pub fn new(source: R) -> Self {
        Self::with_parser(source, LocaleAmountParser::new())
    }
}

impl<R: Read, P: AmountParser> EntryReader<R, P> {
    pub fn with_parser(source: R, parser: P) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader, parser }
    }

    pub fn entries(self) -> impl Iterator<Item = Result<PaymentEntry>> {
        let parser = self.parser;
        self.reader.into_deserialize::<EntryRow>().map(move |row| {
            let row = row.map_err(ReconError::from)?;
            Ok(PaymentEntry {
                amount: row.amount.as_deref().and_then(|text| parser.parse_amount(text)),
                method: row.method,
                reference: row.reference,
            })
        })
    }
}
