use crate::application::reconcile::ReconciliationResult;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// A reconciled case, ready to be written out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseOutcome {
    pub case_id: String,
    #[serde(flatten)]
    pub result: ReconciliationResult,
}

#[derive(Serialize)]
struct OutcomeRow<'a> {
    case_id: &'a str,
    status: String,
    paid: String,
    missing_amount: String,
    is_complete: bool,
}

impl<'a> From<&'a CaseOutcome> for OutcomeRow<'a> {
    fn from(outcome: &'a CaseOutcome) -> Self {
        let result = &outcome.result;
        Self {
            case_id: &outcome.case_id,
            status: result.status.map(|s| s.to_string()).unwrap_or_default(),
            paid: format!("{:.2}", result.paid),
            missing_amount: format!("{:.2}", result.missing_amount),
            is_complete: result.is_complete,
        }
    }
}

/// Writes case outcomes as CSV (`case_id,status,paid,missing_amount,is_complete`)
/// or as one JSON object per line.
pub enum OutcomeWriter<W: Write> {
    Csv(csv::Writer<W>),
    JsonLines(W),
}

impl<W: Write> OutcomeWriter<W> {
    pub fn csv(sink: W) -> Self {
        Self::Csv(csv::Writer::from_writer(sink))
    }

    pub fn json_lines(sink: W) -> Self {
        Self::JsonLines(sink)
    }

    pub fn write(&mut self, outcome: &CaseOutcome) -> Result<()> {
        match self {
            Self::Csv(writer) => writer.serialize(OutcomeRow::from(outcome))?,
            Self::JsonLines(sink) => {
                serde_json::to_writer(&mut *sink, outcome).map_err(std::io::Error::from)?;
                writeln!(sink)?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        match self {
            Self::Csv(writer) => writer.flush()?,
            Self::JsonLines(sink) => sink.flush()?,
        }
        Ok(())
    }
}
