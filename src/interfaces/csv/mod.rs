//! CSV adapters: persisted case records and payment entries in, outcomes out.

pub mod entry_reader;
pub mod outcome_writer;
pub mod record_reader;
