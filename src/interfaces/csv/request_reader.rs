use crate::domain::loan::LoanRequest;
use crate::error::{LoanError, Result, ValidationError};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One CSV row as written, before presence checks.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequestRecord {
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub principal: Option<Decimal>,
    pub birth_date: Option<NaiveDate>,
    pub term_months: Option<i32>,
}

impl TryFrom<LoanRequestRecord> for LoanRequest {
    type Error = ValidationError;

    fn try_from(record: LoanRequestRecord) -> std::result::Result<Self, Self::Error> {
        let principal = record.principal.ok_or(ValidationError::MissingAmount)?;
        let birth_date = record.birth_date.ok_or(ValidationError::MissingBirthDate)?;
        let term_months = record.term_months.ok_or(ValidationError::MissingTerm)?;
        Ok(LoanRequest::new(principal, birth_date, term_months))
    }
}

/// Reads loan requests from a CSV source with a `principal,birthDate,termMonths` header.
///
/// Whitespace is trimmed and empty fields count as missing.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily yields each row's request, numbered from 1.
    pub fn requests(self) -> impl Iterator<Item = (usize, Result<LoanRequest>)> {
        self.reader
            .into_deserialize::<LoanRequestRecord>()
            .enumerate()
            .map(|(index, record)| {
                let request = record
                    .map_err(LoanError::from)
                    .and_then(|record| LoanRequest::try_from(record).map_err(LoanError::from));
                (index + 1, request)
            })
    }
}
