use crate::domain::loan::LoanResult;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResultRecord {
    row: usize,
    monthly_payment: Decimal,
    total_amount: Decimal,
    total_interest: Decimal,
    annual_interest_rate_percent: Decimal,
}

/// Writes loan results as CSV rows keyed by their input row number.
pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_result(&mut self, row: usize, result: &LoanResult) -> Result<()> {
        self.writer.serialize(ResultRecord {
            row,
            monthly_payment: result.monthly_payment,
            total_amount: result.total_amount,
            total_interest: result.total_interest,
            annual_interest_rate_percent: result.annual_interest_rate_percent,
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
