use std::io::{self, Write};

use rust_decimal::Decimal;

use crate::command::TransactionCode;

/// One-line textual record per transaction. Purely presentational: nothing is
/// stored, and the default front end flow does not call it. Hosts wire it in
/// through [`crate::terminal::front_end::FrontEnd::with_audit`].
pub struct AuditLog {
    out: Box<dyn Write>,
}

impl AuditLog {
    pub fn new(out: impl Write + 'static) -> Self {
        Self { out: Box::new(out) }
    }

    pub fn record(
        &mut self,
        code: TransactionCode,
        account_number: Option<&str>,
        amount: Option<Decimal>,
    ) -> io::Result<()> {
        writeln!(
            self.out,
            "transaction: {code} account={} amount={}",
            account_number.unwrap_or("-"),
            amount.map_or_else(|| "-".to_owned(), |a| a.to_string()),
        )
    }
}
