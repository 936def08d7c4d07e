use std::io::Write;

use crate::audit::AuditLog;
use crate::command::TransactionRequest;
use crate::handlers;
use crate::session::Session;

use super::{TerminalError, TransactionTerminal};

/// The single stateful component: owns the session and the output writer,
/// gates every transaction on login state, and routes typed requests to the
/// stateless handlers. Every rejection is written as an `Error:` line and
/// also returned, so hosts never have to parse the text.
pub struct FrontEnd<W> {
    session: Session,
    output: W,
    audit: Option<AuditLog>,
}

impl<W: Write> FrontEnd<W> {
    pub fn new(output: W) -> Self {
        Self {
            session: Session::default(),
            output,
            audit: None,
        }
    }

    /// Wires an audit log that records one line per accepted transaction.
    pub fn with_audit(mut self, audit: AuditLog) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Marks the session logged in immediately, before any credential check.
    /// A later failed `login` does not undo this; that mirrors the behavior
    /// this terminal simulates (see DESIGN.md).
    pub fn start_session(&mut self, kind: &str) -> Result<(), TerminalError> {
        self.session.begin(kind);
        tracing::debug!(kind, "session started");
        writeln!(self.output, "Session started as {kind}")?;
        Ok(())
    }

    pub fn end_session(&mut self) -> Result<(), TerminalError> {
        self.session.clear();
        tracing::debug!("session ended");
        writeln!(self.output, "Session ended")?;
        Ok(())
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    fn dispatch(&mut self, code: &str, args: &[&str]) -> Result<(), TerminalError> {
        if !self.session.is_logged_in() {
            return Err(TerminalError::NotLoggedIn);
        }
        let request = TransactionRequest::parse(code, args)?;
        tracing::debug!(code = %request.code(), "dispatching transaction");

        match &request {
            TransactionRequest::Login {
                session_kind,
                account_name,
            } => handlers::login(&mut self.output, session_kind, account_name.as_deref())?,
            TransactionRequest::Withdraw {
                account_number,
                amount,
                balance,
            } => handlers::withdraw(&mut self.output, account_number, *amount, *balance)?,
            TransactionRequest::Transfer {
                from_account,
                to_account,
                amount,
            } => handlers::transfer(&mut self.output, from_account, to_account, *amount)?,
            TransactionRequest::PayBill {
                account_number,
                biller,
                amount,
            } => handlers::pay_bill(&mut self.output, account_number, biller, *amount)?,
            TransactionRequest::Deposit {
                account_number,
                amount,
            } => handlers::deposit(&mut self.output, account_number, *amount)?,
            TransactionRequest::Create {
                holder_name,
                initial_balance,
            } => handlers::create_account(&mut self.output, holder_name, *initial_balance)?,
            TransactionRequest::Delete { account_number } => {
                handlers::delete_account(&mut self.output, account_number)?
            }
            TransactionRequest::Disable { account_number } => {
                handlers::disable_account(&mut self.output, account_number)?
            }
            TransactionRequest::ChangePlan {
                account_number,
                plan,
            } => handlers::change_plan(&mut self.output, account_number, plan)?,
            TransactionRequest::Logout => self.end_session()?,
        }

        if let Some(audit) = &mut self.audit {
            audit.record(request.code(), request.account_number(), request.amount())?;
        }
        Ok(())
    }
}

impl<W: Write> TransactionTerminal for FrontEnd<W> {
    fn process_transaction(&mut self, code: &str, args: &[&str]) -> Result<(), TerminalError> {
        match self.dispatch(code, args) {
            Ok(()) => Ok(()),
            Err(err) if err.is_io() => Err(err),
            Err(err) => {
                tracing::warn!(code, %err, "transaction rejected");
                writeln!(self.output, "Error: {err}")?;
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use crate::command::RequestError;
    use crate::handlers::{HandlerError, TransactionRefused};

    use super::*;

    #[test]
    fn transactions_require_a_session() {
        let mut out = Vec::new();
        let mut terminal = FrontEnd::new(&mut out);
        let err = terminal
            .process_transaction("withdraw", &["12345", "100", "500"])
            .unwrap_err();
        assert!(matches!(err, TerminalError::NotLoggedIn));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error: You must log in before performing any transactions\n"
        );
    }

    #[test]
    fn gate_applies_before_code_validation() {
        let mut out = Vec::new();
        let mut terminal = FrontEnd::new(&mut out);
        let err = terminal.process_transaction("frobnicate", &[]).unwrap_err();
        assert!(matches!(err, TerminalError::NotLoggedIn));
    }

    #[test]
    fn standard_session_scenario() {
        let mut out = Vec::new();
        {
            let mut terminal = FrontEnd::new(&mut out);
            terminal.start_session("standard").unwrap();
            terminal
                .process_transaction("login", &["standard", "john_doe"])
                .unwrap();
            terminal
                .process_transaction("withdraw", &["12345", "100", "500"])
                .unwrap();
            terminal.end_session().unwrap();
            let err = terminal
                .process_transaction("withdraw", &["12345", "100", "500"])
                .unwrap_err();
            assert!(matches!(err, TerminalError::NotLoggedIn));
        }
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Session started as standard\n"));
        assert!(text.contains("Login accepted for john_doe"));
        assert!(text.contains("Available transactions:"));
        assert!(text.contains("New balance: 400"));
        assert!(text.contains("Session ended"));
        assert!(text.ends_with("Error: You must log in before performing any transactions\n"));
    }

    #[test]
    fn failed_login_prints_no_menu_and_keeps_session() {
        let mut out = Vec::new();
        {
            let mut terminal = FrontEnd::new(&mut out);
            terminal.start_session("standard").unwrap();
            let err = terminal
                .process_transaction("login", &["standard", "unknown_user"])
                .unwrap_err();
            assert!(matches!(
                err,
                TerminalError::Handler(HandlerError::Refused(
                    TransactionRefused::InvalidCredentials
                ))
            ));
            // login failure does not log the operator out
            assert!(terminal.is_logged_in());
        }
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Error: Invalid credentials"));
        assert!(!text.contains("Available transactions:"));
    }

    #[test]
    fn unknown_code_is_reported_by_name() {
        let mut out = Vec::new();
        {
            let mut terminal = FrontEnd::new(&mut out);
            terminal.start_session("admin").unwrap();
            let err = terminal.process_transaction("frobnicate", &[]).unwrap_err();
            assert!(matches!(
                err,
                TerminalError::Request(RequestError::UnknownCode(_))
            ));
        }
        assert!(
            String::from_utf8(out)
                .unwrap()
                .contains("Error: Invalid transaction code frobnicate")
        );
    }

    #[test]
    fn logout_code_ends_the_session() {
        let mut out = Vec::new();
        {
            let mut terminal = FrontEnd::new(&mut out);
            terminal.start_session("admin").unwrap();
            terminal.process_transaction("logout", &[]).unwrap();
            assert!(!terminal.is_logged_in());
        }
        assert!(String::from_utf8(out).unwrap().contains("Session ended"));
    }

    #[test]
    fn balances_never_persist_between_calls() {
        let mut out = Vec::new();
        {
            let mut terminal = FrontEnd::new(&mut out);
            terminal.start_session("admin").unwrap();
            terminal
                .process_transaction("withdraw", &["12345", "100", "500"])
                .unwrap();
            terminal
                .process_transaction("withdraw", &["12345", "100", "500"])
                .unwrap();
        }
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("New balance: 400").count(), 2);
    }

    #[derive(Clone, Default)]
    struct SharedSink(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn audit_records_accepted_transactions_only() {
        let sink = SharedSink::default();
        let mut out = Vec::new();
        {
            let mut terminal =
                FrontEnd::new(&mut out).with_audit(AuditLog::new(sink.clone()));
            terminal.start_session("admin").unwrap();
            terminal
                .process_transaction("deposit", &["12345", "50"])
                .unwrap();
            terminal
                .process_transaction("withdraw", &["12345", "900", "5000"])
                .unwrap_err();
        }
        let recorded = String::from_utf8(sink.0.lock().unwrap().clone()).unwrap();
        assert_eq!(recorded, "transaction: deposit account=12345 amount=50\n");
    }
}
