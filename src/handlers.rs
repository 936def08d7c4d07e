use std::io::Write;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::command::TransactionCode;
use crate::session::{ADMIN_SESSION, STANDARD_SESSION};

/// Account names a standard session may log in as.
pub const KNOWN_ACCOUNT_HOLDERS: [&str; 3] = ["standard_user", "john_doe", "jane_doe"];

/// Per-transaction cap on standard withdrawals, in dollars.
pub const WITHDRAWAL_CEILING: u32 = 500;

/// A transaction the terminal refuses to simulate. The front end turns these
/// into `Error:` lines; handlers themselves only write success narratives.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransactionRefused {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Withdrawal amount {amount} exceeds the {limit} per-transaction limit")]
    LimitExceeded { amount: Decimal, limit: Decimal },
    #[error("Insufficient balance: requested {amount}, available {balance}")]
    InsufficientBalance { amount: Decimal, balance: Decimal },
}

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Refused(#[from] TransactionRefused),
    #[error("Failed to write terminal output")]
    Io(#[from] std::io::Error),
}

/// Admin sessions always authenticate; standard sessions authenticate against
/// the fixed allow-list. Anything else is false.
pub fn authenticate_user(session_kind: &str, account_name: Option<&str>) -> bool {
    match session_kind {
        ADMIN_SESSION => true,
        STANDARD_SESSION => account_name.is_some_and(|name| KNOWN_ACCOUNT_HOLDERS.contains(&name)),
        _ => false,
    }
}

pub fn login<W: Write>(
    out: &mut W,
    session_kind: &str,
    account_name: Option<&str>,
) -> Result<(), HandlerError> {
    if !authenticate_user(session_kind, account_name) {
        return Err(TransactionRefused::InvalidCredentials.into());
    }
    writeln!(
        out,
        "Login accepted for {}",
        account_name.unwrap_or(session_kind)
    )?;
    print_menu(out)?;
    Ok(())
}

/// The static post-login menu. Cosmetic only; dispatch ignores it.
fn print_menu<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Available transactions:")?;
    let options = TransactionCode::ALL
        .into_iter()
        .filter(|code| !matches!(code, TransactionCode::Login | TransactionCode::Logout));
    for (index, code) in options.enumerate() {
        writeln!(out, "  {}) {code}", index + 1)?;
    }
    writeln!(out, "  logout - end the session")?;
    Ok(())
}

/// Checks the ceiling, then the supplied balance, then prints the remaining
/// balance. The result is never stored, so repeated calls do not compound.
pub fn withdraw<W: Write>(
    out: &mut W,
    account_number: &str,
    amount: Decimal,
    balance: Decimal,
) -> Result<(), HandlerError> {
    let limit = Decimal::from(WITHDRAWAL_CEILING);
    if amount > limit {
        return Err(TransactionRefused::LimitExceeded { amount, limit }.into());
    }
    if amount > balance {
        return Err(TransactionRefused::InsufficientBalance { amount, balance }.into());
    }
    writeln!(out, "Withdrew {amount} from account {account_number}.")?;
    writeln!(out, "New balance: {}", balance - amount)?;
    Ok(())
}

pub fn transfer<W: Write>(
    out: &mut W,
    from_account: &str,
    to_account: &str,
    amount: Decimal,
) -> Result<(), HandlerError> {
    writeln!(
        out,
        "Transferred {amount} from account {from_account} to account {to_account}."
    )?;
    writeln!(out, "Transfer complete.")?;
    Ok(())
}

pub fn pay_bill<W: Write>(
    out: &mut W,
    account_number: &str,
    biller: &str,
    amount: Decimal,
) -> Result<(), HandlerError> {
    writeln!(
        out,
        "Paid {amount} to {biller} from account {account_number}."
    )?;
    writeln!(out, "Bill payment complete.")?;
    Ok(())
}

pub fn deposit<W: Write>(
    out: &mut W,
    account_number: &str,
    amount: Decimal,
) -> Result<(), HandlerError> {
    writeln!(out, "Deposited {amount} into account {account_number}.")?;
    writeln!(out, "Deposit complete.")?;
    Ok(())
}

pub fn create_account<W: Write>(
    out: &mut W,
    holder_name: &str,
    initial_balance: Decimal,
) -> Result<(), HandlerError> {
    writeln!(
        out,
        "Created account for {holder_name} with initial balance {initial_balance}."
    )?;
    writeln!(out, "Account creation complete.")?;
    Ok(())
}

pub fn delete_account<W: Write>(out: &mut W, account_number: &str) -> Result<(), HandlerError> {
    writeln!(out, "Deleted account {account_number}.")?;
    writeln!(out, "Account removal complete.")?;
    Ok(())
}

pub fn disable_account<W: Write>(out: &mut W, account_number: &str) -> Result<(), HandlerError> {
    writeln!(out, "Disabled account {account_number}.")?;
    writeln!(out, "Account disable complete.")?;
    Ok(())
}

pub fn change_plan<W: Write>(
    out: &mut W,
    account_number: &str,
    plan: &str,
) -> Result<(), HandlerError> {
    writeln!(out, "Changed account {account_number} to the {plan} plan.")?;
    writeln!(out, "Plan change complete.")?;
    Ok(())
}
