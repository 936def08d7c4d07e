use std::fmt;

use rust_decimal::{Decimal, prelude::Zero};
use thiserror::Error;

/// The fixed set of transaction codes the terminal understands.
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionCode {
    Login,
    Withdraw,
    Transfer,
    PayBill,
    Deposit,
    Create,
    Delete,
    Disable,
    ChangePlan,
    Logout,
}

impl TransactionCode {
    pub const ALL: [TransactionCode; 10] = [
        TransactionCode::Login,
        TransactionCode::Withdraw,
        TransactionCode::Transfer,
        TransactionCode::PayBill,
        TransactionCode::Deposit,
        TransactionCode::Create,
        TransactionCode::Delete,
        TransactionCode::Disable,
        TransactionCode::ChangePlan,
        TransactionCode::Logout,
    ];

    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == code)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionCode::Login => "login",
            TransactionCode::Withdraw => "withdraw",
            TransactionCode::Transfer => "transfer",
            TransactionCode::PayBill => "paybill",
            TransactionCode::Deposit => "deposit",
            TransactionCode::Create => "create",
            TransactionCode::Delete => "delete",
            TransactionCode::Disable => "disable",
            TransactionCode::ChangePlan => "changeplan",
            TransactionCode::Logout => "logout",
        }
    }
}

impl fmt::Display for TransactionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("Invalid transaction code {0}")]
    UnknownCode(String),
    #[error("{code} expects {expected} argument(s), got {got}")]
    WrongArgumentCount {
        code: TransactionCode,
        expected: &'static str,
        got: usize,
    },
    #[error("Invalid amount `{value}` for {code}")]
    InvalidAmount {
        code: TransactionCode,
        value: String,
    },
    #[error("Amount must not be negative for {code}")]
    NegativeAmount { code: TransactionCode },
}

/// One typed request per transaction code, built from the raw code string and
/// its positional arguments. Shape mismatches surface here instead of inside
/// a handler.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionRequest {
    Login {
        session_kind: String,
        account_name: Option<String>,
    },
    Withdraw {
        account_number: String,
        amount: Decimal,
        balance: Decimal,
    },
    Transfer {
        from_account: String,
        to_account: String,
        amount: Decimal,
    },
    PayBill {
        account_number: String,
        biller: String,
        amount: Decimal,
    },
    Deposit {
        account_number: String,
        amount: Decimal,
    },
    Create {
        holder_name: String,
        initial_balance: Decimal,
    },
    Delete {
        account_number: String,
    },
    Disable {
        account_number: String,
    },
    ChangePlan {
        account_number: String,
        plan: String,
    },
    Logout,
}

impl TransactionRequest {
    pub fn parse(code: &str, args: &[&str]) -> Result<Self, RequestError> {
        let code = TransactionCode::parse(code)
            .ok_or_else(|| RequestError::UnknownCode(code.to_owned()))?;
        match code {
            TransactionCode::Login => match args {
                [kind] => Ok(Self::Login {
                    session_kind: (*kind).to_owned(),
                    account_name: None,
                }),
                [kind, name] => Ok(Self::Login {
                    session_kind: (*kind).to_owned(),
                    account_name: Some((*name).to_owned()),
                }),
                _ => Err(wrong_count(code, "1 or 2", args)),
            },
            TransactionCode::Withdraw => match args {
                [account, amount, balance] => Ok(Self::Withdraw {
                    account_number: (*account).to_owned(),
                    amount: parse_amount(code, amount)?,
                    balance: parse_amount(code, balance)?,
                }),
                _ => Err(wrong_count(code, "3", args)),
            },
            TransactionCode::Transfer => match args {
                [from, to, amount] => Ok(Self::Transfer {
                    from_account: (*from).to_owned(),
                    to_account: (*to).to_owned(),
                    amount: parse_amount(code, amount)?,
                }),
                _ => Err(wrong_count(code, "3", args)),
            },
            TransactionCode::PayBill => match args {
                [account, biller, amount] => Ok(Self::PayBill {
                    account_number: (*account).to_owned(),
                    biller: (*biller).to_owned(),
                    amount: parse_amount(code, amount)?,
                }),
                _ => Err(wrong_count(code, "3", args)),
            },
            TransactionCode::Deposit => match args {
                [account, amount] => Ok(Self::Deposit {
                    account_number: (*account).to_owned(),
                    amount: parse_amount(code, amount)?,
                }),
                _ => Err(wrong_count(code, "2", args)),
            },
            TransactionCode::Create => match args {
                [holder, balance] => Ok(Self::Create {
                    holder_name: (*holder).to_owned(),
                    initial_balance: parse_amount(code, balance)?,
                }),
                _ => Err(wrong_count(code, "2", args)),
            },
            TransactionCode::Delete => match args {
                [account] => Ok(Self::Delete {
                    account_number: (*account).to_owned(),
                }),
                _ => Err(wrong_count(code, "1", args)),
            },
            TransactionCode::Disable => match args {
                [account] => Ok(Self::Disable {
                    account_number: (*account).to_owned(),
                }),
                _ => Err(wrong_count(code, "1", args)),
            },
            TransactionCode::ChangePlan => match args {
                [account, plan] => Ok(Self::ChangePlan {
                    account_number: (*account).to_owned(),
                    plan: (*plan).to_owned(),
                }),
                _ => Err(wrong_count(code, "2", args)),
            },
            TransactionCode::Logout => match args {
                [] => Ok(Self::Logout),
                _ => Err(wrong_count(code, "0", args)),
            },
        }
    }

    pub fn code(&self) -> TransactionCode {
        match self {
            Self::Login { .. } => TransactionCode::Login,
            Self::Withdraw { .. } => TransactionCode::Withdraw,
            Self::Transfer { .. } => TransactionCode::Transfer,
            Self::PayBill { .. } => TransactionCode::PayBill,
            Self::Deposit { .. } => TransactionCode::Deposit,
            Self::Create { .. } => TransactionCode::Create,
            Self::Delete { .. } => TransactionCode::Delete,
            Self::Disable { .. } => TransactionCode::Disable,
            Self::ChangePlan { .. } => TransactionCode::ChangePlan,
            Self::Logout => TransactionCode::Logout,
        }
    }

    /// Account identifier for audit records, where the request carries one.
    pub fn account_number(&self) -> Option<&str> {
        match self {
            Self::Withdraw { account_number, .. }
            | Self::PayBill { account_number, .. }
            | Self::Deposit { account_number, .. }
            | Self::Delete { account_number }
            | Self::Disable { account_number }
            | Self::ChangePlan { account_number, .. } => Some(account_number),
            Self::Transfer { from_account, .. } => Some(from_account),
            Self::Login { .. } | Self::Create { .. } | Self::Logout => None,
        }
    }

    pub fn amount(&self) -> Option<Decimal> {
        match self {
            Self::Withdraw { amount, .. }
            | Self::Transfer { amount, .. }
            | Self::PayBill { amount, .. }
            | Self::Deposit { amount, .. } => Some(*amount),
            Self::Create { initial_balance, .. } => Some(*initial_balance),
            Self::Login { .. }
            | Self::Delete { .. }
            | Self::Disable { .. }
            | Self::ChangePlan { .. }
            | Self::Logout => None,
        }
    }
}

fn wrong_count(code: TransactionCode, expected: &'static str, args: &[&str]) -> RequestError {
    RequestError::WrongArgumentCount {
        code,
        expected,
        got: args.len(),
    }
}

fn parse_amount(code: TransactionCode, value: &str) -> Result<Decimal, RequestError> {
    let amount: Decimal = value.parse().map_err(|_| RequestError::InvalidAmount {
        code,
        value: value.to_owned(),
    })?;
    if amount < Decimal::zero() {
        return Err(RequestError::NegativeAmount { code });
    }
    Ok(amount)
}
