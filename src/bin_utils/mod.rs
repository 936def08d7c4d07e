//! Script-driven bootstrap shared by the binary and the integration tests:
//! parse a session script, drive a [`FrontEnd`], report how the run went.

use std::collections::BTreeMap;
use std::io::{Read, Write};

use anyhow::Result;
use script_parser::ScriptParser;
use summary_printer::{SummaryRow, print_summary};

use crate::terminal::{TerminalError, TransactionTerminal, front_end::FrontEnd};

pub mod script_parser;
pub mod summary_printer;

/// Drives one terminal session from a script: starts a session of the given
/// kind, feeds every row to the front end, ends the session at EOF if the
/// script did not log out, then appends the per-code summary.
pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub session_kind: String,
    pub error_printer: Box<dyn FnMut(u64, TerminalError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = ScriptParser::new(self.input);
        let mut tally: BTreeMap<String, (u32, u32)> = BTreeMap::new();

        {
            let mut terminal = FrontEnd::new(&mut *self.output);
            terminal.start_session(&self.session_kind)?;

            for (line, row) in parser {
                let Some((code, args)) = row.split_first() else {
                    continue;
                };
                let args: Vec<&str> = args.iter().map(String::as_str).collect();
                let counts = tally.entry(code.clone()).or_default();
                match terminal.process_transaction(code, &args) {
                    Ok(()) => counts.0 += 1,
                    Err(err) if err.is_io() => return Err(err.into()),
                    Err(err) => {
                        counts.1 += 1;
                        (self.error_printer)(line, err);
                    }
                }
            }

            if terminal.is_logged_in() {
                terminal.end_session()?;
            }
        }

        print_summary(
            self.output,
            tally.into_iter().map(|(code, (accepted, rejected))| SummaryRow {
                code,
                accepted,
                rejected,
            }),
        )
    }
}
