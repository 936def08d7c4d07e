use std::io::Write;

use csv::Writer;
use serde::Serialize;

/// Per-code tally of how the session went.
#[derive(Debug, Serialize)]
pub struct SummaryRow {
    pub code: String,
    pub accepted: u32,
    pub rejected: u32,
}

pub fn print_summary<W>(
    output: &mut W,
    rows: impl Iterator<Item = SummaryRow>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for row in rows {
        if let Err(err) = writer.serialize(row) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    // Ensure all data is flushed to the output
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_one_line_per_code() {
        let mut output = Vec::new();
        let rows = vec![
            SummaryRow {
                code: "deposit".to_owned(),
                accepted: 2,
                rejected: 0,
            },
            SummaryRow {
                code: "withdraw".to_owned(),
                accepted: 1,
                rejected: 2,
            },
        ];
        print_summary(&mut output, rows.into_iter()).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "code,accepted,rejected\ndeposit,2,0\nwithdraw,1,2\n"
        );
    }
}
