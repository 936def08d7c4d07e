use std::io::Read;

use csv::{DeserializeRecordsIntoIter, Trim};

/// One row of a session script: a transaction code followed by its
/// positional arguments. Rows have no fixed width.
pub type ScriptRow = Vec<String>;

/// Parses a session script in CSV format
///
/// # Panics
///
/// If a row cannot be parsed
pub struct ScriptParser<R> {
    iter: DeserializeRecordsIntoIter<R, ScriptRow>,
}

impl<R> ScriptParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .has_headers(false)
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R> Iterator for ScriptParser<R>
where
    R: Read,
{
    type Item = (u64, ScriptRow);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row.unwrap()))
    }
}
