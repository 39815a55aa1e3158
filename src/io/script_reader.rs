//! Streaming reader over replay scripts
//!
//! Provides an iterator over the commands of a CSV script. Delegates CSV
//! format concerns to the csv_format module.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, unreadable header) are returned from the
//!   constructors
//! - Individual row errors are yielded as `Err` items carrying the line
//!   number, and iteration continues with the next row

use crate::io::csv_format::{convert_script_record, Command, ScriptRecord};
use crate::types::BankError;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// A decoded command with the script line it came from
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub line: u64,
    pub command: Command,
}

/// Streaming CSV script reader
#[derive(Debug)]
pub struct ScriptReader<R = File> {
    reader: csv::Reader<R>,
    headers: StringRecord,
}

impl ScriptReader<File> {
    /// Open a script file
    ///
    /// # Returns
    ///
    /// * `Ok(ScriptReader)` if the file opened and its header was read
    /// * `Err(BankError::FileNotFound)` if the path does not exist
    /// * `Err(BankError)` for any other I/O or header error
    pub fn from_path(path: &Path) -> Result<Self, BankError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => BankError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => BankError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        Self::from_reader(file)
    }
}

impl<R: Read> ScriptReader<R> {
    /// Wrap any reader holding a script
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (trailing optional columns may be omitted)
    pub fn from_reader(input: R) -> Result<Self, BankError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(input);
        let headers = reader.headers()?.clone();

        Ok(Self { reader, headers })
    }
}

impl<R: Read> Iterator for ScriptReader<R> {
    type Item = Result<ScriptLine, BankError>;

    /// Read and decode the next row
    ///
    /// # Returns
    ///
    /// * `Some(Ok(ScriptLine))` - Successfully decoded row
    /// * `Some(Err(BankError))` - Parse or conversion error with line number
    /// * `None` - End of script reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut raw = StringRecord::new();

        match self.reader.read_record(&mut raw) {
            Ok(false) => None,
            Ok(true) => {
                let line = raw.position().map(|pos| pos.line()).unwrap_or_default();
                let decoded = raw
                    .deserialize::<ScriptRecord>(Some(&self.headers))
                    .map_err(BankError::from)
                    .and_then(convert_script_record)
                    .map(|command| ScriptLine { line, command })
                    .map_err(|e| e.at_line(line));
                Some(decoded)
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "op,cpf,account,amount,name,birth_date,address\n";

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn read_all(body: &str) -> Vec<Result<ScriptLine, BankError>> {
        let script = format!("{}{}", HEADER, body);
        ScriptReader::from_reader(script.as_bytes()).unwrap().collect()
    }

    #[test]
    fn test_from_path_opens_file() {
        let file = create_temp_csv(&format!("{}open,111,,,,,\n", HEADER));

        let lines: Vec<_> = ScriptReader::from_path(file.path()).unwrap().collect();

        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0].as_ref().unwrap().command,
            Command::Open {
                cpf: "111".to_string()
            }
        );
    }

    #[test]
    fn test_from_path_fails_on_missing_file() {
        let result = ScriptReader::from_path(Path::new("nonexistent.csv"));
        assert_eq!(
            result.err(),
            Some(BankError::FileNotFound {
                path: "nonexistent.csv".to_string()
            })
        );
    }

    #[test]
    fn test_reads_rows_with_line_numbers() {
        let lines = read_all(
            "register,111,,,Ana,12-04-1990,Rua A\n\
             open,111,,,,,\n\
             deposit,111,1,100.0,,,\n",
        );

        let numbers: Vec<u64> = lines.iter().map(|l| l.as_ref().unwrap().line).collect();
        assert_eq!(numbers, vec![2, 3, 4]);
        assert_eq!(
            lines[2].as_ref().unwrap().command,
            Command::Deposit {
                cpf: "111".to_string(),
                account: Some(1),
                amount: Decimal::new(1000, 1),
            }
        );
    }

    #[test]
    fn test_short_rows_are_accepted() {
        let lines = read_all("open,111\nstatement,111,2\n");

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1].as_ref().unwrap().command,
            Command::Statement {
                cpf: "111".to_string(),
                account: Some(2)
            }
        );
    }

    #[test]
    fn test_handles_whitespace() {
        let lines = read_all("  deposit  ,  111  ,  ,  100.0  ,,,\n");

        assert_eq!(
            lines[0].as_ref().unwrap().command,
            Command::Deposit {
                cpf: "111".to_string(),
                account: None,
                amount: Decimal::new(1000, 1),
            }
        );
    }

    #[test]
    fn test_continues_after_errors() {
        let lines = read_all(
            "deposit,111,1,100.0,,,\n\
             transfer,111,1,5,,,\n\
             deposit,111,x,5,,,\n\
             withdraw,111,1,50,,,\n",
        );

        assert_eq!(lines.len(), 4);
        assert!(lines[0].is_ok());
        assert_eq!(
            lines[1].as_ref().unwrap_err(),
            &BankError::InvalidOperation {
                op: "transfer".to_string(),
                line: Some(3)
            }
        );
        assert!(matches!(
            lines[2].as_ref().unwrap_err(),
            BankError::ParseError { line: Some(4), .. }
        ));
        assert!(lines[3].is_ok());
    }

    #[test]
    fn test_empty_script_after_header() {
        assert!(read_all("").is_empty());
    }
}
