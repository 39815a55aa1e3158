//! End-to-end integration tests
//!
//! These tests validate the complete replay pipeline using predefined CSV
//! fixtures. Each test:
//! 1. Reads input.csv from a fixture directory
//! 2. Replays every row against a fresh bank
//! 3. Writes the account summary CSV
//! 4. Compares actual output with expected.csv
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Happy path scenarios
//! - Checking-account limit and withdrawal-count rejections
//! - Invalid amounts
//! - Several accounts per client and several clients per bank
//! - Malformed rows and unknown clients
//!
//! Statement output carries wall-clock timestamps, so it is checked by
//! content rather than against a fixture file.

#[cfg(test)]
mod tests {
    use banking_core::cli::OutputMode;
    use banking_core::replay::run;
    use banking_core::BankConfig;
    use rstest::rstest;
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    /// Run a test fixture by replaying input.csv and comparing with expected.csv
    ///
    /// # Panics
    ///
    /// Panics if:
    /// - Input or expected files cannot be read
    /// - Output doesn't match expected
    fn run_test_fixture(fixture_name: &str) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let expected_path = format!("{}/expected.csv", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );
        assert!(
            Path::new(&expected_path).exists(),
            "Expected file not found: {}",
            expected_path
        );

        let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");

        run(
            Path::new(&input_path),
            BankConfig::default(),
            OutputMode::Summary,
            &mut temp_output,
        )
        .unwrap_or_else(|e| panic!("Failed to replay script: {}", e));

        temp_output.flush().expect("Failed to flush temp file");

        let actual_output = fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e));
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, actual_output, expected_output
        );
    }

    #[rstest]
    #[case("happy_path")]
    #[case("limit_exceeded")]
    #[case("withdrawal_count")]
    #[case("invalid_amounts")]
    #[case("multiple_accounts")]
    #[case("multiple_clients")]
    #[case("malformed_rows")]
    #[case("empty_script")]
    fn test_fixtures(#[case] fixture: &str) {
        run_test_fixture(fixture);
    }

    #[rstest]
    #[case("happy_path", 5, 1)]
    #[case("malformed_rows", 3, 9)]
    #[case("empty_script", 0, 0)]
    fn test_fixture_counters(
        #[case] fixture: &str,
        #[case] applied: usize,
        #[case] rejected: usize,
    ) {
        let input_path = format!("tests/fixtures/{}/input.csv", fixture);
        let mut output = Vec::new();

        let report = run(
            Path::new(&input_path),
            BankConfig::default(),
            OutputMode::Summary,
            &mut output,
        )
        .unwrap();

        assert_eq!(report.applied, applied);
        assert_eq!(report.rejected, rejected);
    }

    #[test]
    fn test_statement_output() {
        let mut script = NamedTempFile::new().expect("Failed to create temp file");
        script
            .write_all(
                b"op,cpf,account,amount,name,birth_date,address\n\
                  register,111,,,Ana Souza,12-04-1990,Rua A\n\
                  open,111,,,,,\n\
                  deposit,111,,150,,,\n\
                  withdraw,111,,49.5,,,\n\
                  statement,111,,,,,\n",
            )
            .expect("Failed to write script");
        script.flush().expect("Failed to flush script");

        let mut output = Vec::new();
        let report = run(
            script.path(),
            BankConfig::default(),
            OutputMode::Statements,
            &mut output,
        )
        .unwrap();
        let text = String::from_utf8(output).unwrap();

        assert_eq!(report.statements.len(), 1);
        assert!(text.contains("Deposit:\n\tR$ 150.00"));
        assert!(text.contains("Withdrawal:\n\tR$ 49.50"));
        assert!(text.contains("Balance:\n\tR$ 100.50"));
        assert!(text.contains("Branch:\t\t0001\nAccount:\t1\nHolder:\t\tAna Souza\n"));
    }
}
