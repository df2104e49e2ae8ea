use crate::errors::HarnessError;
use std::time::Duration;

/// What happened when a candidate was run.
#[derive(Debug)]
pub enum Outcome {
    /// The subprocess exited on its own.
    Completed {
        /// Exit code, `None` if the process was killed by a signal.
        status: Option<i32>,
        /// STDOUT captured from the test.
        stdout: Vec<u8>,
        /// STDERR captured from the test.
        stderr: Vec<u8>,
    },
    /// The subprocess did not finish within the bound and was killed.
    Timeout(Duration),
    /// The harness failed to prepare or launch the test.
    Error(HarnessError),
}

/// Store information related to one test.
#[derive(Debug)]
pub struct Test {
    /// Name of the test (file name without its suffix).
    pub name: String,
    /// How the run ended.
    pub outcome: Outcome,
}

/// Decode a captured stream into the lines shown in a report. Surrounding
/// whitespace is dropped, so an empty stream yields a single empty line.
pub fn stream_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .trim_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b')
        .split('\n')
        .map(str::to_string)
        .collect()
}

impl Test {
    /// True when the harness could not get a complete run out of the test.
    /// The exit status of a completed run is never judged.
    pub fn is_failure(&self) -> bool {
        !matches!(self.outcome, Outcome::Completed { .. })
    }

    /// Generate the report for this test.
    pub fn report_str(&self) -> String {
        use colored::*;

        let mut buf = String::new();
        buf.push_str(
            &format!("----------{}----------", self.name)
                .bold()
                .to_string(),
        );
        buf.push('\n');

        match &self.outcome {
            Outcome::Completed { stdout, stderr, .. } => {
                buf.push_str("stdout:\n");
                for line in stream_lines(stdout) {
                    buf.push('\t');
                    buf.push_str(&line);
                    buf.push('\n');
                }
                buf.push_str("stderr:\n");
                for line in stream_lines(stderr) {
                    buf.push('\t');
                    buf.push_str(&line);
                    buf.push('\n');
                }
            }
            Outcome::Timeout(after) => {
                buf.push_str(&format!("{}\n", "error:".red()));
                buf.push_str(&format!("\ttimed out after {:?}\n", after));
            }
            Outcome::Error(err) => {
                buf.push_str(&format!("{}\n", "error:".red()));
                buf.push_str(&format!("\t{}\n", err));
            }
        }

        // The caller terminates each report.
        buf.pop();
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(stdout: &str, stderr: &str) -> Test {
        Test {
            name: "test_x".to_string(),
            outcome: Outcome::Completed {
                status: Some(0),
                stdout: stdout.as_bytes().to_vec(),
                stderr: stderr.as_bytes().to_vec(),
            },
        }
    }

    #[test]
    fn hello_on_stdout_only() {
        colored::control::set_override(false);
        let report = completed("hello\n", "").report_str();
        assert_eq!(
            report,
            "----------test_x----------\nstdout:\n\thello\nstderr:\n\t"
        );
    }

    #[test]
    fn multiple_lines_keep_inner_blank_lines() {
        colored::control::set_override(false);
        let report = completed("\n  a\n\nb  \n\n", "warn\n").report_str();
        assert_eq!(
            report,
            "----------test_x----------\nstdout:\n\ta\n\t\n\tb\nstderr:\n\twarn"
        );
    }

    #[test]
    fn non_zero_exit_is_reported_like_any_run() {
        colored::control::set_override(false);
        let mut test = completed("out", "boom");
        if let Outcome::Completed { status, .. } = &mut test.outcome {
            *status = Some(3);
        }
        assert!(!test.is_failure());
        assert!(test.report_str().ends_with("stderr:\n\tboom"));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(stream_lines(&[b'o', 0xff, b'k']), vec!["o\u{fffd}k"]);
    }

    #[test]
    fn timeout_report() {
        colored::control::set_override(false);
        let test = Test {
            name: "test_slow".to_string(),
            outcome: Outcome::Timeout(Duration::from_secs(120)),
        };
        assert!(test.is_failure());
        assert_eq!(
            test.report_str(),
            "----------test_slow----------\nerror:\n\ttimed out after 120s"
        );
    }

    #[test]
    fn error_report() {
        colored::control::set_override(false);
        let test = Test {
            name: "test_bad".to_string(),
            outcome: Outcome::Error(HarnessError("permission denied".into())),
        };
        assert!(test.is_failure());
        assert!(test.report_str().ends_with("error:\n\tpermission denied"));
    }
}
