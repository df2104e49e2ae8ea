use super::{results, workspace, Test};
use crate::{
    errors::HarnessError,
    picker::{convention, toml::Config},
};
use futures::{
    io::{AllowStdIo, AsyncWriteExt},
    stream, Stream, StreamExt,
};
use std::{path::Path, time::Duration};
use tracing::info;

/// An executor manages the execution of a list of tests.
pub struct Executor {
    /// Test configurations to be executed.
    tests: Vec<Test>,
}

impl Executor {
    /// Execute the tests one after another, in order. The next test is not
    /// started until the result of the previous one has been consumed.
    pub fn execute_all(self) -> impl Stream<Item = results::Test> {
        stream::iter(self.tests).then(Test::execute_test)
    }
}

/// An execution context ties the discovered tests to the executions root
/// they run under.
pub struct Context {
    /// Test configurations to be executed.
    pub exec: Executor,
}

impl Context {
    /// Discover the candidates in `test_dir` and create the executions root.
    pub async fn prepare(
        test_dir: &Path,
        config: &Config,
        timeout: Duration,
    ) -> Result<Self, HarnessError> {
        let candidates = convention::discover(test_dir)?;
        let root = workspace::create_root(&config.executions_root(test_dir))
            .await?;
        info!(root = %root.display(), "executions root ready");

        let tests = candidates
            .into_iter()
            .map(|candidate| Test {
                candidate,
                root: root.clone(),
                timeout,
            })
            .collect();
        Ok(Context {
            exec: Executor { tests },
        })
    }

    /// Run every test and write each report to `out` as soon as it is
    /// available. Returns the number of tests the harness failed to run.
    pub async fn flat_summary<W: std::io::Write + Unpin>(
        self,
        out: W,
    ) -> Result<i32, HarnessError> {
        let tasks = self.exec.execute_all();
        futures::pin_mut!(tasks);
        let mut handle = AllowStdIo::new(out);
        let mut failures = 0;

        while let Some(res) = tasks.next().await {
            if res.is_failure() {
                failures += 1;
            }
            let buf = res.report_str() + "\n";
            handle.write_all(buf.as_bytes()).await?;
            handle.flush().await?;
        }

        Ok(failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_candidates_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::prepare(
            dir.path(),
            &Config::default(),
            Duration::from_secs(1),
        )
        .await
        .unwrap();

        let mut out = Vec::new();
        assert_eq!(ctx.flat_summary(&mut out).await.unwrap(), 0);
        assert!(out.is_empty());
        assert!(dir.path().join("executions").is_dir());
    }
}
