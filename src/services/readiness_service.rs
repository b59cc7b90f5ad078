//! Readiness service - waits for a one-shot workload to finish
//!
//! Polls a status probe at a fixed interval until the workload reports an
//! exit code or the wait budget runs out. The workload itself is never
//! touched: the waiter only reads its status.

use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::domain::{ProbeStatus, WaitOutcome, WaitPolicy, WaitReport, WorkloadRef};
use crate::infrastructure::StatusProbe;

/// Fixed-interval poller with a deadline
pub struct ReadinessWaiter {
    policy: WaitPolicy,
}

impl ReadinessWaiter {
    /// Create a waiter with the default 300s budget and 10s interval
    pub fn new() -> Self {
        Self {
            policy: WaitPolicy::default(),
        }
    }

    /// Create with a custom policy
    pub fn with_policy(policy: WaitPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &WaitPolicy {
        &self.policy
    }

    /// Poll until the workload reports an exit code or the budget is spent
    ///
    /// The first query runs immediately. The deadline is checked before
    /// every query, so with a 300s budget and 10s interval the last query
    /// happens at t=290s. Probe errors count as "no exit code yet".
    ///
    /// A single query may only run until the deadline; a query still running
    /// then is dropped (killing its child process). Sleeps are capped at the
    /// remaining budget, so `elapsed` never overshoots the timeout.
    pub async fn wait<P: StatusProbe>(&self, probe: &P, workload: &WorkloadRef) -> WaitReport {
        let start = Instant::now();
        let mut polls: u32 = 0;
        let mut probe_errors: u32 = 0;
        let mut last_seen: Option<String> = None;

        info!(
            "Waiting for workload {} (timeout {}s, interval {}s)",
            workload,
            self.policy.timeout.as_secs(),
            self.policy.interval.as_secs()
        );
        debug!("Status query: {}", probe.describe(workload));

        loop {
            let elapsed = start.elapsed();
            if elapsed >= self.policy.timeout {
                warn!(
                    "⏱️  Timeout reached after {} polls ({:.0}s) without an exit code",
                    polls,
                    elapsed.as_secs_f64()
                );
                return WaitReport {
                    outcome: WaitOutcome::TimedOut { last_seen },
                    polls,
                    probe_errors,
                    elapsed,
                };
            }

            polls += 1;

            let remaining = self.policy.timeout.saturating_sub(elapsed);
            let answer = match tokio::time::timeout(remaining, probe.read_status(workload)).await {
                Ok(answer) => answer,
                Err(_) => {
                    probe_errors += 1;
                    warn!(
                        "Poll {}: status query still running at the {}s deadline, abandoning it",
                        polls,
                        self.policy.timeout.as_secs()
                    );
                    continue;
                }
            };

            match answer {
                Ok(raw) => {
                    match ProbeStatus::parse(&raw) {
                        Ok(ProbeStatus::Terminal(exit_code)) => {
                            let elapsed = start.elapsed();
                            info!(
                                "Workload {} reported exit code {} after {} polls ({:.0}s)",
                                workload,
                                exit_code,
                                polls,
                                elapsed.as_secs_f64()
                            );
                            return WaitReport {
                                outcome: WaitOutcome::from_exit_code(exit_code),
                                polls,
                                probe_errors,
                                elapsed,
                            };
                        }
                        Ok(ProbeStatus::Pending) => {
                            debug!("Poll {}: no exit code yet", polls);
                        }
                        Err(e) => {
                            probe_errors += 1;
                            warn!("Poll {}: {} - treating as still running", polls, e);
                        }
                    }
                    last_seen = Some(raw);
                }
                Err(e) => {
                    probe_errors += 1;
                    warn!("Poll {}: {} - treating as still running", polls, e);
                }
            }

            let remaining = self.policy.timeout.saturating_sub(start.elapsed());
            tokio::time::sleep(self.policy.interval.min(remaining)).await;
        }
    }
}

impl Default for ReadinessWaiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ProbeError, WaitError};
    use crate::infrastructure::CommandProbe;
    use std::collections::VecDeque;
    use std::time::Duration;
    use std::sync::Mutex;
    use tokio_test::{assert_err, assert_ok};

    /// Probe that replays a fixed script of answers and records every query
    struct ScriptedProbe {
        script: Mutex<VecDeque<Result<String, ProbeError>>>,
        queries: Mutex<Vec<WorkloadRef>>,
    }

    impl ScriptedProbe {
        fn new(script: Vec<Result<&str, ProbeError>>) -> Self {
            Self {
                script: Mutex::new(
                    script
                        .into_iter()
                        .map(|answer| answer.map(str::to_string))
                        .collect(),
                ),
                queries: Mutex::new(Vec::new()),
            }
        }

        fn from_statuses(statuses: &[&str]) -> Self {
            Self::new(statuses.iter().map(|s| Ok(*s)).collect())
        }

        fn queries(&self) -> Vec<WorkloadRef> {
            self.queries.lock().unwrap().clone()
        }
    }

    impl StatusProbe for ScriptedProbe {
        async fn read_status(&self, workload: &WorkloadRef) -> Result<String, ProbeError> {
            self.queries.lock().unwrap().push(workload.clone());
            // Once the script runs out the workload stays pending forever
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(String::new()))
        }

        fn program(&self) -> &str {
            "scripted"
        }

        fn describe(&self, workload: &WorkloadRef) -> String {
            format!("scripted status for {}", workload)
        }
    }

    /// Status source whose answer never arrives before `delay` has passed
    struct DelayedStatus {
        delay: Duration,
    }

    impl StatusProbe for DelayedStatus {
        async fn read_status(&self, _workload: &WorkloadRef) -> Result<String, ProbeError> {
            tokio::time::sleep(self.delay).await;
            Ok(String::new())
        }

        fn program(&self) -> &str {
            "slow"
        }

        fn describe(&self, workload: &WorkloadRef) -> String {
            format!("slow status for {}", workload)
        }
    }

    fn workload() -> WorkloadRef {
        WorkloadRef::new("flyway-migrate", "rg-app-dev")
    }

    fn waiter(timeout_secs: u64, interval_secs: u64) -> ReadinessWaiter {
        ReadinessWaiter::with_policy(WaitPolicy::new(
            Duration::from_secs(timeout_secs),
            Duration::from_secs(interval_secs),
        ))
    }

    #[test]
    fn test_waiter_defaults() {
        let waiter = ReadinessWaiter::new();
        assert_eq!(waiter.policy().timeout, Duration::from_secs(300));
        assert_eq!(waiter.policy().interval, Duration::from_secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_stops_polling_at_terminal_status() {
        let probe = ScriptedProbe::from_statuses(&["", "", "0", "1"]);
        let report = waiter(300, 10).wait(&probe, &workload()).await;

        assert_eq!(report.outcome, WaitOutcome::Succeeded);
        assert_eq!(report.polls, 3);
        assert_eq!(probe.queries().len(), 3);
        assert_eq!(report.elapsed, Duration::from_secs(20));

        let policy = WaitPolicy::default();
        assert_ok!(report.into_result(&workload(), &policy));
    }

    #[tokio::test(start_paused = true)]
    async fn test_immediate_success_polls_once() {
        let probe = ScriptedProbe::from_statuses(&["0"]);
        let report = waiter(300, 10).wait(&probe, &workload()).await;

        assert_eq!(report.outcome, WaitOutcome::Succeeded);
        assert_eq!(report.polls, 1);
        assert_eq!(report.elapsed, Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_count_matches_success_position() {
        for k in 1..=5usize {
            let mut statuses = vec!["null"; k - 1];
            statuses.push("0");
            let probe = ScriptedProbe::from_statuses(&statuses);

            let report = waiter(300, 7).wait(&probe, &workload()).await;

            assert_eq!(report.polls as usize, k);
            assert_eq!(probe.queries().len(), k);
            assert_eq!(report.elapsed, Duration::from_secs(7 * (k as u64 - 1)));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_zero_exit_code_fails_with_code_in_diagnostic() {
        let probe = ScriptedProbe::from_statuses(&["", "None", "2"]);
        let report = waiter(300, 10).wait(&probe, &workload()).await;

        assert_eq!(report.outcome, WaitOutcome::Failed { exit_code: 2 });
        assert_eq!(report.polls, 3);

        let err = assert_err!(report.into_result(&workload(), &WaitPolicy::default()));
        assert!(matches!(err, WaitError::WorkloadFailed { exit_code: 2, .. }));
        assert!(err.to_string().contains("exit code 2"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_never_terminal_times_out() {
        let probe = ScriptedProbe::from_statuses(&[]);
        let waiter = waiter(300, 10);
        let report = waiter.wait(&probe, &workload()).await;

        assert_eq!(report.outcome, WaitOutcome::TimedOut { last_seen: Some(String::new()) });
        assert_eq!(report.polls, 30);
        assert_eq!(report.elapsed, Duration::from_secs(300));

        let err = assert_err!(report.into_result(&workload(), waiter.policy()));
        assert!(matches!(err, WaitError::TimedOut { timeout_secs: 300, .. }));
        assert!(err.to_string().contains("none observed"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_not_multiple_of_interval() {
        let probe = ScriptedProbe::from_statuses(&[]);
        let report = waiter(25, 10).wait(&probe, &workload()).await;

        assert!(matches!(report.outcome, WaitOutcome::TimedOut { .. }));
        assert_eq!(report.polls, 3);
        // The last sleep is cut to the 5s left in the budget
        assert_eq!(report.elapsed, Duration::from_secs(25));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_status_query_counts_against_budget() {
        // Each answer takes 4s to arrive; queries start at t=0, 14 and 28
        let source = DelayedStatus {
            delay: Duration::from_secs(4),
        };
        let report = waiter(30, 10).wait(&source, &workload()).await;

        assert_eq!(
            report.outcome,
            WaitOutcome::TimedOut {
                last_seen: Some(String::new())
            }
        );
        assert_eq!(report.polls, 3);
        assert_eq!(report.probe_errors, 1);
        assert_eq!(report.elapsed, Duration::from_secs(30));
    }

    #[tokio::test]
    async fn test_hung_status_query_is_cut_off_at_deadline() {
        let source = CommandProbe::new("sh", vec!["-c".to_string(), "sleep 30".to_string()]);
        let waiter = waiter(1, 1);

        let started = std::time::Instant::now();
        let report = tokio::time::timeout(Duration::from_secs(5), waiter.wait(&source, &workload()))
            .await
            .expect("wait should finish shortly after its 1s budget");

        assert!(started.elapsed() < Duration::from_secs(5));
        assert_eq!(report.outcome, WaitOutcome::TimedOut { last_seen: None });
        assert_eq!(report.polls, 1);
        assert_eq!(report.probe_errors, 1);
        assert!(report.elapsed >= Duration::from_secs(1));

        let err = assert_err!(report.into_result(&workload(), waiter.policy()));
        assert!(matches!(err, WaitError::TimedOut { timeout_secs: 1, .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_probe_errors_are_treated_as_pending() {
        let probe = ScriptedProbe::new(vec![
            Err(ProbeError::CommandFailed {
                program: "az".to_string(),
                code: Some(1),
                stderr: "ResourceNotFound".to_string(),
            }),
            Ok("Running"),
            Ok(""),
            Ok("0"),
        ]);
        let report = waiter(300, 10).wait(&probe, &workload()).await;

        assert_eq!(report.outcome, WaitOutcome::Succeeded);
        assert_eq!(report.polls, 4);
        assert_eq!(report.probe_errors, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_keeps_last_seen_status() {
        let probe = ScriptedProbe::new(vec![Ok(""), Ok("Waiting")]);
        let report = waiter(20, 10).wait(&probe, &workload()).await;

        assert_eq!(
            report.outcome,
            WaitOutcome::TimedOut {
                last_seen: Some("Waiting".to_string())
            }
        );

        let err = assert_err!(report.into_result(&workload(), &WaitPolicy::default()));
        assert!(err.to_string().contains("last seen: Waiting"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_waiter_only_reads_the_workload() {
        let probe = ScriptedProbe::from_statuses(&["", "", "", "0"]);
        let target = workload();
        let before = target.clone();

        let report = waiter(300, 10).wait(&probe, &target).await;

        // Every probe interaction was a status read of the unchanged workload
        let queries = probe.queries();
        assert_eq!(queries.len() as u32, report.polls);
        assert!(queries.iter().all(|q| *q == before));
        assert_eq!(target, before);
    }
}
