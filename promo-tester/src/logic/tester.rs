use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::common::scenario::TestScenario;
use crate::logic::fixture::LogicCtx;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub checks_per_iteration: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
    #[serde(with = "duration_vec_serde")]
    pub performance_data: Vec<Duration>,
}

impl ScenarioResult {
    /// Share of iterations that passed every check, as a percentage.
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.iterations_run == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let rate = self.successful_iterations as f64 / self.iterations_run as f64;
        rate * 100.0
    }
}

pub struct LogicTester {
    ctx: LogicCtx,
    verbose: bool,
}

impl LogicTester {
    pub const fn new(ctx: LogicCtx, verbose: bool) -> Self {
        Self { ctx, verbose }
    }

    pub fn run_scenario(&self, scenario: &TestScenario, iterations: usize) -> ScenarioResult {
        if self.verbose {
            println!(
                "🧪 Testing scenario: {} ({} checks, as of {})",
                scenario.name.bright_white(),
                scenario.checks.len(),
                self.ctx.today()
            );
        }

        let mut successes = 0;
        let mut failures = Vec::new();
        let mut performance_data = Vec::new();

        for i in 0..iterations {
            let start_time = Instant::now();
            match self.run_iteration(scenario) {
                Ok(()) => {
                    successes += 1;
                    let duration = start_time.elapsed();
                    performance_data.push(duration);
                    if self.verbose {
                        println!("  ✅ Iteration {}/{} passed ({duration:?})", i + 1, iterations);
                    }
                }
                Err(err) => {
                    if self.verbose {
                        println!(
                            "  ❌ Iteration {}/{} failed: {}",
                            i + 1,
                            iterations,
                            err.as_str().red()
                        );
                    }
                    failures.push(format!("Iteration {}: {err}", i + 1));
                }
            }
        }

        let average_duration = if performance_data.is_empty() {
            Duration::ZERO
        } else {
            performance_data.iter().sum::<Duration>()
                / u32::try_from(performance_data.len()).unwrap_or(1)
        };

        ScenarioResult {
            scenario_name: scenario.name.clone(),
            passed: successes > 0 && failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            checks_per_iteration: scenario.checks.len(),
            failures,
            average_duration,
            performance_data,
        }
    }

    /// Run every check once, stopping at the first failure.
    fn run_iteration(&self, scenario: &TestScenario) -> Result<(), String> {
        for check in &scenario.checks {
            (check.run)(&self.ctx).map_err(|err| format!("{}: {err:#}", check.label))?;
            log::debug!("{} / {} ok", scenario.name, check.label);
        }
        Ok(())
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_micros().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = u128::deserialize(deserializer)?;
        Ok(Duration::from_micros(u64::try_from(micros).unwrap_or(0)))
    }
}

mod duration_vec_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(durations: &[Duration], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let micros: Vec<u128> = durations.iter().map(Duration::as_micros).collect();
        micros.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = Vec::<u128>::deserialize(deserializer)?;
        Ok(micros
            .into_iter()
            .map(|m| Duration::from_micros(u64::try_from(m).unwrap_or(0)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::scenario::Check;
    use chrono::{TimeZone, Utc};

    fn ctx() -> LogicCtx {
        LogicCtx::at(Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap())
    }

    fn always_ok(_: &LogicCtx) -> anyhow::Result<()> {
        Ok(())
    }

    fn always_fails(_: &LogicCtx) -> anyhow::Result<()> {
        anyhow::bail!("nope")
    }

    #[test]
    fn passing_scenario_counts_every_iteration() {
        let scenario = TestScenario::new("ok", vec![Check::new("fine", always_ok)]);
        let result = LogicTester::new(ctx(), false).run_scenario(&scenario, 3);
        assert!(result.passed);
        assert_eq!(result.successful_iterations, 3);
        assert_eq!(result.performance_data.len(), 3);
        assert!((result.success_rate() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_iterations_is_not_a_pass() {
        let scenario = TestScenario::new("ok", vec![Check::new("fine", always_ok)]);
        let result = LogicTester::new(ctx(), false).run_scenario(&scenario, 0);
        assert!(!result.passed);
        assert_eq!(result.iterations_run, 0);
        assert_eq!(result.average_duration, Duration::ZERO);
    }

    #[test]
    fn failures_name_the_check() {
        let scenario = TestScenario::new(
            "bad",
            vec![Check::new("fine", always_ok), Check::new("broken", always_fails)],
        );
        let result = LogicTester::new(ctx(), false).run_scenario(&scenario, 2);
        assert!(!result.passed);
        assert_eq!(result.successful_iterations, 0);
        assert_eq!(result.failures.len(), 2);
        assert_eq!(result.failures[0], "Iteration 1: broken: nope");
        assert_eq!(result.average_duration, Duration::ZERO);
    }

    #[test]
    fn durations_serialize_as_micros() {
        let result = ScenarioResult {
            scenario_name: "x".into(),
            passed: true,
            iterations_run: 1,
            successful_iterations: 1,
            checks_per_iteration: 1,
            failures: vec![],
            average_duration: Duration::from_micros(42),
            performance_data: vec![Duration::from_micros(42)],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["average_duration"], 42);
        assert_eq!(json["performance_data"][0], 42);
    }
}
