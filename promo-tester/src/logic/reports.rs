use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

use super::ScenarioResult;

pub const REPORT_TITLE: &str = "Promotions Site Logic Test Results";

fn tally(results: &[ScenarioResult]) -> (usize, usize, f64) {
    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    #[allow(clippy::cast_precision_loss)]
    let rate = if total == 0 {
        0.0
    } else {
        (passed as f64 / total as f64) * 100.0
    };
    (total, passed, rate)
}

pub fn generate_console_report<W: Write + ?Sized>(
    out: &mut W,
    results: &[ScenarioResult],
    total_duration: Duration,
) -> Result<()> {
    let (total, passed, rate) = tally(results);
    writeln!(out)?;
    writeln!(out, "{}", "📊 Logic Test Results Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "==============================".cyan())?;
    writeln!(out, "Total scenarios: {total}")?;
    writeln!(out, "Passed: {}", passed.to_string().green())?;
    writeln!(out, "Failed: {}", (total - passed).to_string().red())?;
    writeln!(out, "Success rate: {rate:.1}%")?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(out, "{status} {}", result.scenario_name.bold())?;
        writeln!(
            out,
            "   Iterations: {}/{} successful ({} checks each)",
            result.successful_iterations, result.iterations_run, result.checks_per_iteration
        )?;
        writeln!(out, "   Average time: {:?}", result.average_duration)?;
        if !result.failures.is_empty() {
            writeln!(out, "   Failures:")?;
            for failure in &result.failures {
                writeln!(out, "     • {}", failure.as_str().red())?;
            }
        }
        writeln!(out)?;
    }

    let fastest = results.iter().min_by_key(|r| r.average_duration);
    let slowest = results.iter().max_by_key(|r| r.average_duration);
    if let (Some(fastest), Some(slowest)) = (fastest, slowest) {
        writeln!(out, "{}", "⚡ Performance Summary".bright_yellow().bold())?;
        writeln!(out, "{}", "=====================".yellow())?;
        writeln!(
            out,
            "Fastest: {} ({:?})",
            fastest.scenario_name.green(),
            fastest.average_duration
        )?;
        writeln!(
            out,
            "Slowest: {} ({:?})",
            slowest.scenario_name.yellow(),
            slowest.average_duration
        )?;
    }
    Ok(())
}

pub fn generate_json_report<W: Write + ?Sized>(out: &mut W, results: &[ScenarioResult]) -> Result<()> {
    let json_output = serde_json::to_string_pretty(results)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report<W: Write + ?Sized>(
    out: &mut W,
    results: &[ScenarioResult],
) -> Result<()> {
    let (total, passed, rate) = tally(results);
    writeln!(out, "# {REPORT_TITLE}\n")?;
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Total scenarios**: {total}")?;
    writeln!(out, "- **Passed**: {passed}")?;
    writeln!(out, "- **Failed**: {}", total - passed)?;
    writeln!(out, "- **Success rate**: {rate:.1}%\n")?;
    writeln!(out, "## Detailed Results\n")?;

    for result in results {
        let status = if result.passed { "✅" } else { "❌" };
        writeln!(out, "### {status} {}\n", result.scenario_name)?;
        writeln!(
            out,
            "- **Iterations**: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(out, "- **Average time**: {:?}", result.average_duration)?;
        if !result.failures.is_empty() {
            writeln!(out, "- **Failures**:")?;
            for failure in &result.failures {
                writeln!(out, "  - {failure}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// One row per scenario. Failure text is quoted with inner quotes doubled.
pub fn generate_csv_report<W: Write + ?Sized>(out: &mut W, results: &[ScenarioResult]) -> Result<()> {
    writeln!(
        out,
        "scenario,passed,iterations,successful,checks,average_us,first_failure"
    )?;
    for result in results {
        let first_failure = result
            .failures
            .first()
            .map(|f| f.replace('"', "\"\""))
            .unwrap_or_default();
        writeln!(
            out,
            "\"{}\",{},{},{},{},{},\"{}\"",
            result.scenario_name.replace('"', "\"\""),
            result.passed,
            result.iterations_run,
            result.successful_iterations,
            result.checks_per_iteration,
            result.average_duration.as_micros(),
            first_failure
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, passed: bool, micros: u64) -> ScenarioResult {
        ScenarioResult {
            scenario_name: name.to_string(),
            passed,
            iterations_run: 2,
            successful_iterations: if passed { 2 } else { 1 },
            checks_per_iteration: 3,
            failures: if passed {
                vec![]
            } else {
                vec!["Iteration 2: says \"no\"".to_string()]
            },
            average_duration: Duration::from_micros(micros),
            performance_data: vec![Duration::from_micros(micros)],
        }
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn console_report_names_fastest_and_slowest() {
        colored::control::set_override(false);
        let results = [result("Catalog", true, 10), result("Entry", false, 90)];
        let text = render(|out| generate_console_report(out, &results, Duration::from_millis(5)));
        assert!(text.contains("Total scenarios: 2"));
        assert!(text.contains("Success rate: 50.0%"));
        assert!(text.contains("Fastest: Catalog"));
        assert!(text.contains("Slowest: Entry"));
        assert!(text.contains("Iteration 2"));
    }

    #[test]
    fn markdown_report_has_summary_and_sections() {
        let results = [result("Catalog", true, 10)];
        let text = render(|out| generate_markdown_report(out, &results));
        assert!(text.starts_with(&format!("# {REPORT_TITLE}")));
        assert!(text.contains("- **Passed**: 1"));
        assert!(text.contains("### ✅ Catalog"));
    }

    #[test]
    fn json_report_is_an_array() {
        let results = [result("Catalog", true, 10)];
        let text = render(|out| generate_json_report(out, &results));
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[0]["scenario_name"], "Catalog");
    }

    #[test]
    fn csv_report_escapes_quotes() {
        let results = [result("Entry", false, 90)];
        let text = render(|out| generate_csv_report(out, &results));
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("scenario,passed"));
        assert_eq!(
            lines.next().unwrap(),
            "\"Entry\",false,2,1,3,90,\"Iteration 2: says \"\"no\"\"\""
        );
    }

    #[test]
    fn empty_results_report_zero_rate() {
        assert_eq!(tally(&[]), (0, 0, 0.0));
    }
}
