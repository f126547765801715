mod browser;
mod common;
mod logic;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use browser::{BrowserConfig, BrowserKind, SitePage, new_session};
use common::scenario::{ScenarioCtx, all_scenario_keys, get_scenario, list_scenarios};
use common::{artifacts_dir, capture_artifacts, split_csv};
use logic::{LogicCtx, LogicTester, ScenarioResult};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TestMode {
    /// Core logic against the bundled data (fast, no browser)
    Logic,
    /// Browser automation against a running site (slow, captures screenshots)
    Browser,
    /// Run both logic and browser tests
    Both,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeadlessMode {
    /// Run browsers in headless mode
    Headless,
    /// Run browsers with visible windows
    Windowed,
}

impl HeadlessMode {
    const fn is_headless(self) -> bool {
        matches!(self, Self::Headless)
    }
}

#[derive(Debug, Parser)]
#[command(name = "promo-tester", version)]
#[command(about = "Automated QA for the brand promotions site - logic scenarios and browser automation")]
struct Args {
    /// Test mode: logic (fast), browser (visual), or both
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, or "all")
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Number of iterations per scenario (logic mode only, at least 1)
    #[arg(long, default_value_t = 10, value_parser = parse_iterations)]
    iterations: usize,

    /// Run logic checks as if today were this date (YYYY-MM-DD)
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console", "csv"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    // Browser-specific options
    /// Browsers to run (chrome,edge,firefox,safari) - browser mode only
    #[arg(long, default_value = "chrome")]
    browsers: String,

    /// Base URL the site is served from
    #[arg(long, default_value = "http://localhost:8080")]
    base_url: String,

    /// Artifacts directory for screenshots and logs
    #[arg(long, default_value = "target/test-artifacts")]
    artifacts_dir: String,

    /// Connect to a Selenium Grid/Appium hub instead of local drivers
    #[arg(long)]
    hub: Option<String>,

    /// Run headless where supported
    #[arg(long, value_enum, default_value_t = HeadlessMode::Headless)]
    headless: HeadlessMode,
}

fn parse_iterations(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err("must run at least one iteration".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&args.scenarios);
    let logic_ctx = logic_ctx(&args);

    let mut all_results = run_logic_scenarios(&args, &scenarios, logic_ctx);
    all_results.extend(run_browser_scenarios(&args, &scenarios).await);

    write_reports(&args, &all_results, start_time)?;

    if all_results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:20} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🍺 Promotions Site Automated Tester".bright_cyan().bold());
    println!("{}", "===================================".cyan());
}

fn logic_ctx(args: &Args) -> LogicCtx {
    let now = Utc::now();
    let now = args
        .as_of
        .and_then(|day| day.and_hms_opt(12, 0, 0))
        .map_or(now, |noon| noon.and_utc());
    LogicCtx::at(now)
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for key in all_scenario_keys() {
            if !scenarios.contains(&key) {
                scenarios.push(key);
            }
        }
    }
    scenarios
}

fn build_browser_config(args: &Args) -> BrowserConfig {
    BrowserConfig {
        headless: args.headless.is_headless(),
        implicit_wait_secs: 3,
        remote_hub: args.hub.clone(),
    }
}

fn run_logic_scenarios(args: &Args, scenarios: &[String], ctx: LogicCtx) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Logic | TestMode::Both) {
        return results;
    }

    println!("{}", "🧠 Running Logic Tests".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let logic_tester = LogicTester::new(ctx, args.verbose);

    for scenario_name in scenarios {
        if let Some(combined_scenario) = get_scenario(scenario_name) {
            if let Some(logic_scenario) = combined_scenario.as_logic_scenario() {
                results.push(logic_tester.run_scenario(&logic_scenario, args.iterations));
            } else {
                eprintln!(
                    "⚠️  Scenario {} has no logic test implementation",
                    scenario_name.yellow()
                );
            }
        } else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
        }
    }

    results
}

async fn run_browser_scenarios(args: &Args, scenarios: &[String]) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Browser | TestMode::Both) {
        return results;
    }

    println!("{}", "🌐 Running Browser Tests".bright_blue().bold());
    println!("{}", "-".repeat(30).blue());

    let cfg = build_browser_config(args);
    for browser_name in split_csv(&args.browsers) {
        let Some(kind) = BrowserKind::parse(&browser_name) else {
            eprintln!("⚠️  Unknown browser: {}", browser_name.yellow());
            continue;
        };

        let driver = match new_session(kind, &cfg).await {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ Could not start {kind:?}: {e}");
                continue;
            }
        };

        results.extend(run_browser_scenarios_for_driver(args, scenarios, kind, &driver).await);
        let _ = driver.quit().await;
    }

    results
}

async fn run_browser_scenarios_for_driver(
    args: &Args,
    scenarios: &[String],
    kind: BrowserKind,
    driver: &thirtyfour::WebDriver,
) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    for scenario_name in scenarios {
        let Some(scenario) = get_scenario(scenario_name) else {
            continue;
        };
        let ctx = ScenarioCtx {
            page: SitePage::new(driver, args.base_url.clone()),
            verbose: args.verbose,
        };
        let label = kind.label();

        let scenario_start = Instant::now();
        let outcome = scenario.run_browser(&ctx).await;
        let duration = scenario_start.elapsed();
        let failure = match outcome {
            Ok(()) => {
                println!("✅ [{}] {} - {:?}", label.green(), scenario_name, duration);
                None
            }
            Err(e) => {
                eprintln!(
                    "❌ [{}] {} - {:?}: {:#}",
                    label.red(),
                    scenario_name,
                    duration,
                    e
                );
                let dir = artifacts_dir(&args.artifacts_dir, label, scenario_name);
                if let Err(capture_err) = capture_artifacts(driver, &dir, &e).await {
                    log::warn!("could not capture artifacts in {dir}: {capture_err:#}");
                }
                Some(format!("{e:#}"))
            }
        };
        results.push(browser_result(scenario_name, kind, duration, failure));
    }
    results
}

fn browser_result(
    scenario_name: &str,
    kind: BrowserKind,
    duration: Duration,
    failure: Option<String>,
) -> ScenarioResult {
    let passed = failure.is_none();
    ScenarioResult {
        scenario_name: format!("{scenario_name} [{}]", kind.label()),
        passed,
        iterations_run: 1,
        successful_iterations: usize::from(passed),
        checks_per_iteration: 1,
        failures: failure.into_iter().collect(),
        average_duration: if passed { duration } else { Duration::ZERO },
        performance_data: if passed { vec![duration] } else { Vec::new() },
    }
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => logic::reports::generate_json_report(&mut output_target, results)?,
        "markdown" => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# {}\n\n_No scenarios executed._",
                    logic::reports::REPORT_TITLE
                )?;
            } else {
                logic::reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        "csv" => logic::reports::generate_csv_report(&mut output_target, results)?,
        _ => {
            if results.is_empty() {
                writeln!(&mut output_target, "No scenarios executed.")?;
            } else {
                logic::reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
            writeln!(&mut output_target)?;
            writeln!(&mut output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            mode: TestMode::Logic,
            scenarios: "smoke".to_string(),
            list_scenarios: false,
            iterations: 1,
            as_of: NaiveDate::from_ymd_opt(2026, 10, 16),
            report: "json".to_string(),
            verbose: false,
            output: None,
            browsers: "chrome".to_string(),
            base_url: "http://localhost:8080".to_string(),
            artifacts_dir: "target/test-artifacts".to_string(),
            hub: None,
            headless: HeadlessMode::Headless,
        }
    }

    fn temp_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "promo-tester-{label}-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    fn sample_result(passed: bool) -> ScenarioResult {
        ScenarioResult {
            scenario_name: "Smoke Test".to_string(),
            passed,
            iterations_run: 1,
            successful_iterations: usize::from(passed),
            checks_per_iteration: 3,
            failures: if passed {
                vec![]
            } else {
                vec!["Iteration 1: bundled catalog: empty".to_string()]
            },
            average_duration: Duration::from_micros(12),
            performance_data: vec![Duration::from_micros(12)],
        }
    }

    #[test]
    fn iterations_must_be_positive() {
        assert!(Args::try_parse_from(["promo-tester", "--iterations", "0"]).is_err());
        assert!(Args::try_parse_from(["promo-tester", "--iterations", "lots"]).is_err());
        let args = Args::try_parse_from(["promo-tester", "--iterations", "3"]).unwrap();
        assert_eq!(args.iterations, 3);
        assert_eq!(parse_iterations("0"), Err("must run at least one iteration".to_string()));
    }

    #[test]
    fn expands_all_scenarios_keyword() {
        let scenarios = expand_scenarios("consent,all");
        assert_eq!(scenarios[0], "consent");
        assert_eq!(scenarios.len(), all_scenario_keys().len());
        assert!(scenarios.contains(&"catalog-filters".to_string()));
    }

    #[test]
    fn expand_scenarios_without_all_preserves_order() {
        let scenarios = expand_scenarios("age-gate, smoke");
        assert_eq!(scenarios, vec!["age-gate", "smoke"]);
    }

    #[test]
    fn as_of_pins_the_logic_clock() {
        let ctx = logic_ctx(&base_args());
        assert_eq!(ctx.today(), NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        assert_eq!(ctx.year(), 2026);
    }

    #[test]
    fn run_logic_scenarios_runs_known_and_skips_unknown() {
        let args = base_args();
        let scenarios = vec!["smoke".to_string(), "nope".to_string()];
        let results = run_logic_scenarios(&args, &scenarios, logic_ctx(&args));
        assert_eq!(results.len(), 1);
        assert!(results[0].passed, "{:?}", results[0].failures);
    }

    #[test]
    fn run_logic_scenarios_skips_when_not_enabled() {
        let mut args = base_args();
        args.mode = TestMode::Browser;
        let results = run_logic_scenarios(&args, &["smoke".to_string()], logic_ctx(&args));
        assert!(results.is_empty());
    }

    #[test]
    fn write_reports_emits_json_output() {
        let path = temp_path("json");
        let mut args = base_args();
        args.output = Some(path.clone());
        write_reports(&args, &[sample_result(true)], Instant::now()).unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[0]["scenario_name"], "Smoke Test");
    }

    #[test]
    fn write_reports_markdown_empty_results() {
        let path = temp_path("md");
        let mut args = base_args();
        args.report = "markdown".to_string();
        args.output = Some(path.clone());
        write_reports(&args, &[], Instant::now()).unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.contains("_No scenarios executed._"));
    }

    #[test]
    fn write_reports_emits_csv_rows() {
        let path = temp_path("csv");
        let mut args = base_args();
        args.report = "csv".to_string();
        args.output = Some(path.clone());
        write_reports(&args, &[sample_result(false)], Instant::now()).unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("\"Smoke Test\",false"));
    }

    #[test]
    fn write_reports_console_includes_total_time() {
        let path = temp_path("console");
        let mut args = base_args();
        args.report = "console".to_string();
        args.output = Some(path.clone());
        write_reports(&args, &[sample_result(true)], Instant::now()).unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.contains("Total time"));
    }

    #[test]
    fn maybe_list_scenarios_writes_output() {
        let path = temp_path("list");
        let mut args = base_args();
        args.list_scenarios = true;
        args.output = Some(path.clone());
        assert!(maybe_list_scenarios(&args).unwrap());
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.contains("Available scenarios"));
        assert!(text.contains("catalog-filters"));
    }

    #[test]
    fn maybe_list_scenarios_returns_false_when_disabled() {
        assert!(!maybe_list_scenarios(&base_args()).unwrap());
    }

    #[test]
    fn build_browser_config_respects_headless_and_hub() {
        let mut args = base_args();
        args.headless = HeadlessMode::Windowed;
        args.hub = Some("http://grid:4444".to_string());
        let cfg = build_browser_config(&args);
        assert!(!cfg.headless);
        assert_eq!(cfg.driver_url(BrowserKind::Chrome), "http://grid:4444");
    }

    #[test]
    fn browser_result_labels_the_browser() {
        let ok = browser_result("consent", BrowserKind::Firefox, Duration::from_millis(3), None);
        assert_eq!(ok.scenario_name, "consent [firefox]");
        assert!(ok.passed);
        let failed = browser_result(
            "consent",
            BrowserKind::Chrome,
            Duration::from_millis(3),
            Some("boom".to_string()),
        );
        assert!(!failed.passed);
        assert_eq!(failed.failures, vec!["boom"]);
        assert_eq!(failed.average_duration, Duration::ZERO);
    }

    #[tokio::test]
    async fn run_browser_scenarios_skips_when_not_enabled() {
        let args = base_args();
        assert!(run_browser_scenarios(&args, &["smoke".to_string()]).await.is_empty());
    }

    #[tokio::test]
    async fn run_browser_scenarios_ignores_unknown_browser() {
        let mut args = base_args();
        args.mode = TestMode::Browser;
        args.browsers = "netscape".to_string();
        assert!(run_browser_scenarios(&args, &["smoke".to_string()]).await.is_empty());
    }

    #[test]
    fn output_target_stdout_writes() {
        let mut target = OutputTarget::new(None).unwrap();
        writeln!(target, "hello").unwrap();
        target.flush_inner().unwrap();
    }
}
