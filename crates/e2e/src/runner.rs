//! Suite runner - executes scenarios sequentially over one account fixture

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{error, info};

use mingle_fixture::{AccountManager, LoginBrowser};
use mingle_graph::{Method, Params};

use crate::error::{HarnessError, HarnessResult};
use crate::scenario::{Scenario, ScenarioStep};

/// Result of one executed step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepOutcome {
    pub step: String,
    pub success: bool,
    pub duration_ms: u64,
    pub error: Option<String>,
}

/// Result of running a single scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    pub success: bool,
    pub duration_ms: u64,
    pub steps: Vec<StepOutcome>,
    pub error: Option<String>,
}

/// Result of running the whole suite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteResult {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u64,
    pub results: Vec<ScenarioResult>,
}

/// Runs scenarios sequentially against one account manager and guarantees
/// the account teardown hook fires exactly once at end-of-suite.
pub struct SuiteRunner {
    manager: AccountManager,
    browser: Option<LoginBrowser>,
    torn_down: bool,
}

impl SuiteRunner {
    pub fn new(manager: AccountManager, browser: Option<LoginBrowser>) -> Self {
        Self {
            manager,
            browser,
            torn_down: false,
        }
    }

    /// Run a list of scenarios and tear the account down afterwards.
    pub async fn run_all(&mut self, scenarios: &[Scenario]) -> SuiteResult {
        let start = Instant::now();
        let mut results = Vec::new();
        let mut passed = 0;
        let mut failed = 0;

        info!("Running {} scenario(s)...", scenarios.len());

        for scenario in scenarios {
            let result = self.run_scenario(scenario).await;
            if result.success {
                passed += 1;
                info!("✓ {} ({} ms)", result.name, result.duration_ms);
            } else {
                failed += 1;
                error!(
                    "✗ {} - {}",
                    result.name,
                    result.error.as_deref().unwrap_or("unknown error")
                );
            }
            results.push(result);
        }

        self.teardown().await;

        let duration_ms = start.elapsed().as_millis() as u64;
        info!(
            "Suite results: {} passed, {} failed ({} ms)",
            passed, failed, duration_ms
        );

        SuiteResult {
            total: scenarios.len(),
            passed,
            failed,
            duration_ms,
            results,
        }
    }

    /// Run a single scenario, stopping at its first failing step.
    pub async fn run_scenario(&mut self, scenario: &Scenario) -> ScenarioResult {
        let start = Instant::now();
        let mut steps = Vec::new();
        let mut scenario_error: Option<String> = None;

        for step in &scenario.steps {
            let step_start = Instant::now();
            let name = step_name(step);
            let result = self.execute_step(step).await;
            let duration_ms = step_start.elapsed().as_millis() as u64;

            match result {
                Ok(()) => steps.push(StepOutcome {
                    step: name,
                    success: true,
                    duration_ms,
                    error: None,
                }),
                Err(e) => {
                    scenario_error = Some(format!("{name}: {e}"));
                    steps.push(StepOutcome {
                        step: name,
                        success: false,
                        duration_ms,
                        error: Some(e.to_string()),
                    });
                    break;
                }
            }
        }

        ScenarioResult {
            name: scenario.name.clone(),
            success: scenario_error.is_none(),
            duration_ms: start.elapsed().as_millis() as u64,
            steps,
            error: scenario_error,
        }
    }

    async fn execute_step(&mut self, step: &ScenarioStep) -> HarnessResult<()> {
        match step {
            ScenarioStep::EnsureAccount { renew } => {
                self.manager.ensure_account(*renew).await?;
                Ok(())
            }
            ScenarioStep::Login => {
                let browser = self.browser.as_ref().ok_or_else(|| HarnessError::StepFailed {
                    step: "login".to_string(),
                    reason: "no browser configured for this run".to_string(),
                })?;
                let account = self.manager.account()?;
                browser.login(account).await?;
                Ok(())
            }
            ScenarioStep::Call { method, path, params } => {
                let method = parse_method(method)?;
                let params: Params = params
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                self.manager.call_as_account(method, path, params).await?;
                Ok(())
            }
            ScenarioStep::ExpectFirstName { expected } => {
                let first_name = self.manager.first_name().await?;
                match expected {
                    Some(want) if want != &first_name => Err(HarnessError::StepFailed {
                        step: "expect_first_name".to_string(),
                        reason: format!("expected {want:?}, got {first_name:?}"),
                    }),
                    _ => Ok(()),
                }
            }
            ScenarioStep::ExpectPostWithPlace { place_id } => {
                self.manager.see_post_with_place(place_id).await?;
                Ok(())
            }
            ScenarioStep::Sleep { ms } => {
                tokio::time::sleep(Duration::from_millis(*ms)).await;
                Ok(())
            }
            ScenarioStep::Log { message } => {
                info!("[SCENARIO] {}", message);
                Ok(())
            }
        }
    }

    /// End-of-suite hook. Deletes the live test account, exactly once; safe
    /// to call again.
    pub async fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.manager.delete_account().await;
    }

    /// Write suite results to a JSON file
    pub fn write_results(&self, output_dir: &Path, results: &SuiteResult) -> HarnessResult<PathBuf> {
        std::fs::create_dir_all(output_dir)?;
        let path = output_dir.join("suite-results.json");
        let json = serde_json::to_string_pretty(results)?;
        std::fs::write(&path, json)?;
        info!("Results written to: {}", path.display());
        Ok(path)
    }
}

fn step_name(step: &ScenarioStep) -> String {
    match step {
        ScenarioStep::EnsureAccount { renew: false } => "ensure_account".to_string(),
        ScenarioStep::EnsureAccount { renew: true } => "ensure_account:renew".to_string(),
        ScenarioStep::Login => "login".to_string(),
        ScenarioStep::Call { method, path, .. } => format!("call:{method} {path}"),
        ScenarioStep::ExpectFirstName { .. } => "expect_first_name".to_string(),
        ScenarioStep::ExpectPostWithPlace { place_id } => {
            format!("expect_post_with_place:{place_id}")
        }
        ScenarioStep::Sleep { ms } => format!("sleep:{ms}ms"),
        ScenarioStep::Log { message } => format!("log:{}", &message[..message.len().min(30)]),
    }
}

fn parse_method(method: &str) -> HarnessResult<Method> {
    match method.to_ascii_uppercase().as_str() {
        "GET" => Ok(Method::Get),
        "POST" => Ok(Method::Post),
        "DELETE" => Ok(Method::Delete),
        other => Err(HarnessError::UnknownMethod(other.to_string())),
    }
}
