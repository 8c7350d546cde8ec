//! Scripted browser login for the test account
//!
//! Drives a real browser through the social site's login form so that later
//! "Login with ..." flows in the app under test proceed without a password
//! prompt. This is the only place browser automation is used; the account
//! lifecycle itself never touches a browser.

use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

use crate::account::TestAccount;
use crate::error::{FixtureError, Result};

/// Configuration for the login simulation
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Login page of the social site
    pub login_page: String,

    /// URL of the app under test to navigate back to after login
    pub return_url: String,

    /// Run the browser headless
    pub headless: bool,

    /// Form-submit timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            login_page: "https://www.facebook.com/".to_string(),
            return_url: "http://127.0.0.1:8000/".to_string(),
            headless: true,
            timeout_ms: 15_000,
        }
    }
}

/// Playwright-backed browser that performs the login form dance
pub struct LoginBrowser {
    config: BrowserConfig,
}

impl LoginBrowser {
    pub fn new(config: BrowserConfig) -> Result<Self> {
        Self::check_playwright_installed()?;
        Ok(Self { config })
    }

    fn check_playwright_installed() -> Result<()> {
        let status = std::process::Command::new("npx")
            .args(["playwright", "--version"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => Ok(()),
            _ => Err(FixtureError::Browser(
                "Playwright not found. Install with: npx playwright install".to_string(),
            )),
        }
    }

    /// Log the test account in on the social site, then navigate back to
    /// the app under test.
    pub async fn login(&self, account: &TestAccount) -> Result<()> {
        let script = self.build_script(&account.email, &account.password);
        self.run_script(&script).await?;
        info!(id = %account.id, "test account logged in via browser");
        Ok(())
    }

    /// Build the Playwright script for the login form dance
    fn build_script(&self, email: &str, password: &str) -> String {
        format!(
            r#"
const {{ chromium }} = require('playwright');

(async () => {{
  const browser = await chromium.launch({{ headless: {headless} }});
  const page = await browser.newPage();

  try {{
    await page.goto('{login_page}');
    await page.fill('input[name="email"]', '{email}');
    await page.fill('input[name="pass"]', '{password}');
    await page.click('#loginbutton, input[type="submit"]', {{ timeout: {timeout} }});
    await page.waitForLoadState('networkidle');
    await page.goto('{return_url}');
    console.log(JSON.stringify({{ success: true }}));
  }} catch (error) {{
    console.error(JSON.stringify({{ success: false, error: error.message }}));
    process.exit(1);
  }} finally {{
    await browser.close();
  }}
}})();
"#,
            headless = self.config.headless,
            login_page = js_quote(&self.config.login_page),
            email = js_quote(email),
            password = js_quote(password),
            timeout = self.config.timeout_ms,
            return_url = js_quote(&self.config.return_url),
        )
    }

    async fn run_script(&self, script: &str) -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let script_path = temp_dir.path().join("login.js");
        std::fs::write(&script_path, script)?;

        debug!("running login script: {}", script_path.display());

        let output = Command::new("node")
            .arg(&script_path)
            .current_dir(temp_dir.path())
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FixtureError::Browser(format!("login script failed: {}", stderr.trim())));
        }

        Ok(())
    }
}

/// Escape a value for embedding in a single-quoted JS string
fn js_quote(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn browser() -> LoginBrowser {
        // Bypass the installation probe; script generation needs no browser.
        LoginBrowser {
            config: BrowserConfig::default(),
        }
    }

    #[test]
    fn script_fills_the_login_form_and_returns() {
        let script = browser().build_script("rita_tester@tfbnw.net", "p4ss");
        assert!(script.contains(r#"page.fill('input[name="email"]', 'rita_tester@tfbnw.net')"#));
        assert!(script.contains(r#"page.fill('input[name="pass"]', 'p4ss')"#));
        assert!(script.contains("https://www.facebook.com/"));
        assert!(script.contains("http://127.0.0.1:8000/"));
    }

    #[test]
    fn credentials_are_escaped_for_the_script() {
        let script = browser().build_script("o'brien@tfbnw.net", "a'b\\c");
        assert!(script.contains(r#"'o\'brien@tfbnw.net'"#));
        assert!(script.contains(r#"'a\'b\\c'"#));
    }
}
