//! DOM helpers for driving the promotions site through WebDriver.
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::time::Duration;
use thirtyfour::prelude::*;

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const POLL_ATTEMPTS: u32 = 30;

/// Yew listens for `change`, which WebDriver does not fire for `<select>`.
const SELECT_SCRIPT: &str = "const el = document.getElementById(arguments[0]);\
     if (!el) { return false; }\
     el.value = arguments[1];\
     el.dispatchEvent(new Event('change', { bubbles: true }));\
     return true;";

/// Join `path` onto `base` with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        format!("{base}/")
    } else {
        format!("{base}/{path}")
    }
}

#[derive(Debug, Clone)]
pub struct SitePage<'a> {
    driver: &'a WebDriver,
    base_url: String,
}

impl<'a> SitePage<'a> {
    pub fn new(driver: &'a WebDriver, base_url: impl Into<String>) -> Self {
        Self {
            driver,
            base_url: base_url.into(),
        }
    }

    pub const fn driver(&self) -> &'a WebDriver {
        self.driver
    }

    pub async fn open(&self, path: &str) -> Result<()> {
        let url = join_url(&self.base_url, path);
        self.driver
            .goto(&url)
            .await
            .with_context(|| format!("navigating to {url}"))?;
        Ok(())
    }

    /// Start from a clean slate: no remembered age, consent or submissions.
    pub async fn reset_storage(&self) -> Result<()> {
        self.open("/").await?;
        self.driver
            .execute("window.localStorage.clear();", vec![])
            .await
            .context("clearing localStorage")?;
        Ok(())
    }

    pub async fn storage_item(&self, key: &str) -> Result<Option<String>> {
        let ret = self
            .driver
            .execute(
                "return window.localStorage.getItem(arguments[0]);",
                vec![Value::from(key)],
            )
            .await?;
        Ok(ret.json().as_str().map(str::to_string))
    }

    pub async fn fill(&self, id: &str, text: &str) -> Result<()> {
        let el = self
            .driver
            .find(By::Id(id))
            .await
            .with_context(|| format!("finding #{id}"))?;
        el.clear().await?;
        el.send_keys(text).await?;
        Ok(())
    }

    pub async fn click(&self, css: &str) -> Result<()> {
        self.driver
            .find(By::Css(css))
            .await
            .with_context(|| format!("finding {css}"))?
            .click()
            .await?;
        Ok(())
    }

    pub async fn select(&self, id: &str, value: &str) -> Result<()> {
        let ret = self
            .driver
            .execute(SELECT_SCRIPT, vec![Value::from(id), Value::from(value)])
            .await?;
        if !ret.json().as_bool().unwrap_or(false) {
            bail!("no <select id=\"{id}\"> on the page");
        }
        Ok(())
    }

    pub async fn text(&self, css: &str) -> Result<String> {
        let el = self
            .driver
            .find(By::Css(css))
            .await
            .with_context(|| format!("finding {css}"))?;
        Ok(el.text().await?)
    }

    pub async fn count(&self, css: &str) -> Result<usize> {
        Ok(self.driver.find_all(By::Css(css)).await?.len())
    }

    /// Poll until the path of the current URL ends with `suffix`.
    pub async fn wait_for_path(&self, suffix: &str) -> Result<()> {
        let mut last = String::new();
        for _ in 0..POLL_ATTEMPTS {
            last = self.driver.current_url().await?.path().to_string();
            if last.ends_with(suffix) {
                return Ok(());
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
        bail!("expected path ending in {suffix}, still on {last}")
    }

    /// Poll until at least `min` elements match `css`.
    pub async fn wait_for_count(&self, css: &str, min: usize) -> Result<usize> {
        let mut seen = 0;
        for _ in 0..POLL_ATTEMPTS {
            seen = self.count(css).await?;
            if seen >= min {
                return Ok(seen);
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
        bail!("expected at least {min} of {css}, found {seen}")
    }

    /// Pass the age gate with an adult birth date.
    pub async fn verify_age(&self, remember: bool) -> Result<()> {
        self.fill("age-month", "01").await?;
        self.fill("age-day", "15").await?;
        self.fill("age-year", "1980").await?;
        if remember {
            self.click("#age-remember").await?;
        }
        self.click("main.age-gate button[type='submit']").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(join_url("http://localhost:8080/", "/faq"), "http://localhost:8080/faq");
        assert_eq!(join_url("http://localhost:8080", "faq"), "http://localhost:8080/faq");
        assert_eq!(join_url("http://localhost:8080/promo", "/"), "http://localhost:8080/promo/");
    }
}
