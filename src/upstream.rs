use serde::de::DeserializeOwned;

use crate::models::{Employee, ShiftRule, TimeOffRequest};
use crate::{AppConfig, AppError};

/// The three constraint collections the scheduler consumes.
#[derive(Debug, Clone)]
pub struct ConstraintSet {
    pub employees: Vec<Employee>,
    pub rules: Vec<ShiftRule>,
    pub time_off: Vec<TimeOffRequest>,
}

/// Client for the external constraints service.
#[derive(Clone)]
pub struct ConstraintClient {
    client: reqwest::Client,
    employees_url: String,
    rules_url: String,
    time_off_url: String,
}

impl ConstraintClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            employees_url: config.employees_url.clone(),
            rules_url: config.rules_url.clone(),
            time_off_url: config.time_off_url.clone(),
        }
    }

    /// Fetches all three collections concurrently. Any single failure fails
    /// the whole fetch; retrying is left to the caller's next request.
    pub async fn fetch_all(&self) -> Result<ConstraintSet, AppError> {
        let (employees, rules, time_off) = tokio::try_join!(
            self.fetch::<Employee>(&self.employees_url),
            self.fetch::<ShiftRule>(&self.rules_url),
            self.fetch::<TimeOffRequest>(&self.time_off_url),
        )?;

        tracing::debug!(
            employees = employees.len(),
            rules = rules.len(),
            time_off = time_off.len(),
            "constraint collections fetched"
        );

        Ok(ConstraintSet {
            employees,
            rules,
            time_off,
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, AppError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::error!(error = %e, url, "constraint fetch failed");
            AppError::Upstream(format!("failed to fetch {}: {}", url, e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!(status = %status, url, "constraints service returned error");
            return Err(AppError::Upstream(format!(
                "constraints service error: {} for {}",
                status, url
            )));
        }

        response.json().await.map_err(|e| {
            tracing::error!(error = %e, url, "failed to parse constraint payload");
            AppError::Upstream(format!("failed to parse response from {}: {}", url, e))
        })
    }
}
