use std::env;

use crate::models::Week;
use crate::scheduler::DEFAULT_PLANNING_WEEKS;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub employees_url: String,
    pub rules_url: String,
    pub time_off_url: String,
    pub port: u16,
    pub planning_weeks: Vec<Week>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let employees_url =
            env::var("EMPLOYEES_URL").map_err(|_| "EMPLOYEES_URL must be set".to_string())?;

        let rules_url =
            env::var("SHIFT_RULES_URL").map_err(|_| "SHIFT_RULES_URL must be set".to_string())?;

        let time_off_url =
            env::var("TIME_OFF_URL").map_err(|_| "TIME_OFF_URL must be set".to_string())?;

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| format!("PORT must be a port number, got '{}'", raw))?,
            Err(_) => 8080,
        };

        let planning_weeks = match env::var("PLANNING_WEEKS") {
            Ok(raw) => parse_weeks(&raw)?,
            Err(_) => DEFAULT_PLANNING_WEEKS.to_vec(),
        };

        Ok(Self {
            employees_url,
            rules_url,
            time_off_url,
            port,
            planning_weeks,
        })
    }
}

fn parse_weeks(raw: &str) -> Result<Vec<Week>, String> {
    let weeks: Vec<Week> = raw
        .split(',')
        .map(|part| part.trim().parse())
        .collect::<Result<_, _>>()
        .map_err(|_| {
            format!(
                "PLANNING_WEEKS must be a comma-separated list of week numbers, got '{}'",
                raw
            )
        })?;

    if weeks.is_empty() {
        return Err("PLANNING_WEEKS must name at least one week".to_string());
    }

    Ok(weeks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_comma_separated_week_list() {
        assert_eq!(parse_weeks("23,24, 25 ,26").unwrap(), vec![23, 24, 25, 26]);
    }

    #[test]
    fn rejects_non_numeric_weeks() {
        assert!(parse_weeks("23,june").is_err());
    }

    #[test]
    fn rejects_an_empty_list() {
        assert!(parse_weeks("").is_err());
    }
}
