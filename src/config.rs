use crate::store::attendance::AttendancePolicy;
use anyhow::{Context, Result};
use chrono::NaiveTime;
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

#[derive(Clone)]
pub struct Config {
    pub jwt_secret: String,
    pub server_addr: String,
    pub access_token_ttl: usize,

    // Rate limiting
    pub rate_login_per_min: u32,
    pub rate_protected_per_min: u32,

    pub api_prefix: String,
    pub log_dir: String,

    pub late_check_in: NaiveTime,
    pub half_day_check_out: NaiveTime,
}

/// Reads `key`, falling back to `default` when unset. A set but malformed value is an error.
fn var_or<T>(key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    raw.trim()
        .parse()
        .with_context(|| format!("{} has an invalid value: {:?}", key, raw))
}

fn time_or(key: &str, default: &str) -> Result<NaiveTime> {
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .with_context(|| format!("{} must be HH:MM (24h), got {:?}", key, raw))
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            access_token_ttl: var_or("ACCESS_TOKEN_TTL", "28800")?, // default 8 hours

            rate_login_per_min: var_or("RATE_LOGIN_PER_MIN", "60")?,
            rate_protected_per_min: var_or("RATE_PROTECTED_PER_MIN", "1000")?,

            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),

            late_check_in: time_or("ATTENDANCE_LATE_CHECK_IN", "09:30")?,
            half_day_check_out: time_or("ATTENDANCE_HALF_DAY_CHECK_OUT", "13:00")?,
        })
    }

    pub fn attendance_policy(&self) -> AttendancePolicy {
        AttendancePolicy {
            late_check_in: self.late_check_in,
            half_day_check_out: self.half_day_check_out,
            ..AttendancePolicy::default()
        }
    }
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Self {
            jwt_secret: "test-secret".to_string(),
            server_addr: "127.0.0.1:0".to_string(),
            access_token_ttl: 900,
            rate_login_per_min: 1000,
            rate_protected_per_min: 1000,
            api_prefix: "/api".to_string(),
            log_dir: "logs".to_string(),
            late_check_in: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            half_day_check_out: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_carries_configured_times() {
        let mut config = Config::for_tests();
        config.late_check_in = NaiveTime::from_hms_opt(10, 0, 0).unwrap();

        let policy = config.attendance_policy();
        assert_eq!(policy.late_check_in, config.late_check_in);
        assert_eq!(policy.half_day_check_out, config.half_day_check_out);
    }

    #[test]
    fn time_default_is_parsed_as_24h() {
        let t = time_or("DBJ_TEST_UNSET_TIME_VAR", "13:00").unwrap();
        assert_eq!(t, NaiveTime::from_hms_opt(13, 0, 0).unwrap());
        assert!(time_or("DBJ_TEST_UNSET_TIME_VAR", "1pm").is_err());
    }

    #[test]
    fn numeric_default_is_parsed() {
        let ttl: usize = var_or("DBJ_TEST_UNSET_TTL_VAR", "900").unwrap();
        assert_eq!(ttl, 900);
        assert!(var_or::<u32>("DBJ_TEST_UNSET_TTL_VAR", "ten").is_err());
    }
}
