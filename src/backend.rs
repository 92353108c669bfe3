use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::{
    cmp::Ordering,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u64 = 8080;
const DEFAULT_STATIC_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const PORT_BOUNDS: (u64, u64) = (1, 65_535);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }

    fn from_value(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

#[derive(Clone)]
struct ServerConfig {
    static_dir: PathBuf,
    log_level: LogLevel,
}

impl ServerConfig {
    fn from_env() -> Self {
        let static_dir = parse_env_non_empty_string("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
        let log_level = parse_log_level("LOG_LEVEL", DEFAULT_LOG_LEVEL);

        Self {
            static_dir,
            log_level,
        }
    }
}

#[derive(Serialize)]
struct HealthPayload {
    ok: bool,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let port = parse_env_u64_with_bounds("PORT", DEFAULT_PORT, PORT_BOUNDS);
    let config = ServerConfig::from_env();
    let bind_address = format!("0.0.0.0:{port}");

    let index_path = config.static_dir.join("index.html");
    let static_service =
        ServeDir::new(&config.static_dir).not_found_service(ServeFile::new(index_path));

    let health_config = config.clone();
    let app = Router::new()
        .route(
            "/healthz",
            get(move || {
                let config = health_config.clone();
                async move {
                    log_event(&config, LogLevel::Debug, "health_check", serde_json::json!({}));
                    Json(HealthPayload { ok: true })
                }
            }),
        )
        .fallback_service(static_service);

    log_event(
        &config,
        LogLevel::Info,
        "server_start",
        serde_json::json!({
            "port": port,
            "static_dir": config.static_dir.display().to_string(),
        }),
    );
    println!("server listening on http://127.0.0.1:{port}");

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn parse_env_u64_with_bounds(name: &str, default: u64, bounds: (u64, u64)) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(name: &str, default: LogLevel) -> LogLevel {
    parse_env_non_empty_string(name)
        .and_then(|value| LogLevel::from_value(&value))
        .unwrap_or(default)
}

fn log_event(config: &ServerConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert(
        "level".to_string(),
        serde_json::Value::String(level.as_str().to_string()),
    );
    payload.insert(
        "event".to_string(),
        serde_json::Value::String(event.to_string()),
    );

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_levels_order_debug_below_info() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert_eq!(LogLevel::Info.cmp(&LogLevel::Info), Ordering::Equal);
    }

    #[test]
    fn log_level_parses_known_names_case_insensitively() {
        assert_eq!(LogLevel::from_value("debug"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_value("INFO"), Some(LogLevel::Info));
        assert_eq!(LogLevel::from_value("trace"), None);
        assert_eq!(LogLevel::from_value(""), None);
    }

    #[test]
    fn out_of_bounds_port_falls_back_to_default() {
        std::env::set_var("PORTFOLIO_FX_TEST_PORT", "70000");
        assert_eq!(
            parse_env_u64_with_bounds("PORTFOLIO_FX_TEST_PORT", DEFAULT_PORT, PORT_BOUNDS),
            DEFAULT_PORT
        );

        std::env::set_var("PORTFOLIO_FX_TEST_PORT", "3000");
        assert_eq!(
            parse_env_u64_with_bounds("PORTFOLIO_FX_TEST_PORT", DEFAULT_PORT, PORT_BOUNDS),
            3000
        );
    }

    #[test]
    fn unset_env_yields_defaults() {
        assert_eq!(
            parse_env_u64_with_bounds("PORTFOLIO_FX_TEST_UNSET", DEFAULT_PORT, PORT_BOUNDS),
            DEFAULT_PORT
        );
        assert_eq!(parse_env_non_empty_string("PORTFOLIO_FX_TEST_UNSET"), None);
        assert_eq!(
            parse_log_level("PORTFOLIO_FX_TEST_UNSET", DEFAULT_LOG_LEVEL),
            DEFAULT_LOG_LEVEL
        );
    }

    #[test]
    fn blank_env_values_are_treated_as_unset() {
        std::env::set_var("PORTFOLIO_FX_TEST_BLANK", "   ");
        assert_eq!(parse_env_non_empty_string("PORTFOLIO_FX_TEST_BLANK"), None);
    }
}
