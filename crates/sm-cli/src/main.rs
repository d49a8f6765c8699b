use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Parser;
use dotenvy::dotenv;
use serde_json::Value;
use sm_common::api::{handle_match_request, MatchConfig, MatchRequest, MatchResponse};
use sm_common::logging::{init_tracing_subscriber, install_tracing_panic_hook, LoggingConfig};
use tracing::{info, warn};

const APP_NAME: &str = "sm-match";

#[derive(Debug, Parser)]
#[command(
    name = "sm-match",
    about = "Rank study-partner candidates from a JSON match request"
)]
struct Cli {
    /// Match request JSON file; reads stdin when omitted
    #[arg(long, env = "SM_MATCH_INPUT")]
    input: Option<PathBuf>,

    /// Drop candidates scoring below this (0-100); overrides SM_MIN_SCORE
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    min_score: Option<u8>,

    /// Maximum number of matches; overrides SM_MATCH_LIMIT
    #[arg(long)]
    limit: Option<usize>,

    /// Pretty-print the JSON response
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read match request: {0}")]
    Io(#[from] io::Error),
    #[error("match request is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Cli {
    fn match_config(&self, base: MatchConfig) -> MatchConfig {
        MatchConfig {
            min_score: self.min_score.unwrap_or(base.min_score),
            limit: self.limit.unwrap_or(base.limit),
        }
    }
}

/// Malformed preference data yields an empty response with a message rather than an error.
fn respond(body: &Value, config: &MatchConfig, now: DateTime<Utc>) -> MatchResponse {
    match MatchRequest::from_json(body) {
        Ok(request) => {
            let response = handle_match_request(&request, config, now);
            info!(
                candidates = request.candidates.len(),
                matches = response.total,
                "ranked match request"
            );
            response
        }
        Err(err) => {
            warn!(error = %err, "rejected match request");
            MatchResponse::empty(err.to_string(), now)
        }
    }
}

fn run<R: Read, W: Write>(
    input: R,
    mut output: W,
    config: &MatchConfig,
    pretty: bool,
    now: DateTime<Utc>,
) -> Result<(), CliError> {
    let body: Value = serde_json::from_reader(input)?;
    let response = respond(&body, config, now);

    if pretty {
        serde_json::to_writer_pretty(&mut output, &response)?;
    } else {
        serde_json::to_writer(&mut output, &response)?;
    }
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

fn main() {
    dotenv().ok();
    let logging = LoggingConfig::from_env();
    init_tracing_subscriber(APP_NAME, &logging);
    install_tracing_panic_hook(APP_NAME, &logging);

    let cli = Cli::parse();
    let config = cli.match_config(MatchConfig::from_env());
    let stdout = io::stdout();

    let result = match &cli.input {
        Some(path) => File::open(path)
            .map_err(CliError::from)
            .and_then(|file| run(BufReader::new(file), stdout.lock(), &config, cli.pretty, Utc::now())),
        None => run(io::stdin().lock(), stdout.lock(), &config, cli.pretty, Utc::now()),
    };

    if let Err(err) = result {
        eprintln!("{APP_NAME} failed: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap()
    }

    fn run_str(input: &str, config: &MatchConfig) -> Result<Value, CliError> {
        let mut output = Vec::new();
        run(input.as_bytes(), &mut output, config, false, now())?;
        Ok(serde_json::from_slice(&output)?)
    }

    #[test]
    fn ranks_a_request_from_input() {
        let input = r#"{
            "user": { "courses": ["CS61A"], "studyTimePreferences": ["evening"] },
            "candidates": [
                { "userId": "u2", "preferences": { "courses": ["CS61A"], "studyTimePreferences": ["evening"] } },
                { "userId": "u3", "preferences": { "courses": ["PHYS7A"] } }
            ],
            "minScore": 0
        }"#;

        let response = run_str(input, &MatchConfig::default()).unwrap();

        assert_eq!(response["total"], 2);
        assert_eq!(response["matches"][0]["userId"], "u2");
        assert_eq!(response["matches"][0]["sharedCourses"][0], "CS61A");
        assert_eq!(response["generatedAt"], "2024-01-15T09:00:00Z");
        assert!(response.get("message").is_none());
    }

    #[test]
    fn invalid_preferences_give_empty_response_with_message() {
        let input = r#"{ "user": { "academicYear": "postdoc" }, "candidates": [] }"#;

        let response = run_str(input, &MatchConfig::default()).unwrap();

        assert_eq!(response["total"], 0);
        assert_eq!(response["matches"], serde_json::json!([]));
        assert!(response["message"].as_str().unwrap().contains("academicYear"));
    }

    #[test]
    fn missing_user_gives_empty_response() {
        let response = run_str(r#"{ "candidates": [] }"#, &MatchConfig::default()).unwrap();
        assert_eq!(response["total"], 0);
        assert!(response["message"].is_string());
    }

    #[test]
    fn unparseable_input_is_an_error() {
        let err = run_str("{ not json", &MatchConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::Json(_)));
    }

    #[test]
    fn cli_flags_override_environment_config() {
        let cli = Cli::parse_from(["sm-match", "--min-score", "50", "--pretty"]);
        let config = cli.match_config(MatchConfig {
            min_score: 10,
            limit: 7,
        });

        assert_eq!(config.min_score, 50);
        assert_eq!(config.limit, 7);
        assert!(cli.pretty);
    }

    #[test]
    fn min_score_flag_is_bounded() {
        assert!(Cli::try_parse_from(["sm-match", "--min-score", "101"]).is_err());
    }
}
