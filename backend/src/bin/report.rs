//! Terminal report of the dashboard views.
//!
//! # Usage
//!
//! ```bash
//! audience-report days
//! audience-report day 2025-03-01
//! audience-report trend fakty [DAYS] [excludingBreaks|includingBreaks]
//! audience-report history fakty
//! audience-report program 2025-03-01 fakty
//! audience-report competition [2025-03-01]
//! ```
//!
//! Configuration is resolved like the server's (`AUDIENCE_CONFIG`,
//! `dashboard.toml`, environment). Logs go to stderr; the report goes to
//! stdout. The exit status is non-zero when the view ends in an error.

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, bail, Context};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use audience_dash::api::AvgMode;
use audience_dash::client::ApiClient;
use audience_dash::config::DashboardConfig;
use audience_dash::render::{render_state, Render};
use audience_dash::services::{self, TrendRequest, ViewData, ViewState};

const USAGE: &str = "usage: audience-report <days | day DATE | trend SLUG [DAYS] [MODE] | \
history SLUG | program DATE SLUG | competition [DATE]>";

/// Parsed command line.
#[derive(Debug, PartialEq)]
enum Command {
    Days,
    Day { date: String },
    Trend { slug: String, days: Option<u32>, mode: Option<AvgMode> },
    History { slug: String },
    Program { date: String, slug: String },
    Competition { date: Option<String> },
}

fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let arg = |i: usize, name: &str| {
        args.get(i)
            .cloned()
            .ok_or_else(|| anyhow!("missing {}\n{}", name, USAGE))
    };

    let command = match args.first().map(String::as_str) {
        Some("days") => Command::Days,
        Some("day") => Command::Day { date: arg(1, "DATE")? },
        Some("trend") => Command::Trend {
            slug: arg(1, "SLUG")?,
            days: args
                .get(2)
                .map(|d| d.parse::<u32>().with_context(|| format!("invalid DAYS '{}'", d)))
                .transpose()?,
            mode: args
                .get(3)
                .map(|m| m.parse::<AvgMode>().map_err(|e| anyhow!(e)))
                .transpose()?,
        },
        Some("history") => Command::History { slug: arg(1, "SLUG")? },
        Some("program") => Command::Program {
            date: arg(1, "DATE")?,
            slug: arg(2, "SLUG")?,
        },
        Some("competition") => Command::Competition {
            date: args.get(1).cloned(),
        },
        Some(other) => bail!("unknown command '{}'\n{}", other, USAGE),
        None => bail!("{}", USAGE),
    };
    Ok(command)
}

fn print_view<T: Render + ViewData>(title: &str, result: services::ServiceResult<T>) -> ExitCode {
    let state = ViewState::from_result(result);
    print!("{}", render_state(title, &state));
    if state.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

async fn run(command: Command, config: &DashboardConfig) -> anyhow::Result<ExitCode> {
    let client = ApiClient::new(&config.client_config())?;
    debug!(upstream = client.base_url(), ?command, "running report");

    let trend = &config.trend;
    let code = match command {
        Command::Days => print_view("Measurement days", services::load_days(&client).await),
        Command::Day { date } => print_view(
            &format!("Day {}", date),
            services::load_day_overview(&client, &date, trend.window).await,
        ),
        Command::Trend { slug, days, mode } => {
            let request = TrendRequest::new(slug.clone())
                .with_days(days.unwrap_or(trend.days))
                .with_mode(mode.unwrap_or(trend.mode))
                .with_window(trend.window);
            print_view(
                &format!("Trend {}", slug),
                services::load_program_trend(&client, &request).await,
            )
        }
        Command::History { slug } => print_view(
            &format!("History {}", slug),
            services::load_program_history(&client, &slug, trend.window).await,
        ),
        Command::Program { date, slug } => print_view(
            &format!("Program {} on {}", slug, date),
            services::find_program(&client, &date, &slug).await,
        ),
        Command::Competition { date } => {
            // The competition view opens on the last listed day.
            let date = match date {
                Some(date) => date,
                None => services::load_days(&client)
                    .await?
                    .competition_default
                    .ok_or_else(|| anyhow!("no measurement days available"))?,
            };
            print_view(
                &format!("Competition {}", date),
                services::load_competition(&client, &date).await,
            )
        }
    };
    Ok(code)
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::WARN),
        )
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = parse_args(&args)?;

    let config_path = env::var_os("AUDIENCE_CONFIG").map(PathBuf::from);
    let config = DashboardConfig::load(config_path.as_deref())?;

    run(command, &config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_trend_with_options() {
        let command = parse_args(&args(&["trend", "fakty", "14", "includingBreaks"])).unwrap();
        assert_eq!(
            command,
            Command::Trend {
                slug: "fakty".to_string(),
                days: Some(14),
                mode: Some(AvgMode::IncludingBreaks),
            }
        );
    }

    #[test]
    fn test_parse_program_needs_slug() {
        assert!(parse_args(&args(&["program", "2025-03-01"])).is_err());
    }

    #[test]
    fn test_parse_competition_date_is_optional() {
        assert_eq!(
            parse_args(&args(&["competition"])).unwrap(),
            Command::Competition { date: None }
        );
        assert_eq!(
            parse_args(&args(&["competition", "2025-03-01"])).unwrap(),
            Command::Competition {
                date: Some("2025-03-01".to_string())
            }
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(parse_args(&args(&["export"])).is_err());
        assert!(parse_args(&[]).is_err());
    }
}
