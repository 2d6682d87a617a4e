use anyhow::Context;
use clap::{Parser, Subcommand};
use covid_core::{Config, ReportService, default_report_date};
use inquire::Text;
use serde::Serialize;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "covid", version, about = "COVID-19 daily reports and time series from JHU CSSE")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Worldwide confirmed/deaths/recovered totals.
    Brief {
        /// Report date as YYYY-MM-DD; defaults to yesterday (UTC).
        #[arg(long)]
        date: Option<String>,
    },

    /// Every region of one daily report.
    Countries {
        /// Report date as YYYY-MM-DD; defaults to yesterday (UTC).
        #[arg(long)]
        date: Option<String>,
    },

    /// Totals for one country, summed over its provinces.
    Country {
        /// Country name, matched case-insensitively.
        name: String,

        /// Report date as YYYY-MM-DD; defaults to yesterday (UTC).
        #[arg(long)]
        date: Option<String>,
    },

    /// Confirmed-cases time series, for all regions or one country.
    Timeseries {
        /// Country name, matched case-insensitively. Prints `null` if absent.
        #[arg(long)]
        country: Option<String>,
    },

    /// Set upstream URLs and log level. Prompts when no flag is given.
    Configure {
        #[arg(long)]
        daily_base_url: Option<String>,

        #[arg(long)]
        time_series_url: Option<String>,

        #[arg(long)]
        log_level: Option<String>,
    },
}

impl Cli {
    pub async fn run(self, mut config: Config) -> anyhow::Result<()> {
        let service = ReportService::from_config(&config);

        match self.command {
            Command::Brief { date } => {
                let date = resolve_date(date);
                print_json(&service.brief(&date).await?)
            }
            Command::Countries { date } => {
                let date = resolve_date(date);
                print_json(&service.countries(&date).await?)
            }
            Command::Country { name, date } => {
                let date = resolve_date(date);
                print_json(&service.country(&date, &name).await?)
            }
            Command::Timeseries { country: Some(country) } => {
                print_json(&service.time_series_for_country(&country).await?)
            }
            Command::Timeseries { country: None } => print_json(&service.time_series().await?),
            Command::Configure { daily_base_url, time_series_url, log_level } => {
                if daily_base_url.is_none() && time_series_url.is_none() && log_level.is_none() {
                    prompt_config(&mut config)?;
                } else {
                    if let Some(url) = daily_base_url {
                        config.set_daily_reports_base_url(&url);
                    }
                    if let Some(url) = time_series_url {
                        config.set_time_series_url(&url);
                    }
                    if let Some(level) = log_level {
                        config.set_log_level(&level);
                    }
                }

                config.save()?;
                println!("Saved configuration to {}", Config::config_file_path()?.display());
                Ok(())
            }
        }
    }
}

fn resolve_date(date: Option<String>) -> String {
    date.unwrap_or_else(|| default_report_date(chrono::Utc::now()))
}

fn prompt_config(config: &mut Config) -> anyhow::Result<()> {
    let endpoints = config.endpoints();

    let daily = Text::new("Daily reports base URL:")
        .with_initial_value(&endpoints.daily_reports_base_url)
        .prompt()
        .context("Failed to read daily reports base URL")?;
    config.set_daily_reports_base_url(&daily);

    let series = Text::new("Time series URL:")
        .with_initial_value(&endpoints.time_series_url)
        .prompt()
        .context("Failed to read time series URL")?;
    config.set_time_series_url(&series);

    let level = Text::new("Log level (blank for default):")
        .with_initial_value(config.log_level.as_deref().unwrap_or(""))
        .prompt()
        .context("Failed to read log level")?;
    config.set_log_level(&level);

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
