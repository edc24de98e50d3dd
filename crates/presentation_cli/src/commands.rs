//! Command execution

use std::path::Path;

use anyhow::Context;
use application::ports::{InboundRecord, InboundStream};
use application::services::time_utils::format_platform_timestamp;
use chrono::Utc;
use domain::Timezone;
use futures::StreamExt;
use infrastructure::{AppConfig, build_classifier, build_services};
use serde_json::Value;
use tracing::info;

use crate::cli::{Cli, Commands, MessageArgs};

/// Load configuration and apply command-line overrides
pub fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match cli.config.as_deref() {
        Some(path) => {
            anyhow::ensure!(
                is_supported_config(path),
                "unsupported config format: {}",
                path.display()
            );
            AppConfig::load_from(path).with_context(|| format!("loading {}", path.display()))?
        },
        None => AppConfig::load().context("loading configuration")?,
    };
    apply_overrides(&mut config, cli);
    Ok(config)
}

/// Apply flags that override file and environment settings
pub fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if cli.command.is_dry_run() {
        config.bot.dry_run = true;
    }
    if cli.json_logs {
        config.telemetry.json = true;
    }
}

/// Build the record a command-line message stands for
pub fn message_record(args: &MessageArgs) -> InboundRecord {
    let created_at = args
        .created_at
        .clone()
        .unwrap_or_else(|| format_platform_timestamp(Utc::now()));

    let record = InboundRecord::message(
        args.id.clone(),
        args.author.trim_start_matches('@'),
        args.text.clone(),
        created_at,
    );
    match &args.time_zone {
        Some(label) => record.with_time_zone(label.clone()),
        None => record,
    }
}

/// Run a command and return its JSON output
pub async fn execute(command: Commands, config: &AppConfig) -> anyhow::Result<Value> {
    match command {
        Commands::Run { limit, .. } => {
            let services = build_services(config)?;
            let stream = services.social.open_stream().await?;
            let stream: InboundStream = match limit {
                Some(limit) => Box::pin(stream.take(limit)),
                None => stream,
            };
            let summary = services.sky_reply.run(stream).await?;
            Ok(serde_json::to_value(summary)?)
        },

        Commands::Reply { message } => {
            let services = build_services(config)?;
            let outcome = services.sky_reply.handle(&message_record(&message)).await?;
            if outcome.is_none() {
                info!("No reply is due for this message");
            }
            Ok(serde_json::to_value(outcome)?)
        },

        Commands::Classify { message } => {
            let classifier = build_classifier(config)?;
            let intent = classifier.classify(&message_record(&message)).await?;
            Ok(serde_json::to_value(intent)?)
        },

        Commands::Sky {
            place,
            strict,
            at,
            time_zone,
        } => {
            let services = build_services(config)?;
            let instant = at.unwrap_or_else(Utc::now);
            let zone = Timezone::from_platform_label(time_zone.as_deref());
            let report = services
                .sky_reply
                .report(&place, strict, instant, &zone)
                .await?;
            Ok(serde_json::to_value(report)?)
        },
    }
}

/// Whether a path looks like a config file the loader understands
pub fn is_supported_config(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("toml" | "json" | "yaml" | "yml")
    )
}
