use crate::pacer::FixedIntervalPacer;
use crate::publish_loop::{run_publish_loop, LoopDeps};
use anyhow::Context;
use aws_config::{BehaviorVersion, Region};
use shared::adapters::KinesisRecordPublisher;
use shared::configuration::Configuration;
use shared::core::RandomEventGenerator;
use tokio_util::sync::CancellationToken;

mod pacer;
mod publish_loop;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shared::observability::init_tracing();

    let config = Configuration::load().context("Failed to load configuration")?;
    config.validate()?;
    tracing::info!("Publishing to {}", config);

    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .load()
        .await;
    let kinesis_client = aws_sdk_kinesis::Client::new(&aws_config);

    let generator = RandomEventGenerator::from_entropy(config.users.clone(), config.actions.clone())?;
    let publisher = KinesisRecordPublisher::new(config.stream_name.clone(), kinesis_client);
    let pacer = FixedIntervalPacer::new(config.interval());
    let mut deps = LoopDeps {
        generator,
        publisher,
        pacer,
    };

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Shutdown requested, stopping after the current record");
            shutdown.cancel();
        }
    });

    let published = run_publish_loop(&mut deps, &cancel)
        .await
        .with_context(|| format!("Publishing to {} failed", config.stream_name))?;
    tracing::info!("Published {} records", published);

    Ok(())
}
