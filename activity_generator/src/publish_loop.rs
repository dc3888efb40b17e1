use crate::pacer::Pacer;
use shared::core::{EventGenerator, PublishError, RecordPublisher};
use tokio_util::sync::CancellationToken;

pub(crate) struct LoopDeps<G: EventGenerator, P: RecordPublisher, S: Pacer> {
    pub generator: G,
    pub publisher: P,
    pub pacer: S,
}

/// Generates, publishes and paces until `cancel` fires, returning the number of
/// records published. The first failed publish ends the loop and is returned
/// as is; nothing is retried.
pub(crate) async fn run_publish_loop<G: EventGenerator, P: RecordPublisher, S: Pacer>(
    deps: &mut LoopDeps<G, P, S>,
    cancel: &CancellationToken,
) -> Result<u64, PublishError> {
    let mut published: u64 = 0;

    while !cancel.is_cancelled() {
        let event = deps.generator.generate();
        let data = event.to_payload()?;

        let record = match deps.publisher.put_record(&event.user_id, data).await {
            Ok(record) => record,
            Err(e) => {
                tracing::error!("Failed to publish event {:?}: {}", event, e);
                return Err(e);
            }
        };
        published += 1;

        tracing::info!(
            shard_id = %record.shard_id,
            sequence_number = %record.sequence_number,
            "Sent: {:?}",
            event
        );

        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = deps.pacer.pause() => {}
        }
    }

    tracing::warn!(published, "Publish loop stopped");

    Ok(published)
}
