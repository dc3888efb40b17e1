use crate::core::{PublishError, PublishedRecord, RecordPublisher};
use async_trait::async_trait;
use aws_sdk_kinesis::{primitives::Blob, Client};

#[derive(Debug)]
pub struct KinesisRecordPublisher {
    stream_name: String,
    kinesis_client: Client,
}

impl KinesisRecordPublisher {
    pub fn new(stream_name: String, kinesis_client: Client) -> Self {
        Self {
            stream_name,
            kinesis_client,
        }
    }
}

#[async_trait]
impl RecordPublisher for KinesisRecordPublisher {
    async fn put_record(
        &self,
        partition_key: &str,
        data: Vec<u8>,
    ) -> Result<PublishedRecord, PublishError> {
        self.kinesis_client
            .put_record()
            .stream_name(&self.stream_name)
            .partition_key(partition_key)
            .data(Blob::new(data))
            .send()
            .await
            .map(|output| PublishedRecord {
                shard_id: output.shard_id().to_string(),
                sequence_number: output.sequence_number().to_string(),
            })
            .map_err(|e| PublishError::PutRecord {
                stream_name: self.stream_name.clone(),
                message: format!("{:?}", e),
            })
    }
}
