//! Sharded batch encoding and decoding.
//!
//! Records are independent, so a batch is split into shards of
//! `shard_size` and each shard runs on the blocking pool. Output order always
//! matches input order.

use bytes::{Bytes, BytesMut};
use deposit_ssz_core::{decode, encode, DepositInput};
use tokio::task::{self, JoinHandle};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Configuration for [`BatchCodec`].
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Records per blocking task.
    pub shard_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { shard_size: 1024 }
    }
}

impl BatchConfig {
    /// Set the shard size (at least 1).
    pub fn with_shard_size(mut self, shard_size: usize) -> Self {
        self.shard_size = shard_size.max(1);
        self
    }
}

/// Encodes and decodes batches of deposit inputs.
#[derive(Debug, Clone, Default)]
pub struct BatchCodec {
    config: BatchConfig,
}

impl BatchCodec {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    fn shard_size(&self) -> usize {
        self.config.shard_size.max(1)
    }

    /// Encode every record, one frame per record.
    pub async fn encode_all(&self, records: Vec<DepositInput>) -> Result<Vec<Vec<u8>>> {
        let shard_size = self.shard_size();
        debug!(records = records.len(), shard_size, "encoding batch");

        let handles: Vec<JoinHandle<Vec<Vec<u8>>>> = records
            .chunks(shard_size)
            .map(|shard| {
                let shard = shard.to_vec();
                task::spawn_blocking(move || shard.iter().map(encode).collect())
            })
            .collect();

        let mut frames = Vec::with_capacity(records.len());
        for handle in handles {
            frames.extend(join(handle).await?);
        }
        Ok(frames)
    }

    /// Decode every frame.
    ///
    /// Fails with [`Error::Frame`] naming the first frame (by input index)
    /// that does not decode.
    pub async fn decode_all(&self, frames: Vec<Vec<u8>>) -> Result<Vec<DepositInput>> {
        let shard_size = self.shard_size();
        debug!(frames = frames.len(), shard_size, "decoding batch");

        let total = frames.len();
        let mut handles: Vec<JoinHandle<Result<Vec<DepositInput>>>> = Vec::new();
        let mut frames = frames.into_iter();
        let mut base = 0;
        while base < total {
            let shard: Vec<Vec<u8>> = frames.by_ref().take(shard_size).collect();
            let shard_base = base;
            base += shard.len();
            handles.push(task::spawn_blocking(move || {
                decode_shard(shard_base, &shard)
            }));
        }

        let mut records = Vec::with_capacity(total);
        for handle in handles {
            records.extend(join(handle).await??);
        }
        Ok(records)
    }

    /// Write records back to back into one buffer.
    pub fn encode_concatenated(&self, records: &[DepositInput]) -> Bytes {
        let mut buf = BytesMut::with_capacity(records.len() * DepositInput::WIDTH);
        for record in records {
            record.encode_to(&mut buf);
        }
        buf.freeze()
    }

    /// Decode a back-to-back stream of records.
    ///
    /// A trailing partial record fails as [`Error::Frame`] with the index it
    /// would have had.
    pub fn decode_concatenated(&self, bytes: &[u8]) -> Result<Vec<DepositInput>> {
        let mut source = bytes;
        let mut records = Vec::with_capacity(bytes.len() / DepositInput::WIDTH);
        while !source.is_empty() {
            let index = records.len();
            let record = DepositInput::decode_from(&mut source).map_err(|err| {
                warn!(index, error = %err, "rejected trailing bytes");
                Error::Frame { index, source: err }
            })?;
            records.push(record);
        }
        Ok(records)
    }
}

fn decode_shard(base: usize, shard: &[Vec<u8>]) -> Result<Vec<DepositInput>> {
    shard
        .iter()
        .enumerate()
        .map(|(offset, frame)| {
            let index = base + offset;
            decode(frame).map_err(|source| {
                warn!(index, error = %source, "rejected frame");
                Error::Frame { index, source }
            })
        })
        .collect()
}

async fn join<T>(handle: JoinHandle<T>) -> Result<T> {
    handle.await.map_err(|e| Error::Worker(e.to_string()))
}
