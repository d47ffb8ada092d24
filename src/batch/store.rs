//! Encoded-batch persistence.
//!
//! The pipeline itself is in-memory; this is the explicit serialization
//! boundary for handing formatted batches to a training process. Batches
//! are `bincode`-framed: compact, and the feature layout is already fixed
//! by the vocabulary, so a self-describing format buys nothing here.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::encode::ModelInput;
use crate::error::{Error, Result};

/// One formatted batch, ready to ship to a trainer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EncodedBatch {
    /// Formatted records, in batch order.
    pub inputs: Vec<ModelInput>,

    /// Epoch the batch was drawn in.
    pub epoch: usize,

    /// Feature-vector length shared by every input (0 for text-only).
    pub feature_len: usize,
}

impl EncodedBatch {
    /// Assemble a batch.
    #[must_use]
    pub fn new(inputs: Vec<ModelInput>, epoch: usize, feature_len: usize) -> Self {
        Self {
            inputs,
            epoch,
            feature_len,
        }
    }

    /// Number of records in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Check if the batch is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Serialize into a writer.
    pub fn write_to(&self, mut writer: impl Write) -> Result<()> {
        let bytes =
            bincode::serialize(self).map_err(|source| Error::MalformedBatch { source })?;
        writer.write_all(&bytes)?;
        Ok(())
    }

    /// Deserialize from a reader.
    pub fn read_from(mut reader: impl Read) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        bincode::deserialize(&bytes).map_err(|source| Error::MalformedBatch { source })
    }
}
