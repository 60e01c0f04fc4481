use argon2::{Algorithm, Argon2, AssociatedData, ParamsBuilder, Version};
use serde::{Deserialize, Serialize};

use crate::encoders::algorithms::errors::HashError;

/// Inputs to a keyed, salted hash. All fields may be empty except where the
/// primitive requires otherwise (Argon2 needs a nonce of at least 8 bytes).
#[derive(Debug, Clone, Default)]
pub struct HashInput {
    pub message: Vec<u8>,
    pub nonce: Vec<u8>,
    pub secret: Vec<u8>,
    pub associated_data: Vec<u8>,
}

/// Cost and output parameters for Argon2id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argon2Params {
    /// Output tag length in bytes (4 to 2^32 - 1).
    pub tag_length: u32,
    /// Number of passes over memory.
    pub iterations: u32,
    /// Lanes and threads.
    pub parallelism: u32,
    /// Memory in KiB, at least `8 * parallelism`.
    pub memory_kib: u32,
}

impl Argon2Params {
    pub const DEFAULT_TAG_LENGTH: u32 = 32;
    pub const DEFAULT_ITERATIONS: u32 = 3;
    pub const DEFAULT_PARALLELISM: u32 = 1;

    /// Default memory size for a given parallelism: 4 MiB per lane.
    pub fn default_memory_kib(parallelism: u32) -> u32 {
        parallelism.saturating_mul(4096)
    }

    /// Total bit length of the tag this configuration produces.
    pub fn tag_bits(&self) -> u64 {
        u64::from(self.tag_length) << 3
    }
}

impl Default for Argon2Params {
    fn default() -> Self {
        Self {
            tag_length: Self::DEFAULT_TAG_LENGTH,
            iterations: Self::DEFAULT_ITERATIONS,
            parallelism: Self::DEFAULT_PARALLELISM,
            memory_kib: Self::default_memory_kib(Self::DEFAULT_PARALLELISM),
        }
    }
}

/// A hashing primitive that produces a fixed-length tag.
pub trait TagHasher {
    /// Length in bytes of the tags this hasher produces.
    fn tag_length(&self) -> usize;

    fn hash(&self, input: &HashInput) -> Result<Vec<u8>, HashError>;
}

/// Argon2id, version 0x13.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2id {
    pub params: Argon2Params,
}

impl Argon2id {
    pub fn new(params: Argon2Params) -> Self {
        Self { params }
    }
}

impl TagHasher for Argon2id {
    fn tag_length(&self) -> usize {
        self.params.tag_length as usize
    }

    fn hash(&self, input: &HashInput) -> Result<Vec<u8>, HashError> {
        let params = &self.params;
        let mut builder = ParamsBuilder::new();
        builder
            .m_cost(params.memory_kib)
            .t_cost(params.iterations)
            .p_cost(params.parallelism)
            .output_len(self.tag_length());
        if !input.associated_data.is_empty() {
            builder.data(AssociatedData::new(&input.associated_data)?);
        }
        let built = builder.build()?;

        let argon = if input.secret.is_empty() {
            Argon2::new(Algorithm::Argon2id, Version::V0x13, built)
        } else {
            Argon2::new_with_secret(&input.secret, Algorithm::Argon2id, Version::V0x13, built)?
        };

        tracing::info!(
            tag_length = params.tag_length,
            iterations = params.iterations,
            parallelism = params.parallelism,
            memory_kib = params.memory_kib,
            "hashing with argon2id"
        );
        let mut tag = vec![0u8; self.tag_length()];
        argon.hash_password_into(&input.message, &input.nonce, &mut tag)?;
        Ok(tag)
    }
}
