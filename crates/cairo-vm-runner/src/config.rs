use serde::{Deserialize, Serialize};

/// Configuration of the core hint processor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HintRunnerConfig {
    /// Seed of the ChaCha8 generator `RandomEcPoint` samples from. Runs with the same seed sample
    /// the same points on every platform.
    pub random_ec_point_seed: u64,
    /// The number of bits in each limb of a circuit value.
    pub circuit_word_bit_len: u32,
}

impl Default for HintRunnerConfig {
    fn default() -> Self {
        Self { random_ec_point_seed: 0, circuit_word_bit_len: 96 }
    }
}
