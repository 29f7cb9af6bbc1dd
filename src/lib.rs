//! # astc_encoding_choice
//!
//! Encoding choice error estimation for ASTC texture block compression.
//!
//! There are two independent sources of error in any compressed partition:
//!
//!  * Encoding choice errors, caused by encoder decisions, such as:
//!    * using luminance rather than RGB.
//!    * using RGB+scale instead of two full RGB endpoints.
//!    * dropping the alpha channel.
//!  * Quantization errors, which occur due to the limited precision used
//!    for storage.
//!
//! This crate scores the first kind. For a single block and a candidate
//! partition assignment, [`compute_encoding_choice_errors`] estimates in one
//! pass over the texels what color information each coarse encoding
//! simplification would lose, and whether the partition endpoints are
//! eligible for the offset encoding and blue contraction packing tricks.
//! The outer mode search combines these scores with separately computed
//! quantization error estimates to prune candidate encodings before the
//! expensive endpoint quantization search runs.
//!
//! Color statistics (averages, dominant directions, error weightings and
//! scale factors), endpoint fits and partition assignments are produced by
//! the surrounding compressor and passed in; no quantization or bit packing
//! happens here. All output is continuous-domain relative error, used only
//! for decisions.
mod block;
mod encoding_choice;
mod endpoints;
mod line;
mod settings;

pub use block::{ErrorWeightBlock, ImageBlock, PartitionInfo};
pub use encoding_choice::{compute_encoding_choice_errors, ColorStatistics, EncodingChoiceErrors};
pub use endpoints::{merge_endpoints, EndpointFits, Endpoints};
pub use settings::Settings;

pub use glam;
#[cfg(feature = "hdr")]
pub use half;

/// Largest texel footprint of the supported block sizes.
pub const BLOCK_MAX_TEXELS: usize = 216;

/// Largest number of partitions a block can be split into.
pub const BLOCK_MAX_PARTITIONS: usize = 4;
