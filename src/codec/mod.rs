//! Share-token codec
//!
//! A world serializes to a printable string carried in a URL fragment.
//! Two wire formats share one symbol alphabet: Format A (delta-coded,
//! tagged `"A/"`) and the legacy fixed-stride format. Encoding always
//! produces Format A; decoding accepts both.

pub mod alphabet;
pub mod delta;
pub mod legacy;

use crate::core::types::Result;
use crate::voxel::{Voxel, VoxelWorld};

/// Decode a share token into a voxel sequence
///
/// The empty token is the empty world. A token without the Format A
/// version tag falls back to the legacy format. Symbols outside the
/// alphabet are a hard error; truncated trailing records and
/// out-of-range colors are dropped with a warning.
pub fn decode(token: &str) -> Result<Vec<Voxel>> {
    if token.is_empty() {
        return Ok(Vec::new());
    }
    match token.strip_prefix(delta::VERSION_TAG) {
        Some(payload) => delta::decode(payload),
        None => legacy::decode(token),
    }
}

/// Encode a world into its canonical share token
///
/// Canonical form is Format A; the empty world encodes to the empty
/// token. `decode(encode(w))` reproduces the exact voxel sequence.
pub fn encode(world: &VoxelWorld) -> String {
    delta::encode(world.iter())
}
