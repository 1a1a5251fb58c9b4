//! Format A wire format: delta-coded, variable stride
//!
//! Tagged `"A/"`. Records run against a cursor `{x, y, z, color}`
//! starting at zero. Each record is one control symbol plus one delta
//! symbol per changed field; unchanged fields cost nothing, which makes
//! contiguous structures much smaller than the legacy format.

use crate::core::types::{IVec3, Result};
use crate::palette::ColorIndex;
use crate::voxel::Voxel;
use super::alphabet;

/// Version tag prefixing every Format A token
pub const VERSION_TAG: &str = "A/";

/// Bias added to every stored delta; symbols hold 0..=63, so deltas
/// span -32..=31 per record
const DELTA_BIAS: i32 = 32;

const MIN_DELTA: i32 = -32;
const MAX_DELTA: i32 = 31;

/// Control symbol bits, most significant first
mod bits {
    pub const COMMIT: u8 = 1 << 4;
    pub const X: u8 = 1 << 3;
    pub const Y: u8 = 1 << 2;
    pub const Z: u8 = 1 << 1;
    pub const COLOR: u8 = 1 << 0;
}

/// Decoded control symbol: which cursor fields this record moves and
/// whether it emits a voxel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlFlags {
    pub commit: bool,
    pub x: bool,
    pub y: bool,
    pub z: bool,
    pub color: bool,
}

impl ControlFlags {
    /// Read flags from a symbol value; bits above the low five are ignored
    pub fn from_symbol(value: u8) -> Self {
        Self {
            commit: value & bits::COMMIT != 0,
            x: value & bits::X != 0,
            y: value & bits::Y != 0,
            z: value & bits::Z != 0,
            color: value & bits::COLOR != 0,
        }
    }

    /// Pack flags into a symbol value
    pub fn to_symbol(self) -> u8 {
        let mut value = 0;
        if self.commit {
            value |= bits::COMMIT;
        }
        if self.x {
            value |= bits::X;
        }
        if self.y {
            value |= bits::Y;
        }
        if self.z {
            value |= bits::Z;
        }
        if self.color {
            value |= bits::COLOR;
        }
        value
    }
}

/// Running decode cursor
#[derive(Clone, Copy, Debug, Default)]
struct Cursor {
    x: i32,
    y: i32,
    z: i32,
    color: i32,
}

/// Decode a Format A payload (without the version tag)
///
/// A record missing a required delta is a recoverable truncation:
/// everything decoded before it is kept. A committed color outside the
/// palette drops that single voxel.
pub fn decode(payload: &str) -> Result<Vec<Voxel>> {
    let values = alphabet::decode_payload(payload)?;
    let mut voxels = Vec::new();
    let mut cursor = Cursor::default();
    let mut iter = values.iter().copied();

    while let Some(control) = iter.next() {
        let flags = ControlFlags::from_symbol(control);

        let mut fields = [
            (flags.x, &mut cursor.x),
            (flags.y, &mut cursor.y),
            (flags.z, &mut cursor.z),
            (flags.color, &mut cursor.color),
        ];
        let mut truncated = false;
        for (changed, field) in &mut fields {
            if !*changed {
                continue;
            }
            match iter.next() {
                Some(value) => **field += i32::from(value) - DELTA_BIAS,
                None => {
                    truncated = true;
                    break;
                }
            }
        }
        if truncated {
            log::warn!("delta token truncated mid-record; keeping {} voxels", voxels.len());
            break;
        }

        if flags.commit {
            match u8::try_from(cursor.color).ok().and_then(ColorIndex::new) {
                Some(color) => {
                    voxels.push(Voxel::new(IVec3::new(cursor.x, cursor.y, cursor.z), color));
                }
                None => {
                    log::warn!("delta token: color {} out of range, voxel dropped", cursor.color);
                }
            }
        }
    }

    Ok(voxels)
}

/// Encode a voxel sequence as a full Format A token (tag included)
///
/// Deltas wider than one symbol spill into extra non-commit records;
/// the final record of each voxel carries the commit flag. The empty
/// sequence encodes to the empty token.
pub fn encode<'a>(voxels: impl IntoIterator<Item = &'a Voxel>) -> String {
    let mut values: Vec<u8> = Vec::new();
    let mut cursor = Cursor::default();

    for voxel in voxels {
        let mut dx = voxel.cell.x - cursor.x;
        let mut dy = voxel.cell.y - cursor.y;
        let mut dz = voxel.cell.z - cursor.z;
        let mut dc = i32::from(voxel.color.index()) - cursor.color;

        loop {
            let step_x = dx.clamp(MIN_DELTA, MAX_DELTA);
            let step_y = dy.clamp(MIN_DELTA, MAX_DELTA);
            let step_z = dz.clamp(MIN_DELTA, MAX_DELTA);
            let step_c = dc.clamp(MIN_DELTA, MAX_DELTA);
            let last =
                step_x == dx && step_y == dy && step_z == dz && step_c == dc;

            let flags = ControlFlags {
                commit: last,
                x: step_x != 0,
                y: step_y != 0,
                z: step_z != 0,
                color: step_c != 0,
            };
            values.push(flags.to_symbol());
            for (changed, step) in [
                (flags.x, step_x),
                (flags.y, step_y),
                (flags.z, step_z),
                (flags.color, step_c),
            ] {
                if changed {
                    values.push((step + DELTA_BIAS) as u8);
                }
            }

            dx -= step_x;
            dy -= step_y;
            dz -= step_z;
            dc -= step_c;
            if last {
                break;
            }
        }

        cursor = Cursor {
            x: voxel.cell.x,
            y: voxel.cell.y,
            z: voxel.cell.z,
            color: i32::from(voxel.color.index()),
        };
    }

    if values.is_empty() {
        return String::new();
    }
    format!("{VERSION_TAG}{}", alphabet::encode_payload(&values))
}
