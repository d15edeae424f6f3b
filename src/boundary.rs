//
// Copyright (c) 2025 Nathan Fiedler
//

//! The content-defined boundary detector.
//!
//! This implements the FastCDC cut-point algorithm: a rolling fingerprint
//! over the [`crate::gear::GEAR`] table, tested against a strict mask below
//! [`NORMAL_SIZE`] and a relaxed mask at or above it, bounded by [`MIN_SIZE`]
//! and [`MAX_SIZE`]. The sizes and masks here are fixed constants rather
//! than constructor arguments: two instances of this library must agree on
//! cut points for the same bytes, which only holds if the wire-level
//! parameters never vary.

use crate::gear::GEAR;

/// Minimum chunk size in bytes. No boundary is ever reported before this
/// many bytes have been scanned.
pub const MIN_SIZE: usize = 2048;
/// Maximum chunk size in bytes. A boundary is forced if none is found by
/// this point.
pub const MAX_SIZE: usize = 65536;
/// The target ("normal") chunk size. Below this, [`MASK_S`] governs;
/// at or above it, [`MASK_L`] governs.
pub const NORMAL_SIZE: usize = 8192;

/// Strict mask, used while the candidate chunk is below [`NORMAL_SIZE`].
/// Has more set bits than [`MASK_L`], so a match is rarer.
pub const MASK_S: u64 = 0x0003590703530000;
/// Relaxed mask, used once the candidate chunk has reached [`NORMAL_SIZE`].
/// Has fewer set bits than [`MASK_S`], so a match is more likely.
pub const MASK_L: u64 = 0x0000d90003530000;
/// The classical FastCDC "average" mask. Defined for documentation and for
/// any caller wiring up a third regime, but [`compute`] only ever applies
/// [`MASK_S`] and [`MASK_L`] - the reference this crate was distilled from
/// never uses it either.
pub const MASK_A: u64 = 0x0000d90303530000;

/// Find the cut point of the first chunk that begins at offset 0 of `buf`.
///
/// Returns the index of the chunk's last byte when a content-defined
/// boundary is found within `buf`, or `buf.len()` when the buffer was
/// exhausted (or too short to scan at all) without finding one. Callers
/// turn this into a slice length themselves - see [`crate::signer::signatures`].
pub fn compute(buf: &[u8]) -> usize {
    let n = buf.len();
    if n <= MIN_SIZE {
        return n;
    }

    let effective_max = n.min(MAX_SIZE);
    let effective_normal = effective_max.min(NORMAL_SIZE);

    let mut fp: u64 = 0;
    let mut i = MIN_SIZE;

    while i < effective_normal {
        fp = (fp << 1).wrapping_add(GEAR[buf[i] as usize]);
        if fp & MASK_S == 0 {
            log::trace!("boundary (strict) at {i}");
            return i;
        }
        i += 1;
    }

    while i < effective_max {
        fp = (fp << 1).wrapping_add(GEAR[buf[i] as usize]);
        if fp & MASK_L == 0 {
            log::trace!("boundary (relaxed) at {i}");
            return i;
        }
        i += 1;
    }

    log::trace!("forced cut at {effective_max}");
    effective_max
}
