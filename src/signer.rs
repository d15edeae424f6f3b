//
// Copyright (c) 2025 Nathan Fiedler
//

//! Partitions a byte buffer into content-defined [`Chunk`]s and fingerprints
//! each one.

use sha2::{Digest, Sha256};

use crate::boundary::compute;

/// An immutable, content-addressed slice of a signed buffer.
///
/// `bytes` is an owned copy rather than a borrow of the source buffer - see
/// `DESIGN.md`'s "chunk byte ownership" entry for why. Two chunks with equal
/// `bytes` always have equal `fingerprint`, by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The chunk's bytes, in source order.
    pub bytes: Vec<u8>,
    /// Zero-based position in the sequence emitted by [`signatures`] for
    /// this buffer.
    pub index: usize,
    /// SHA-256 digest of `bytes`.
    pub fingerprint: [u8; 32],
}

/// Partition `buf` into chunks by repeatedly calling [`compute`].
///
/// Every chunk but possibly the last has length in `[MIN_SIZE, MAX_SIZE]`;
/// the last chunk may be shorter than `MIN_SIZE` only if the buffer's tail
/// is shorter than `MIN_SIZE`. Concatenating the returned chunks' `bytes` in
/// order reproduces `buf` exactly.
pub fn signatures(buf: &[u8]) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut offset = 0;
    let mut counter = 0;

    while offset < buf.len() {
        let idx = compute(&buf[offset..]);
        // `compute` returns an inclusive last-byte index on a real match,
        // but the exhausted remainder length when it ran off the end of the
        // slice; this is the only place that distinction matters.
        let length = if offset + idx < buf.len() { idx + 1 } else { idx };

        let bytes = buf[offset..offset + length].to_vec();
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = hasher.finalize();
        let mut fingerprint = [0u8; 32];
        fingerprint.copy_from_slice(&digest);

        log::debug!("chunk {counter}: offset={offset} length={length}");
        chunks.push(Chunk {
            bytes,
            index: counter,
            fingerprint,
        });

        offset += length;
        counter += 1;
    }

    chunks
}
