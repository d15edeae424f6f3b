//
// Copyright (c) 2025 Nathan Fiedler
//

//! Computes a change list describing how to transform one chunk sequence
//! into another, identifying chunks solely by fingerprint equality.

use std::collections::HashMap;

use crate::signer::Chunk;

/// The kind of edit a [`Change`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Explicit no-op. Part of the public vocabulary for consumers that
    /// want to emit one; never constructed by [`delta`].
    Nop,
    /// `from` names a chunk present in `src` but absent from `dst`.
    Delete,
    /// `to` names a chunk present in `dst` but absent from `src`; `bytes`
    /// carries its payload.
    Add,
    /// `from`/`to` name the same chunk at different positions in `src` and
    /// `dst`.
    Move,
}

/// A single edit in a change list.
///
/// `from` is meaningful for `Delete`/`Move`, `to` for `Add`/`Move`, `bytes`
/// only for `Add`; the unused fields are left at their default (`0` /
/// empty). `from`/`to` are the chunk's `index` field as assigned at signing
/// time, not a position in any differ-internal working sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub op: Operation,
    pub from: usize,
    pub to: usize,
    pub bytes: Vec<u8>,
}

impl Change {
    fn delete(from: usize) -> Self {
        Change {
            op: Operation::Delete,
            from,
            to: 0,
            bytes: Vec::new(),
        }
    }

    fn add(to: usize, bytes: Vec<u8>) -> Self {
        Change {
            op: Operation::Add,
            from: 0,
            to,
            bytes,
        }
    }

    fn mv(from: usize, to: usize) -> Self {
        Change {
            op: Operation::Move,
            from,
            to,
            bytes: Vec::new(),
        }
    }
}

/// Compute the change list that transforms `src` into `dst`.
///
/// Three sequential passes: deletions, additions, then moves over what's
/// left. Duplicate fingerprints within `src` or `dst` collapse to their last
/// occurrence in the lookup maps built here, so move detection may
/// misreport which duplicate moved. This is a known limitation inherited
/// from the reference this crate was distilled from, not something this
/// implementation attempts to fix.
pub fn delta(src: &[Chunk], dst: &[Chunk]) -> Vec<Change> {
    let mut changes = Vec::new();

    // Pass 1 - deletions. A chunk whose fingerprint doesn't appear anywhere
    // in dst is gone; drop it from the working copy of src so it can't
    // interfere with move detection in pass 3.
    let dst_fingerprints: HashMap<[u8; 32], &Chunk> =
        dst.iter().map(|c| (c.fingerprint, c)).collect();
    let mut working_src: Vec<Chunk> = Vec::with_capacity(src.len());
    for chunk in src {
        if dst_fingerprints.contains_key(&chunk.fingerprint) {
            working_src.push(chunk.clone());
        } else {
            changes.push(Change::delete(chunk.index));
        }
    }
    log::debug!(
        "pass 1 (delete): {} of {} src chunks survive",
        working_src.len(),
        src.len()
    );

    // Pass 2 - additions. A dst chunk whose fingerprint isn't among the
    // surviving src chunks is new; drop it from the working copy of dst so
    // both working sequences end up the same length for pass 3.
    let src_fingerprints: HashMap<[u8; 32], &Chunk> =
        working_src.iter().map(|c| (c.fingerprint, c)).collect();
    let mut working_dst: Vec<Chunk> = Vec::with_capacity(dst.len());
    for chunk in dst {
        if src_fingerprints.contains_key(&chunk.fingerprint) {
            working_dst.push(chunk.clone());
        } else {
            changes.push(Change::add(chunk.index, chunk.bytes.clone()));
        }
    }
    log::debug!(
        "pass 2 (add): {} of {} dst chunks survive",
        working_dst.len(),
        dst.len()
    );

    // Pass 3 - moves. working_src and working_dst now hold the same
    // multiset of fingerprints (modulo the duplicate-fingerprint caveat
    // above), so a positional scan finds everything that isn't already
    // where it needs to be.
    let mut dst_index_by_fingerprint: HashMap<[u8; 32], &Chunk> =
        working_dst.iter().map(|c| (c.fingerprint, c)).collect();
    for (i, src_chunk) in working_src.iter().enumerate() {
        if i < working_dst.len() && working_dst[i].fingerprint == src_chunk.fingerprint {
            continue;
        }
        if let Some(dst_chunk) = dst_index_by_fingerprint.get(&src_chunk.fingerprint).copied() {
            changes.push(Change::mv(src_chunk.index, dst_chunk.index));
            dst_index_by_fingerprint.remove(&src_chunk.fingerprint);
        }
    }

    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::MAX_SIZE;
    use crate::signer::signatures;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Produces `n` chunks from a pseudorandom buffer seeded by `seed`,
    /// mirroring the reference suite's `randomChunks(t, seed, n)` helper.
    fn random_chunks(seed: u64, n: usize) -> Vec<Chunk> {
        let mut rng = StdRng::seed_from_u64(seed);
        let buf: Vec<u8> = (0..n * MAX_SIZE).map(|_| rng.gen()).collect();
        let mut chunks = signatures(&buf);
        chunks.truncate(n);
        chunks
    }

    fn random_chunk(seed: u64, index: usize) -> Chunk {
        let mut c = random_chunks(seed, 1).remove(0);
        c.index = index;
        c
    }

    fn reindexed(mut chunks: Vec<Chunk>) -> Vec<Chunk> {
        for (i, c) in chunks.iter_mut().enumerate() {
            c.index = i;
        }
        chunks
    }

    #[test]
    fn empty_inputs_yield_no_changes() {
        assert!(delta(&[], &[]).is_empty());
    }

    #[test]
    fn identical_sequences_yield_no_changes() {
        let src = random_chunks(100, 4);
        assert!(delta(&src, &src).is_empty());
    }

    #[test]
    fn append_one_chunk() {
        let src = random_chunks(200, 4);
        let x = random_chunk(201, 4);
        let mut dst = src.clone();
        dst.push(x.clone());

        let changes = delta(&src, &dst);
        assert_eq!(changes, vec![Change::add(4, x.bytes.clone())]);
    }

    #[test]
    fn prepend_one_chunk() {
        let src = random_chunks(300, 4);
        let x = random_chunk(301, 0);
        let mut dst = vec![x.clone()];
        dst.extend(src.clone());
        let dst = reindexed(dst);

        let changes = delta(&src, &dst);
        assert_eq!(changes, vec![Change::add(0, x.bytes.clone())]);
    }

    #[test]
    fn prepend_and_delete_middle() {
        let src = random_chunks(400, 4);
        let x = random_chunk(401, 0);
        let mut dst = vec![x.clone()];
        dst.extend(src.clone());
        dst.remove(3); // drops the (pre-prepend) src[2], now at position 3
        let dst = reindexed(dst);

        let changes = delta(&src, &dst);
        assert_eq!(
            changes,
            vec![Change::delete(2), Change::add(0, x.bytes.clone())]
        );
    }

    #[test]
    fn swap_middle_two() {
        let src = random_chunks(500, 4);
        let mut dst = src.clone();
        dst.swap(1, 2);
        let dst = reindexed(dst);

        let changes = delta(&src, &dst);
        assert_eq!(changes, vec![Change::mv(1, 2), Change::mv(2, 1)]);
    }

    #[test]
    fn swap_middle_two_and_append() {
        let src = random_chunks(600, 4);
        let x = random_chunk(601, 4);
        let mut dst = src.clone();
        dst.swap(1, 2);
        dst.push(x.clone());
        let dst = reindexed(dst);

        let changes = delta(&src, &dst);
        assert_eq!(
            changes,
            vec![
                Change::add(4, x.bytes.clone()),
                Change::mv(1, 2),
                Change::mv(2, 1),
            ]
        );
    }

    #[test]
    fn prepend_and_swap_middle() {
        let src = random_chunks(700, 4);
        let x = random_chunk(701, 0);
        let mut dst = src.clone();
        dst.swap(1, 2);
        let mut dst_with_prefix = vec![x.clone()];
        dst_with_prefix.extend(dst);
        let dst = reindexed(dst_with_prefix);

        let changes = delta(&src, &dst);
        assert_eq!(
            changes,
            vec![
                Change::add(0, x.bytes.clone()),
                Change::mv(1, 3),
                Change::mv(2, 2),
            ]
        );
    }

    #[test]
    fn delete_middle_and_swap_around_it() {
        let src = random_chunks(800, 4);
        let mut dst = src.clone();
        dst.remove(2);
        dst.swap(1, 2);
        let dst = reindexed(dst);

        let changes = delta(&src, &dst);
        assert_eq!(
            changes,
            vec![Change::delete(2), Change::mv(1, 2), Change::mv(3, 1)]
        );
    }

    #[test]
    fn replace_middle_and_swap_around_it() {
        let src = random_chunks(900, 4);
        let replacement = random_chunk(901, 2);
        let mut dst = src.clone();
        dst[2] = replacement.clone();
        dst.swap(1, 3);
        let dst = reindexed(dst);

        let changes = delta(&src, &dst);
        assert_eq!(
            changes,
            vec![
                Change::delete(2),
                Change::add(2, replacement.bytes.clone()),
                Change::mv(1, 3),
                Change::mv(3, 1),
            ]
        );
    }

    #[test]
    fn after_delete_and_add_passes_the_working_sets_match() {
        let src = random_chunks(1000, 4);
        let x = random_chunk(1001, 4);
        let mut dst = src.clone();
        dst.remove(1);
        dst.push(x);
        let dst = reindexed(dst);

        // After passes 1 and 2, the surviving fingerprints on both sides
        // must match - that's what makes a positional move scan valid.
        let dst_fp: HashMap<[u8; 32], &Chunk> = dst.iter().map(|c| (c.fingerprint, c)).collect();
        let mut working_src: Vec<&Chunk> = src
            .iter()
            .filter(|c| dst_fp.contains_key(&c.fingerprint))
            .collect();
        let src_fp: HashMap<[u8; 32], &Chunk> =
            working_src.iter().map(|c| (c.fingerprint, *c)).collect();
        let working_dst: Vec<&Chunk> = dst
            .iter()
            .filter(|c| src_fp.contains_key(&c.fingerprint))
            .collect();
        working_src.retain(|c| working_dst.iter().any(|d| d.fingerprint == c.fingerprint));

        let mut src_fps: Vec<[u8; 32]> = working_src.iter().map(|c| c.fingerprint).collect();
        let mut dst_fps: Vec<[u8; 32]> = working_dst.iter().map(|c| c.fingerprint).collect();
        src_fps.sort();
        dst_fps.sort();
        assert_eq!(src_fps, dst_fps);
    }
}
