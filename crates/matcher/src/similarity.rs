//! Block-matching similarity ratio.
//!
//! This is the Ratcliff/Obershelp "gestalt" matcher as implemented by
//! Python's `difflib.SequenceMatcher`: find the longest contiguous matching
//! block, recurse into the unmatched pieces on either side, and score
//! `2 * M / T` where `M` is the total matched length and `T` the combined
//! length of both sequences. It is not an edit distance. The ratio is not
//! strictly symmetric, so callers must keep a consistent argument order.
//!
//! Sequences are compared by `char` (Unicode scalar value).
use std::collections::HashMap;

/// Sequences at least this long get the popular-element heuristic on `b`.
const AUTOJUNK_MIN_LEN: usize = 200;

/// A run of `size` equal chars starting at `a[a_start]` and `b[b_start]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MatchBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub size: usize,
}

/// Pairwise matcher over two char sequences.
///
/// `b` is indexed once on construction; `a` is scanned against it.
#[derive(Debug, Clone)]
pub struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    /// char -> ascending positions in `b`, popular chars removed
    b2j: HashMap<char, Vec<usize>>,
}

impl SequenceMatcher {
    pub fn new(a: &str, b: &str) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();

        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b2j.entry(c).or_default().push(j);
        }

        let n = b.len();
        if n >= AUTOJUNK_MIN_LEN {
            let ntest = n / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= ntest);
        }

        Self { a, b, b2j }
    }

    /// Longest matching block inside `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Among maximal blocks, the one starting earliest in `a` wins, then the
    /// one starting earliest in `b`. Returns a zero-size block at
    /// `(alo, blo)` when nothing matches.
    pub fn find_longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> MatchBlock {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

        // j2len[j] = length of the match ending at a[i - 1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = next;
        }

        // Popular chars were dropped from the index; grow the block over any
        // equal neighbours so they still count.
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        MatchBlock {
            a_start: best_i,
            b_start: best_j,
            size: best_size,
        }
    }

    /// Non-overlapping matching blocks in ascending order, adjacent blocks
    /// merged. Does not include difflib's zero-size sentinel.
    pub fn matching_blocks(&self) -> Vec<MatchBlock> {
        let (la, lb) = (self.a.len(), self.b.len());
        let mut queue = vec![(0, la, 0, lb)];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }
            let (i, j, k) = (block.a_start, block.b_start, block.size);
            blocks.push(block);
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }
        blocks.sort_unstable();

        let mut merged: Vec<MatchBlock> = Vec::with_capacity(blocks.len());
        for block in blocks {
            match merged.last_mut() {
                Some(last)
                    if last.a_start + last.size == block.a_start
                        && last.b_start + last.size == block.b_start =>
                {
                    last.size += block.size;
                }
                _ => merged.push(block),
            }
        }
        merged
    }

    /// Similarity in `[0.0, 1.0]`. Two empty sequences score `1.0`.
    pub fn ratio(&self) -> f64 {
        let matched: usize = self.matching_blocks().iter().map(|b| b.size).sum();
        calculate_ratio(matched, self.a.len() + self.b.len())
    }

    /// Upper bound on [`ratio`](Self::ratio) from shared char counts.
    pub fn quick_ratio(&self) -> f64 {
        let mut available: HashMap<char, isize> = HashMap::new();
        for &c in &self.b {
            *available.entry(c).or_insert(0) += 1;
        }
        let mut matched = 0;
        for c in &self.a {
            if let Some(count) = available.get_mut(c) {
                if *count > 0 {
                    matched += 1;
                }
                *count -= 1;
            }
        }
        calculate_ratio(matched, self.a.len() + self.b.len())
    }

    /// Upper bound on [`ratio`](Self::ratio) from lengths alone.
    pub fn real_quick_ratio(&self) -> f64 {
        let (la, lb) = (self.a.len(), self.b.len());
        calculate_ratio(la.min(lb), la + lb)
    }
}

fn calculate_ratio(matched: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        2.0 * matched as f64 / total as f64
    }
}

/// Ratio of `a` against `b`.
pub fn ratio(a: &str, b: &str) -> f64 {
    SequenceMatcher::new(a, b).ratio()
}

/// Ratio of `a` against `b` if it reaches `cutoff`, checking the cheap upper
/// bounds first.
pub fn ratio_at_least(a: &str, b: &str, cutoff: f64) -> Option<f64> {
    let sm = SequenceMatcher::new(a, b);
    if sm.real_quick_ratio() < cutoff || sm.quick_ratio() < cutoff {
        return None;
    }
    let score = sm.ratio();
    (score >= cutoff).then_some(score)
}
