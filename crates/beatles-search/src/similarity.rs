//! Ratcliff/Obershelp sequence similarity.
//!
//! The ratio between two strings is `2 * M / T`, where `M` is the number of
//! characters covered by the matching blocks found by repeatedly taking the
//! longest common substring and recursing on the pieces to either side, and
//! `T` is the combined length of both strings.

/// A maximal common block: `a[a_start..a_start + len] == b[b_start..b_start + len]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub a_start: usize,
    pub b_start: usize,
    pub len: usize,
}

/// Longest common substring of `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Among equally long candidates the one ending earliest in `a` wins, then
/// the one ending earliest in `b`.
fn longest_block(a: &[char], b: &[char], alo: usize, ahi: usize, blo: usize, bhi: usize) -> Block {
    let mut best = Block {
        a_start: alo,
        b_start: blo,
        len: 0,
    };
    let width = bhi - blo;
    // run[j + 1] is the length of the common run ending at a[i - 1], b[blo + j].
    let mut prev = vec![0usize; width + 1];
    let mut cur = vec![0usize; width + 1];

    for i in alo..ahi {
        for j in blo..bhi {
            let col = j - blo + 1;
            if a[i] == b[j] {
                let len = prev[col - 1] + 1;
                cur[col] = len;
                if len > best.len {
                    best = Block {
                        a_start: i + 1 - len,
                        b_start: j + 1 - len,
                        len,
                    };
                }
            } else {
                cur[col] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    best
}

/// All matching blocks between `a` and `b`, in discovery order.
pub fn matching_blocks(a: &[char], b: &[char]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let block = longest_block(a, b, alo, ahi, blo, bhi);
        if block.len == 0 {
            continue;
        }
        let (i, j, k) = (block.a_start, block.b_start, block.len);
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            pending.push((i + k, ahi, j + k, bhi));
        }
        blocks.push(block);
    }

    blocks
}

fn matched_chars(a: &[char], b: &[char]) -> usize {
    matching_blocks(a, b).iter().map(|block| block.len).sum()
}

/// Similarity of two strings in `[0, 1]`.
///
/// Two empty strings are identical (`1.0`). The block search is not
/// symmetric when several longest blocks tie, so the larger match count of
/// both argument orders is used and `ratio(a, b) == ratio(b, a)` always.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matches = matched_chars(&a, &b).max(matched_chars(&b, &a));
    2.0 * matches as f64 / total as f64
}
