//! Batched three-prime NTT multiplication of base-10⁹ limb vectors.
//!
//! The shorter operand `b` is transformed once under each prime; the longer
//! operand `a` is processed in chunks of `ntt_size − |b|` limbs so the whole
//! computation runs in one `9 · ntt_size`-word scratch arena regardless of
//! `|a|`. Per-chunk convolutions are reconstructed by mixed-radix CRT and
//! accumulated into the output, followed by a single carry sweep.

use crate::crt::restore_digits;
use crate::transform::{ntt, Direction};
use crate::{mul_mod, prime_for, SizeTooLarge, DEC_BASE, MAX_NTT_BITS, PRIME_BASES};
use anyhow::Result;

/// `log2` of the transform length needed for a shorter operand of `b_len`
/// limbs, or [`SizeTooLarge`] when it would exceed `2^27` points.
pub fn ntt_size_bits(b_len: usize) -> Result<u32, SizeTooLarge> {
    let mut b_bits = 0u32;
    while (1usize << b_bits) < b_len {
        b_bits += 1;
    }
    let required_bits = b_bits + 1;
    if required_bits > MAX_NTT_BITS {
        return Err(SizeTooLarge { required_bits });
    }
    Ok(required_bits)
}

/// Forward-transform `src`, pointwise-multiply by the pre-transformed
/// spectrum `b_spec`, inverse-transform into `out`. All slices are
/// `ntt_size` long; `tmp` and `scratch` are clobbered.
fn convolve(
    size_bits: u32,
    src: &[u32],
    b_spec: &[u32],
    out: &mut [u32],
    tmp: &mut [u32],
    scratch: &mut [u32],
    prime_base: u32,
) {
    let prime = prime_for(prime_base);
    ntt(size_bits, src, tmp, scratch, prime_base, Direction::Forward);
    for (t, &s) in tmp.iter_mut().zip(b_spec.iter()) {
        *t = mul_mod(*t, s, prime);
    }
    ntt(size_bits, tmp, out, scratch, prime_base, Direction::Inverse);
}

/// Exact product of two non-negative limb vectors in base 10⁹.
///
/// `a` and `b` are most-significant first with every limb in `[0, 10⁹)`;
/// leading zero limbs are permitted and the caller owns trimming. The result
/// has `a.len() + b.len()` limbs, most-significant first.
///
/// # Errors
///
/// [`SizeTooLarge`] when the shorter operand needs a transform longer than
/// `2^27` points. No scratch memory is allocated in that case.
pub fn ntt_multiply(a: &[u32], b: &[u32]) -> Result<Vec<u32>> {
    if a.len() < b.len() {
        return ntt_multiply(b, a);
    }
    let (m, n) = (a.len(), b.len());
    if n == 0 {
        return Ok(vec![0; m]);
    }

    let size_bits = ntt_size_bits(n)?;
    let ntt_size = 1usize << size_bits;
    let batch_size = ntt_size - n;
    let batch_count = m.div_ceil(batch_size);

    // Scratch arena: nine ntt_size panes, freed on every exit path below.
    let mut mem = vec![0u32; ntt_size * 9];
    let (ntt1, rest) = mem.split_at_mut(ntt_size);
    let (ntt2, rest) = rest.split_at_mut(ntt_size);
    let (ntt3, rest) = rest.split_at_mut(ntt_size);
    let (tmp1, rest) = rest.split_at_mut(ntt_size);
    let (tmp2, rest) = rest.split_at_mut(ntt_size);
    let (tmp3, rest) = rest.split_at_mut(ntt_size);
    let (conv1, rest) = rest.split_at_mut(ntt_size);
    let (conv2, conv3) = rest.split_at_mut(ntt_size);

    // Transform b once per prime; the spectra are reused for every batch of a.
    tmp1[..n].copy_from_slice(b);
    tmp1[n..].fill(0);
    ntt(size_bits, tmp1, ntt1, tmp2, PRIME_BASES[0], Direction::Forward);
    ntt(size_bits, tmp1, ntt2, tmp2, PRIME_BASES[1], Direction::Forward);
    ntt(size_bits, tmp1, ntt3, tmp2, PRIME_BASES[2], Direction::Forward);

    let mut c = vec![0u32; m + n];
    for idx in 0..batch_count {
        let off = idx * batch_size;
        let len = if idx == batch_count - 1 {
            m - off
        } else {
            batch_size
        };
        tmp1[..len].copy_from_slice(&a[off..off + len]);
        tmp1[len..].fill(0);

        convolve(size_bits, tmp1, ntt1, conv1, tmp2, tmp3, PRIME_BASES[0]);
        convolve(size_bits, tmp1, ntt2, conv2, tmp2, tmp3, PRIME_BASES[1]);
        convolve(size_bits, tmp1, ntt3, conv3, tmp2, tmp3, PRIME_BASES[2]);

        // Each term is at most 999_999_999² · 2^27 / 2, i.e. three digits.
        for i in 0..ntt_size {
            let dig = restore_digits(conv1[i], conv2[i], conv3[i]);
            for (j, &d) in dig.iter().enumerate() {
                // A non-zero digit is always in range; zero digits may index
                // past either edge of c and are skipped.
                if d != 0 {
                    c[off + i + 1 - j] += d;
                }
            }
        }
    }

    // Overlapped digit sums stay below 2^32; the carry sweep normalizes.
    let mut carry: u64 = 0;
    for v in c.iter_mut().rev() {
        let cur = u64::from(*v) + carry;
        *v = (cur % u64::from(DEC_BASE)) as u32;
        carry = cur / u64::from(DEC_BASE);
    }
    debug_assert_eq!(carry, 0, "product exceeded m + n limbs");
    Ok(c)
}
