//! Bit-level reference compression
//!
//! The SHA-256 compression function written only in terms of `Bits`
//! operations: every word is a 32-element bit vector, every addition is a
//! ripple-carry adder. It is far slower than the native engine in
//! `core` and exists to cross-check it; both must produce the same state
//! for any block sequence.
//!
//! Any width mismatch inside the rounds surfaces as
//! `Sha256Error::InternalInvariant` instead of a wrong-length word.

use super::K256;
use super::padding::Block;
use crate::error::Result;
use crate::primitives::Bits;

fn xor3(x: &Bits, y: &Bits, z: &Bits) -> Result<Bits> {
    x.bit_xor(y)?.bit_xor(z)
}

fn add_all(terms: &[&Bits]) -> Result<Bits> {
    let mut acc = Bits::zeros(32);

    for term in terms {
        acc = acc.wrapping_add(term)?;
    }

    Ok(acc)
}

fn small_sigma0(x: &Bits) -> Result<Bits> {
    xor3(&x.rotate_right(7), &x.rotate_right(18), &x.shift_right(3))
}

fn small_sigma1(x: &Bits) -> Result<Bits> {
    xor3(&x.rotate_right(17), &x.rotate_right(19), &x.shift_right(10))
}

fn big_sigma0(x: &Bits) -> Result<Bits> {
    xor3(&x.rotate_right(2), &x.rotate_right(13), &x.rotate_right(22))
}

fn big_sigma1(x: &Bits) -> Result<Bits> {
    xor3(&x.rotate_right(6), &x.rotate_right(11), &x.rotate_right(25))
}

fn ch(e: &Bits, f: &Bits, g: &Bits) -> Result<Bits> {
    e.bit_and(f)?.bit_xor(&e.bit_not().bit_and(g)?)
}

fn schedule(block: &Block) -> Result<Vec<Bits>> {
    let mut w: Vec<Bits> = block.iter().map(|&word| Bits::from_word(word)).collect();

    for i in 16..64 {
        let s0 = small_sigma0(&w[i - 15])?;
        let s1 = small_sigma1(&w[i - 2])?;
        let next = add_all(&[&w[i - 16], &s0, &w[i - 7], &s1])?;

        w.push(next);
    }

    Ok(w)
}

/// Compresses one block into `state` using bit vectors throughout.
pub fn compress_block(state: &mut [Bits; 8], block: &Block) -> Result<()> {
    let w = schedule(block)?;
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = state.clone();

    for (wi, &ki) in w.iter().zip(K256.iter()) {
        let k = Bits::from_word(ki);

        let s1 = big_sigma1(&e)?;
        let choice = ch(&e, &f, &g)?;
        let t1 = add_all(&[&h, &s1, &choice, &k, wi])?;

        let s0 = big_sigma0(&a)?;
        let maj = Bits::majority_of(&a, &b, &c)?;
        let t2 = s0.wrapping_add(&maj)?;

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(&t1)?;
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(&t2)?;
    }

    for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *s = s.wrapping_add(&v)?;
    }

    Ok(())
}

/// Bit-level counterpart of `core::compress`.
pub fn compress(initial: [u32; 8], blocks: &[Block]) -> Result<[u32; 8]> {
    let mut state = initial.map(Bits::from_word);

    for block in blocks {
        compress_block(&mut state, block)?;
    }

    let mut out = [0u32; 8];
    for (o, word) in out.iter_mut().zip(state.iter()) {
        *o = word.to_word()?;
    }

    Ok(out)
}
