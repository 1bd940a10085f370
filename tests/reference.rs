use sha256_bits::hash::sha256::core::compress;
use sha256_bits::hash::sha256::padding::{pad, pad_bits};
use sha256_bits::hash::sha256::{H256_INIT, reference};
use sha256_bits::primitives::{Bits, Digest};

use proptest::prelude::*;

#[test]
fn reference_matches_abc_vector() {
    let state = reference::compress(H256_INIT, &pad(b"abc")).unwrap();

    assert_eq!(
        Digest::from(state).to_hex(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn reference_matches_native_across_block_chaining() {
    let buf: Vec<u8> = (0..200u32).map(|i| (i * 31 + 7) as u8).collect();
    let blocks = pad(&buf);

    assert_eq!(blocks.len(), 4);
    assert_eq!(reference::compress(H256_INIT, &blocks).unwrap(), compress(H256_INIT, &blocks));
}

#[test]
fn reference_without_blocks_returns_initial_state() {
    assert_eq!(reference::compress(H256_INIT, &[]).unwrap(), H256_INIT);
    assert_eq!(compress(H256_INIT, &[]), H256_INIT);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn reference_matches_native_on_bytes(buf in prop::collection::vec(any::<u8>(), 0..130)) {
        let blocks = pad(&buf);
        prop_assert_eq!(reference::compress(H256_INIT, &blocks).unwrap(), compress(H256_INIT, &blocks));
    }

    #[test]
    fn reference_matches_native_on_unaligned_bits(values in prop::collection::vec(0u8..=1, 440..530)) {
        let blocks = pad_bits(&Bits::from_bit_values(&values));
        prop_assert_eq!(reference::compress(H256_INIT, &blocks).unwrap(), compress(H256_INIT, &blocks));
    }
}
