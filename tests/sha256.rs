use sha256_bits::hash::{sha256_bytes, sha256_message_bits};
use sha256_bits::primitives::Bits;
use sha256_bits::sha256;

use sha2::{Digest, Sha256};

fn reference_hex(input: &[u8]) -> String {
    hex::encode(Sha256::digest(input))
}

fn expect_sha256_eq(input: &[u8], expected: &str) {
    let got = sha256_bytes(input).to_hex();

    assert_eq!(
        got,
        expected,
        "Digest mismatch for input of {} bytes\nExpected {}\nGot      {}",
        input.len(),
        expected,
        got,
    );
}

fn expect_matches_reference(input: &[u8]) {
    expect_sha256_eq(input, &reference_hex(input));
}

// -------------------------------------------------------
// 1. OFFICIAL VECTOR TESTS
// -------------------------------------------------------

#[test]
fn sha256_empty_vector() {
    expect_sha256_eq(
        b"",
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    );
}

#[test]
fn sha256_abc_vector() {
    expect_sha256_eq(
        b"abc",
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    );
}

#[test]
fn sha256_448_bit_vector() {
    expect_sha256_eq(
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    );
}

#[test]
fn sha256_896_bit_vector() {
    expect_sha256_eq(
        b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1",
    );
}

#[test]
fn sha256_known_phrase() {
    expect_sha256_eq(
        b"The quick brown fox jumps over the lazy dog",
        "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
    );
}

#[test]
fn sha256_one_million_a() {
    let buf = vec![b'a'; 1_000_000];

    expect_sha256_eq(
        &buf,
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
    );
}

// -------------------------------------------------------
// 2. PADDING BOUNDARIES (55 / 56 / 63 / 64 / 65 BYTES)
// -------------------------------------------------------

#[test]
fn sha256_single_block_upper_edge() {
    // 440 bits: the last length that fits in one block.
    expect_matches_reference(&[0x61u8; 55]);
}

#[test]
fn sha256_two_block_branch_edges() {
    // 448 and 504 bits: both ends of the near-empty second block case.
    expect_matches_reference(&[0x62u8; 56]);
    expect_matches_reference(&[0x63u8; 63]);
}

#[test]
fn sha256_exact_block() {
    expect_matches_reference(&[0x64u8; 64]);
}

#[test]
fn sha256_just_over_one_block() {
    expect_matches_reference(&[0x65u8; 65]);
}

#[test]
fn sha256_lengths_0_to_256() {
    let mut buf = Vec::with_capacity(256);

    for i in 0..=256usize {
        expect_matches_reference(&buf);
        buf.push(i as u8);
    }
}

// -------------------------------------------------------
// 3. MULTI-BLOCK INPUTS
// -------------------------------------------------------

#[test]
fn sha256_three_blocks() {
    let buf: Vec<u8> = (0..150u32).map(|i| (i * 7) as u8).collect();
    expect_matches_reference(&buf);
}

#[test]
fn sha256_large_multiblock() {
    let buf: Vec<u8> = (0..5000).map(|i| (i % 256) as u8).collect();
    expect_matches_reference(&buf);
}

#[test]
fn sha256_ff_various_lengths() {
    for len in [1, 2, 4, 8, 16, 32, 64, 128, 255, 256, 1000] {
        expect_matches_reference(&vec![0xFF; len]);
    }
}

// -------------------------------------------------------
// 4. OUTPUT FORMAT AND DETERMINISM
// -------------------------------------------------------

#[test]
fn sha256_output_is_64_lowercase_hex_chars() {
    for input in ["", "a", "abc", "hello world", "z".repeat(300).as_str()] {
        let out = sha256(input).unwrap();

        assert_eq!(out.len(), 64);
        assert!(out.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
    }
}

#[test]
fn sha256_is_deterministic() {
    let first = sha256("determinism").unwrap();
    let _ = sha256("something else in between").unwrap();
    let second = sha256("determinism").unwrap();

    assert_eq!(first, second);
}

#[test]
fn sha256_display_matches_hex_crate() {
    let digest = sha256_bytes(b"display");

    assert_eq!(digest.to_string(), hex::encode(digest.as_bytes()));
    assert_eq!(digest.as_ref(), Sha256::digest(b"display").as_slice());
}

#[test]
fn sha256_digest_words_roundtrip() {
    let digest = sha256_bytes(b"abc");
    let words = digest.words();

    assert_eq!(words[0], 0xba7816bf);
    assert_eq!(words[7], 0xf20015ad);
    assert_eq!(sha256_bits::Digest::from(words), digest);
}

#[test]
fn sha256_digest_from_reference_bytes() {
    let expected: [u8; 32] = Sha256::digest(b"from bytes").into();

    assert_eq!(sha256_bits::Digest::from_bytes(expected), sha256_bytes(b"from bytes"));
}

// -------------------------------------------------------
// 5. BIT-LENGTH BOUNDARIES (447 / 448 / 512 / 513 BITS)
// -------------------------------------------------------
//
// Messages are the bit pattern 1,0,0,1,0,0,... of the given length.
// Expected digests for the unaligned lengths come from an independent
// bit-oriented SHA-256 using the uniform "pad to 448 mod 512" rule.

fn pattern(len: usize) -> Bits {
    let values: Vec<u8> = (0..len).map(|i| u8::from(i % 3 == 0)).collect();
    Bits::from_bit_values(&values)
}

fn pattern_bytes(len: usize) -> Vec<u8> {
    assert_eq!(len % 8, 0);

    pattern(len)
        .as_slice()
        .chunks_exact(8)
        .map(|bits| bits.iter().fold(0u8, |acc, &b| (acc << 1) | b))
        .collect()
}

#[test]
fn sha256_447_bits() {
    assert_eq!(
        sha256_message_bits(&pattern(447)).to_hex(),
        "9265f6884d03d6937efe210955142cb4b50149aff1251f9918fca4b1a86fa537"
    );
}

#[test]
fn sha256_448_bits() {
    let got = sha256_message_bits(&pattern(448)).to_hex();

    assert_eq!(got, reference_hex(&pattern_bytes(448)));
    assert_eq!(got, "86c11b35fc1c007a2ff15665e3376b4a27d25c448b959f66469430d344ce6069");
}

#[test]
fn sha256_512_bits() {
    let got = sha256_message_bits(&pattern(512)).to_hex();

    assert_eq!(got, reference_hex(&pattern_bytes(512)));
    assert_eq!(got, "5dd8ffcf3c174365007e3390b007a74b637474a352363395fe4ae5063af9dedc");
}

#[test]
fn sha256_513_bits() {
    assert_eq!(
        sha256_message_bits(&pattern(513)).to_hex(),
        "341fc5736f71fe9f3269a2cbaf2265e177510c932864c16c24504f78d404208e"
    );
}
