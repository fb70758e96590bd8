use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use huffsteg::huffman::{decode, encode, Codebook};
use huffsteg::processing::PixelBitChannel;
use huffsteg::{embed, extract, hide_message, payload_capacity, PixelGrid, StegError};

const ALPHABET: &[char] = &[
    'a', 'b', 'c', 'd', 'e', ' ', '\n', ',', '!', 'Z', 'é', 'ß', '🦀', '0', '9',
];

fn random_text(rng: &mut StdRng, max_len: usize) -> String {
    let len = rng.gen_range(1..=max_len);
    // Skewed alphabet so codeword lengths differ
    (0..len)
        .map(|_| {
            let limit = rng.gen_range(1..=ALPHABET.len());
            ALPHABET[rng.gen_range(0..limit)]
        })
        .collect()
}

fn random_grid(rng: &mut StdRng, width: u32, height: u32, channels: u8) -> PixelGrid {
    let len = width as usize * height as usize * channels as usize;
    let data = (0..len).map(|_| rng.gen::<u8>()).collect();
    PixelGrid::from_raw(width, height, channels, data).unwrap()
}

#[test]
fn test_codec_roundtrip_random_texts() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let text = random_text(&mut rng, 300);
        let codebook = Codebook::from_text(&text).unwrap();
        let stream = encode(&text, &codebook).unwrap();
        let reverse = codebook.reverse().unwrap();
        assert_eq!(decode(&stream, &reverse).unwrap(), text);
    }
}

#[test]
fn test_codebooks_prefix_free_and_reproducible() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let text = random_text(&mut rng, 200);
        let codebook = Codebook::from_text(&text).unwrap();
        assert_eq!(Codebook::from_text(&text).unwrap(), codebook);

        let codes: Vec<_> = codebook.iter().map(|(_, c)| c.clone()).collect();
        for a in &codes {
            assert!(!a.is_empty());
            for b in &codes {
                assert!(!a.is_proper_prefix_of(b));
            }
        }
    }
}

#[test]
fn test_embed_roundtrip_random_grids() {
    let mut rng = StdRng::seed_from_u64(42);
    for round in 0..50 {
        let text = random_text(&mut rng, 120);
        let channels = if round % 2 == 0 { 3 } else { 4 };
        let grid = random_grid(&mut rng, 40, 30, channels);

        let codebook = Codebook::from_text(&text).unwrap();
        let stego = embed(&grid, &codebook, &text).unwrap();
        assert_eq!(extract(&stego, &codebook.reverse().unwrap()).unwrap(), text);
    }
}

#[test]
fn test_non_payload_bits_preserved() {
    let mut rng = StdRng::seed_from_u64(3);
    let grid = random_grid(&mut rng, 25, 25, 4);
    let text = "the hidden text lives only in the low bits";

    let codebook = Codebook::from_text(text).unwrap();
    let payload_len = encode(text, &codebook).unwrap().len();
    let stego = embed(&grid, &codebook, text).unwrap();

    let before = PixelBitChannel::new(&grid);
    let after = PixelBitChannel::new(&stego);
    assert_eq!(after.read_bit(32).unwrap(), before.read_bit(32).unwrap());
    for slot in 33 + payload_len..before.capacity() {
        assert_eq!(after.read_bit(slot).unwrap(), before.read_bit(slot).unwrap());
    }

    // Upper seven bits everywhere, and alpha bytes entirely
    for (i, (a, b)) in grid.as_raw().iter().zip(stego.as_raw()).enumerate() {
        if i % 4 == 3 {
            assert_eq!(a, b);
        } else {
            assert_eq!(a & 0xFE, b & 0xFE);
        }
    }
}

#[test]
fn test_capacity_rejection_leaves_input_untouched() {
    let mut rng = StdRng::seed_from_u64(5);
    let grid = random_grid(&mut rng, 8, 8, 3);
    let snapshot = grid.clone();

    let text: String = "abcdefghijklmnopqrstuvwxyz".repeat(4);
    let codebook = Codebook::from_text(&text).unwrap();
    let payload_len = encode(&text, &codebook).unwrap().len();
    assert!(payload_len > payload_capacity(&grid));

    let result = embed(&grid, &codebook, &text);
    assert!(matches!(result, Err(StegError::ImageTooSmall { .. })));
    assert_eq!(grid, snapshot);
}

#[test]
fn test_hide_message_concrete_scenario() {
    let mut rng = StdRng::seed_from_u64(9);
    let grid = random_grid(&mut rng, 6, 6, 3);

    let (stego, codebook) = hide_message(&grid, "aabbbcccc").unwrap();
    let c = codebook.get('c').unwrap().len();
    let a = codebook.get('a').unwrap().len();
    let b = codebook.get('b').unwrap().len();
    assert!(c < a && c < b);
    assert!(a >= b);

    assert_eq!(
        extract(&stego, &codebook.reverse().unwrap()).unwrap(),
        "aabbbcccc"
    );
}
