//! Data generation utilities for testing.

use rand::prelude::*;

/// The four DNA nucleotides.
pub const DNA: &[u8] = b"ACGT";

/// The twenty amino acids.
pub const PROTEIN: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";

pub fn random_sequence<R: Rng>(len: usize, alphabet: &[u8], rng: &mut R) -> Vec<u8> {
    (0..len).map(|_| alphabet[rng.gen_range(0..alphabet.len())]).collect()
}

/// Copies a sequence with random substitutions, insertions and deletions,
/// each applied to about `rate` of the positions.
pub fn mutate<R: Rng>(sequence: &[u8], rate: f64, alphabet: &[u8], rng: &mut R) -> Vec<u8> {
    let mut mutated = Vec::with_capacity(sequence.len());
    for &s in sequence {
        let roll = rng.gen::<f64>();
        if roll < rate {
            mutated.push(alphabet[rng.gen_range(0..alphabet.len())]);
        } else if roll < 2.0 * rate {
            mutated.push(s);
            mutated.push(alphabet[rng.gen_range(0..alphabet.len())]);
        } else if roll >= 3.0 * rate {
            mutated.push(s);
        }
    }
    if mutated.is_empty() {
        mutated.push(alphabet[0]);
    }
    mutated
}

/// Pairs of related sequences.
pub fn related_pairs(n: usize, min_len: usize, max_len: usize, alphabet: &[u8], seed: u64) -> Vec<(Vec<u8>, Vec<u8>)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let len = rng.gen_range(min_len..=max_len);
            let reference = random_sequence(len, alphabet, &mut rng);
            let query = mutate(&reference, 0.1, alphabet, &mut rng);
            (reference, query)
        })
        .collect()
}

/// Pairs of unrelated sequences.
pub fn random_pairs(n: usize, min_len: usize, max_len: usize, alphabet: &[u8], seed: u64) -> Vec<(Vec<u8>, Vec<u8>)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let (r, q) = (rng.gen_range(min_len..=max_len), rng.gen_range(min_len..=max_len));
            (random_sequence(r, alphabet, &mut rng), random_sequence(q, alphabet, &mut rng))
        })
        .collect()
}
