use rand::Rng;

/// Symbols a random baseline is drawn from; the lowercase base 36 digits.
pub const BASELINE_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a random string used as the incompressible reference for a text.
///
/// # Arguments
///
/// * `rng` - Source of randomness. Use a fresh source such as [`rand::thread_rng`]
///   for real measurements, a seeded one for reproducible results.
/// * `num_chars` - Number of characters to generate.
///
/// # Remarks
///
/// Every character is drawn independently and uniformly from [`BASELINE_ALPHABET`].
/// Since the alphabet is ASCII, the result is `num_chars` bytes long.
pub fn generate_baseline<R: Rng + ?Sized>(rng: &mut R, num_chars: usize) -> String {
    (0..num_chars)
        .map(|_| BASELINE_ALPHABET[rng.gen_range(0..BASELINE_ALPHABET.len())] as char)
        .collect()
}
