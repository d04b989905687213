use rand::Rng;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const SPECIALS: &str = "!@#$%^&*()+?><:{}[]";

/// Every character a password may contain, in the order
/// lowercase, uppercase, numbers, specials.
pub fn all_chars() -> Vec<char> {
    [LOWERCASE, UPPERCASE, NUMBERS, SPECIALS]
        .iter()
        .flat_map(|set| set.chars())
        .collect()
}

pub fn generate_uppercase<R: Rng + ?Sized>(rng: &mut R) -> char {
    rng.random_range(b'A'..=b'Z') as char
}

pub fn generate_number<R: Rng + ?Sized>(rng: &mut R) -> char {
    rng.random_range(b'0'..=b'9') as char
}

pub fn generate_special<R: Rng + ?Sized>(rng: &mut R) -> char {
    let specials = SPECIALS.as_bytes();

    specials[rng.random_range(0..specials.len())] as char
}

/// Yields exactly `count` characters drawn with replacement from `pool`.
///
/// # Panics
///
/// Panics on the first draw if `pool` is empty.
pub fn generate_filler<'a, R: Rng + ?Sized>(
    pool: &'a [char],
    count: usize,
    rng: &'a mut R,
) -> impl Iterator<Item = char> + 'a {
    (0..count).map(move |_| pool[rng.random_range(0..pool.len())])
}
