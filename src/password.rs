use crate::errors::PasswordError;
use crate::generators::{ all_chars, generate_filler, generate_number, generate_special, generate_uppercase };

use std::collections::TryReserveError;
use std::fmt;

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

/// One uppercase letter, one number and one special character.
pub const MANDATORY_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds a password of exactly `length` characters containing at least one
/// uppercase letter, one number and one special character. The remaining
/// positions are drawn from every set, then the whole sequence is shuffled.
pub fn generate<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Result<Password, PasswordError> {
    if length < MANDATORY_COUNT {
        return Err(PasswordError::InvalidLength {
            length,
            minimum: MANDATORY_COUNT,
        });
    }

    debug!("generating password of {} characters", length);

    let too_large = |_: TryReserveError| PasswordError::TooLarge { length };

    let mut chars: Vec<char> = Vec::new();
    chars.try_reserve_exact(length).map_err(too_large)?;
    chars.push(generate_uppercase(rng));
    chars.push(generate_number(rng));
    chars.push(generate_special(rng));

    let pool = all_chars();
    chars.extend(generate_filler(&pool, length - MANDATORY_COUNT, rng));

    shuffle(&mut chars, rng);

    // Every character is ASCII, so `length` bytes hold the whole password.
    let mut password = String::new();
    password.try_reserve_exact(length).map_err(too_large)?;
    password.extend(chars);

    Ok(Password(password))
}

/// Fisher-Yates shuffle; every ordering is equally likely.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}
