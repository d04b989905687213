use crate::errors::LengthError;
use crate::terminal::{ clear_screen, print };

use std::io::{ self, BufRead, Write };
use std::thread::sleep;
use std::time::Duration;

use log::{ info, warn };

pub const MIN_LENGTH: usize = 8;

pub const PROMPT: &str = "Digite com quantos caracteres vai querer a sua senha: ";
pub const TOO_SHORT_WARNING: &str = "A senha precisa ter no mínimo 8 caracteres";
pub const MALFORMED_WARNING: &str = "Entrada inválida: digite um número inteiro";

pub struct PromptSettings {
    /// Pause after a rejected length so the warning can be read.
    pub retry_delay: Duration,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            retry_delay: Duration::from_secs(3),
        }
    }
}

/// Parses one line of user input into a password length of at least
/// [`MIN_LENGTH`]. There is no upper bound.
pub fn validate_length(raw: &str) -> Result<usize, LengthError> {
    let trimmed = raw.trim();

    if let Ok(length) = trimmed.parse::<usize>() {
        if length < MIN_LENGTH {
            return Err(LengthError::TooShort {
                length: length as i64,
                minimum: MIN_LENGTH,
            });
        }
        return Ok(length);
    }

    // Negative numbers are still numbers, just too small.
    match trimmed.parse::<i64>() {
        Ok(length) => Err(LengthError::TooShort {
            length,
            minimum: MIN_LENGTH,
        }),
        Err(_) => Err(LengthError::Malformed {
            input: trimmed.to_string(),
        }),
    }
}

/// Prompts until a valid length is typed. Rejected input is answered with a
/// warning, a pause and a cleared screen. A closed input stream is reported
/// as `UnexpectedEof`.
pub fn prompt_length<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    settings: &PromptSettings,
) -> io::Result<usize> {
    let mut line = String::new();

    loop {
        print(output, PROMPT)?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a password length was given",
            ));
        }

        let warning = match validate_length(&line) {
            Ok(length) => {
                info!("accepted password length {}", length);
                return Ok(length);
            }
            Err(e @ LengthError::TooShort { .. }) => {
                warn!("{}", e);
                TOO_SHORT_WARNING
            }
            Err(e @ LengthError::Malformed { .. }) => {
                warn!("{}", e);
                MALFORMED_WARNING
            }
        };

        // The prompt left the cursor on the input line.
        writeln!(output, "{}", warning)?;
        output.flush()?;

        if !settings.retry_delay.is_zero() {
            sleep(settings.retry_delay);
        }
        clear_screen(output)?;
    }
}
