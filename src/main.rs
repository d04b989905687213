mod errors;
mod generators;
mod password;
mod terminal;
mod validator;

use std::io::{ self, Write };
use std::time::Duration;

use clap::Parser;
use log::{ LevelFilter, debug };
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::errors::AppError;
use crate::password::Password;
use crate::terminal::{ clear_screen, print };
use crate::validator::{ PromptSettings, prompt_length };

/// Interactive random password generator.
///
/// Asks for a length (at least 8) and prints a password containing at least
/// one uppercase letter, one number and one special character.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Seconds to wait after a rejected length before asking again
    #[arg(long, value_name = "SECONDS", default_value_t = 3)]
    retry_delay: u64,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Clears the prompt history and shows the password on its own screen.
fn reveal<W: Write>(output: &mut W, password: &Password) -> io::Result<()> {
    clear_screen(output)?;
    print(output, &format!("A sua senha é: {}", password.as_str()))
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(log_level(args.verbose))
        .parse_default_env()
        .init();

    debug!("starting with {:?}", args);

    let settings = PromptSettings {
        retry_delay: Duration::from_secs(args.retry_delay),
    };

    // Seeded once; the same generator serves the whole run.
    let mut rng = StdRng::from_os_rng();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let length = prompt_length(&mut input, &mut output, &settings)?;
    let password = password::generate(length, &mut rng)?;
    debug!("generated a password of {} characters", password.len());

    reveal(&mut output, &password)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_interactive_behaviour() {
        let args = Args::try_parse_from(["senha"]).unwrap();

        assert_eq!(args.retry_delay, 3);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn reveal_clears_then_prints_without_newline() {
        let mut rng = StdRng::seed_from_u64(3);
        let password = password::generate(10, &mut rng).unwrap();
        let mut output = Vec::new();

        reveal(&mut output, &password).unwrap();
        let written = String::from_utf8(output).unwrap();
        let expected = format!("A sua senha é: {}", password);

        assert!(written.starts_with("\x1b[2J"), "{written:?}");
        assert!(written.ends_with(&expected), "{written:?}");
        assert!(!written.ends_with('\n'));
    }

    #[test]
    fn verbosity_raises_log_level() {
        let args = Args::try_parse_from(["senha", "-vv", "--retry-delay", "0"]).unwrap();

        assert_eq!(args.retry_delay, 0);
        assert_eq!(log_level(args.verbose), LevelFilter::Debug);
        assert_eq!(log_level(0), LevelFilter::Warn);
        assert_eq!(log_level(9), LevelFilter::Trace);
    }
}
