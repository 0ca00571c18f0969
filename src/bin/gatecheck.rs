//! Line-oriented shell around the verification core.
//!
//! Reads one candidate from stdin for the variant named on the command line
//! (defaulting to `magic-number`), then prints either the proof token or a
//! rejection message.  All parsing and I/O framing lives here; the library
//! core only ever sees well-typed candidates.

use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use kctf_gate::{derive_references, emit_token, verify, Candidate, ChallengeVariant};

/// Longest byte-sequence candidate the shell will capture.
const MAX_CANDIDATE_LEN: usize = 63;

fn prompt(variant: ChallengeVariant) -> &'static str {
    match variant {
        ChallengeVariant::MagicNumber => "Enter the magic number: ",
        ChallengeVariant::PositionCipher => "Enter the passphrase: ",
        ChallengeVariant::CodeMatrix => "Enter code: ",
    }
}

fn read_line() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

fn run(variant: ChallengeVariant) -> io::Result<bool> {
    print!("{}", prompt(variant));
    io::stdout().flush()?;
    let line = read_line()?;

    let references = derive_references(variant);
    match variant {
        ChallengeVariant::MagicNumber => {
            let value: u32 = match line.trim().parse() {
                Ok(value) => value,
                Err(_) => {
                    println!("Invalid input!");
                    return Ok(false);
                }
            };
            if verify(&references, Candidate::Word(value)) {
                println!("Correct! Generating flag...");
                println!("Congratulations! Flag: {}", emit_token(Candidate::Word(value)));
                Ok(true)
            } else {
                println!("Wrong! Try again.");
                Ok(false)
            }
        }
        ChallengeVariant::PositionCipher | ChallengeVariant::CodeMatrix => {
            let bytes = line.as_bytes();
            if bytes.len() > MAX_CANDIDATE_LEN {
                println!("Invalid input!");
                return Ok(false);
            }
            if verify(&references, Candidate::Bytes(bytes)) {
                println!("Success! Flag: {}", emit_token(Candidate::Bytes(bytes)));
                Ok(true)
            } else {
                println!("Failed!");
                Ok(false)
            }
        }
    }
}

fn main() -> ExitCode {
    let variant = match env::args().nth(1) {
        Some(name) => match name.parse::<ChallengeVariant>() {
            Ok(variant) => variant,
            Err(err) => {
                eprintln!("{err}: {name}");
                eprintln!("expected one of: magic-number, position-cipher, code-matrix");
                return ExitCode::FAILURE;
            }
        },
        None => ChallengeVariant::MagicNumber,
    };

    match run(variant) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("i/o error: {err}");
            ExitCode::FAILURE
        }
    }
}
