//! Prints an argon2id PHC string for `ADMIN_PASSWORD_HASH`.
//!
//! ```text
//! cargo run --bin hash-admin-password -- 'correct horse battery staple'
//! echo -n 'correct horse battery staple' | cargo run --bin hash-admin-password
//! ```
//!
//! Cost parameters follow `ARGON2_MEMORY_KIB`, `ARGON2_ITERATIONS` and
//! `ARGON2_PARALLELISM`, with the same defaults as the server.

use std::io::{self, Read};
use std::process::ExitCode;

use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand_core::OsRng;

fn env_u32(key: &str, default: u32) -> u32 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn read_password() -> io::Result<String> {
    if let Some(arg) = std::env::args().nth(1) {
        return Ok(arg);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}

fn main() -> ExitCode {
    let password = match read_password() {
        Ok(p) if !p.is_empty() => p,
        Ok(_) => {
            eprintln!("usage: hash-admin-password <password>  (or pipe it on stdin)");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("could not read password: {e}");
            return ExitCode::FAILURE;
        }
    };

    let params = match Params::new(
        env_u32("ARGON2_MEMORY_KIB", 4 * 1024),
        env_u32("ARGON2_ITERATIONS", 3),
        env_u32("ARGON2_PARALLELISM", 1),
        None,
    ) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("invalid argon2 parameters: {e}");
            return ExitCode::FAILURE;
        }
    };

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    match argon2.hash_password(password.as_bytes(), &salt) {
        Ok(hash) => {
            println!("{hash}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("hashing failed: {e}");
            ExitCode::FAILURE
        }
    }
}
