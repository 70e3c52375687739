// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use charsa::{Config, RsaContext};
use clap::Parser;
use num_bigint_dig::BigUint;

/// Encrypt a line of text with textbook RSA, then recover the key from the
/// public modulus and decrypt it again.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// TOML file with artifact paths and the exponent search cap
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write `n` and `e`
    #[arg(long)]
    public_key: Option<PathBuf>,

    /// Where to write the ciphertext values
    #[arg(long)]
    ciphertext: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if let Some(path) = self.public_key {
            config.public_key_path = path;
        }
        if let Some(path) = self.ciphertext {
            config.ciphertext_path = path;
        }
        Ok(config)
    }
}

fn prompt(input: &mut impl BufRead, message: &str) -> anyhow::Result<String> {
    println!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn prompt_number(input: &mut impl BufRead, message: &str) -> anyhow::Result<BigUint> {
    let line = prompt(input, message)?;
    BigUint::from_str(line.trim()).with_context(|| format!("not a non-negative integer: {line:?}"))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Args::parse().into_config()?;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let p = prompt_number(&mut input, "Enter prime number p:")?;
    let q = prompt_number(&mut input, "Enter prime number q:")?;
    let text = prompt(&mut input, "Enter initial text:")?;

    let mut rsa = RsaContext::from_config(p, q, &config)?;

    let ciphertext = rsa.encrypt_text(&text)?;
    println!("Encrypted text:");
    println!("{ciphertext}");
    println!("Text encrypted and saved.");

    let decrypted = rsa.decrypt_text()?;
    println!("Decrypted text: {decrypted}");

    Ok(())
}
