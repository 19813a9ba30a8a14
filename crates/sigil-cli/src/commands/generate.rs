use anyhow::Result;

use sigil_core::token::{OsDigitSource, generate};

pub fn run() -> Result<()> {
    let token = generate(&mut OsDigitSource)?;

    // The candidate is for the operator; only the digest is machine output.
    eprintln!("Human-readable token: {}", token.candidate);
    println!("{}", token.digest);

    Ok(())
}
