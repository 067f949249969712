//! Hash command - Prints the hash of a password.

use crate::cli::args::HashArgs;
use crate::config::HashingConfig;
use crate::domain::CredentialHasher;
use crate::errors::AppResult;

/// Execute the hash command
pub async fn execute(args: HashArgs, config: HashingConfig) -> AppResult<()> {
    tracing::debug!(
        work_factor = config.work_factor,
        memory_kib = config.memory_kib,
        parallelism = config.parallelism,
        "Hashing password"
    );

    let hasher = CredentialHasher::new(&config)?;
    let hashed = hasher.hash(&args.password)?;

    println!("{}", hashed.as_str());
    Ok(())
}
