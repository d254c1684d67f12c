use anyhow::{Context, Result};
use clap::Parser;
use totp_core::{Algorithm, TotpConfig, TotpManager, DEFAULT_DIGITS, DEFAULT_STEP};

/// Print the current TOTP code for a base32 secret
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    #[arg(short, long, help = "Enable debug logs")]
    debug: bool,

    #[arg(short, long, default_value_t = DEFAULT_STEP, help = "Duration of a step in seconds")]
    step: u64,

    #[arg(short = 'n', long, default_value_t = DEFAULT_DIGITS, help = "Number of digits of the code")]
    digits: u32,

    #[arg(short, long, default_value_t = Algorithm::SHA1, help = "SHA1, SHA256 or SHA512")]
    algorithm: Algorithm,

    #[arg(short, long, help = "Also print how many seconds the code stays valid")]
    ttl: bool,

    #[arg(env = "TOTP_SECRET", hide_env_values = true, help = "Base32 encoded shared secret")]
    secret: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut log_builder = env_logger::Builder::from_default_env();

    if args.debug {
        log_builder.filter(None, log::LevelFilter::Debug);
    } else {
        log_builder.filter(None, log::LevelFilter::Error);
    }
    log_builder.target(env_logger::Target::Stderr);
    log_builder.init();

    let config = TotpConfig::new(args.step, args.digits, args.algorithm)
        .context("invalid totp parameters")?;
    let totp = TotpManager::new(config)?;
    log::debug!("generating with {}", totp);

    let code = totp.generate(&args.secret).context("could not generate code")?;
    if args.ttl {
        println!("{} ({}s)", code, totp.ttl()?);
    } else {
        println!("{}", code);
    }

    Ok(())
}
