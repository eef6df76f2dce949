//! Command-line interface for the AES-128 modes of operation.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use aes128_core::{expand_key, Aes128Key};
use aes128_modes::{Cipher, Counter, Mode, ModeConfig};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{debug, info, warn};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// AES-128 CLI.
#[derive(Parser)]
#[command(
    name = "aes128",
    version,
    author,
    about = "AES-128 encryption in ECB, CBC and CTR modes"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file or hex string.
    Enc(CipherArgs),
    /// Decrypt a file or hex string.
    Dec(CipherArgs),
    /// Print a random key and a random IV/initial counter.
    Keygen {
        /// Optional RNG seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the eleven round keys derived from a key.
    Expand {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
    },
    /// Run the built-in known-answer self test.
    Check,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Ecb,
    Cbc,
    Ctr,
}

#[derive(Args)]
struct CipherArgs {
    /// Mode of operation.
    #[arg(long, value_enum)]
    mode: ModeArg,
    /// AES-128 key as 32 hex characters.
    #[arg(long, value_name = "HEX")]
    key_hex: String,
    /// CBC initialization vector as 32 hex characters.
    #[arg(long, value_name = "HEX")]
    iv_hex: Option<String>,
    /// CTR initial counter as a big-endian hex integer (reduced mod 2^128).
    #[arg(long, value_name = "HEX")]
    counter_hex: Option<String>,
    /// Input file. ECB and CBC require a multiple of 16 bytes; no padding is added.
    #[arg(long, value_name = "FILE", required_unless_present = "hex", conflicts_with = "hex")]
    input: Option<PathBuf>,
    /// Inline input as hex instead of a file.
    #[arg(long, value_name = "HEX")]
    hex: Option<String>,
    /// Output file; the result is printed as hex when omitted.
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Enc(args) => cmd_cipher(&args, Direction::Encrypt),
        Commands::Dec(args) => cmd_cipher(&args, Direction::Decrypt),
        Commands::Keygen { seed } => cmd_keygen(seed),
        Commands::Expand { key_hex } => cmd_expand(&key_hex),
        Commands::Check => cmd_check(),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn cmd_cipher(args: &CipherArgs, direction: Direction) -> Result<()> {
    let key = parse_key_hex(&args.key_hex)?;
    let mut cipher = Cipher::new(&key, mode_config(args)?).context("build cipher")?;

    let input = match (&args.hex, &args.input) {
        (Some(hex_str), _) => decode_hex(hex_str, "input")?,
        (None, Some(path)) => read_file(path)?,
        (None, None) => bail!("either --input or --hex is required"),
    };
    info!(
        "{:?} {} bytes with {}",
        direction,
        input.len(),
        cipher.name()
    );

    let output = match direction {
        Direction::Encrypt => cipher.encrypt(&input),
        Direction::Decrypt => cipher.decrypt(&input),
    }
    .with_context(|| format!("{} {:?}", cipher.name(), direction))?;

    match &args.output {
        Some(path) => {
            fs::write(path, &output).with_context(|| format!("write {}", path.display()))?;
            debug!("wrote {} bytes to {}", output.len(), path.display());
        }
        None => println!("{}", hex::encode(&output)),
    }
    Ok(())
}

fn mode_config(args: &CipherArgs) -> Result<ModeConfig> {
    let config = match args.mode {
        ModeArg::Ecb => {
            if args.iv_hex.is_some() || args.counter_hex.is_some() {
                warn!("ECB ignores --iv-hex and --counter-hex");
            }
            ModeConfig::Ecb
        }
        ModeArg::Cbc => {
            let Some(iv_hex) = &args.iv_hex else {
                bail!("CBC requires --iv-hex");
            };
            ModeConfig::Cbc {
                iv: decode_hex(iv_hex, "IV")?,
            }
        }
        ModeArg::Ctr => {
            let Some(counter_hex) = &args.counter_hex else {
                bail!("CTR requires --counter-hex");
            };
            ModeConfig::Ctr {
                counter: parse_counter_hex(counter_hex)?,
            }
        }
    };
    Ok(config)
}

fn cmd_keygen(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key = [0u8; 16];
    let mut iv = [0u8; 16];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut iv);
    println!("key: {}", hex::encode(key));
    println!("iv/counter: {}", hex::encode(iv));
    Ok(())
}

fn cmd_expand(key_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    for (round, round_key) in expand_key(&key).iter().enumerate() {
        println!("round {round:2}: {}", hex::encode(round_key));
    }
    Ok(())
}

fn cmd_check() -> Result<()> {
    let failures = self_test()?;
    if !failures.is_empty() {
        bail!("known-answer mismatch: {}", failures.join(", "));
    }
    println!("all known-answer checks passed");
    Ok(())
}

/// Runs the FIPS-197 and mode vectors, returning the names of failing checks.
fn self_test() -> Result<Vec<&'static str>> {
    const KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
    const PLAINTEXT: &str = "3243f6a8885a308d313198a2e0370734";
    const IV: &str = "0123456789abcdef0123456789abcdef";

    let key = parse_key_hex(KEY)?;
    let plaintext = decode_hex(PLAINTEXT, "plaintext")?;
    let cases: [(&'static str, ModeConfig, &[u8], &str); 3] = [
        (
            "ecb",
            ModeConfig::Ecb,
            plaintext.as_slice(),
            "3925841d02dc09fbdc118597196a0b32",
        ),
        (
            "cbc",
            ModeConfig::Cbc {
                iv: decode_hex(IV, "IV")?,
            },
            plaintext.as_slice(),
            "6af84ce5aaa86deb0dfe2d3a772ca014",
        ),
        (
            "ctr",
            ModeConfig::Ctr {
                counter: parse_counter_hex(IV)?,
            },
            b"x".as_slice(),
            "ac",
        ),
    ];

    let mut failures = Vec::new();
    for (name, config, input, expected) in cases {
        let mut encryptor = Cipher::new(&key, config.clone())?;
        let mut decryptor = Cipher::new(&key, config)?;
        let ciphertext = encryptor.encrypt(input)?;
        let ok = hex::encode(&ciphertext) == expected && decryptor.decrypt(&ciphertext)? == input;
        debug!("{name}: {}", if ok { "ok" } else { "FAILED" });
        if !ok {
            failures.push(name);
        }
    }

    let zero_schedule = expand_key(&Aes128Key::from([0u8; 16]));
    if hex::encode(zero_schedule.get(1)) != "62636363626363636263636362636363" {
        failures.push("key schedule");
    }
    Ok(failures)
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let bytes = decode_hex(hex_str, "key")?;
    Aes128Key::from_slice(&bytes).context("AES-128 key must be 32 hex characters")
}

fn parse_counter_hex(hex_str: &str) -> Result<Counter> {
    Ok(Counter::from_be_slice(&decode_hex(hex_str, "counter")?))
}

fn decode_hex(hex_str: &str, what: &str) -> Result<Vec<u8>> {
    hex::decode(hex_str.trim()).with_context(|| format!("decode {what} hex"))
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("read {}", path.display()))
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aes128_core::Error;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn self_test_passes() {
        assert!(self_test().expect("vectors decode").is_empty());
    }

    #[test]
    fn key_hex_must_be_sixteen_bytes() {
        assert!(parse_key_hex("2b7e151628aed2a6abf7158809cf4f3c").is_ok());
        let err = parse_key_hex("00ff").unwrap_err();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::InvalidKeyLength(2))
        );
        assert!(parse_key_hex("not hex").is_err());
    }

    #[test]
    fn counter_hex_accepts_short_values() {
        assert_eq!(parse_counter_hex("0100").expect("hex").value(), 0x100);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = seeded_rng(Some(7));
        let mut b = seeded_rng(Some(7));
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn parses_encrypt_command() {
        let cli = Cli::try_parse_from([
            "aes128",
            "enc",
            "--mode",
            "cbc",
            "--key-hex",
            "2b7e151628aed2a6abf7158809cf4f3c",
            "--iv-hex",
            "0123456789abcdef0123456789abcdef",
            "--hex",
            "3243f6a8885a308d313198a2e0370734",
        ])
        .expect("valid arguments");
        let Commands::Enc(args) = cli.command else {
            panic!("expected enc");
        };
        assert_eq!(args.mode, ModeArg::Cbc);
        assert_eq!(
            mode_config(&args).expect("iv present"),
            ModeConfig::Cbc {
                iv: hex::decode("0123456789abcdef0123456789abcdef").expect("hex")
            }
        );
    }

    #[test]
    fn cbc_without_iv_is_rejected() {
        let cli = Cli::try_parse_from([
            "aes128", "dec", "--mode", "cbc", "--key-hex", "00", "--hex", "00",
        ])
        .expect("valid arguments");
        let Commands::Dec(args) = cli.command else {
            panic!("expected dec");
        };
        assert!(mode_config(&args).is_err());
    }
}
