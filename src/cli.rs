// Command-line front-end for the Game Genie codec.
//
// Subcommands map one-to-one onto the library operations: `decode` prints
// the patch a code describes, `encode` builds a code from hex fields.

use std::process;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::genie::alphabet::{ALPHABET, FLAGGED_SYMBOLS};
use crate::genie::{self, Patch, Variant};

// ---------------------------------------------------------------------------
// Hex argument parsing (accepts `0x`, `0X` and `$` prefixes)
// ---------------------------------------------------------------------------

fn parse_hex(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .or_else(|| s.strip_prefix('$'))
        .unwrap_or(s);
    if digits.is_empty() {
        return Err("empty hex value".into());
    }
    u32::from_str_radix(digits, 16).map_err(|e| format!("invalid hex value '{s}': {e}"))
}

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// NES Game Genie code encoder/decoder.
#[derive(Parser, Debug)]
#[command(
    name = "gamegenie",
    version,
    about = "NES Game Genie code encoder/decoder",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Quiet mode (suppress warnings).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Print results as JSON.
    #[arg(long = "json", global = true)]
    json_output: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Decode a 6- or 8-letter code into address/data/compare.
    Decode(DecodeArgs),
    /// Encode address/data/compare into a code.
    Encode(EncodeArgs),
    /// Print build/configuration details.
    Config,
}

#[derive(Args, Debug)]
struct DecodeArgs {
    /// Game Genie code (case-insensitive).
    code: String,
}

#[derive(Args, Debug)]
struct EncodeArgs {
    /// Address to patch, in hex (8000-FFFF).
    #[arg(long, short = 'a', value_parser = parse_hex)]
    address: u32,

    /// Value returned when the address is read, in hex (00-FF).
    #[arg(long, short = 'd', value_parser = parse_hex)]
    data: u32,

    /// Only patch when the original value equals this, in hex (00-FF).
    #[arg(long, short = 'c', value_parser = parse_hex)]
    comp: Option<u32>,

    /// Clear the 3rd letter's high bit (alternate form of the same code).
    #[arg(long)]
    alt: bool,
}

// ---------------------------------------------------------------------------
// Resolved command + options (flattened from Cli)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Decode,
    Encode,
    Config,
}

struct Options {
    command: Command,
    quiet: bool,
    verbose: u8,
    json_output: bool,
    code: String,
    address: u32,
    data: u32,
    comp: Option<u32>,
    variant: Variant,
}

fn resolve_options(cli: Cli) -> Options {
    let mut opts = Options {
        command: Command::Config,
        quiet: cli.quiet,
        verbose: cli.verbose.min(2),
        json_output: cli.json_output,
        code: String::new(),
        address: 0,
        data: 0,
        comp: None,
        variant: Variant::Standard,
    };

    match cli.command {
        Cmd::Decode(args) => {
            opts.command = Command::Decode;
            opts.code = args.code;
        }
        Cmd::Encode(args) => {
            opts.command = Command::Encode;
            opts.address = args.address;
            opts.data = args.data;
            opts.comp = args.comp;
            opts.variant = if args.alt {
                Variant::Alternate
            } else {
                Variant::Standard
            };
        }
        Cmd::Config => {}
    }
    opts
}

#[cfg(any(test, feature = "fuzzing"))]
pub fn fuzz_try_parse_args(args: &[String]) {
    let argv: Vec<String> = std::iter::once("gamegenie".to_string())
        .chain(args.iter().cloned())
        .collect();
    if let Ok(cli) = Cli::try_parse_from(argv) {
        let _ = resolve_options(cli);
    }
}

fn default_log_filter(opts: &Options) -> &'static str {
    if opts.quiet {
        return "error";
    }
    match opts.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn patch_json(patch: &Patch) -> serde_json::Value {
    serde_json::json!({
        "address": patch.address,
        "data": patch.data,
        "comp": patch.comp,
        "description": patch.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Config command
// ---------------------------------------------------------------------------

fn cmd_config() -> i32 {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!("gamegenie version {version} (Rust)");
    eprintln!("ALPHABET={ALPHABET}");
    eprintln!("FLAGGED_SYMBOLS={FLAGGED_SYMBOLS}");
    eprintln!("CODE_LENGTHS=6,8");
    eprintln!(
        "ADDRESS_RANGE={:#06X}-{:#06X}",
        genie::patch::ADDRESS_MIN,
        genie::patch::ADDRESS_MAX
    );
    0
}

// ---------------------------------------------------------------------------
// Decode command
// ---------------------------------------------------------------------------

fn cmd_decode(opts: &Options) -> i32 {
    let code = opts.code.as_str();
    let decoded = match genie::inspect(code) {
        Ok(decoded) => decoded,
        Err(e) => {
            eprintln!("gamegenie: {code}: {e}");
            return 1;
        }
    };
    if let Some(diagnostic) = decoded.diagnostic {
        log::warn!("{code}: {diagnostic}");
    }
    let patch = decoded.patch;
    log::info!("{code}: {}-letter code", patch.symbol_count());

    if opts.json_output {
        let mut json = patch_json(&patch);
        json["code"] = code.to_ascii_uppercase().into();
        json["warning"] = decoded.diagnostic.map(|d| d.to_string()).into();
        println!("{json:#}");
    } else {
        println!("{patch}");
    }
    0
}

// ---------------------------------------------------------------------------
// Encode command
// ---------------------------------------------------------------------------

fn cmd_encode(opts: &Options) -> i32 {
    let encoded = Patch::new(opts.address, opts.data, opts.comp)
        .and_then(|patch| patch.encode(opts.variant).map(|code| (patch, code)));
    let (patch, code) = match encoded {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("gamegenie: encode error: {e}");
            return 1;
        }
    };
    log::info!("{patch} -> {code} ({:?})", opts.variant);

    if opts.json_output {
        let mut json = patch_json(&patch);
        json["code"] = code.into();
        json["variant"] = match opts.variant {
            Variant::Standard => "standard",
            Variant::Alternate => "alternate",
        }
        .into();
        println!("{json:#}");
    } else {
        println!("{code}");
    }
    0
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    let cli = Cli::parse();
    let opts = resolve_options(cli);

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_log_filter(&opts)),
    )
    .format_timestamp(None)
    .format_target(false)
    .init();

    let exit_code = match opts.command {
        Command::Decode => cmd_decode(&opts),
        Command::Encode => cmd_encode(&opts),
        Command::Config => cmd_config(),
    };

    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
