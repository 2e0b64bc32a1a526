use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use anyhow::{anyhow, bail, Result};
use clap::Parser;
use clap_num::maybe_hex;

use strhash::log::LogLevel;
use strhash::log_println;
use strhash::{load_wordlist, HashIndex, HashVariant};

const PROGRAM_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(long_about = None)]
struct Cli {
    /// Strings to hash (reads lines from stdin when omitted)
    #[arg(value_name = "TEXT")]
    texts: Vec<String>,

    /// Verbosity (0=errors, 1=errors+warnings, 2=debug)
    #[arg(short, long, value_name="VERBOSITY", default_value_t=1)]
    log_level: u64,

    /// Print hashes as hex
    #[arg(short = 'x', long)]
    hex: bool,

    /// Use the byte-oriented variant (multiplier 33)
    #[arg(short, long)]
    native: bool,

    /// Resolve this hash against the word list
    #[arg(short, long, value_name="HASH", value_parser=maybe_hex::<u32>, requires="wordlist")]
    find: Option<u32>,

    /// List hash collisions in the word list
    #[arg(short, long, requires="wordlist", conflicts_with="find")]
    collisions: bool,

    /// Newline separated list of candidate names
    #[arg(short, long, value_name="FILE")]
    wordlist: Option<PathBuf>,
}

struct HashOpts {
    log_level: LogLevel,
    variant: HashVariant,
    hex: bool,
}

impl HashOpts {
    fn format(&self, hash: u32) -> String {
        if self.hex {
            format!("0x{:08X}", hash)
        } else {
            hash.to_string()
        }
    }
}

fn print_hashes<I: IntoIterator<Item = String>>(opts: &HashOpts, texts: I) {
    for text in texts {
        println!("{}  {}", opts.format(opts.variant.hash(&text)), text);
    }
}

fn build_index(opts: &HashOpts, wordlist: &Path) -> Result<HashIndex> {
    let words = load_wordlist(wordlist)?;
    log_println!(opts.log_level, LogLevel::Debug, "Loaded {} names from {}", words.len(), wordlist.display());

    if words.is_empty() {
        log_println!(opts.log_level, LogLevel::Warn, "Warning: word list {} is empty", wordlist.display());
    }

    let index = HashIndex::build(&words, opts.variant);
    log_println!(opts.log_level, LogLevel::Debug, "Indexed {} distinct {} hashes", index.len(), index.variant);
    Ok(index)
}

fn run(cli: Cli) -> Result<()> {
    let opts = HashOpts {
        log_level: LogLevel::from(cli.log_level),
        variant: if cli.native { HashVariant::Native } else { HashVariant::Script },
        hex: cli.hex,
    };

    if let Some(hash) = cli.find {
        let wordlist = cli.wordlist.as_ref().ok_or_else(|| anyhow!("--find requires --wordlist"))?;
        let index = build_index(&opts, wordlist)?;
        let names = index.lookup(hash);
        if names.is_empty() {
            bail!("No name in {} hashes to {}", wordlist.display(), opts.format(hash));
        }
        for name in names {
            println!("{}  {}", opts.format(hash), name);
        }
        return Ok(());
    }

    if cli.collisions {
        let wordlist = cli.wordlist.as_ref().ok_or_else(|| anyhow!("--collisions requires --wordlist"))?;
        let index = build_index(&opts, wordlist)?;
        let collisions = index.collisions();
        for (hash, names) in &collisions {
            println!("{} -> {}", opts.format(*hash), names.join(","));
        }
        if collisions.is_empty() {
            println!("No collisions detected.");
        }
        return Ok(());
    }

    if !cli.texts.is_empty() {
        print_hashes(&opts, cli.texts);
        return Ok(());
    }

    log_println!(opts.log_level, LogLevel::Debug, "Reading strings from stdin");
    let lines = io::stdin().lock().lines().collect::<Result<Vec<String>, io::Error>>()?;
    print_hashes(&opts, lines);

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let log_level = LogLevel::from(cli.log_level);
    log_println!(log_level, LogLevel::Debug, "strhash -- version {}", PROGRAM_VERSION);

    if let Err(err) = run(cli) {
        log_println!(log_level, LogLevel::Error, "Error: {}", err);
        std::process::exit(1);
    }
}
