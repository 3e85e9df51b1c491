#![deny(missing_docs)]
//! A command-line interface for the classic cipher toolkit.

use cipher_core::{CipherKind, KeyKind, Mode, playfair};
use clap::{Args, Parser, Subcommand};
use log::{error, info};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Encrypt with a Caesar shift of 3\ncipher-cli encrypt caesar --key 3 \"Hello, World!\"\n\n# Decrypt a Rail Fence message over 3 rails\ncipher-cli decrypt railfence --key 3 WECRLTEERDSOEEFEAOCAIVDEN\n\n# Encrypt a file with Playfair and save the result\ncipher-cli encrypt playfair --key MONARCHY --input ./letter.txt --output ./letter.enc\n\n# Show the Playfair matrix for a key\ncipher-cli matrix --key MONARCHY"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with one of the ciphers
    Encrypt(OperationArgs),
    /// Decrypt text with one of the ciphers
    Decrypt(OperationArgs),
    /// Print the Playfair matrix built from a key
    Matrix {
        /// The Playfair keyword
        #[arg(short, long, allow_hyphen_values = true)]
        key: String,
    },
    /// List the available ciphers and the key each one expects
    List,
}

#[derive(Args)]
struct OperationArgs {
    /// The cipher to use: caesar, vigenere, railfence, playfair or transposition
    cipher: CipherKind,

    /// The key. An integer for caesar, railfence and transposition; a keyword for vigenere and playfair.
    #[arg(short, long, allow_hyphen_values = true)]
    key: String,

    /// The text to process. If omitted, the text is read from --input or from standard input.
    text: Option<String>,

    /// Path to a file holding the text to process
    #[arg(short, long, value_name = "INPUT_FILE", conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Path to the output file. If omitted, the result is printed.
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<PathBuf>,

    /// Print the result as a JSON object instead of plain text
    #[arg(long)]
    json: bool,
}

/// Shape of the `--json` output, matching the web API response.
#[derive(serde::Serialize)]
struct OperationOutput<'a> {
    cipher: CipherKind,
    mode: Mode,
    result: &'a str,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Encrypt(args) => run_operation(Mode::Encrypt, args),
        Commands::Decrypt(args) => run_operation(Mode::Decrypt, args),
        Commands::Matrix { key } => {
            println!("{}", playfair::create_matrix(key));
        }
        Commands::List => {
            println!("{:<15} {:<15} {:<10}", "NAME", "CIPHER", "KEY");
            println!("{:-<40}", "");
            for kind in CipherKind::ALL {
                let key = match kind.key_kind() {
                    KeyKind::Integer => "integer",
                    KeyKind::Text => "keyword",
                };
                println!("{:<15} {:<15} {key:<10}", kind.slug(), kind.title());
            }
        }
    }
}

fn run_operation(mode: Mode, args: &OperationArgs) {
    let text = read_text(args).unwrap_or_else(|e| {
        error!("Failed to read the input text: {e}");
        std::process::exit(1);
    });

    info!(
        "Running {} {} over {} characters.",
        args.cipher,
        mode,
        text.chars().count()
    );
    let result = cipher_core::run(args.cipher, mode, &text, &args.key).unwrap_or_else(|e| {
        error!("Failed to {mode} text: {e}");
        std::process::exit(1);
    });

    let rendered = if args.json {
        let output = OperationOutput {
            cipher: args.cipher,
            mode,
            result: &result,
        };
        serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
            error!("Failed to serialize the result: {e}");
            std::process::exit(1);
        })
    } else {
        result
    };

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &rendered) {
                error!("Failed to write output file '{}': {e}", path.display());
                std::process::exit(1);
            }
            println!("Successfully wrote the {mode}ed text to '{}'", path.display());
        }
        None => println!("{rendered}"),
    }
}

/// Takes the text from the argument, the input file or standard input, in
/// that order. A single trailing newline from a file or a pipe is dropped.
fn read_text(args: &OperationArgs) -> io::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    let mut text = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}
