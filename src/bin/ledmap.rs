use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ledmap", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a frame program and list its per-light color entries.
    Decode(DecodeArgs),
    /// Re-emit a frame program in canonical form (ascending id order).
    Normalize(NormalizeArgs),
}

#[derive(Parser, Debug)]
struct DecodeArgs {
    /// Input frame program text file.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct NormalizeArgs {
    /// Input frame program text file.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path; prints to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Decode(args) => cmd_decode(args),
        Command::Normalize(args) => cmd_normalize(args),
    }
}

fn cmd_decode(args: DecodeArgs) -> anyhow::Result<()> {
    let text = read_program(&args.in_path)?;
    let table = ledmap::decode(&text);
    for (id, c) in &table {
        println!("P[{id}] = ({},{},{})", c.r, c.g, c.b);
    }
    println!("{} entries", table.len());
    Ok(())
}

fn cmd_normalize(args: NormalizeArgs) -> anyhow::Result<()> {
    let text = read_program(&args.in_path)?;
    let canonical = ledmap::encode(&ledmap::decode(&text));
    match args.out {
        Some(out) => std::fs::write(&out, canonical)
            .with_context(|| format!("write program '{}'", out.display()))?,
        None => println!("{canonical}"),
    }
    Ok(())
}

fn read_program(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read program '{}'", path.display()))
}
