use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crc15::crc15;

/// Fixed demonstration input: ASCII "AAAA".
const DEMO_INPUT: [u8; 4] = [0x41, 0x41, 0x41, 0x41];

#[derive(Parser, Debug)]
#[command(name = "crc15", about = "Print the CRC-15 of a fixed demo buffer")]
struct Args {
    /// Log filter directive (e.g. "debug", "crc15=trace")
    #[arg(
        long,
        value_name = "FILTER",
        env = "CRC15_LOG",
        default_value = "warn"
    )]
    log_level: String,
}

fn render(crc: u16) -> String {
    format!("crc: {:#06x}", crc)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_new(&args.log_level)
        .with_context(|| format!("invalid log filter '{}'", args.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(input = ?DEMO_INPUT, "computing crc15");
    let crc = crc15(&DEMO_INPUT);
    debug!(crc, "done");

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", render(crc)).context("failed to write to stdout")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_line_matches_reference_output() {
        assert_eq!(render(crc15(&DEMO_INPUT)), "crc: 0xe397");
    }

    #[test]
    fn render_zero_pads_to_four_digits() {
        assert_eq!(render(0x00AB), "crc: 0x00ab");
    }

    #[test]
    fn args_default_log_level() {
        let args = Args::try_parse_from(["crc15"]).unwrap();
        assert_eq!(args.log_level, "warn");
    }
}
