// SPDX-License-Identifier: MPL-2.0

//! Demo program: drive an air conditioner from the terminal.
//!
//! Reads one command per line from stdin and applies it to the remote.
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=debug cargo run --example remote -- <base-url>
//! ```
//!
//! # Commands
//!
//! `off`, `cool`, `dry`, `heat`, `+`, `-`, `fan`, `swing`, `state`, `quit`

use std::env;

use aircon_remote::Remote;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <base-url>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  cargo run --example remote -- 192.168.1.20:8080");
        std::process::exit(1);
    }

    let remote = Remote::http(&args[1]).build().await?;
    println!("Current state: {:?}", remote.state());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let accepted = match line.trim() {
            "off" => remote.power_off(),
            "cool" => remote.enable_cool_mode(),
            "dry" => remote.enable_dry_mode(),
            "heat" => remote.enable_heat_mode(),
            "+" => remote.increment_temp(),
            "-" => remote.decrement_temp(),
            "fan" => remote.toggle_fan(),
            "swing" => remote.toggle_swing(),
            "state" => {
                println!("{:?}", remote.state());
                continue;
            }
            "quit" => break,
            other => {
                println!("Unknown command: {other}");
                continue;
            }
        };

        if accepted {
            let state = remote.state();
            println!(
                "{} {} {} fan={} swing={}",
                state.power(),
                state.mode(),
                state.temp(),
                state.fan(),
                state.swing()
            );
        } else {
            println!("Ignored (unit is off or at a limit)");
        }
    }

    println!("Flushing pending changes...");
    remote.flush().await;
    println!("Done!");

    Ok(())
}
