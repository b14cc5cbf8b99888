//! quiknode CLI — inspect QuickNode endpoints from the terminal.
//!
//! Usage:
//! ```bash
//! # Derive the chain behind an endpoint URL
//! quiknode resolve --url https://some-label.matic.quiknode.pro/token/
//!
//! # Send a raw JSON-RPC call
//! quiknode call --url https://some-label.quiknode.pro/token/ --method eth_blockNumber
//!
//! # List supported network segments
//! quiknode networks
//! ```

use std::env;
use std::process;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};

use quiknode_core::chain::{self, derive_chain_from_url};
use quiknode_core::request::JsonRpcRequest;
use quiknode_core::transport::RpcTransport;
use quiknode_http::HttpRpcClient;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "resolve" => cmd_resolve(&args[2..]),
        "call" => cmd_call(&args[2..]).await,
        "networks" => {
            cmd_networks();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("quiknode {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn print_usage() {
    println!("quiknode {}", env!("CARGO_PKG_VERSION"));
    println!("Inspect QuickNode endpoints and send raw JSON-RPC calls\n");
    println!("USAGE:");
    println!("    quiknode <COMMAND>\n");
    println!("COMMANDS:");
    println!("    resolve    Derive the chain behind an endpoint URL");
    println!("    call       Send a raw JSON-RPC call");
    println!("    networks   List supported network segments");
    println!("    version    Print version");
    println!("    help       Print this help\n");
    println!("FLAGS:");
    println!("    --url <URL>        Endpoint URL  [required]");
    println!("    --method <NAME>    RPC method name (call)");
    println!("    --params <JSON>    Positional params as a JSON array (call)");
}

fn cmd_resolve(args: &[String]) -> Result<()> {
    let url = parse_flag(args, "--url").ok_or_else(|| anyhow!("--url is required"))?;
    let chain = derive_chain_from_url(&url)?;

    println!("  Chain:     {} (id {})", chain.name, chain.id);
    println!("  Network:   {}", chain.network);
    println!(
        "  Currency:  {} ({})",
        chain.native_currency.name, chain.native_currency.symbol
    );
    println!("  Testnet:   {}", chain.testnet);
    Ok(())
}

async fn cmd_call(args: &[String]) -> Result<()> {
    let url = parse_flag(args, "--url").ok_or_else(|| anyhow!("--url is required"))?;
    let method = parse_flag(args, "--method").ok_or_else(|| anyhow!("--method is required"))?;
    let params = match parse_flag(args, "--params") {
        Some(raw) => serde_json::from_str(&raw).context("--params must be a JSON array")?,
        None => vec![],
    };

    let client: Arc<dyn RpcTransport> = Arc::new(HttpRpcClient::default_for(&url));
    let req = JsonRpcRequest::new(1, method, params);
    let resp = client.send(req).await?;
    let result = resp.into_result().map_err(|e| anyhow!("{e}"))?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn cmd_networks() {
    println!("Supported network segments:\n");
    for network in chain::SUPPORTED_NETWORKS {
        match chain::lookup(network) {
            Some(c) => println!("  {network:<20} {} (id {})", c.name, c.id),
            None => println!("  {network}"),
        }
    }
}

fn parse_flag(args: &[String], flag: &str) -> Option<String> {
    let pos = args.iter().position(|a| a == flag)?;
    args.get(pos + 1).cloned()
}
