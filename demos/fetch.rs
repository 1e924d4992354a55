// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Fetch a URL with httpkit and print the response
//!
//! Usage: cargo run --example fetch -- <url> [user-agent]

use std::env;
use std::time::Duration;

use anyhow::{bail, Context};
use httpkit::HttpClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("httpkit=debug".parse()?),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        bail!("Usage: fetch <url> [user-agent]");
    }

    let mut builder = HttpClient::builder()
        .header("Accept", "application/json")
        .connection_timeout(Duration::from_secs(5))
        .response_timeout(Duration::from_secs(10));
    if let Some(user_agent) = args.get(2) {
        builder = builder.user_agent(user_agent);
    }
    let client = builder.build();

    let response = client
        .get(&args[1], None)
        .await
        .with_context(|| format!("GET {}", args[1]))?;

    println!("Status: {}", response.status());
    for (name, value) in response.headers() {
        println!("{}: {}", name, value.to_str().unwrap_or("<binary>"));
    }
    println!();

    match response.json::<serde_json::Value>() {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", response.string_body()),
    }

    Ok(())
}
