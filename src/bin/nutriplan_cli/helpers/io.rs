// ABOUTME: JSON input and output helpers for nutriplan-cli
// ABOUTME: Reads typed JSON from a file or stdin and writes results to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::AsyncReadExt;

/// Read and parse a JSON document from `path`, or from stdin when `path` is `-`
pub async fn read_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    let raw = if path == "-" {
        let mut buffer = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buffer)
            .await
            .context("Failed to read JSON from stdin")?;
        buffer
    } else {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {path}"))?
    };
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {path}"))
}

/// Write a value to stdout as pretty-printed JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
