#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use anyhow::{Context, Result};

pub fn relstage(args: &[&str]) -> Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_relstage"))
        .args(args)
        .env_remove("RELSTAGE_LOG")
        .output()
        .with_context(|| format!("run relstage {:?}", args))
}

pub fn run_relstage(args: &[&str]) -> Result<String> {
    let out = relstage(args)?;
    if !out.status.success() {
        anyhow::bail!(
            "relstage {:?} failed (status {:?})\nstdout:\n{}\nstderr:\n{}",
            args,
            out.status,
            String::from_utf8_lossy(&out.stdout),
            String::from_utf8_lossy(&out.stderr)
        );
    }
    Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
}

pub fn write_board(dir: &Path, board: &serde_json::Value) -> Result<PathBuf> {
    let path = dir.join("releases.json");
    let bytes = serde_json::to_vec_pretty(board).context("serialize board")?;
    std::fs::write(&path, bytes).context("write releases.json")?;
    Ok(path)
}

/// `latest/beta` holds revision 1 on amd64; `latest/stable` holds revision 0.
pub fn sample_board() -> serde_json::Value {
    serde_json::json!({
        "tracks": ["latest", "2.0"],
        "archs": ["amd64", "arm64"],
        "released_channels": {
            "latest/stable": {
                "amd64": {"revision": 0, "version": "0.9", "architectures": ["amd64"]}
            },
            "latest/beta": {
                "amd64": {"revision": 1, "version": "1.0", "architectures": ["amd64"]}
            },
            "2.0/edge": {
                "arm64": {"revision": 5, "version": "2.0.0", "architectures": ["arm64"]}
            }
        }
    })
}
