//! Packaging tasks for StudioDesk.
//!
//! # Usage
//!
//! ```bash
//! cargo xtask [win|mac|linux|all]
//! ```
//!
//! With no argument the host platform is built. Common aliases
//! (`windows`, `win32`, `darwin`, `macos`) are accepted. An unknown
//! platform or a failed build exits with status 1.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::Command;

/// Packaging tasks for StudioDesk.
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build StudioDesk release artifacts", long_about = None)]
struct Cli {
    /// Target platform: win, mac, linux, or all. Defaults to the host.
    platform: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Platform {
    Win,
    Mac,
    Linux,
}

impl Platform {
    fn name(self) -> &'static str {
        match self {
            Platform::Win => "win",
            Platform::Mac => "mac",
            Platform::Linux => "linux",
        }
    }

    fn target_triple(self) -> &'static str {
        match self {
            Platform::Win => "x86_64-pc-windows-msvc",
            Platform::Mac => "aarch64-apple-darwin",
            Platform::Linux => "x86_64-unknown-linux-gnu",
        }
    }

    fn binary_name(self) -> &'static str {
        match self {
            Platform::Win => "studiodesk.exe",
            Platform::Mac | Platform::Linux => "studiodesk",
        }
    }
}

fn host_platform() -> Platform {
    match std::env::consts::OS {
        "windows" => Platform::Win,
        "macos" => Platform::Mac,
        _ => Platform::Linux,
    }
}

fn parse_platforms(name: &str) -> Option<Vec<Platform>> {
    match name.to_lowercase().as_str() {
        "win" | "win32" | "windows" => Some(vec![Platform::Win]),
        "mac" | "darwin" | "macos" => Some(vec![Platform::Mac]),
        "linux" => Some(vec![Platform::Linux]),
        "all" => Some(vec![Platform::Win, Platform::Mac, Platform::Linux]),
        _ => None,
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let requested = cli
        .platform
        .unwrap_or_else(|| host_platform().name().to_string());

    let Some(platforms) = parse_platforms(&requested) else {
        bail!(
            "unknown platform '{}' (expected win, mac, linux, or all)",
            requested
        );
    };

    for platform in &platforms {
        build(*platform)?;
    }

    for platform in &platforms {
        report_artifact(*platform);
    }

    Ok(())
}

fn build(platform: Platform) -> Result<()> {
    println!("Building release for {}...", platform.name());

    let mut cmd = Command::new("cargo");
    cmd.args(["build", "--release", "--package", "studiodesk-app"]);
    if platform != host_platform() {
        cmd.args(["--target", platform.target_triple()]);
    }

    let status = cmd.status().context("failed to run cargo")?;
    if !status.success() {
        bail!("build for {} failed", platform.name());
    }
    Ok(())
}

fn report_artifact(platform: Platform) {
    let path = artifact_path(platform);
    match std::fs::metadata(&path) {
        Ok(meta) => {
            let size_mb = meta.len() as f64 / (1024.0 * 1024.0);
            println!("  {} ({:.2} MB)", path.display(), size_mb);
        }
        Err(_) => println!("  {} (missing)", path.display()),
    }
}

fn artifact_path(platform: Platform) -> PathBuf {
    let mut path = PathBuf::from("target");
    if platform != host_platform() {
        path.push(platform.target_triple());
    }
    path.push("release");
    path.push(platform.binary_name());
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_platform_aliases() {
        assert_eq!(parse_platforms("win"), Some(vec![Platform::Win]));
        assert_eq!(parse_platforms("windows"), Some(vec![Platform::Win]));
        assert_eq!(parse_platforms("win32"), Some(vec![Platform::Win]));
        assert_eq!(parse_platforms("darwin"), Some(vec![Platform::Mac]));
        assert_eq!(parse_platforms("MACOS"), Some(vec![Platform::Mac]));
        assert_eq!(parse_platforms("linux"), Some(vec![Platform::Linux]));
    }

    #[test]
    fn test_parse_all() {
        assert_eq!(
            parse_platforms("all"),
            Some(vec![Platform::Win, Platform::Mac, Platform::Linux])
        );
    }

    #[test]
    fn test_unknown_platform_rejected() {
        assert_eq!(parse_platforms("freebsd"), None);
        assert_eq!(parse_platforms(""), None);
    }
}
