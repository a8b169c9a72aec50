//! Custom cargo commands for lupa.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask wasm      - Build the browser package into assets/pkg
//!   cargo xtask fuzz      - Run every fuzz target for a short while
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Fuzz targets declared in fuzz/Cargo.toml.
const FUZZ_TARGETS: &[&str] = &["search_queries", "highlight_markup", "data_parsing"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("wasm") => wasm()?,
        Some("fuzz") => fuzz()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests + clippy + wasm build)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  wasm      Build the browser package (needs wasm-pack)
  fuzz      Run each fuzz target for 60s (needs cargo-fuzz, nightly)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("lupa Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[2/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[3/4] Checking wasm feature set...");
    run_cargo(&[
        "check",
        "--quiet",
        "--lib",
        "--no-default-features",
        "--features",
        "wasm",
    ])?;
    println!("✓ wasm build checks\n");

    println!("[4/4] Checking browser shim...");
    check_shim_effects()?;
    println!("✓ Shim handles every effect\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Build the wasm package next to the browser shim.
fn wasm() -> Result<()> {
    let root = project_root()?;
    let out_dir = root.join("assets").join("pkg");

    let status = Command::new("wasm-pack")
        .args(["build", "--target", "web", "--release", "--out-dir"])
        .arg(&out_dir)
        .args(["--", "--no-default-features", "--features", "wasm"])
        .current_dir(&root)
        .status()
        .context("Failed to run wasm-pack (is it installed?)")?;

    if !status.success() {
        bail!("wasm-pack build failed");
    }

    println!("✓ Package written to {}", out_dir.display());
    Ok(())
}

/// Short fuzzing run over every target.
fn fuzz() -> Result<()> {
    let fuzz_dir = project_root()?.join("fuzz");

    for target in FUZZ_TARGETS {
        println!("Fuzzing {}...", target);
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"])
            .current_dir(&fuzz_dir)
            .status()
            .with_context(|| format!("Failed to run cargo fuzz for {}", target))?;

        if !status.success() {
            bail!("fuzz target {} failed", target);
        }
    }

    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Every `Effect` variant must have a `case` in the browser shim.
fn check_shim_effects() -> Result<()> {
    let root = project_root()?;

    let overlay_rs = std::fs::read_to_string(root.join("src/overlay.rs"))
        .context("Failed to read overlay.rs")?;
    let shim = std::fs::read_to_string(root.join("assets/lupa.js"))
        .context("Failed to read assets/lupa.js")?;

    let variants = effect_variants(&overlay_rs);
    if variants.is_empty() {
        bail!("No Effect variants found in src/overlay.rs");
    }

    let missing: Vec<String> = variants
        .into_iter()
        .filter(|v| !shim.contains(&format!("case \"{}\"", camel_case(v))))
        .collect();

    if !missing.is_empty() {
        bail!("assets/lupa.js does not handle: {}", missing.join(", "));
    }

    Ok(())
}

fn effect_variants(source: &str) -> Vec<String> {
    let mut variants = Vec::new();
    let mut inside = false;
    for line in source.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("pub enum Effect") {
            inside = true;
            continue;
        }
        if !inside {
            continue;
        }
        if trimmed == "}" && line.starts_with('}') {
            break;
        }
        if trimmed.starts_with("//") || trimmed.starts_with("#[") || line.starts_with("        ") {
            continue;
        }
        let name: String = trimmed
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect();
        if name.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
            variants.push(name);
        }
    }
    variants
}

fn camel_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
