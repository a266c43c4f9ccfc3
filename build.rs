use std::{env, fs, path::PathBuf, process::Command};

const UNKNOWN: &str = "unknown";

fn main() {
    println!("cargo:rerun-if-changed=Cargo.lock");
    println!("cargo:rerun-if-env-changed=RUSTC");

    println!("cargo:rustc-env=CONV_RUSTC_VERSION={}", rustc_version());
    println!("cargo:rustc-env=CONV_IMAGE_VERSION={}", locked_version("image"));
}

/// `rustc 1.85.0 (4d91de4e4 2025-02-17)` -> `1.85.0`
fn rustc_version() -> String {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());

    let output = match Command::new(rustc).arg("--version").output() {
        Ok(output) if output.status.success() => output,
        _ => {
            println!("cargo:warning=Could not query rustc version");
            return UNKNOWN.to_string();
        }
    };

    String::from_utf8_lossy(&output.stdout)
        .split_whitespace()
        .nth(1)
        .unwrap_or(UNKNOWN)
        .to_string()
}

/// Looks up the resolved version of `package` in the lockfile next to the manifest.
fn locked_version(package: &str) -> String {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => return UNKNOWN.to_string(),
    };

    let lock = match fs::read_to_string(manifest_dir.join("Cargo.lock")) {
        Ok(contents) => contents,
        Err(_) => return UNKNOWN.to_string(),
    };

    let name_line = format!("name = \"{package}\"");
    let mut lines = lock.lines();
    while let Some(line) = lines.next() {
        if line.trim() != name_line {
            continue;
        }
        if let Some(version) = lines
            .next()
            .and_then(|l| l.trim().strip_prefix("version = \""))
            .and_then(|v| v.strip_suffix('"'))
        {
            return version.to_string();
        }
    }

    UNKNOWN.to_string()
}
