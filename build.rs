use std::process::Command;

/// Short commit hash of the checkout, or "unknown" outside a git tree.
fn git_short_hash() -> String {
    match Command::new("git").args(["rev-parse", "--short", "HEAD"]).output() {
        Ok(output) if output.status.success() => String::from_utf8(output.stdout)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|_| "unknown".to_string()),
        _ => "unknown".to_string(),
    }
}

fn main() {
    // shown by `crossgrid --version` and the wasm debug report
    println!("cargo:rustc-env=GIT_HASH={}", git_short_hash());

    println!("cargo:rerun-if-changed=.git/HEAD");
}
