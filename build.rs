//! Build script: embed a version string for `--version`.
use std::process::Command;

fn main() {
    // An explicit TOML_TO_LINO_VERSION (set by release builds) wins over
    // git describe; plain cargo builds outside a checkout fall back to the
    // package version at compile time.
    if let Ok(version) = std::env::var("TOML_TO_LINO_VERSION") {
        println!("cargo:rustc-env=TOML_TO_LINO_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        println!("cargo:rustc-env=TOML_TO_LINO_VERSION={version}");
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=TOML_TO_LINO_VERSION");
}
