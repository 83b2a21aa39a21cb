use std::process::Command;

/// Captures the compiler version for `runtime.runtime_version`.
fn main() {
    println!("cargo:rerun-if-env-changed=RUSTC");

    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".into());
    let version = Command::new(&rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|stdout| stdout.trim().to_string())
        .filter(|version| !version.is_empty());

    match version {
        Some(version) => println!("cargo:rustc-env=RUSTC_VERSION={version}"),
        None => {
            println!("cargo:warning=unable to query `{rustc} --version`, reporting `unknown`");
            println!("cargo:rustc-env=RUSTC_VERSION=unknown");
        }
    }
}
