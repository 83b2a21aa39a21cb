use serde::Serialize;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

const UNKNOWN: &str = "unknown";

/// Compiler the binary was built with, captured by `build.rs`.
pub const RUNTIME_VERSION: &str = env!("RUSTC_VERSION");

#[derive(Debug, Clone, Serialize)]
pub struct SystemInfo {
    pub hostname: String,
    pub platform: String,
    pub platform_version: String,
    pub architecture: String,
    pub cpu_count: usize,
}

impl SystemInfo {
    /// Queried fresh on every call, never cached.
    pub fn gather() -> Self {
        let system =
            System::new_with_specifics(RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing()));

        Self {
            hostname: System::host_name().unwrap_or_else(|| UNKNOWN.into()),
            platform: os_family(std::env::consts::OS),
            platform_version: System::kernel_version().unwrap_or_else(|| UNKNOWN.into()),
            architecture: architecture(System::cpu_arch()),
            cpu_count: cpu_count(system.cpus().len()),
        }
    }
}

/// Kernel family as `uname -s` spells it, not the distribution name.
fn os_family(os: &str) -> String {
    match os {
        "linux" | "android" => "Linux".into(),
        "macos" | "ios" => "Darwin".into(),
        "windows" => "Windows".into(),
        "freebsd" => "FreeBSD".into(),
        "netbsd" => "NetBSD".into(),
        "openbsd" => "OpenBSD".into(),
        "solaris" | "illumos" => "SunOS".into(),
        other => other.into(),
    }
}

fn architecture(reported: String) -> String {
    if reported.is_empty() {
        std::env::consts::ARCH.into()
    } else {
        reported
    }
}

/// Every logical CPU the OS lists, regardless of affinity or cgroup quota.
fn cpu_count(listed: usize) -> usize {
    listed.max(1)
}
