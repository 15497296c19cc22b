use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output();

    let version = match output {
        Ok(o) if o.status.success() => {
            let git_output = String::from_utf8(o.stdout)
                .unwrap_or_default()
                .trim()
                .to_string();

            // Strip 'v' prefix if present (e.g., "v1.0.0" -> "1.0.0")
            let version = git_output.strip_prefix('v').unwrap_or(&git_output);
            if version.is_empty() {
                env!("CARGO_PKG_VERSION").to_string()
            } else if !version.starts_with(|c: char| c.is_ascii_digit()) {
                // Untagged checkout: describe only yields a commit hash
                format!("{}+{}", env!("CARGO_PKG_VERSION"), version)
            } else {
                version.to_string()
            }
        }
        _ => env!("CARGO_PKG_VERSION").to_string(),
    };

    println!("cargo:rustc-env=ORCHESTRATOR_CLIENT_VERSION={}", version);
}
