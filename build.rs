use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    let revision = git_revision().unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=CREDIT_APP_GIT_REVISION={revision}");
    if let Ok(profile) = std::env::var("PROFILE") {
        println!("cargo:rustc-env=CREDIT_APP_PROFILE={profile}");
    }
}

/// Short commit id with a `-dirty` suffix for uncommitted changes.
fn git_revision() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let revision = String::from_utf8(output.stdout).ok()?;
    Some(revision.trim().to_string()).filter(|rev| !rev.is_empty())
}
