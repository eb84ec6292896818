use anyhow::Context;
use std::process::Command;

/// Per-layer history lines in `<size>: <command>` form, as printed by the
/// container runtime. Parsing belongs to the domain layer.
pub fn image_history(image: &str) -> anyhow::Result<Vec<String>> {
    let output = Command::new("docker")
        .args([
            "history",
            "--no-trunc",
            "--format",
            "{{.Size}}: {{.CreatedBy}}",
            image,
        ])
        .output()
        .context("spawn docker")?;

    if !output.status.success() {
        anyhow::bail!("docker history returned non-zero exit status for {image}");
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.lines().map(str::to_string).collect())
}
