use anyhow::Context;
use serde::Deserialize;

/// Direct dependencies each layer must not take (normal and build kinds)
const LAYER_RULES: &[(&str, &[&str])] = &[
    (
        "rollcall-domain",
        &[
            "rollcall-shared",
            "rollcall-portal",
            "dioxus",
            "web-sys",
            "js-sys",
            "wasm-bindgen",
            "tokio",
            "tracing",
        ],
    ),
    (
        "rollcall-shared",
        &["rollcall-portal", "dioxus", "web-sys", "js-sys", "wasm-bindgen", "tokio"],
    ),
];

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    /// `null` for normal dependencies, otherwise "dev" or "build"
    kind: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let violations = layer_violations(&metadata);
    if !violations.is_empty() {
        for violation in &violations {
            eprintln!("  {violation}");
        }
        anyhow::bail!("arch-check failed with {} violation(s)", violations.len());
    }

    println!("arch-check passed");
    Ok(())
}

fn layer_violations(metadata: &Metadata) -> Vec<String> {
    let mut violations = Vec::new();

    for (crate_name, forbidden) in LAYER_RULES {
        let Some(package) = metadata.packages.iter().find(|p| p.name == *crate_name) else {
            continue;
        };

        for dep in &package.dependencies {
            if dep.kind.as_deref() == Some("dev") {
                continue;
            }
            if forbidden.contains(&dep.name.as_str()) {
                violations.push(format!("{crate_name} must not depend on {}", dep.name));
            }
        }
    }

    violations
}
