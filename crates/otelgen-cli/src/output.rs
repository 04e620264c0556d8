//! User-facing run output.

use std::path::Path;

use otelgen_common::kind::ComponentKind;
use otelgen_manifest::Resolution;

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Prints omitted components and the version advisory to stderr.
pub fn print_warnings(resolution: &Resolution) {
    if let Some(advisory) = &resolution.version_advisory {
        eprintln!("{YELLOW}warning:{RESET} {advisory}");
    }
    for missing in &resolution.unresolved {
        eprintln!("{YELLOW}warning:{RESET} {missing}");
    }
}

/// Prints the rendered manifest to stdout.
pub fn print_manifest(yaml: &str) {
    print!("{yaml}");
}

/// Prints the success summary after the manifest was written.
pub fn print_summary(resolution: &Resolution, output: &Path) {
    let manifest = &resolution.manifest;
    println!(
        "{GREEN}Generated{RESET} {} (OTel Version: {})",
        output.display(),
        manifest.dist.otelcol_version
    );
    println!("  {}", module_counts(resolution));
}

fn module_counts(resolution: &Resolution) -> String {
    ComponentKind::ALL
        .iter()
        .map(|kind| {
            format!(
                "{} {}",
                resolution.manifest.modules(*kind).len(),
                kind.section()
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}
