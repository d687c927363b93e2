use std::fs;
use std::io::{Seek, Write};
use std::path::Path;
use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};
use zip::write::FileOptions;
use zip::result::ZipResult;
use zip::{CompressionMethod, ZipWriter};

const LAMBDA_PACKAGE: &str = "widget_sales_lambda";
const LAMBDA_BIN: &str = "notes_lambda";

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the widget sales notes workspace",
    long_about = "A unified CLI for CI checks and Lambda packaging\n\
                  in the widget sales notes workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run workspace tests
    Test,
    /// Run CI checks (fmt, clippy, tests)
    Ci,
    /// Build and package the notes Lambda as a bootstrap zip
    ServerlessPackage {
        /// Compilation target triple for the Lambda binary
        #[arg(long, default_value = "x86_64-unknown-linux-gnu")]
        target: String,
        /// Build profile used for the binary
        #[arg(value_enum, long, default_value_t = BuildProfile::Release)]
        profile: BuildProfile,
        /// Directory receiving the zip artifact
        #[arg(long, default_value = "dist")]
        dist_dir: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum BuildProfile {
    Debug,
    Release,
}

impl BuildProfile {
    fn dir_name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }

    fn as_cargo_flag(self) -> Option<&'static str> {
        match self {
            Self::Debug => None,
            Self::Release => Some("--release"),
        }
    }
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn run_cargo(args: &[&str]) {
    eprintln!("+ cargo {}", args.join(" "));
    let status: ExitStatus = Command::new("cargo")
        .args(args)
        .status()
        .unwrap_or_else(|error| fail(&format!("could not spawn cargo: {error}")));
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn fail(message: &str) -> ! {
    eprintln!("error: {message}");
    exit(1);
}

fn package_notes_lambda(target: &str, profile: BuildProfile, dist_dir: &Path) {
    check_target_preflight(target);

    step("Build notes lambda binary");
    let mut cargo_args = vec![
        "build",
        "-p",
        LAMBDA_PACKAGE,
        "--bin",
        LAMBDA_BIN,
        "--target",
        target,
    ];
    cargo_args.extend(profile.as_cargo_flag());
    run_cargo(&cargo_args);

    step("Zip bootstrap artifact");
    let binary_path = Path::new("target")
        .join(target)
        .join(profile.dir_name())
        .join(binary_name(LAMBDA_BIN, target));
    let binary = fs::read(&binary_path).unwrap_or_else(|error| {
        fail(&format!(
            "could not read lambda binary at '{}': {error}",
            binary_path.display()
        ))
    });

    fs::create_dir_all(dist_dir).unwrap_or_else(|error| {
        fail(&format!("could not create '{}': {error}", dist_dir.display()))
    });
    let zip_path = dist_dir.join(format!("{LAMBDA_BIN}.zip"));
    let file = fs::File::create(&zip_path).unwrap_or_else(|error| {
        fail(&format!("could not create '{}': {error}", zip_path.display()))
    });
    write_bootstrap_zip(file, &binary)
        .unwrap_or_else(|error| fail(&format!("could not write lambda zip: {error}")));

    eprintln!(
        "\nPackaged {} ({} bytes of bootstrap)",
        zip_path.display(),
        binary.len()
    );
}

/// No-op beyond a warning when `rustup` is unavailable (distro-packaged toolchains).
fn check_target_preflight(target: &str) {
    let Ok(output) = Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output()
    else {
        eprintln!("warning: rustup not found; skipping target preflight for `{target}`");
        return;
    };

    let installed = String::from_utf8_lossy(&output.stdout);
    if output.status.success() && !target_listed(&installed, target) {
        fail(&format!(
            "rust target `{target}` is missing; run `rustup target add {target}` first"
        ));
    }
}

fn target_listed(installed: &str, target: &str) -> bool {
    installed.lines().any(|line| line.trim() == target)
}

fn binary_name(bin_name: &str, target: &str) -> String {
    if target.contains("windows") {
        format!("{bin_name}.exe")
    } else {
        bin_name.to_string()
    }
}

/// The provided.al2023 runtime executes an executable named `bootstrap` at the
/// zip root.
fn write_bootstrap_zip<W: Write + Seek>(sink: W, binary: &[u8]) -> ZipResult<W> {
    let mut zip = ZipWriter::new(sink);
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o755);
    zip.start_file("bootstrap", options)?;
    zip.write_all(binary)?;
    zip.finish()
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    step("Test widget_sales_core");
    run_cargo(&["test", "-p", "widget_sales_core"]);

    step("Test widget_sales_lambda");
    run_cargo(&["test", "-p", LAMBDA_PACKAGE]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Test => {
            run_cargo(&["test", "--workspace"]);
        }
        Commands::Ci => {
            ci_check();
            eprintln!("\nCI job passed.");
        }
        Commands::ServerlessPackage {
            target,
            profile,
            dist_dir,
        } => {
            package_notes_lambda(&target, profile, Path::new(&dist_dir));
        }
    }
}
