//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use mksdk::util::config::Config;
use mksdk::util::shell::ColorChoice;

/// mksdk - assemble a Darwin-style platform SDK
#[derive(Parser)]
#[command(name = "mksdk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Coloring: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output format for progress messages
    #[arg(long, global = true, value_enum, default_value_t = MessageFormat::Human)]
    pub message_format: MessageFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MessageFormat {
    /// Status lines on stderr
    Human,
    /// One JSON event per line on stdout
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create or refresh an SDK bundle
    Create(CreateArgs),

    /// Print the rendered SDKSettings.plist
    Settings(SettingsArgs),

    /// Print the .tbd stub rendered from one symbol file
    Stub(StubArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// SDK metadata flags shared by every rendering command.
#[derive(Args, Debug, Clone, Default)]
pub struct SdkArgs {
    /// Configuration file (defaults to ./mksdk.toml when present)
    #[arg(long, env = "MKSDK_CONFIG")]
    pub config: Option<PathBuf>,

    /// SDK name; the bundle directory defaults to <NAME>.sdk
    #[arg(long, env = "MKSDK_SDK_NAME")]
    pub sdk_name: Option<String>,

    /// Canonical name (defaults to the lowercase SDK name)
    #[arg(long, env = "MKSDK_CANONICAL_NAME")]
    pub canonical_name: Option<String>,

    /// SDK version string
    #[arg(long, env = "MKSDK_VERSION")]
    pub sdk_version: Option<String>,

    /// Architecture, e.g. arm64
    #[arg(long, env = "MKSDK_ARCH")]
    pub arch: Option<String>,

    /// Target triple, e.g. arm64-apple-darwin
    #[arg(long, env = "MKSDK_TARGET")]
    pub target: Option<String>,

    /// Platform name
    #[arg(long, env = "MKSDK_PLATFORM")]
    pub platform: Option<String>,
}

impl SdkArgs {
    /// Flags as a config layer that overrides files.
    pub fn overrides(&self) -> Config {
        let mut config = Config::default();
        config.sdk.sdk_name = self.sdk_name.clone();
        config.sdk.canonical_name = self.canonical_name.clone();
        config.sdk.version = self.sdk_version.clone();
        config.sdk.architecture = self.arch.clone();
        config.sdk.target_triple = self.target.clone();
        config.sdk.platform_name = self.platform.clone();
        config
    }
}

#[derive(Args)]
pub struct CreateArgs {
    /// Source directory with headers/, frameworks/ and symbols/
    #[arg(short, long, env = "MKSDK_SOURCE")]
    pub source: Option<PathBuf>,

    /// Output directory (defaults to <SDK_NAME>.sdk)
    #[arg(short, long, env = "MKSDK_OUTPUT")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub sdk: SdkArgs,
}

#[derive(Args)]
pub struct SettingsArgs {
    #[command(flatten)]
    pub sdk: SdkArgs,
}

#[derive(Args)]
pub struct StubArgs {
    /// Symbol list, one symbol per line
    pub file: PathBuf,

    #[command(flatten)]
    pub sdk: SdkArgs,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_create_defaults() {
        let cli = Cli::parse_from(["mksdk", "create"]);
        assert!(!cli.verbose);
        assert_eq!(cli.color, ColorChoice::Auto);
        assert_eq!(cli.message_format, MessageFormat::Human);
        assert!(matches!(cli.command, Commands::Create(_)));
    }

    #[test]
    fn test_parse_create_with_flags() {
        let cli = Cli::parse_from([
            "mksdk",
            "create",
            "--source",
            "inputs",
            "--output",
            "out/Tiny.sdk",
            "--arch",
            "x86_64",
            "--target",
            "x86_64-apple-darwin",
            "--sdk-version",
            "1.2",
        ]);
        let Commands::Create(args) = cli.command else {
            panic!("expected create");
        };
        assert_eq!(args.source, Some(PathBuf::from("inputs")));
        assert_eq!(args.output, Some(PathBuf::from("out/Tiny.sdk")));

        let overrides = args.sdk.overrides();
        assert_eq!(overrides.sdk.architecture.as_deref(), Some("x86_64"));
        assert_eq!(overrides.sdk.target_triple.as_deref(), Some("x86_64-apple-darwin"));
        assert_eq!(overrides.sdk.version.as_deref(), Some("1.2"));
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["mksdk", "settings", "--quiet", "--color", "never"]);
        assert!(cli.quiet);
        assert_eq!(cli.color, ColorChoice::Never);
    }

    #[test]
    fn test_parse_stub_requires_file() {
        assert!(Cli::try_parse_from(["mksdk", "stub"]).is_err());
        let cli = Cli::parse_from(["mksdk", "stub", "symbols/libfoo.txt"]);
        let Commands::Stub(args) = cli.command else {
            panic!("expected stub");
        };
        assert_eq!(args.file, PathBuf::from("symbols/libfoo.txt"));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["mksdk", "-q", "-v", "settings"]).is_err());
    }

    #[test]
    fn test_message_format_json() {
        let cli = Cli::parse_from(["mksdk", "--message-format", "json", "create"]);
        assert_eq!(cli.message_format, MessageFormat::Json);
    }
}
