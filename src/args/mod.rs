use clap::{Args, Parser, Subcommand};

use crate::core::{EncodeOptions, SafeSet, SpaceMode};

const EXAMPLES: &str = "Examples:
  urltool enc \"' UNION SELECT @@version, NULL#\"
  urltool enc \"' UNION SELECT @@version, NULL#\" --pretty --wsaplus
  echo \"' UNION SELECT @@version, NULL#\" | urltool enc --pretty
  urltool dec \"%27+UNION+SELECT+@@version,+NULL%23\"
  urltool url https://t/filter category \"' UNION SELECT @@version, NULL#\" --pretty --wsaplus";

#[derive(Debug, Parser)]
#[command(
    name = "urltool",
    version,
    about = "URL query encoder/decoder helper (spaces -> + by default)",
    after_help = EXAMPLES
)]
pub struct Cli {
    #[command(flatten, next_help_heading = "Global Options")]
    pub global: GlobalArgs,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    #[arg(
        short = 'P',
        long,
        global = true,
        help = "Output machine-readable JSON"
    )]
    pub porcelain: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Encode payload for URL query usage
    Enc(EncArgs),
    /// Decode a URL-encoded query string
    Dec(DecArgs),
    /// Build full URL with a parameter and encoded payload
    Url(UrlArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct EncodeFlags {
    #[arg(long, help = "Use %20 for spaces instead of '+'")]
    pub percent20: bool,
    #[arg(
        long,
        value_name = "CHARS",
        allow_hyphen_values = true,
        help = "Characters to NOT encode (overrides --pretty)"
    )]
    pub safe: Option<String>,
    #[arg(long, help = "Keep readable chars unencoded (default: '@,()=/:._-')")]
    pub pretty: bool,
    #[arg(long, help = "Convert leading '%27+' into '+' (WSA-style)")]
    pub wsaplus: bool,
}

impl EncodeFlags {
    pub fn to_options(&self) -> EncodeOptions {
        EncodeOptions {
            space: if self.percent20 {
                SpaceMode::Percent20
            } else {
                SpaceMode::Plus
            },
            safe: SafeSet::from_flags(self.safe.as_deref(), self.pretty),
            wsa_plus: self.wsaplus,
        }
    }
}

#[derive(Debug, Args)]
pub struct EncArgs {
    #[arg(help = "Payload string. If omitted, read from stdin or prompt")]
    pub payload: Option<String>,
    #[command(flatten)]
    pub flags: EncodeFlags,
}

#[derive(Debug, Args)]
pub struct DecArgs {
    #[arg(help = "Encoded string. If omitted, read from stdin or prompt")]
    pub payload: Option<String>,
    #[arg(long, help = "Do not treat '+' as space")]
    pub no_plus: bool,
}

#[derive(Debug, Args)]
pub struct UrlArgs {
    #[arg(help = "Base URL (e.g. https://target/filter)")]
    pub base_url: String,
    #[arg(help = "Parameter name (e.g. category)")]
    pub param: String,
    #[arg(help = "Payload string. If omitted, read from stdin or prompt")]
    pub payload: Option<String>,
    #[command(flatten)]
    pub flags: EncodeFlags,
}

#[derive(Debug, Args)]
#[command(
    after_help = "Installation examples:\n  zsh:        urltool completions zsh > ~/.zsh/completions/_urltool\n  bash:       urltool completions bash > ~/.local/share/bash-completion/completions/urltool\n  fish:       urltool completions fish > ~/.config/fish/completions/urltool.fish\n  powershell: urltool completions powershell > urltool.ps1"
)]
pub struct CompletionsArgs {
    #[arg(help = "Shell to generate completions for")]
    pub shell: Option<clap_complete::Shell>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn safe_flag_overrides_pretty() {
        let cli = Cli::parse_from(["urltool", "enc", "x", "--pretty", "--safe=@"]);
        let Commands::Enc(args) = cli.command else {
            panic!("expected enc");
        };
        let opts = args.flags.to_options();
        assert_eq!(opts.safe, SafeSet::new("@"));
        assert_eq!(opts.space, SpaceMode::Plus);
        assert!(!opts.wsa_plus);
    }

    #[test]
    fn percent20_and_wsaplus_map_to_options() {
        let cli = Cli::parse_from([
            "urltool",
            "url",
            "https://t/filter",
            "category",
            "--percent20",
            "--wsaplus",
        ]);
        let Commands::Url(args) = cli.command else {
            panic!("expected url");
        };
        assert_eq!(args.payload, None);
        let opts = args.flags.to_options();
        assert_eq!(opts.space, SpaceMode::Percent20);
        assert!(opts.wsa_plus);
        assert_eq!(opts.safe, SafeSet::empty());
    }

    #[test]
    fn url_requires_base_and_param() {
        assert!(Cli::try_parse_from(["urltool", "url", "https://t/filter"]).is_err());
    }

    #[test]
    fn porcelain_is_accepted_after_subcommand() {
        let cli = Cli::parse_from(["urltool", "dec", "a+b", "--no-plus", "-P"]);
        assert!(cli.global.porcelain);
        let Commands::Dec(args) = cli.command else {
            panic!("expected dec");
        };
        assert!(args.no_plus);
    }
}
