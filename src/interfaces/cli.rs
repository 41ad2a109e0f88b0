use clap::Parser;

#[derive(Parser)]
#[command(name = "anuvad")]
#[command(about = "Bilingual UI-text translator with a persistent cache.")]
#[command(version)]
pub struct Cli {
    /// Target language (default from config, normally "mr")
    #[arg(short = 'l', long = "to")]
    pub to: Option<String>,

    /// Source language (default from config, normally "en")
    #[arg(long)]
    pub from: Option<String>,

    /// UI context disambiguating identical text (e.g. "action")
    #[arg(short = 'c', long)]
    pub context: Option<String>,

    /// Skip the remote fallback; cache and phrase table only
    #[arg(long)]
    pub no_remote: bool,

    /// Don't read or write the cache
    #[arg(short = 'n', long)]
    pub nocache: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Show cache and config status
    #[arg(long)]
    pub status: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Edit configuration file
    #[arg(long)]
    pub edit_config: bool,

    /// Text to translate
    #[arg(num_args = 1..)]
    pub text: Vec<String>,
}
