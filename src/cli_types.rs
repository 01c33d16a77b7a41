use clap::{Args, ValueEnum};

/// Which entity kinds `extract` reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum KindFilter {
    /// URLs and hashtags
    #[default]
    All,
    Urls,
    Hashtags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One `path:line:column: [kind] text` line per entity
    #[default]
    Text,
    /// A JSON array of entity records
    Json,
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// File to scan (use '-' for stdin)
    #[arg(default_value = "-")]
    pub path: String,

    /// Only report entities of this kind
    #[arg(long, value_enum, default_value_t)]
    pub kind: KindFilter,

    /// Only link URLs that carry a protocol such as http://
    #[arg(long)]
    pub no_bare_urls: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub output: OutputFormat,
}

#[derive(Args, Debug)]
pub struct TreeArgs {
    /// File to parse (use '-' for stdin)
    #[arg(default_value = "-")]
    pub path: String,

    /// Footnote href, referenced as [text](0), [text](1), ... in the order given.
    /// Replaces the configured footnotes.
    #[arg(long = "footnote", value_name = "HREF")]
    pub footnotes: Vec<String>,

    /// Hashtag link target; must contain exactly one {hashtag}
    #[arg(long, value_name = "TEMPLATE")]
    pub hashtag_template: Option<String>,

    /// Only link URLs that carry a protocol such as http://
    #[arg(long)]
    pub no_bare_urls: bool,

    /// Print the tree before footnote and hashtag resolution
    #[arg(long)]
    pub raw: bool,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print the built-in defaults instead of the effective configuration
    #[arg(long)]
    pub defaults: bool,
}
