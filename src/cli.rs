//! CLI definitions for huelog
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so the dispatch stays small.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand, ValueEnum};

/// Build clap styles for help output.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "huelog")]
#[command(about = "[ huelog ] - stable terminal colors for values, text and tables")]
#[command(long_about = "huelog - colorize log values, free text and tables for the terminal.

Equal text always gets the same color, numbers are colored by sign,
dates and durations stand out, and tables line up no matter how many
escape sequences a cell carries.

QUICK START:
    huelog token \"took 15ms, 3 retries\"    Highlight values inside text
    huelog auto 42 -0.5 true 2024-01-02      Colorize values by kind
    huelog highlight alpha beta              Hash-color whole strings
    ps aux | tr -s ' ' | huelog table -d ' ' Render stdin as a table

Configuration lives in ~/.config/huelog/config.toml (see `huelog config`).")]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// When to emit color escapes
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    pub color: ColorMode,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal and NO_COLOR is unset
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlignArg {
    Left,
    Right,
    Center,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Highlight values inside free text
    #[command(long_about = "Split text into words and color every word by what it is.

Booleans, nil, numbers, percentages, dates and times get their own colors.
All other words share one color derived from the text, so a sentence keeps
a single hue while the values inside it stand out. Punctuation at word edges
stays uncolored.

Without TEXT, every line of stdin is highlighted on its own.

EXAMPLES:
    huelog token \"retrying in 5s, attempt 3 of 10\"
    huelog token --glue , \"a,b,42\"
    tail -f app.log | huelog token")]
    Token {
        /// String that separates words
        #[arg(long, short, default_value = " ")]
        glue: String,
        /// Text to highlight; arguments are joined with the glue
        text: Vec<String>,
    },

    /// Color whole strings by a hash of their content
    #[command(long_about = "Color each argument as a whole, by a hash of its content.

The same string always gets the same color, across runs and machines.
Results are joined with \", \".

EXAMPLE:
    huelog highlight prod staging dev")]
    Highlight {
        /// Strings to color
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Colorize values by their kind
    #[command(long_about = "Parse each argument into a value and color it by kind.

Recognized: true/false, nil, integers, floats (between -1 and 1 they are
shown as percentages), RFC 3339 or configured date-times and dates, URLs
and file paths. Anything else is hash-colored.

EXAMPLE:
    huelog auto 42 -7 0.25 true nil 2024-01-02T10:11:12Z /var/log/syslog")]
    Auto {
        /// Values to colorize
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Render delimited stdin as a table
    #[command(long_about = "Read delimited rows from stdin and render a box table.

The first line holds the column names. Rows shorter than the header show
N/A in the missing cells; a cell containing only --- becomes a horizontal
rule. Values are colored by kind, as with `huelog auto`.

With --export the unrendered data is written as CSV, JSON or YAML instead.

EXAMPLES:
    printf 'name,size\\na,10\\nb,-3\\n' | huelog table
    huelog table -d ';' --align right < data.csv
    huelog table --export json < data.csv")]
    Table {
        /// Field delimiter (a single ASCII character)
        #[arg(long, short, default_value_t = ',')]
        delimiter: char,
        /// Write the data in this format instead of rendering
        #[arg(long, value_enum)]
        export: Option<ExportFormat>,
        /// Alignment of every column
        #[arg(long, value_enum, default_value_t = AlignArg::Left)]
        align: AlignArg,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    #[command(long_about = "Display the effective configuration in TOML format.

Missing fields in the config file are shown with their defaults.

EXAMPLE:
    huelog config show")]
    Show,
    /// Print the config file location
    Path,
    /// Write the default configuration to the config file
    #[command(long_about = "Write the default configuration to ~/.config/huelog/config.toml.

Refuses to overwrite an existing file unless --force is given.

EXAMPLE:
    huelog config init
    huelog config init --force")]
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
