use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use ganzhi_base::{Pillar, Stem};
use ganzhi_chart::{ChartRequest, Report, TenDeityMapper};
use ganzhi_config::{Config, OutputFormat};
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "ganzhi", about = "Four Pillars chart analysis", version)]
struct Cli {
    /// Config file (default: ./ganzhi.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Force debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a chart request and print the sectioned report
    Analyze {
        /// JSON chart request from the calendar service
        input: PathBuf,
        /// Output format (overrides config)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Ten-Deity table for one Day Master
    Deities {
        /// Day Master stem glyph, e.g. 甲
        stem: String,
    },
    /// Sexagenary index, sound element and hidden stems of a pillar
    Pillar {
        /// Two glyphs, e.g. 甲子
        glyphs: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

fn init_logging(level: &str, verbose: bool) {
    let level = if verbose { "debug" } else { level };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    init_logging(&config.logging.level, cli.verbose);
    debug!(?config, "configuration resolved");

    match cli.command {
        Commands::Analyze {
            input,
            format,
            pretty,
        } => {
            let format = format.map_or(config.output.format, OutputFormat::from);
            let report = analyze_file(&input, &config)?;
            let pretty = pretty || config.output.pretty;
            println!("{}", render_report(&report, format, pretty)?);
        }
        Commands::Deities { stem } => {
            let stem: Stem = stem.parse()?;
            for line in deity_lines(stem) {
                println!("{line}");
            }
        }
        Commands::Pillar { glyphs } => {
            let pillar = Pillar::parse(glyphs.trim())?;
            for line in pillar_lines(pillar) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn analyze_file(input: &Path, config: &Config) -> Result<Report> {
    let json = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let request: ChartRequest = serde_json::from_str(&json)
        .with_context(|| format!("parsing chart request {}", input.display()))?;
    let classics = config.corpus.load()?;
    info!(
        input = %input.display(),
        month_texts = classics.month_entries(),
        hour_texts = classics.hour_entries(),
        "analyzing chart"
    );
    Ok(ganzhi_chart::analyze(&request, &classics)?)
}

fn render_report(report: &Report, format: OutputFormat, pretty: bool) -> Result<String> {
    Ok(match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(report)?,
        OutputFormat::Json => serde_json::to_string(report)?,
        OutputFormat::Text => report.to_string(),
    })
}

fn deity_lines(day_master: Stem) -> Vec<String> {
    let mapper = TenDeityMapper::new(day_master);
    let mut out = vec![format!(
        "Day Master {} ({} {})",
        day_master,
        day_master.pinyin(),
        day_master.element().name()
    )];
    out.extend(
        mapper
            .table()
            .iter()
            .map(|(stem, deity)| format!("{stem} {} {}", deity.glyph(), deity.name())),
    );
    out
}

fn pillar_lines(pillar: Pillar) -> Vec<String> {
    let nayin = pillar.nayin();
    let [v1, v2] = pillar.xun_void();
    let hidden: Vec<String> = pillar
        .branch()
        .hidden_stems()
        .map(|h| format!("{}({} {})", h.stem, h.tier.name(), h.weight))
        .collect();
    vec![
        format!("Pillar: {pillar}"),
        format!("Sexagenary Index: {}", pillar.sexagenary_index()),
        format!("Sound Element: {} ({})", nayin.name, nayin.element.name()),
        format!("Void: {v1}{v2}"),
        format!("Hidden Stems: {}", hidden.join(" ")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn analyze_flags_parse() {
        let cli = Cli::try_parse_from([
            "ganzhi", "analyze", "req.json", "--format", "text", "--pretty", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        let Commands::Analyze { format, pretty, .. } = cli.command else {
            panic!("expected analyze");
        };
        assert!(matches!(format, Some(FormatArg::Text)));
        assert!(pretty);
    }

    #[test]
    fn deity_table_for_jia() {
        let lines = deity_lines(Stem::Jia);
        assert_eq!(lines.len(), 11);
        assert!(lines[0].starts_with("Day Master 甲"));
        assert_eq!(lines[1], "甲 比 Parallel");
        assert_eq!(lines[7], "庚 杀 Seven-Killings");
    }

    #[test]
    fn pillar_summary() {
        let lines = pillar_lines(Pillar::parse("甲子").unwrap());
        assert_eq!(lines[0], "Pillar: 甲子");
        assert_eq!(lines[1], "Sexagenary Index: 0");
        assert!(lines[2].contains("海中金"));
        assert_eq!(lines[3], "Void: 戌亥");
        assert!(lines[4].starts_with("Hidden Stems: 癸"));
    }
}
