//! calltip-gen — build editor autocompletion and call-tip tables from
//! reStructuredText function documentation.
//!
//! Usage: `calltip-gen <INPUT_DIR> <OUTPUT_DIR>`
//!
//! Every `.. function:: name(args)` block found in the `*.rst` files of
//! `INPUT_DIR` contributes one overload. Two C++ headers are written to
//! `OUTPUT_DIR`: the sorted autocompletion token list and the call-tip table.

mod accumulator;
mod calltip;
mod model;
mod parser;
mod render;
mod source;
mod tokens;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::accumulator::Accumulator;
use crate::calltip::CallTip;
use crate::render::Renderer;

#[derive(Parser)]
#[command(
    name = "calltip-gen",
    about = "Generate autocompletion and call-tip headers from function documentation"
)]
struct Cli {
    /// Directory containing the .rst documentation files
    input: PathBuf,

    /// Directory the generated headers are written to
    output: PathBuf,
}

/// Pipeline configuration for [`generate`].
struct GenerateConfig<'a> {
    extension: &'a str,
    /// Shorter function names are left out of the autocompletion list
    min_token_len: usize,
    tokens_per_line: usize,
    keywords: &'a [&'a str],
    types: &'a [&'a str],
}

impl Default for GenerateConfig<'static> {
    fn default() -> Self {
        Self {
            extension: "rst",
            min_token_len: 4,
            tokens_per_line: 10,
            keywords: tokens::KEYWORDS,
            types: tokens::TYPES,
        }
    }
}

/// Both generated artifacts, before rendering.
struct Artifacts {
    tokens: Vec<String>,
    calltips: Vec<CallTip>,
}

/// Core pipeline — extracted for testability.
fn generate(input_dir: &Path, config: &GenerateConfig) -> Result<Artifacts> {
    let paths = source::list_documents(input_dir, config.extension)?;
    info!("{} documents in {}", paths.len(), input_dir.display());

    let mut acc = Accumulator::new(config.min_token_len);
    for path in &paths {
        let doc = source::read_document(path)?;
        let text = parser::normalize_document(&doc.text);
        let matched = acc.absorb_all(parser::block::blocks(&text));

        let declared = parser::names::names(&text).count();
        debug!("{}: {} blocks", doc.path.display(), matched);
        if declared > matched {
            debug!(
                "{}: {} function directives not in block form",
                doc.path.display(),
                declared - matched
            );
        }
    }

    let corpus = acc.finish();
    info!("{} functions documented", corpus.table.len());

    let tokens = tokens::collect_tokens(config.keywords, config.types, &corpus.token_names);
    debug!("tokens: {}", tokens.join(" "));

    Ok(Artifacts {
        tokens,
        calltips: calltip::encode_table(&corpus.table),
    })
}

/// Render both artifacts and write them into `output_dir`.
fn write_artifacts(output_dir: &Path, artifacts: &Artifacts, renderer: &dyn Renderer) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let outputs = [
        (renderer.tokens_file_name(), renderer.render_tokens(&artifacts.tokens)),
        (renderer.calltips_file_name(), renderer.render_calltips(&artifacts.calltips)),
    ];
    for (name, content) in outputs {
        let path = output_dir.join(name);
        fs::write(&path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("wrote {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let config = GenerateConfig::default();

    let artifacts = generate(&cli.input, &config)?;
    let renderer = render::cpp::CppRenderer {
        tokens_per_line: config.tokens_per_line,
    };
    write_artifacts(&cli.output, &artifacts, &renderer)
}
