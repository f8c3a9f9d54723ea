use crate::cli::MapArgs;
use crate::error::{CliError, Result};
use crate::render;
use indicatif::{ProgressBar, ProgressStyle};
use pdbq::core::io::ParseOptions;
use pdbq::engine::report;
use pdbq::engine::session::QuerySession;
use std::fs::File;
use std::io::BufWriter;
use tracing::info;

pub fn run(args: MapArgs, options: &ParseOptions) -> Result<()> {
    let (molecule, _) = super::load(&args.input, options)?;
    let session = QuerySession::new(&molecule);

    let total = molecule.atom_total() as u64;
    let progress = ProgressBar::new(total).with_style(
        ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len} rows")
            .map_err(|e| CliError::Other(e.into()))?,
    );
    progress.set_message("Computing distance matrix");
    let matrix = session.distance_matrix_with_progress(|_| progress.inc(1));
    progress.finish_and_clear();

    let file = File::create(&args.output)?;
    report::write_matrix_csv(BufWriter::new(file), &matrix)
        .map_err(|e| CliError::Other(anyhow::anyhow!("failed to write matrix CSV: {e}")))?;
    info!("Wrote distance matrix to {}", args.output.display());

    if let Some(svg_path) = &args.svg {
        render::render_distance_map(svg_path, &matrix, molecule.atom_total()).map_err(|e| {
            CliError::Render {
                path: svg_path.clone(),
                source: e,
            }
        })?;
        info!("Rendered distance map to {}", svg_path.display());
    }
    Ok(())
}
