use crate::cli::NearArgs;
use crate::config::FileConfig;
use crate::error::Result;
use pdbq::core::io::ParseOptions;
use pdbq::engine::session::QuerySession;
use tracing::info;

pub fn run(args: NearArgs, config: &FileConfig, options: &ParseOptions) -> Result<()> {
    let (molecule, _) = super::load(&args.input, options)?;
    let radius = args.radius.unwrap_or(config.query.radius);
    let kind = args.mask.unwrap_or(config.query.mask_kind);

    let mut session = QuerySession::new(&molecule);
    let (neighbors, distances) = session.neighbors(args.atom, radius)?;
    info!(
        "{} atoms within {radius} A of atom {}",
        neighbors.len(),
        args.atom
    );

    for (&serial, &distance) in neighbors.iter().zip(distances.iter()) {
        // Neighbor serials come from the molecule, so the lookup holds.
        if let Some(atom) = molecule.atom(serial) {
            println!(
                "{serial:>6} {element:<2} {res_name:<4}{res_id:>5} {distance:>8.2}",
                element = atom.element,
                res_name = atom.residue_name,
                res_id = atom.residue_id,
            );
        }
    }
    println!("{}", session.to_mask(kind)?);
    Ok(())
}
