use crate::cli::MaskArgs;
use crate::config::FileConfig;
use crate::error::Result;
use pdbq::core::io::ParseOptions;
use pdbq::engine::session::QuerySession;

pub fn run(args: MaskArgs, config: &FileConfig, options: &ParseOptions) -> Result<()> {
    let (molecule, _) = super::load(&args.input, options)?;
    let kind = args.kind.unwrap_or(config.query.mask_kind);

    let mut session = QuerySession::new(&molecule);
    session.select_many(&args.atoms)?;
    println!("{}", session.to_mask(kind)?);
    Ok(())
}
