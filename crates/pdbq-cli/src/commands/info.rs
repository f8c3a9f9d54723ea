use crate::cli::InfoArgs;
use crate::error::Result;
use pdbq::core::io::ParseOptions;
use pdbq::engine::report;

pub fn run(args: InfoArgs, options: &ParseOptions) -> Result<()> {
    let (molecule, _) = super::load(&args.input, options)?;
    println!("{}", report::summary(&molecule));
    Ok(())
}
