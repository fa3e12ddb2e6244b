use crate::error::Result;
use crate::utils::table;

pub fn run() -> Result<()> {
    print!("{}", table::render_residue_table());
    Ok(())
}
