use crate::cli::AnalyzeArgs;
use crate::error::Result;
use crate::utils::table;
use helixgen::core::properties::SequenceProfile;
use tracing::{debug, warn};

pub fn run(args: AnalyzeArgs) -> Result<()> {
    for (i, sequence) in args.sequences.iter().enumerate() {
        let profile = SequenceProfile::of(sequence);
        debug!("Profile for sequence #{}: {:?}", i + 1, profile);
        if let Err(reason) = &profile.validity {
            warn!("Sequence #{} is not a standard protein sequence: {}", i + 1, reason);
        }
        if i > 0 {
            println!();
        }
        print!("{}", table::render_profile(sequence, &profile));
    }
    Ok(())
}
