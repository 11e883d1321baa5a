//! Invariant: disks are neither lost nor duplicated.

use super::Invariant;
use crate::puzzle::types::Configuration;
use tracing::warn;

/// Invariant: the three pegs together hold each of the sizes `1..=N`
/// exactly once.
pub struct DiskConservation;

impl Invariant<Configuration> for DiskConservation {
    fn holds(config: &Configuration) -> bool {
        let disk_count = config.disk_count() as usize;
        let mut seen = vec![false; disk_count];
        let mut total = 0usize;

        for peg in config.pegs() {
            for disk in peg.disks() {
                let size = disk.size() as usize;
                if size == 0 || size > disk_count {
                    warn!(size, disk_count, "disk size outside the puzzle range");
                    return false;
                }
                if seen[size - 1] {
                    warn!(size, "duplicate disk");
                    return false;
                }
                seen[size - 1] = true;
                total += 1;
            }
        }

        if total != disk_count {
            warn!(total, disk_count, "missing disks");
            return false;
        }
        true
    }

    fn description() -> &'static str {
        "the pegs together hold each disk size exactly once"
    }
}
