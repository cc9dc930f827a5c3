//! Well-centric view.
//!
//! Inverts the annotated sample list into one record per occupied well,
//! ordered consistently with the canonical label sequence.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::assign::Sample;
use crate::error::{LayoutError, LayoutResult};

/// One occupied well: its label, plate number, the replicate index within
/// the owning sample, and the sample's own fields flattened in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WellRecord {
    pub well: String,
    pub plate: u32,
    pub replicate: usize,
    #[serde(flatten)]
    pub sample: Sample,
}

/// Build the well-centric view from the annotated samples.
///
/// Records are keyed by well label while they are built; a second writer for
/// the same label is an invariant violation and fails the build. The output
/// walks the canonical label sequence, so records come back in label order
/// with exactly one record per occupied well. Unoccupied wells are absent.
pub fn build_well_view(samples: &[Sample], labels: &[String]) -> LayoutResult<Vec<WellRecord>> {
    let mut by_label: HashMap<&str, WellRecord> = HashMap::new();

    for sample in samples {
        for (replicate, well) in sample.wells.iter().enumerate() {
            let plate = well
                .split('-')
                .next()
                .and_then(|prefix| prefix.parse::<u32>().ok())
                .ok_or_else(|| LayoutError::MalformedLabel {
                    label: well.clone(),
                })?;
            let record = WellRecord {
                well: well.clone(),
                plate,
                replicate,
                sample: sample.clone(),
            };
            if by_label.insert(well.as_str(), record).is_some() {
                return Err(LayoutError::DuplicateWell {
                    label: well.clone(),
                });
            }
        }
    }

    let mut records = Vec::with_capacity(by_label.len());
    for label in labels {
        if let Some(record) = by_label.remove(label.as_str()) {
            records.push(record);
        }
    }
    Ok(records)
}
