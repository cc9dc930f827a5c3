//! Well assignment.
//!
//! Maps the ordered sample list onto the label sequence: each control
//! consumes its explicit well count, every other sample consumes the global
//! replicate count. A shuffled assignment order decouples "which samples
//! need wells" from "which wells they land in" for the random mode.

use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::{LayoutError, LayoutResult};
use crate::samples::SampleDraft;

/// Display color applied when no color list is supplied.
pub const DEFAULT_COLOR: &str = "rgba(0, 255, 0, 1)";

/// A fully annotated sample: its attributes plus the wells it was assigned
/// and its presentation metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sample {
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
    /// Assigned well labels, in assignment order.
    pub wells: Vec<String>,
    pub color: String,
    /// Presentation weight in [0, 1), drawn independently per sample.
    #[serde(rename = "_highlight")]
    pub highlight: f64,
}

/// Assignment behavior: global replicate count, optional shuffling, optional
/// per-sample colors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignOptions {
    pub replicates: usize,
    pub random: bool,
    pub color: Option<Vec<String>>,
}

/// Assign well labels to every draft, in list order.
///
/// Fails with [`LayoutError::CapacityExceeded`] before touching any sample
/// when the layout needs more wells than the geometry provides, and with
/// [`LayoutError::ColorCountMismatch`] when a supplied color list is shorter
/// than the sample list.
pub fn assign_wells(
    drafts: Vec<SampleDraft>,
    labels: &[String],
    options: &AssignOptions,
    rng: &mut impl Rng,
) -> LayoutResult<Vec<Sample>> {
    let needed: usize = drafts
        .iter()
        .map(|draft| draft.explicit_wells.unwrap_or(options.replicates))
        .sum();
    if needed > labels.len() {
        return Err(LayoutError::CapacityExceeded {
            needed,
            available: labels.len(),
        });
    }
    if let Some(colors) = &options.color {
        if colors.len() < drafts.len() {
            return Err(LayoutError::ColorCountMismatch {
                expected: drafts.len(),
                got: colors.len(),
            });
        }
    }

    let mut order: Vec<usize> = (0..needed).collect();
    if options.random {
        fisher_yates(&mut order, rng);
    }

    let mut samples = Vec::with_capacity(drafts.len());
    let mut cursor = 0;
    for (index, draft) in drafts.into_iter().enumerate() {
        let count = draft.explicit_wells.unwrap_or(options.replicates);
        let wells: Vec<String> = order[cursor..cursor + count]
            .iter()
            .map(|&slot| labels[slot].clone())
            .collect();
        cursor += count;

        let color = match &options.color {
            Some(colors) => colors[index].clone(),
            None => DEFAULT_COLOR.to_string(),
        };
        samples.push(Sample {
            attributes: draft.attributes,
            wells,
            color,
            highlight: rng.gen_range(0.0..1.0),
        });
    }

    tracing::debug!(
        samples = samples.len(),
        wells = cursor,
        shuffled = options.random,
        "assigned wells"
    );
    Ok(samples)
}

/// Uniform in-place shuffle: walk from the last index down to 1, swapping
/// each position with a uniformly drawn position at or below it.
fn fisher_yates(order: &mut [usize], rng: &mut impl Rng) {
    for i in (1..order.len()).rev() {
        let j = rng.gen_range(0..=i);
        order.swap(i, j);
    }
}
