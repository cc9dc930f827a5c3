//! wp-layout: labeled sample layouts for multi-well plates.
//!
//! Builds a full plate layout from a declarative configuration: the
//! cartesian product of the declared parameters defines the generated
//! samples, fixed controls are merged in at the front, and every sample is
//! assigned one or more wells (optionally replicated, optionally shuffled).
//! The result is exposed both sample-centric ([`PlateLayout::samples`]) and
//! well-centric ([`PlateLayout::wells_list`]).
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use wp_layout::{AxisSpec, LayoutOptions, Parameter, PlateConfig, PlateLayout};
//!
//! let config = PlateConfig {
//!     parameters: vec![
//!         Parameter { name: "extract".into(), values: json!(["e1", "e2", "e3"]) },
//!         Parameter { name: "concentration".into(), values: json!([0.666, 0.333]) },
//!     ],
//!     controls: vec![],
//! };
//! let options = LayoutOptions {
//!     rows: AxisSpec::Count(2),
//!     columns: AxisSpec::Count(3),
//!     plates: 1,
//!     ..Default::default()
//! };
//!
//! let layout = PlateLayout::build(&config, &options).unwrap();
//! assert_eq!(layout.samples().len(), 6);
//! assert_eq!(layout.wells_list().len(), 6);
//! ```

pub mod assign;
pub mod config;
pub mod error;
pub mod labels;
pub mod samples;
pub mod view;

// Re-exports for ergonomics
pub use assign::{AssignOptions, DEFAULT_COLOR, Sample, assign_wells};
pub use config::{
    AxisSpec, ControlSpec, Direction, LayoutOptions, Parameter, PlateConfig, PlateGeometry,
    PlateProject,
};
pub use error::{LayoutError, LayoutResult};
pub use labels::{AxisValues, LabelSet, generate_labels};
pub use samples::{SampleDraft, build_samples};
pub use view::{WellRecord, build_well_view};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A fully built, immutable plate layout.
#[derive(Debug, Clone, PartialEq)]
pub struct PlateLayout {
    samples: Vec<Sample>,
    wells: Vec<WellRecord>,
    labels: Vec<String>,
}

impl PlateLayout {
    /// Build a layout from a design and options.
    ///
    /// The RNG is seeded from `options.seed` when given, from entropy
    /// otherwise; use [`PlateLayout::build_with_rng`] to inject one directly.
    pub fn build(config: &PlateConfig, options: &LayoutOptions) -> LayoutResult<Self> {
        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::build_with_rng(config, options, &mut rng)
    }

    /// Build a layout with a caller-supplied random source.
    pub fn build_with_rng(
        config: &PlateConfig,
        options: &LayoutOptions,
        rng: &mut impl Rng,
    ) -> LayoutResult<Self> {
        let label_set = generate_labels(&options.geometry(), options.direction)?;
        tracing::debug!(
            labels = label_set.labels.len(),
            rows = label_set.rows.len(),
            columns = label_set.columns.len(),
            "generated label sequence"
        );

        let drafts = build_samples(&config.parameters, &config.controls)?;
        let assign_options = AssignOptions {
            replicates: options.replicates,
            random: options.random,
            color: options.color.clone(),
        };
        let samples = assign_wells(drafts, &label_set.labels, &assign_options, rng)?;
        let wells = build_well_view(&samples, &label_set.labels)?;

        Ok(Self {
            samples,
            wells,
            labels: label_set.labels,
        })
    }

    /// The annotated sample list, controls first.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// The well-centric view: one record per occupied well, in label order.
    pub fn wells_list(&self) -> &[WellRecord] {
        &self.wells
    }

    /// The canonical well label sequence for the configured geometry.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}
