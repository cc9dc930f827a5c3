//! Layout configuration schema.
//!
//! These are plain serde types: the design half (`PlateConfig`) declares the
//! parameters and controls a layout is built from, the options half
//! (`LayoutOptions`) declares plate geometry and assignment behavior.
//! Parameter values are carried as opaque `serde_json::Value`s so callers can
//! use scalars, strings, or keyed records interchangeably.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Design input: parameters whose cartesian product defines the generated
/// samples, plus fixed control samples merged into the same layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlateConfig {
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub controls: Vec<ControlSpec>,
}

/// One declared parameter: a name and its list of allowed values.
///
/// `values` must be a JSON array; anything else is rejected by the sample
/// builder with [`LayoutError::ParameterNotList`](crate::LayoutError).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub values: Value,
}

/// A fixed control sample supplied directly rather than derived from the
/// cartesian product. `wells` is the explicit well count for this control
/// (defaults to 1); all other keys are carried as sample attributes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControlSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wells: Option<usize>,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

/// An axis extent: either an explicit count or a terminal letter
/// (interpreted as `'A'..=letter`). String forms of counts ("10") are
/// accepted too and resolved during normalization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AxisSpec {
    Count(u32),
    Token(String),
}

/// Fill direction across a plate, for both label numbering and the order
/// replicates are laid down.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Vertical,
    Horizontal,
}

/// Plate geometry consumed by the label generator.
#[derive(Debug, Clone, PartialEq)]
pub struct PlateGeometry {
    pub rows: AxisSpec,
    pub columns: AxisSpec,
    pub plates: usize,
    pub init_plate: usize,
    pub account_previous_wells: bool,
}

/// Layout options with the stock defaults: 8 rows (A..H), 10 columns,
/// 2 plates, 1 replicate per sample, sequential vertical fill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutOptions {
    #[serde(default = "default_rows")]
    pub rows: AxisSpec,
    #[serde(default = "default_columns")]
    pub columns: AxisSpec,
    #[serde(default = "default_replicates")]
    pub replicates: usize,
    #[serde(default = "default_plates")]
    pub plates: usize,
    #[serde(default)]
    pub init_plate: usize,
    #[serde(default = "default_account_previous_wells")]
    pub account_previous_wells: bool,
    /// One display color per sample, in sample-list order. When absent every
    /// sample gets `"rgba(0, 255, 0, 1)"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<String>>,
    /// Shuffle the assignment order instead of filling wells sequentially.
    #[serde(default)]
    pub random: bool,
    #[serde(default)]
    pub direction: Direction,
    /// Optional RNG seed for reproducible shuffles and highlight weights.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_rows() -> AxisSpec {
    AxisSpec::Token("H".to_string())
}

fn default_columns() -> AxisSpec {
    AxisSpec::Count(10)
}

fn default_replicates() -> usize {
    1
}

fn default_plates() -> usize {
    2
}

fn default_account_previous_wells() -> bool {
    true
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            columns: default_columns(),
            replicates: default_replicates(),
            plates: default_plates(),
            init_plate: 0,
            account_previous_wells: default_account_previous_wells(),
            color: None,
            random: false,
            direction: Direction::default(),
            seed: None,
        }
    }
}

impl LayoutOptions {
    /// The geometry slice of these options, as the label generator wants it.
    pub fn geometry(&self) -> PlateGeometry {
        PlateGeometry {
            rows: self.rows.clone(),
            columns: self.columns.clone(),
            plates: self.plates,
            init_plate: self.init_plate,
            account_previous_wells: self.account_previous_wells,
        }
    }
}

/// On-disk layout document: design plus options, as loaded by front ends.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlateProject {
    #[serde(default)]
    pub design: PlateConfig,
    #[serde(default)]
    pub layout: LayoutOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_defaults() {
        let opts = LayoutOptions::default();
        assert_eq!(opts.rows, AxisSpec::Token("H".to_string()));
        assert_eq!(opts.columns, AxisSpec::Count(10));
        assert_eq!(opts.replicates, 1);
        assert_eq!(opts.plates, 2);
        assert_eq!(opts.init_plate, 0);
        assert!(opts.account_previous_wells);
        assert!(!opts.random);
        assert_eq!(opts.direction, Direction::Vertical);
    }

    #[test]
    fn options_deserialize_partial() {
        let opts: LayoutOptions = serde_json::from_str(r#"{"rows": 2, "columns": 3, "plates": 1}"#).unwrap();
        assert_eq!(opts.rows, AxisSpec::Count(2));
        assert_eq!(opts.columns, AxisSpec::Count(3));
        assert_eq!(opts.plates, 1);
        // untouched fields keep their defaults
        assert_eq!(opts.replicates, 1);
        assert_eq!(opts.direction, Direction::Vertical);
    }

    #[test]
    fn direction_deserializes_lowercase() {
        let d: Direction = serde_json::from_str(r#""horizontal""#).unwrap();
        assert_eq!(d, Direction::Horizontal);
    }

    #[test]
    fn control_spec_flattens_attributes() {
        let ctrl: ControlSpec =
            serde_json::from_str(r#"{"wells": 2, "strain": {"value": "s1", "id": 1}}"#).unwrap();
        assert_eq!(ctrl.wells, Some(2));
        assert!(ctrl.attributes.contains_key("strain"));
    }

    #[test]
    fn project_document_round_trip() {
        let doc = r#"{
            "design": {
                "parameters": [{"name": "concentration", "values": [0.666, 0.333]}],
                "controls": [{"id": 11, "concentration": 0.333}]
            },
            "layout": {"rows": "B", "columns": 3, "plates": 1}
        }"#;
        let project: PlateProject = serde_json::from_str(doc).unwrap();
        assert_eq!(project.design.parameters.len(), 1);
        assert_eq!(project.design.controls.len(), 1);
        assert_eq!(project.layout.rows, AxisSpec::Token("B".to_string()));

        let text = serde_json::to_string(&project).unwrap();
        let back: PlateProject = serde_json::from_str(&text).unwrap();
        assert_eq!(back, project);
    }
}
