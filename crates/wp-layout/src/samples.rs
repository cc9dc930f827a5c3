//! Sample list construction.
//!
//! Expands the declared parameters into the full cartesian product of
//! samples, then merges the fixed controls in at the front of the list.

use serde_json::Value;
use std::collections::BTreeMap;

use crate::config::{ControlSpec, Parameter};
use crate::error::{LayoutError, LayoutResult};

/// A sample before well assignment: its attributes plus, for controls, the
/// explicitly requested well count. Generated samples carry `None` and use
/// the global replicate count instead.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleDraft {
    pub attributes: BTreeMap<String, Value>,
    pub explicit_wells: Option<usize>,
}

/// Build the ordered sample list: controls first (in supplied order), then
/// the cartesian product of all parameter values.
///
/// The product is built by incremental folding: each new parameter replaces
/// the expanded list with one copy per value, so the most recently declared
/// parameter varies slowest and the first declared parameter varies fastest.
/// Attribute values are cloned per sample; nothing is shared between samples.
pub fn build_samples(
    parameters: &[Parameter],
    controls: &[ControlSpec],
) -> LayoutResult<Vec<SampleDraft>> {
    let mut expanded: Vec<BTreeMap<String, Value>> = Vec::new();

    for (index, parameter) in parameters.iter().enumerate() {
        let values = parameter
            .values
            .as_array()
            .ok_or_else(|| LayoutError::ParameterNotList {
                name: parameter.name.clone(),
            })?;

        if index == 0 {
            expanded = values
                .iter()
                .map(|value| {
                    let mut attributes = BTreeMap::new();
                    attributes.insert(parameter.name.clone(), value.clone());
                    attributes
                })
                .collect();
        } else {
            let mut next = Vec::with_capacity(expanded.len() * values.len());
            for value in values {
                for partial in &expanded {
                    let mut attributes = partial.clone();
                    attributes.insert(parameter.name.clone(), value.clone());
                    next.push(attributes);
                }
            }
            expanded = next;
        }
    }

    let mut drafts = Vec::with_capacity(controls.len() + expanded.len());
    for control in controls {
        drafts.push(SampleDraft {
            attributes: control.attributes.clone(),
            explicit_wells: Some(control.wells.unwrap_or(1)),
        });
    }
    drafts.extend(expanded.into_iter().map(|attributes| SampleDraft {
        attributes,
        explicit_wells: None,
    }));

    Ok(drafts)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    proptest! {
        #[test]
        fn generated_count_is_product_of_list_sizes(sizes in prop::collection::vec(1usize..5, 1..4)) {
            let parameters: Vec<Parameter> = sizes
                .iter()
                .enumerate()
                .map(|(i, &n)| Parameter {
                    name: format!("p{i}"),
                    values: json!((0..n).collect::<Vec<_>>()),
                })
                .collect();
            let drafts = build_samples(&parameters, &[]).unwrap();
            prop_assert_eq!(drafts.len(), sizes.iter().product::<usize>());
        }
    }
}
