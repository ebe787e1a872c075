//! Content manifest - serialized view of the element catalog
//!
//! The UI layer builds its palette buttons from this instead of duplicating
//! the catalog on the JS side.

use serde::{Deserialize, Serialize};

use crate::elements::{ElementId, ELEMENT_COUNT, ELEMENT_DATA, ELEMENT_NAMES};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContentManifestElement {
    pub id: ElementId,
    pub name: String,
    pub color: u32,
    pub features: u32,
}

/// Build the manifest for all catalog entries (id 0 is the eraser brush)
pub fn manifest() -> Vec<ContentManifestElement> {
    let mut entries = Vec::with_capacity(ELEMENT_COUNT);
    for (idx, props) in ELEMENT_DATA.iter().enumerate() {
        entries.push(ContentManifestElement {
            id: idx as ElementId,
            name: ELEMENT_NAMES[idx].to_string(),
            color: props.color(),
            features: props.features(),
        });
    }
    entries
}

pub fn manifest_json() -> String {
    serde_json::to_string(&manifest()).unwrap_or_else(|_| "[]".to_string())
}
