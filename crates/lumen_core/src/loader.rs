//! Scene file loading.
//!
//! Scenes are JSON documents mirroring [`SceneDescription`]:
//!
//! ```json
//! {
//!   "camera": { "look_from": [0, 0, 0], "look_at": [0, 0, -1], "vfov": 90 },
//!   "render": { "width": 200, "height": 100, "samples_per_pixel": 100 },
//!   "primitives": [
//!     { "type": "sphere", "center": [0, 0, -1], "radius": 0.5,
//!       "material": { "type": "lambertian", "albedo": [0.5, 0.5, 0.5] } }
//!   ]
//! }
//! ```

use std::path::Path;

use log::info;

use crate::error::SceneResult;
use crate::scene::SceneDescription;

/// Load a JSON scene file and validate it.
///
/// The scene name defaults to the file stem when the document does not set one.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or("unnamed");

    let content = std::fs::read_to_string(path)?;
    load_scene_from_str(&content, name)
}

/// Parse and validate a JSON scene held in memory.
pub fn load_scene_from_str(content: &str, name: &str) -> SceneResult<SceneDescription> {
    let mut scene: SceneDescription = serde_json::from_str(content)?;
    if scene.name.is_empty() {
        scene.name = name.to_string();
    }

    scene.validate()?;

    info!(
        "Loaded scene '{}' with {} primitives",
        scene.name,
        scene.primitive_count()
    );
    Ok(scene)
}

/// Serialize a scene to pretty-printed JSON, the format [`load_scene`] reads.
pub fn scene_to_json(scene: &SceneDescription) -> SceneResult<String> {
    Ok(serde_json::to_string_pretty(scene)?)
}
