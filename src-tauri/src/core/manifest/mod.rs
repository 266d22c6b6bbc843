pub mod model;
pub mod validator;

pub use model::{Manifest, ModLoader};
pub use validator::{validate_manifest, ManifestValidation, MANIFEST_FILE};
