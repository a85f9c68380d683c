mod manifest_writer;
pub mod preset_assets;

pub use manifest_writer::ManifestWriter;
