//! Operation wrapper generation
//!
//! This crate renders a complete bindings crate (manifest, README, models,
//! operation markers and a typed client) from an [`ApiCatalog`].

mod naming;
mod templates;
mod views;

pub use naming::{rust_ident, rust_type, snake_case};
pub use views::CatalogView;

use cloud_bindings_common::{ApiCatalog, BindingError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tera::Tera;
use tracing::debug;

/// Where each template lands, relative to the output directory
const OUTPUTS: &[(&str, &str)] = &[
    ("Cargo.toml", "Cargo.toml"),
    ("README.md", "README.md"),
    ("lib.rs", "src/lib.rs"),
    ("models.rs", "src/models.rs"),
    ("operations.rs", "src/operations.rs"),
    ("client.rs", "src/client.rs"),
];

/// A rendered file, not yet written
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Bindings generator
///
/// Transforms an ApiCatalog into a bindings crate:
/// - Cargo.toml and README.md
/// - src/models.rs (models, requests, shrink requests, response bodies)
/// - src/operations.rs (operation markers with fixed metadata)
/// - src/client.rs (one async method per operation)
pub struct BindingsGenerator {
    view: CatalogView,
    tera: Tera,
}

impl BindingsGenerator {
    /// Create a generator; the catalog is validated first
    pub fn new(catalog: &ApiCatalog) -> Result<Self> {
        catalog.validate()?;
        let tera = templates::load_templates()?;
        Ok(Self {
            view: CatalogView::new(catalog),
            tera,
        })
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    /// Render every output file in memory
    pub fn render(&self) -> Result<Vec<GeneratedFile>> {
        let mut context = tera::Context::new();
        context.insert("catalog", &self.view);

        OUTPUTS
            .iter()
            .map(|(template, path)| -> Result<GeneratedFile> {
                let contents = self.tera.render(template, &context).map_err(|e| {
                    BindingError::Generation(format!("Template error in {}: {:?}", template, e))
                })?;
                Ok(GeneratedFile {
                    path: PathBuf::from(path),
                    contents,
                })
            })
            .collect()
    }

    /// Render and write all files under `output_dir`
    pub fn generate_to_directory(&self, output_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for file in self.render()? {
            let path = output_dir.join(&file.path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| {
                    BindingError::Generation(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
            fs::write(&path, &file.contents).map_err(|e| {
                BindingError::Generation(format!("Failed to write {}: {}", path.display(), e))
            })?;
            debug!(path = %path.display(), bytes = file.contents.len(), "wrote generated file");
            written.push(path);
        }
        Ok(written)
    }
}

/// Generate a bindings crate (convenience function)
pub fn generate_bindings(catalog: &ApiCatalog, output_path: &Path) -> Result<Vec<PathBuf>> {
    let generator = BindingsGenerator::new(catalog)?;
    generator.generate_to_directory(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ApiCatalog {
        ApiCatalog::from_yaml(
            r#"
product: imm
display_name: Intelligent Media Management
api_version: "2020-09-30"
operations:
  - name: DeleteProject
    fields:
      - name: ProjectName
        type: string
        required: true
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_generator_creation() {
        let generator = BindingsGenerator::new(&catalog()).unwrap();
        assert_eq!(generator.view().client_name, "ImmClient");
        assert_eq!(generator.view().crate_name, "cloud-bindings-imm");
        assert!(!generator.view().has_structured);
    }

    #[test]
    fn test_render_produces_every_output() {
        let files = BindingsGenerator::new(&catalog()).unwrap().render().unwrap();
        let paths: Vec<_> = files.iter().map(|f| f.path.to_str().unwrap()).collect();
        assert_eq!(
            paths,
            vec![
                "Cargo.toml",
                "README.md",
                "src/lib.rs",
                "src/models.rs",
                "src/operations.rs",
                "src/client.rs",
            ]
        );
    }

    #[test]
    fn test_scalar_only_catalog_has_no_shrink_helper() {
        let files = BindingsGenerator::new(&catalog()).unwrap().render().unwrap();
        let lib = &files[2].contents;
        assert!(!lib.contains("fn shrink"));
        assert!(!files[3].contents.contains("ShrinkRequest"));
    }
}
