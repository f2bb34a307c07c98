//! cloud-bindings CLI
//!
//! Inspect API catalogs and generate operation wrapper crates from them.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cloud_bindings_common::{ApiCatalog, CatalogField, FieldType};
use cloud_bindings_generator::BindingsGenerator;
use colored::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cloud-bindings")]
#[command(version, about = "Generate typed cloud API operation wrappers from a catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a catalog and display its operations
    #[command(after_help = "EXAMPLES:\n  \
        cloud-bindings inspect --catalog catalogs/imm.yaml")]
    Inspect {
        /// Path to the catalog file (YAML or JSON)
        #[arg(short, long)]
        catalog: PathBuf,
    },

    /// Generate a bindings crate from a catalog
    #[command(after_help = "EXAMPLES:\n  \
        # Write the IMM bindings crate\n  \
        cloud-bindings generate \\\n    \
        --catalog catalogs/imm.yaml \\\n    \
        --output ./bindings/imm\n\n  \
        # List the files without writing them\n  \
        cloud-bindings generate --catalog catalogs/imm.yaml --dry-run")]
    Generate {
        /// Path to the catalog file (YAML or JSON)
        #[arg(short, long)]
        catalog: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Render in memory and list the files only
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("cloud_bindings=debug,cloud_bindings_generator=debug")
            .init();
        println!("{} Verbose mode enabled", "→".cyan());
    }

    match cli.command {
        Commands::Inspect { catalog } => inspect_command(&catalog, cli.verbose)?,
        Commands::Generate {
            catalog,
            output,
            dry_run,
        } => generate_command(&catalog, &output, dry_run)?,
    }

    Ok(())
}

fn load_catalog(path: &Path) -> Result<ApiCatalog> {
    println!("{} Loading catalog: {}", "→".cyan(), path.display());
    ApiCatalog::load(path)
        .with_context(|| format!("Failed to load catalog {}", path.display()))
}

fn inspect_command(path: &Path, verbose: bool) -> Result<()> {
    let catalog = load_catalog(path)?;

    println!("\n{}", "✓ Catalog loaded!".green().bold());
    println!("\n{}", "Product:".bold());
    println!("  Name: {}", catalog.display_name.yellow());
    println!("  Code: {}", catalog.product.yellow());
    println!("  API version: {}", catalog.api_version.yellow());
    println!("  Endpoint: {:?}", catalog.endpoint_type);
    println!("  Models: {}", catalog.models.len());
    println!("  Operations: {}", catalog.operations.len());

    println!("\n{}", "Operations:".bold());
    for op in &catalog.operations {
        println!("  • {}", op.name.cyan());
        let required = op.required_fields();
        if !required.is_empty() {
            println!("    Required: {}", required.join(", "));
        }
        for field in op.fields.iter().filter(|f| f.field_type.is_structured()) {
            println!("    Shrunk: {}", describe_field(field));
        }
        if verbose {
            println!("    Fields: {}", op.fields.len());
            println!("    Response: {}", op.response.len());
        }
    }

    Ok(())
}

fn generate_command(catalog_path: &Path, output: &Path, dry_run: bool) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    println!(
        "{} Found {} operations for {}",
        "✓".green(),
        catalog.operations.len(),
        catalog.product
    );

    let generator = BindingsGenerator::new(&catalog).context("Invalid catalog")?;

    if dry_run {
        let files = generator.render().context("Failed to render templates")?;
        println!("\n{}", "Would generate:".bold());
        for file in files {
            println!(
                "  📄 {}/{} ({} bytes)",
                output.display(),
                file.path.display(),
                file.contents.len()
            );
        }
        return Ok(());
    }

    println!("{} Generating bindings crate...", "→".cyan());
    let written = generator
        .generate_to_directory(output)
        .with_context(|| format!("Failed to generate into {}", output.display()))?;

    println!("\n{}", "✓ Generation complete!".green().bold());
    println!("\n{}", "Generated files:".bold());
    for path in &written {
        println!("  📄 {}", path.display());
    }
    println!("\n{}", "Next steps:".bold());
    println!("  1. Review generated files in {}", output.display());
    println!("  2. Add the crate to your workspace and run cargo build");

    Ok(())
}

/// One-line summary of a structured field, e.g. `Tag (list<Tag>, json)`
fn describe_field(field: &CatalogField) -> String {
    let style = field
        .shrink_style()
        .map(|s| format!("{:?}", s).to_lowercase())
        .unwrap_or_default();
    format!("{} ({}, {})", field.name, type_name(&field.field_type), style)
}

fn type_name(field_type: &FieldType) -> String {
    match field_type {
        FieldType::String => "string".to_string(),
        FieldType::Integer => "integer".to_string(),
        FieldType::Float => "float".to_string(),
        FieldType::Boolean => "boolean".to_string(),
        FieldType::List(inner) => format!("list<{}>", type_name(inner)),
        FieldType::Map(key, value) => format!("map<{}, {}>", type_name(key), type_name(value)),
        FieldType::Object(name) => name.clone(),
    }
}
