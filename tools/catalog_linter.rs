/// Catalog Linter — validates prompt catalogs before they reach a session.
///
/// Usage: catalog_linter <catalog.ron> [--categories <path.ron>]
use std::path::Path;
use std::process;

use storyliner::core::catalog::{duplicate_ids, load_catalog, load_categories};
use storyliner::schema::category::CategoryRegistry;
use storyliner::schema::prompt::Prompt;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: catalog_linter <catalog.ron> [--categories <path.ron>]");
        process::exit(0);
    }

    let catalog_path = &args[1];
    let mut categories_path = None;

    let mut i = 2;
    while i < args.len() {
        if args[i] == "--categories" && i + 1 < args.len() {
            i += 1;
            categories_path = Some(args[i].clone());
        }
        i += 1;
    }

    let prompts = match load_catalog(Path::new(catalog_path)) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("ERROR: Failed to load catalog: {}", e);
            process::exit(1);
        }
    };

    println!("Loaded {} prompts", prompts.len());

    let registry = match categories_path {
        Some(ref path) => match load_categories(Path::new(path)) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("ERROR: Failed to load categories: {}", e);
                process::exit(1);
            }
        },
        None => CategoryRegistry::builtin(),
    };

    let (errors, warnings) = lint_catalog(&prompts, &registry);

    println!("\n=== Catalog Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn lint_catalog(prompts: &[Prompt], registry: &CategoryRegistry) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    // Identity uniqueness is the one guarantee the collections rely on
    for id in duplicate_ids(prompts) {
        errors.push(format!("Duplicate prompt id '{}'", id));
    }

    for prompt in prompts {
        let id = &prompt.id;

        if prompt.id.as_str().is_empty() {
            errors.push("Prompt with empty id".to_string());
        }
        if prompt.title.is_empty() {
            errors.push(format!("Prompt '{}' has an empty title", id));
        }
        if prompt.prompt_text.is_empty() {
            errors.push(format!("Prompt '{}' has empty prompt text", id));
        }
        if prompt.image_ref.is_empty() {
            errors.push(format!("Prompt '{}' has an empty image reference", id));
        }

        if prompt.tags.is_empty() {
            warnings.push(format!("Prompt '{}' has no tags", id));
        }
        if prompt.mood.is_empty() {
            warnings.push(format!("Prompt '{}' has an empty mood", id));
        }
        if prompt.shot_type.is_empty() {
            warnings.push(format!("Prompt '{}' has an empty shot type", id));
        }

        if registry.by_name(&prompt.category).is_none() {
            warnings.push(format!(
                "Prompt '{}' uses category '{}' which is not in the registry",
                id, prompt.category
            ));
        }

        if chrono::DateTime::parse_from_rfc3339(&prompt.created_at).is_err() {
            warnings.push(format!(
                "Prompt '{}' has a createdAt that is not RFC 3339: '{}'",
                id, prompt.created_at
            ));
        }
    }

    (errors, warnings)
}
