/// Storyboard Shell — interactive session for curating and sequencing prompts.
///
/// Usage: storyboard_shell --catalog <path.ron> [--categories <path.ron>]
///
/// Commands:
///   categories              — list selectable categories
///   category <name>         — select a category and restart the swipe flow
///   card                    — show the current prompt card
///   left                    — skip the current prompt
///   right                   — approve the current prompt into the tray
///   tray                    — list the curated tray
///   canvas                  — list the storyline canvas in order
///   move <id>               — move a tray prompt onto the canvas
///   remove <id>             — return a canvas prompt to the tray
///   reorder <from> <to>     — move a canvas entry to a new position (0-based)
///   text <id>               — print a prompt's full text
///   export [path]           — write the storyline JSON (default: storyline_<ms>.json)
///   restart                 — clear tray, canvas, and selection
///   status                  — summarize the session
///   help                    — list commands
///   quit                    — exit
use std::io::{self, BufRead, Write};
use std::path::Path;

use chrono::Utc;
use storyliner::core::catalog::{distinct_categories, load_catalog, load_categories};
use storyliner::core::export::export_filename;
use storyliner::core::store::StorylineStore;
use storyliner::schema::category::CategoryRegistry;
use storyliner::schema::prompt::PromptId;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let mut catalog_path = None;
    let mut categories_path = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--catalog" if i + 1 < args.len() => {
                i += 1;
                catalog_path = Some(args[i].clone());
            }
            "--categories" if i + 1 < args.len() => {
                i += 1;
                categories_path = Some(args[i].clone());
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let catalog_path = match catalog_path {
        Some(p) => p,
        None => {
            eprintln!("ERROR: --catalog is required");
            print_usage();
            std::process::exit(1);
        }
    };

    let prompts = match load_catalog(Path::new(&catalog_path)) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("ERROR: Failed to load catalog: {}", e);
            std::process::exit(1);
        }
    };

    let registry = match categories_path {
        Some(ref path) => match load_categories(Path::new(path)) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("ERROR: Failed to load categories: {}", e);
                std::process::exit(1);
            }
        },
        None => CategoryRegistry::builtin(),
    };

    println!("Loaded {} prompts from {}", prompts.len(), catalog_path);
    println!("Type 'help' for commands.\n");

    let mut store = StorylineStore::new();
    store.set_all_prompts(prompts);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("storyboard> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();

        match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" | "h" | "?" => print_help(),
            "categories" => {
                for category in registry.iter() {
                    println!("  {:30} {}", category.name, category.description);
                }
                let present = distinct_categories(store.all_prompts());
                println!("Catalog covers: {}", present.join(", "));
            }
            "category" => {
                if parts.len() < 2 {
                    println!("Usage: category <name>");
                    continue;
                }
                let name = parts[1..].join(" ");
                store.set_active_category(Some(&name));
                let count = store.filtered_prompts().len();
                println!("Selected '{}' — {} prompts to review", name, count);
            }
            "card" => match store.current_prompt() {
                Some(prompt) => {
                    println!("[{}] {}", prompt.id, prompt.title);
                    println!("  {}", prompt.prompt_text);
                    println!(
                        "  mood: {} | shot: {} | tags: {}",
                        prompt.mood,
                        prompt.shot_type,
                        prompt.tags.join(", ")
                    );
                    print_progress(&store);
                }
                None => println!("All done! No more prompts in this view."),
            },
            "left" => {
                store.swipe_left();
                print_progress(&store);
            }
            "right" => {
                let before = store.curated().len();
                store.swipe_right();
                if store.curated().len() > before {
                    if let Some(last) = store.curated().last() {
                        println!("Added '{}' to the tray", last.title);
                    }
                }
                print_progress(&store);
            }
            "tray" => {
                if store.curated().is_empty() {
                    println!("Tray is empty.");
                }
                for prompt in store.curated() {
                    println!("  [{}] {}", prompt.id, prompt.title);
                }
            }
            "canvas" => {
                if store.sequence().is_empty() {
                    println!("Canvas is empty. Move prompts from the tray to build your storyline.");
                }
                for (index, prompt) in store.sequence().iter().enumerate() {
                    println!("  {:2}. [{}] {}", index + 1, prompt.id, prompt.title);
                }
            }
            "move" => {
                if parts.len() < 2 {
                    println!("Usage: move <id>");
                    continue;
                }
                let before = store.sequence().len();
                store.move_to_sequence(&PromptId::from(parts[1]));
                if store.sequence().len() > before {
                    println!("Moved {} onto the canvas", parts[1]);
                } else {
                    println!("No tray prompt with id '{}'", parts[1]);
                }
            }
            "remove" => {
                if parts.len() < 2 {
                    println!("Usage: remove <id>");
                    continue;
                }
                let before = store.sequence().len();
                store.remove_from_sequence(&PromptId::from(parts[1]));
                if store.sequence().len() < before {
                    println!("Returned {} to the tray", parts[1]);
                } else {
                    println!("No canvas prompt with id '{}'", parts[1]);
                }
            }
            "reorder" => {
                let (from, to) = match (
                    parts.get(1).and_then(|s| s.parse::<usize>().ok()),
                    parts.get(2).and_then(|s| s.parse::<usize>().ok()),
                ) {
                    (Some(f), Some(t)) => (f, t),
                    _ => {
                        println!("Usage: reorder <from> <to>");
                        continue;
                    }
                };
                store.reorder_sequence(from, to);
                for (index, prompt) in store.sequence().iter().enumerate() {
                    println!("  {:2}. [{}] {}", index + 1, prompt.id, prompt.title);
                }
            }
            "text" => {
                if parts.len() < 2 {
                    println!("Usage: text <id>");
                    continue;
                }
                let id = PromptId::from(parts[1]);
                match store.all_prompts().iter().find(|p| p.id == id) {
                    Some(prompt) => println!("{}", prompt.prompt_text),
                    None => println!("No prompt with id '{}'", parts[1]),
                }
            }
            "export" => {
                if store.sequence().is_empty() {
                    println!("Canvas is empty — nothing to export.");
                    continue;
                }
                let path = match parts.get(1) {
                    Some(p) => p.to_string(),
                    None => export_filename(Utc::now()),
                };
                let doc = store.export();
                match doc.write_to_file(Path::new(&path)) {
                    Ok(()) => println!("Exported {} shots to {}", doc.total_shots, path),
                    Err(e) => println!("ERROR: export failed ({}). State unchanged; retry.", e),
                }
            }
            "restart" => {
                store.reset_session();
                println!("Session cleared. Catalog kept.");
            }
            "status" => {
                println!(
                    "category: {} | reviewed: {}/{} | tray: {} | canvas: {}",
                    store.active_category().unwrap_or("(none)"),
                    store.cursor().min(store.filtered_prompts().len()),
                    store.filtered_prompts().len(),
                    store.curated().len(),
                    store.sequence().len()
                );
            }
            _ => println!("Unknown command: {} (try 'help')", cmd),
        }
    }
}

fn print_progress(store: &StorylineStore) {
    let total = store.filtered_prompts().len();
    println!("  {} / {}", store.cursor().min(total), total);
}

fn print_usage() {
    println!("Usage: storyboard_shell --catalog <path.ron> [--categories <path.ron>]");
}

fn print_help() {
    println!("  categories          — list selectable categories");
    println!("  category <name>     — select a category and restart the swipe flow");
    println!("  card                — show the current prompt card");
    println!("  left / right        — skip / approve the current prompt");
    println!("  tray                — list the curated tray");
    println!("  canvas              — list the storyline canvas");
    println!("  move <id>           — tray → canvas");
    println!("  remove <id>         — canvas → tray");
    println!("  reorder <from> <to> — move a canvas entry (0-based indices)");
    println!("  text <id>           — print a prompt's full text");
    println!("  export [path]       — write the storyline JSON");
    println!("  restart             — clear tray, canvas, and selection");
    println!("  status              — summarize the session");
    println!("  quit                — exit");
}
