/// Swipe Session example — a full curation flow from catalog to export.
///
/// Loads the demo catalog, swipes through the Bhajans category, builds a
/// three-shot storyline, reorders it, and prints the export document.
///
/// Run with: cargo run --example swipe_session
use std::path::Path;

use storyliner::core::catalog::load_catalog;
use storyliner::core::store::StorylineStore;
use storyliner::schema::prompt::PromptId;

fn main() {
    // --- Load the demo catalog ---
    let prompts = load_catalog(Path::new("catalog_data/demo/catalog.ron"))
        .expect("Failed to load demo catalog");

    let mut store = StorylineStore::new();
    store.set_all_prompts(prompts);

    // --- Pick a category; the swipe flow restarts at the head ---
    store.set_active_category(Some("Bhajans"));
    println!(
        "Reviewing {} prompts in '{}'\n",
        store.filtered_prompts().len(),
        store.active_category().unwrap()
    );

    // --- Swipe through the view: approve, approve, skip ... ---
    while let Some(prompt) = store.current_prompt().cloned() {
        let keep = !prompt.has_tag("dusk"); // skip the dusk shot this time
        println!(
            "  {} '{}' ({})",
            if keep { "♥" } else { "✗" },
            prompt.title,
            prompt.shot_type
        );
        if keep {
            store.swipe_right();
        } else {
            store.swipe_left();
        }
    }
    println!("\nTray holds {} prompts", store.curated().len());

    // Grab one more from another category
    store.set_active_category(Some("Music Videos"));
    store.swipe_right();

    // --- Build the storyline ---
    for id in ["bhajan-001", "bhajan-002", "mv-001"] {
        store.move_to_sequence(&PromptId::from(id));
    }

    // Open on the aarti close-up instead
    store.reorder_sequence(1, 0);

    println!("\nStoryline:");
    for (index, prompt) in store.sequence().iter().enumerate() {
        println!("  {}. {} — {}", index + 1, prompt.title, prompt.mood);
    }

    // --- Export ---
    let doc = store.export();
    println!(
        "\nExport '{}' with {} shots:\n",
        doc.storyline_title, doc.total_shots
    );
    println!("{}", doc.to_json().expect("Failed to serialize export"));
}
