/// Store integration tests — full sessions over the shipped demo catalog.
use std::path::Path;

use storyliner::core::catalog::{distinct_categories, duplicate_ids, load_catalog};
use storyliner::core::store::StorylineStore;
use storyliner::schema::prompt::PromptId;

fn demo_store() -> StorylineStore {
    let prompts = load_catalog(Path::new("catalog_data/demo/catalog.ron")).unwrap();
    let mut store = StorylineStore::new();
    store.set_all_prompts(prompts);
    store
}

#[test]
fn demo_catalog_loads_clean() {
    let store = demo_store();
    assert!(store.all_prompts().len() >= 10);
    assert!(duplicate_ids(store.all_prompts()).is_empty());

    let categories = distinct_categories(store.all_prompts());
    assert!(categories.contains(&"Bhajans".to_string()));
    assert!(categories.contains(&"Music Videos".to_string()));
}

#[test]
fn full_session_from_swipe_to_sequence() {
    let mut store = demo_store();

    store.set_active_category(Some("Bhajans"));
    let total = store.filtered_prompts().len();
    assert_eq!(total, 3);
    assert!(store
        .filtered_prompts()
        .iter()
        .all(|p| p.category == "Bhajans"));

    // Approve everything in the view
    while !store.is_exhausted() {
        store.swipe_right();
    }
    assert_eq!(store.curated().len(), total);
    assert!(store.current_prompt().is_none());

    // Build a two-shot storyline
    store.move_to_sequence(&PromptId::from("bhajan-002"));
    store.move_to_sequence(&PromptId::from("bhajan-001"));
    assert_eq!(store.sequence().len(), 2);
    assert_eq!(store.curated().len(), total - 2);
    assert_eq!(store.sequence()[0].id, PromptId::from("bhajan-002"));

    // Change of heart: pull one back, it lands at the tray tail
    store.remove_from_sequence(&PromptId::from("bhajan-002"));
    assert_eq!(store.sequence().len(), 1);
    assert_eq!(
        store.curated().last().unwrap().id,
        PromptId::from("bhajan-002")
    );
}

#[test]
fn switching_categories_restarts_the_flow() {
    let mut store = demo_store();

    store.set_active_category(Some("Cartoons"));
    store.swipe_right();
    store.swipe_left();
    assert!(store.is_exhausted());

    store.set_active_category(Some("Jewelry"));
    assert_eq!(store.cursor(), 0);
    assert!(!store.is_exhausted());
    assert_eq!(
        store.current_prompt().unwrap().id,
        PromptId::from("jewelry-001")
    );

    // Prompts curated under the previous category survive the switch
    assert_eq!(store.curated().len(), 1);
    assert_eq!(store.curated()[0].id, PromptId::from("cartoon-001"));
}

#[test]
fn identities_never_shared_between_tray_and_canvas() {
    let mut store = demo_store();
    store.set_active_category(None);

    while !store.is_exhausted() {
        store.swipe_right();
    }

    // Shuffle prompts back and forth and check the invariant throughout
    let ids: Vec<PromptId> = store.curated().iter().map(|p| p.id.clone()).collect();
    for (round, id) in ids.iter().enumerate() {
        store.move_to_sequence(id);
        if round % 2 == 0 {
            store.remove_from_sequence(id);
        }
        for curated in store.curated() {
            assert!(
                !store.sequence().iter().any(|s| s.id == curated.id),
                "{} held by both collections",
                curated.id
            );
        }
    }
}

#[test]
fn reorder_scenarios_from_the_canvas() {
    let mut store = demo_store();
    store.set_active_category(None);
    while !store.is_exhausted() {
        store.swipe_right();
    }
    for id in ["bhajan-001", "cartoon-001", "jewelry-001"] {
        store.move_to_sequence(&PromptId::from(id));
    }

    // [e1, e2, e3] reorder(0, 2) -> [e2, e3, e1]
    store.reorder_sequence(0, 2);
    let ids: Vec<&str> = store.sequence().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["cartoon-001", "jewelry-001", "bhajan-001"]);
}

#[test]
fn catalog_reload_does_not_disturb_curation() {
    let mut store = demo_store();
    store.set_active_category(Some("Skincare"));
    store.swipe_right();

    // Wholesale replacement of the catalog
    let smaller = vec![store.all_prompts()[0].clone()];
    store.set_all_prompts(smaller);
    assert_eq!(store.all_prompts().len(), 1);
    assert_eq!(store.curated().len(), 1);
    assert_eq!(store.curated()[0].id, PromptId::from("skincare-001"));
}
