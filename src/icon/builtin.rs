//! Curated icons shipped with the crate.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::{IconDefinition, IconPath};

static CURATED: LazyLock<HashMap<&'static str, IconDefinition>> = LazyLock::new(|| {
    let filled = |d: &str| IconDefinition::from_paths("0 0 24 24", vec![IconPath::filled(d)]);

    HashMap::from([
        (
            "lucide:sparkles",
            IconDefinition::from_paths(
                "0 0 24 24",
                vec![IconPath::stroked(
                    "M12 3v3m0 12v3m9-9h-3M6 12H3m12.5-6.5l-2 2m-5 10l-2 2m9 0l-2-2m-5-10l-2-2",
                    2.0,
                )],
            ),
        ),
        ("lucide:bolt", filled("M13 3L4 14h7l-1 7 9-11h-7l1-7z")),
        (
            "iconsax:star",
            filled("M12 2l2.9 6.1 6.7.9-4.8 4.7 1.2 6.6L12 17.8 6 20.3l1.2-6.6L2.4 9l6.7-.9L12 2z"),
        ),
        (
            "iconsax:heart",
            filled(
                "M12 21s-6.5-4.3-9.1-7C.7 11.8.5 8.7 2.4 6.9 4 5.3 6.6 5.5 8 7c1 1.1 1.4 1.9 4 0 1.6-1 4-1.7 5.6-.1 1.9 1.8 1.7 4.9-.5 7.1C18.2 16.7 12 21 12 21z",
            ),
        ),
        (
            "iconsax:shield",
            filled("M12 2l8 4v6c0 5-3.5 9-8 10-4.5-1-8-5-8-10V6l8-4z"),
        ),
    ])
});

/// Looks up a curated icon.
pub fn get(id: &str) -> Option<&'static IconDefinition> {
    CURATED.get(id)
}

/// Ids of every curated icon, sorted.
pub fn ids() -> Vec<&'static str> {
    let mut ids: Vec<_> = CURATED.keys().copied().collect();
    ids.sort_unstable();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curated_icons_are_path_based() {
        for id in ids() {
            let def = get(id).unwrap();
            assert!(!def.paths.is_empty(), "{id} should have paths");
            assert!(def.raw.is_none());
        }
    }

    #[test]
    fn ids_are_namespaced() {
        assert!(ids().iter().all(|id| id.contains(':')));
        assert!(get("iconsax:star").is_some());
        assert!(get("star").is_none());
    }
}
