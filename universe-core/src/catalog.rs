//! Static concept records that seed a [`crate::universe::Universe`].

/// A single concept in the catalog.
///
/// The `id` is the join key for relation edges and detail lookups and must
/// be unique within a catalog. `related` may name ids that do not exist;
/// such entries simply produce no edge.
#[derive(Debug, Clone)]
pub struct Concept {
    pub id: String,
    pub name: String,
    pub category: String,
    pub icon: String,
    pub description: String,
    pub details: String,
    /// Optional real-world usage line shown in the detail panel.
    pub example: Option<String>,
    /// Difficulty rating, 1–5.
    pub difficulty: u8,
    /// Ids of related concepts. Not required to be symmetric.
    pub related: Vec<String>,
}

impl Concept {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: &str,
        name: &str,
        category: &str,
        icon: &str,
        description: &str,
        details: &str,
        difficulty: u8,
        related: &[&str],
    ) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            category: category.to_owned(),
            icon: icon.to_owned(),
            description: description.to_owned(),
            details: details.to_owned(),
            example: None,
            difficulty,
            related: related.iter().map(|r| (*r).to_owned()).collect(),
        }
    }

    pub fn with_example(mut self, example: &str) -> Self {
        self.example = Some(example.to_owned());
        self
    }
}

/// Returns the first id that appears more than once, if any.
pub fn duplicate_id(concepts: &[Concept]) -> Option<&str> {
    for (i, c) in concepts.iter().enumerate() {
        if concepts[..i].iter().any(|other| other.id == c.id) {
            return Some(&c.id);
        }
    }
    None
}

/// Renders a 1–5 difficulty as filled and empty stars, e.g. `★★★☆☆`.
///
/// Values above 5 are treated as 5.
pub fn difficulty_stars(difficulty: u8) -> String {
    let filled = difficulty.min(5) as usize;
    let mut stars = "★".repeat(filled);
    stars.push_str(&"☆".repeat(5 - filled));
    stars
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concept(id: &str) -> Concept {
        Concept::new(id, id, "patterns", "*", "", "", 3, &[])
    }

    #[test]
    fn duplicate_id_finds_the_repeated_id() {
        let concepts = vec![concept("a"), concept("b"), concept("a")];
        assert_eq!(duplicate_id(&concepts), Some("a"));
    }

    #[test]
    fn duplicate_id_accepts_unique_catalogs() {
        let concepts = vec![concept("a"), concept("b"), concept("c")];
        assert_eq!(duplicate_id(&concepts), None);
    }

    #[test]
    fn difficulty_stars_renders_filled_and_empty() {
        assert_eq!(difficulty_stars(0), "☆☆☆☆☆");
        assert_eq!(difficulty_stars(3), "★★★☆☆");
        assert_eq!(difficulty_stars(5), "★★★★★");
        // Out-of-range ratings saturate instead of panicking.
        assert_eq!(difficulty_stars(9), "★★★★★");
    }
}
