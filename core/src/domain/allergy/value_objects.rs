use std::collections::BTreeSet;

/// Allergens a user declared, parsed from free text such as
/// `"Nuts, dairy ,, gluten"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllergyProfile {
    allergens: BTreeSet<String>,
}

impl AllergyProfile {
    pub fn parse(input: &str) -> Self {
        let allergens = input
            .split(',')
            .map(|token| token.trim().to_lowercase())
            .filter(|token| !token.is_empty())
            .collect();

        Self { allergens }
    }

    pub fn is_empty(&self) -> bool {
        self.allergens.is_empty()
    }

    /// Exact, case-insensitive membership.
    pub fn contains(&self, tag: &str) -> bool {
        self.allergens.contains(&tag.trim().to_lowercase())
    }

    pub fn allergens(&self) -> impl Iterator<Item = &str> {
        self.allergens.iter().map(String::as_str)
    }
}
