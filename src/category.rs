/// Health topics used by both the navigation dropdown and the health cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Cancer,
    Cardiovascular,
    ChronicIllness,
    Dental,
    Infections,
    MentalHealth,
    Preventative,
    Respiratory,
    SexualHealth,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 9] = [
        Category::Cancer,
        Category::Cardiovascular,
        Category::ChronicIllness,
        Category::Dental,
        Category::Infections,
        Category::MentalHealth,
        Category::Preventative,
        Category::Respiratory,
        Category::SexualHealth,
    ];

    /// Identifier used in routes, data attributes and resource directories.
    pub fn id(&self) -> &'static str {
        match self {
            Category::Cancer => "cancer",
            Category::Cardiovascular => "cardiovascular",
            Category::ChronicIllness => "chronic-illness",
            Category::Dental => "dental",
            Category::Infections => "infections",
            Category::MentalHealth => "mental-health",
            Category::Preventative => "preventative",
            Category::Respiratory => "respiratory",
            Category::SexualHealth => "sexual-health",
        }
    }

    pub fn from_id(id: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|category| category.id() == id)
    }

    /// Content slot holding the card title for this category.
    ///
    /// Cardiovascular cards are titled under `heart`; every other category
    /// uses its own id.
    pub fn content_key(&self) -> &'static str {
        match self {
            Category::Cardiovascular => "heart",
            other => other.id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_id(category.id()), Some(category));
        }
    }

    #[test]
    fn test_from_id_unknown() {
        assert_eq!(Category::from_id("heart"), None);
        assert_eq!(Category::from_id("Cancer"), None);
        assert_eq!(Category::from_id(""), None);
    }

    #[test]
    fn test_cardiovascular_is_the_only_alias() {
        let aliased: Vec<_> = Category::ALL
            .into_iter()
            .filter(|category| category.content_key() != category.id())
            .collect();

        assert_eq!(aliased, vec![Category::Cardiovascular]);
        assert_eq!(Category::Cardiovascular.content_key(), "heart");
    }
}
