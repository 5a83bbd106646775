//! Placeholder text for cascading fields.

/// The thing a cascading field selects, used to build its placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNoun {
    singular: String,
    plural: String,
}

impl FieldNoun {
    /// Noun with a regular plural (`Course` -> `Courses`).
    pub fn new(singular: impl Into<String>) -> Self {
        let singular = singular.into();
        let plural = format!("{singular}s");
        Self { singular, plural }
    }

    pub fn with_plural(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    pub fn singular(&self) -> &str {
        &self.singular
    }

    pub fn plural(&self) -> &str {
        &self.plural
    }

    /// Shown while idle and once options are available.
    pub fn searching(&self) -> String {
        format!("Search for {}", self.plural)
    }

    /// Shown while a fetch is in flight.
    pub fn finding(&self) -> String {
        format!("Finding {}…", self.plural)
    }

    /// Shown when the fetch returned nothing or failed.
    pub fn none_found(&self) -> String {
        format!("No {} found", self.plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders() {
        let noun = FieldNoun::new("Course");
        assert_eq!(noun.searching(), "Search for Courses");
        assert_eq!(noun.finding(), "Finding Courses…");
        assert_eq!(noun.none_found(), "No Courses found");
    }

    #[test]
    fn test_irregular_plural() {
        let noun = FieldNoun::with_plural("Qualification Category", "Qualification Categories");
        assert_eq!(noun.none_found(), "No Qualification Categories found");
    }
}
