// Article store module
// Owns the in-memory collection of articles and is its only mutator

use serde::{Deserialize, Serialize};

/// A single article record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub desc: String,
    pub content: String,
}

/// Payload accepted by the create endpoint.
///
/// The id is always assigned by the store; clients cannot supply one.
/// Missing fields deserialize to empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewArticle {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub content: String,
}

/// The authoritative in-memory article collection.
///
/// Ids come from a monotonically increasing counter that is never reused,
/// so a delete followed by a create cannot produce a duplicate id. All
/// lookups are linear scans; the expected record count does not warrant
/// an index.
#[derive(Debug)]
pub struct ArticleStore {
    articles: Vec<Article>,
    next_id: u64,
}

impl ArticleStore {
    /// Create an empty store. The first assigned id is 1.
    pub const fn new() -> Self {
        Self {
            articles: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store holding the two startup records.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.create(NewArticle {
            title: "Hello".to_string(),
            desc: "Article Description".to_string(),
            content: "Article Content".to_string(),
        });
        store.create(NewArticle {
            title: "Hello 2".to_string(),
            desc: "Article 2 Description".to_string(),
            content: "Article 2 Content".to_string(),
        });
        store
    }

    /// All current articles in insertion order.
    pub fn list(&self) -> &[Article] {
        &self.articles
    }

    /// Assign a fresh id, append the record and return it.
    pub fn create(&mut self, new: NewArticle) -> Article {
        let article = Article {
            id: self.next_id,
            title: new.title,
            desc: new.desc,
            content: new.content,
        };
        self.next_id += 1;
        self.articles.push(article.clone());
        article
    }

    /// Find an article by id.
    pub fn find_by_id(&self, id: u64) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }

    /// Remove the article with the given id, preserving the relative order
    /// of the remainder. Returns false when no record matches.
    pub fn delete_by_id(&mut self, id: u64) -> bool {
        match self.articles.iter().position(|article| article.id == id) {
            Some(index) => {
                self.articles.remove(index);
                true
            }
            None => false,
        }
    }
}

impl Default for ArticleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_article(title: &str) -> NewArticle {
        NewArticle {
            title: title.to_string(),
            desc: format!("{title} desc"),
            content: format!("{title} content"),
        }
    }

    #[test]
    fn test_create_appends_in_insertion_order() {
        let mut store = ArticleStore::new();
        store.create(new_article("first"));
        let created = store.create(new_article("second"));

        let titles: Vec<&str> = store.list().iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
        assert_eq!(store.list().last().map(|a| a.id), Some(created.id));
    }

    #[test]
    fn test_ids_are_unique_and_monotonic() {
        let mut store = ArticleStore::new();
        let a = store.create(new_article("a"));
        let b = store.create(new_article("b"));
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);

        // A deleted id must never be handed out again.
        assert!(store.delete_by_id(b.id));
        let c = store.create(new_article("c"));
        assert_eq!(c.id, 3);

        let mut ids: Vec<u64> = store.list().iter().map(|a| a.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), store.list().len());
    }

    #[test]
    fn test_find_by_id() {
        let mut store = ArticleStore::new();
        let created = store.create(new_article("findme"));

        assert_eq!(store.find_by_id(created.id), Some(&created));
        assert_eq!(store.find_by_id(99), None);
    }

    #[test]
    fn test_delete_removes_only_the_matching_record() {
        let mut store = ArticleStore::new();
        store.create(new_article("a"));
        let b = store.create(new_article("b"));
        store.create(new_article("c"));

        assert!(store.delete_by_id(b.id));
        assert_eq!(store.find_by_id(b.id), None);

        let ids: Vec<u64> = store.list().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_delete_missing_id_leaves_store_unchanged() {
        let mut store = ArticleStore::new();
        store.create(new_article("only"));

        assert!(!store.delete_by_id(42));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_seeded_store_holds_startup_records() {
        let store = ArticleStore::seeded();
        assert_eq!(store.list().len(), 2);

        let first = store.find_by_id(1).expect("seed article 1");
        assert_eq!(first.title, "Hello");
        assert_eq!(first.desc, "Article Description");
        assert_eq!(first.content, "Article Content");

        let second = store.find_by_id(2).expect("seed article 2");
        assert_eq!(second.title, "Hello 2");
    }

    #[test]
    fn test_seeded_store_continues_counter_after_seeds() {
        let mut store = ArticleStore::seeded();
        let created = store.create(new_article("fresh"));
        assert_eq!(created.id, 3);
    }

    #[test]
    fn test_new_article_tolerates_missing_fields() {
        let payload: NewArticle = serde_json::from_str(r#"{"title":"only title"}"#).unwrap();
        assert_eq!(payload.title, "only title");
        assert_eq!(payload.desc, "");
        assert_eq!(payload.content, "");
    }
}
