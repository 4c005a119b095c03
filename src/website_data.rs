/// Data structures exchanged with the listing service
use serde::{Deserialize, Serialize};

/// A submitted website as returned by the listing service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Website {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A category used as a filter key and as autocomplete data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Category {
        Category {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Envelope of `GET /website/list`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebsiteList {
    #[serde(default)]
    pub list: Vec<Website>,
}

/// Envelope of `GET /website/categories`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryList {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Body of `POST /website/create`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreateWebsiteRequest {
    pub url: String,
    pub category: String,
}

/// What the user typed into the creation form.
///
/// Submitting consumes the draft, so it never outlives one form interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub url: String,
    pub category: Option<String>,
}

impl Draft {
    /// Empty category text counts as no category.
    pub fn new(url: impl Into<String>, category: Option<&str>) -> Draft {
        Draft {
            url: url.into(),
            category: category
                .filter(|c| !c.is_empty())
                .map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_website_without_optional_fields() {
        let json = r#"{"title":"A","url":"http://a"}"#;
        let website: Website = serde_json::from_str(json).unwrap();

        assert_eq!(website.title, "A");
        assert_eq!(website.description, "");
        assert_eq!(website.image, "");
        assert_eq!(website.category, None);
        assert_eq!(website.id, None);
    }

    #[test]
    fn test_mongo_style_ids() {
        let json = r#"{"_id":"64f0","title":"A","url":"http://a","category":"Blog"}"#;
        let website: Website = serde_json::from_str(json).unwrap();
        assert_eq!(website.id.as_deref(), Some("64f0"));
        assert_eq!(website.category.as_deref(), Some("Blog"));

        let category: Category = serde_json::from_str(r#"{"_id":"c1","name":"Blog"}"#).unwrap();
        assert_eq!(category, Category::new("c1", "Blog"));
    }

    #[test]
    fn test_listing_item_without_title_still_decodes() {
        let json = r#"{"list":[{"url":"http://a"},{"title":"B","url":"http://b"}]}"#;
        let list: WebsiteList = serde_json::from_str(json).unwrap();

        assert_eq!(list.list.len(), 2);
        assert_eq!(list.list[0].title, "");
        assert_eq!(list.list[1].title, "B");
    }

    #[test]
    fn test_envelopes_default_to_empty() {
        let list: WebsiteList = serde_json::from_str("{}").unwrap();
        assert!(list.list.is_empty());

        let categories: CategoryList = serde_json::from_str(r#"{"other":1}"#).unwrap();
        assert!(categories.categories.is_empty());
    }

    #[test]
    fn test_create_request_body() {
        let request = CreateWebsiteRequest {
            url: "example.com".to_string(),
            category: "Blog".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"url": "example.com", "category": "Blog"}));
    }

    #[test]
    fn test_draft_treats_empty_category_as_missing() {
        assert_eq!(Draft::new("a.com", Some("")).category, None);
        assert_eq!(Draft::new("a.com", None).category, None);
        assert_eq!(Draft::new("a.com", Some("blog")).category.as_deref(), Some("blog"));
    }
}
