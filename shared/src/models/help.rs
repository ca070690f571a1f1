//! Help Center Model (FAQ articles and categories)

use serde::{Deserialize, Serialize};

/// Platform summary embedded in help content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformRef {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub brand: Option<String>,
}

/// Help category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelpCategory {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub platform_id: Option<i64>,
    #[serde(default)]
    pub articles_count: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub platform: Option<PlatformRef>,
}

/// Create / update help category payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HelpCategoryForm {
    pub name: String,
    /// Derived from `name` when empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_id: Option<i64>,
}

/// Help article; FAQ entries are articles with `is_faq = true`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelpArticle {
    pub id: i64,
    pub category_id: i64,
    #[serde(default)]
    pub platform_id: Option<i64>,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub is_faq: bool,
    #[serde(default)]
    pub views_count: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub category: Option<HelpCategory>,
    #[serde(default)]
    pub platform: Option<PlatformRef>,
}

/// Create / update FAQ payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqForm {
    pub category_id: i64,
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_faq: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_id: Option<i64>,
}

/// Filters for `GET /help-articles`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HelpArticleQuery {
    pub is_faq: Option<bool>,
    pub category_id: Option<i64>,
    pub search: Option<String>,
}

impl HelpArticleQuery {
    pub fn faqs() -> Self {
        Self {
            is_faq: Some(true),
            ..Default::default()
        }
    }

    /// Query pairs in wire order; a zero category or blank search is omitted
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(is_faq) = self.is_faq {
            pairs.push(("is_faq", is_faq.to_string()));
        }
        if let Some(category_id) = self.category_id
            && category_id != 0
        {
            pairs.push(("category_id", category_id.to_string()));
        }
        if let Some(search) = self.search.as_deref()
            && !search.is_empty()
        {
            pairs.push(("search", search.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs() {
        let q = HelpArticleQuery {
            is_faq: Some(false),
            category_id: Some(0),
            search: Some("login".into()),
        };
        assert_eq!(
            q.to_pairs(),
            vec![("is_faq", "false".to_string()), ("search", "login".to_string())]
        );
        assert!(HelpArticleQuery::default().to_pairs().is_empty());
    }

    #[test]
    fn test_article_with_category() {
        let json = r#"{"id":1,"category_id":4,"question":"Q?","answer":"A.","is_faq":true,
            "category":{"id":4,"name":"Account","slug":"account"}}"#;
        let article: HelpArticle = serde_json::from_str(json).unwrap();
        assert!(article.is_faq);
        assert_eq!(article.category.unwrap().slug, "account");
    }
}
