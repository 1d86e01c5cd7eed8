//! Blog post lookups.

use haven_core::result::AppResult;
use haven_core::types::pagination::{PageRequest, PageResponse};
use haven_entity::blog::BlogPost;

use super::BlogRepository;

impl BlogRepository {
    /// Find a post by its URL slug.
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Option<BlogPost>> {
        Ok(self.get_by_key(slug))
    }

    /// Published posts, newest first.
    pub async fn find_published(&self, page: &PageRequest) -> AppResult<PageResponse<BlogPost>> {
        Ok(PageResponse::from_items(self.select(|p| p.published), page))
    }

    /// Published posts in `category`, matched case-insensitively.
    pub async fn find_by_category(
        &self,
        category: &str,
        page: &PageRequest,
    ) -> AppResult<PageResponse<BlogPost>> {
        let posts = self.select(|p| p.published && p.in_category(category));
        Ok(PageResponse::from_items(posts, page))
    }

    /// The `limit` most recently created posts, drafts included.
    pub async fn recent(&self, limit: usize) -> AppResult<Vec<BlogPost>> {
        Ok(self.all().into_iter().take(limit).collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use haven_core::traits::repository::Repository;

    use super::*;

    fn post(slug: &str, category: &str, published: bool, age_minutes: i64) -> BlogPost {
        let at = Utc::now() - Duration::minutes(age_minutes);
        BlogPost {
            id: format!("id-{slug}"),
            title: slug.to_string(),
            slug: slug.to_string(),
            excerpt: String::new(),
            content: String::new(),
            category: category.to_string(),
            tags: Vec::new(),
            image_url: String::new(),
            image_alt: String::new(),
            author: "Staff".into(),
            published,
            created_at: at,
            updated_at: at,
        }
    }

    #[tokio::test]
    async fn test_drafts_hidden_and_category_case_insensitive() {
        let repo = BlogRepository::new();
        repo.create(post("a", "Investment", true, 3)).await.unwrap();
        repo.create(post("b", "investment", true, 1)).await.unwrap();
        repo.create(post("c", "Investment", false, 0)).await.unwrap();
        repo.create(post("d", "Lifestyle", true, 2)).await.unwrap();

        let published = repo.find_published(&PageRequest::default()).await.unwrap();
        assert_eq!(published.total, 3);

        let invest = repo
            .find_by_category("INVESTMENT", &PageRequest::default())
            .await
            .unwrap();
        let slugs: Vec<_> = invest.data.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "a"]);

        assert_eq!(repo.find_by_slug("c").await.unwrap().unwrap().id, "id-c");
    }
}
