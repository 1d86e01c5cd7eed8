//! Demo content loaded into a fresh store.

use chrono::Utc;
use tracing::info;

use haven_core::result::AppResult;
use haven_core::traits::repository::Repository;
use haven_entity::blog::BlogPost;
use haven_entity::property::{Property, PropertyStatus};
use haven_entity::user::{User, UserRole};

use crate::Store;

/// Inserts the two demo listings and the introductory blog post.
pub async fn demo_content(store: &Store) -> AppResult<()> {
    let now = Utc::now();

    let listings = [
        Property {
            id: "prop-001".into(),
            title: "Modern Apartment".into(),
            slug: "modern-apartment".into(),
            description: "Beautiful modern apartment in downtown area".into(),
            location: "Downtown".into(),
            price: 350_000.0,
            status: PropertyStatus::Available,
            units: 1,
            acres: 0.25,
            features: vec!["Parking".into(), "Balcony".into()],
            image_url: "https://example.com/apt.jpg".into(),
            image_alt: "Modern apartment exterior".into(),
            created_at: now,
            updated_at: now,
        },
        Property {
            id: "prop-002".into(),
            title: "Luxury Villa".into(),
            slug: "luxury-villa".into(),
            description: "Riverside villa on two and a half acres".into(),
            location: "Riverside".into(),
            price: 850_000.0,
            status: PropertyStatus::Available,
            units: 5,
            acres: 2.5,
            features: vec!["Pool".into(), "River frontage".into()],
            image_url: "https://example.com/villa.jpg".into(),
            image_alt: "Luxury villa from the garden".into(),
            created_at: now,
            updated_at: now,
        },
    ];
    for listing in listings {
        store.properties.create(listing).await?;
    }

    store
        .blog
        .create(BlogPost {
            id: "blog-001".into(),
            title: "Top Real Estate Trends".into(),
            slug: "top-real-estate-trends".into(),
            excerpt: "What buyers and investors are watching this year.".into(),
            content: "Inventory, rates, and where new communities are being built.".into(),
            category: "Investment".into(),
            tags: vec!["market".into(), "trends".into()],
            image_url: String::new(),
            image_alt: String::new(),
            author: "John Doe".into(),
            published: true,
            created_at: now,
            updated_at: now,
        })
        .await?;

    info!(
        properties = store.properties.len(),
        posts = store.blog.len(),
        "Seeded demo content"
    );
    Ok(())
}

/// Creates the admin account with an already-computed credential hash.
pub async fn admin_account(store: &Store, email: &str, password_hash: String) -> AppResult<User> {
    let admin = User::new(email, password_hash, "Site", "Admin", UserRole::Admin);
    let admin = store.users.create(admin).await?;
    info!(email = %admin.email, "Seeded admin account");
    Ok(admin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_content() {
        let store = Store::new();
        demo_content(&store).await.unwrap();
        assert_eq!(store.properties.len(), 2);
        assert!(store.properties.find_by_slug("luxury-villa").await.unwrap().is_some());
        assert_eq!(
            store
                .blog
                .find_published(&Default::default())
                .await
                .unwrap()
                .total,
            1
        );
    }

    #[tokio::test]
    async fn test_admin_account_is_admin() {
        let store = Store::new();
        let admin = admin_account(&store, "admin@example.com", "digest".into())
            .await
            .unwrap();
        assert!(admin.is_admin());
        assert!(admin_account(&store, "ADMIN@example.com", "x".into()).await.is_err());
    }
}
