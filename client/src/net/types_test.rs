use super::*;

// =============================================================
// Blog posts
// =============================================================

#[test]
fn blog_post_page_parses_backend_listing() {
    let raw = serde_json::json!({
        "posts": [{
            "id": "p-1",
            "title": "Choisir une solution de prise de rendez-vous",
            "slug": "choisir-une-solution-de-prise-de-rendez-vous",
            "excerpt": "Découvrez les critères essentiels pour votre cabinet.",
            "author": "Équipe Espace Agenda",
            "date": "2025-01-15T10:00:00",
            "category": "Conseils",
            "image": "https://example.com/image.jpg",
            "published": false,
            "created_at": "2025-01-15T10:00:00",
            "updated_at": "2025-01-15T10:00:00"
        }],
        "total": 7
    });
    let page: BlogPostPage = serde_json::from_value(raw).unwrap();
    assert_eq!(page.total, 7);
    assert_eq!(page.posts.len(), 1);
    assert_eq!(page.posts[0].slug, "choisir-une-solution-de-prise-de-rendez-vous");
    assert!(!page.posts[0].published);
}

#[test]
fn blog_post_summary_defaults_optional_fields() {
    let raw = serde_json::json!({
        "id": "p-2",
        "title": "Titre",
        "slug": "titre",
        "excerpt": "Un extrait suffisamment long."
    });
    let post: BlogPostSummary = serde_json::from_value(raw).unwrap();
    assert!(post.published);
    assert!(post.category.is_empty());
}

#[test]
fn blog_post_page_requires_total() {
    let raw = serde_json::json!({ "posts": [] });
    assert!(serde_json::from_value::<BlogPostPage>(raw).is_err());
}

// =============================================================
// Contacts and stats
// =============================================================

fn contact(id: &str) -> ContactSubmission {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": "Jean Dupont",
        "email": "jean@example.com",
        "subject": "installation",
        "message": "Je souhaite installer la solution..."
    }))
    .unwrap()
}

#[test]
fn contact_defaults_status_and_phone() {
    let c = contact("c-1");
    assert_eq!(c.status, "new");
    assert_eq!(c.phone, None);
}

#[test]
fn dashboard_stats_counts_posts_total_and_contacts() {
    let page = BlogPostPage { posts: Vec::new(), total: 12 };
    let contacts = vec![contact("c-1"), contact("c-2"), contact("c-3")];
    let stats = DashboardStats::from_responses(&page, &contacts);
    assert_eq!(stats, DashboardStats { total_posts: 12, total_contacts: 3 });
}

#[test]
fn dashboard_stats_default_is_zero() {
    assert_eq!(DashboardStats::default(), DashboardStats { total_posts: 0, total_contacts: 0 });
}
