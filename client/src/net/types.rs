//! Response shapes of the content backend used by the admin screens.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Blog post as listed by `GET /api/blog/posts` (full content omitted).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogPostSummary {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    #[serde(default)]
    pub author: String,
    /// ISO-8601 publication date as sent by the backend.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default = "default_published")]
    pub published: bool,
}

fn default_published() -> bool {
    true
}

/// One page of blog posts plus the total matching the filter.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPostPage {
    #[serde(default)]
    pub posts: Vec<BlogPostSummary>,
    pub total: u64,
}

/// Message left through the public contact form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    #[serde(default = "default_contact_status")]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
}

fn default_contact_status() -> String {
    "new".to_owned()
}

/// Counters shown on the admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_posts: u64,
    pub total_contacts: u64,
}

impl DashboardStats {
    #[must_use]
    pub fn from_responses(posts: &BlogPostPage, contacts: &[ContactSubmission]) -> Self {
        Self { total_posts: posts.total, total_contacts: contacts.len() as u64 }
    }
}
