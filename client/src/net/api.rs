//! REST helpers for the content backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the dashboard only
//! loads its counters in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` instead of panics so a backend outage
//! leaves the dashboard counters at zero without breaking the page.

#![allow(clippy::unused_async)]

use super::types::DashboardStats;

/// All posts, published or not, as the admin sees them.
pub const BLOG_POSTS_ALL: &str = "/blog/posts?published=false";

/// Contact form submissions, newest first.
pub const CONTACTS: &str = "/contacts";

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn request_failed_message(url: &str, status: u16) -> String {
    format!("GET {url} failed: {status}")
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let url = crate::config::api_url(path);
    let resp = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(&url, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch post and contact counts concurrently.
///
/// # Errors
///
/// Returns an error string if either request fails or returns a body that
/// does not match the expected shape.
pub async fn fetch_dashboard_stats() -> Result<DashboardStats, String> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::{BlogPostPage, ContactSubmission};

        let (posts, contacts) = futures::future::try_join(
            get_json::<BlogPostPage>(BLOG_POSTS_ALL),
            get_json::<Vec<ContactSubmission>>(CONTACTS),
        )
        .await?;
        Ok(DashboardStats::from_responses(&posts, &contacts))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
