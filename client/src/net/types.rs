//! Wire DTOs mirrored from the remote CMS API.
//!
//! DESIGN
//! ======
//! Decoding is lenient where the API is known to omit or null out fields
//! (post category, tags, content, timestamps, image, slugs) so one sparse
//! record never fails a whole list. Draft payloads keep the exact key casing the API expects.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Decode `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A content tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    /// Server-assigned URL slug.
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
}

/// A content category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    /// Server-assigned URL slug.
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A published post with its category and tags expanded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
}

impl Post {
    /// Category name for table cells and badges, empty when unassigned.
    #[must_use]
    pub fn category_name(&self) -> &str {
        self.category.as_ref().map_or("", |c| c.name.as_str())
    }

    /// Tag names joined with `", "`.
    #[must_use]
    pub fn tag_names(&self) -> String {
        self.tags.iter().map(|t| t.name.as_str()).collect::<Vec<_>>().join(", ")
    }

    /// Image URL when the post has a non-empty one.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// The signed-in user's profile as returned by `GET /api/user`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// Editable fields of a tag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDraft {
    pub name: String,
}

/// Editable fields of a category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

/// Shared create/edit form for posts.
///
/// `category_id == 0` means no category has been chosen yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub category_id: i64,
    pub tag_ids: Vec<i64>,
}

impl PostDraft {
    /// Add `tag_id` when absent, remove it when present.
    pub fn toggle_tag(&mut self, tag_id: i64) {
        if let Some(pos) = self.tag_ids.iter().position(|id| *id == tag_id) {
            self.tag_ids.remove(pos);
        } else {
            self.tag_ids.push(tag_id);
        }
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Body of `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}
