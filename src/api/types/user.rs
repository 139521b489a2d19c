//! Request and response bodies for the user directory endpoints

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::domain::{LoadStatus, User};

const PRIMARY_AVATAR_BASE: &str = "https://avatars.dicebear.com/v2/avataaars/";
const FALLBACK_AVATAR_BASE: &str = "https://api.dicebear.com/7.x/avataaars/svg";

/// Avatar image URLs for a card; `fallback` is used when `primary` fails to load
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvatarUrls {
    pub primary: String,
    pub fallback: String,
}

impl AvatarUrls {
    pub fn for_username(username: &str) -> Self {
        Self {
            primary: primary_avatar(username),
            fallback: fallback_avatar(username),
        }
    }
}

fn primary_avatar(username: &str) -> String {
    match Url::parse(PRIMARY_AVATAR_BASE) {
        Ok(mut url) => {
            if let Ok(mut segments) = url.path_segments_mut() {
                segments.pop_if_empty().push(&format!("{}.svg", username));
            }
            url.set_query(Some("options[mood][]=happy"));
            url.into()
        }
        Err(_) => format!("{}{}.svg?options[mood][]=happy", PRIMARY_AVATAR_BASE, username),
    }
}

fn fallback_avatar(username: &str) -> String {
    Url::parse_with_params(FALLBACK_AVATAR_BASE, &[("seed", username), ("mood", "happy")])
        .map(String::from)
        .unwrap_or_else(|_| format!("{}?seed={}&mood=happy", FALLBACK_AVATAR_BASE, username))
}

/// A user as rendered on a card
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    #[serde(flatten)]
    pub user: User,
    pub avatar: AvatarUrls,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let avatar = AvatarUrls::for_username(user.username());
        Self { user, avatar }
    }
}

/// List users response
#[derive(Debug, Clone, Serialize)]
pub struct ListUsersResponse {
    pub status: LoadStatus,
    pub users: Vec<UserResponse>,
    pub total: usize,
}

/// Load status after a reload request
#[derive(Debug, Clone, Serialize)]
pub struct ReloadResponse {
    pub status: LoadStatus,
}

/// One field edit on the open draft.
///
/// Without `container` the field is a top-level scalar (`name`, `email`, ...);
/// with it, `field` is a key of that nested record (`address.city`, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct DraftFieldUpdate {
    #[serde(default)]
    pub container: Option<String>,
    pub field: String,
    pub value: String,
}
