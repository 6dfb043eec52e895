use crate::blog::{Likes, PostList};
use crate::de;
use crate::error::Result;
use crate::response::{Meta, Params};
use crate::rest::{merge_params, with_query, Tumblr};
use crate::time::Timestamp;
use serde::Deserialize;

/// `/user/info` payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    pub user: User,
}

/// The account matching the signing credentials
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct User {
    /// Number of blogs the user follows
    #[serde(deserialize_with = "de::number")]
    pub following: u64,
    /// html, markdown or raw
    #[serde(deserialize_with = "de::text")]
    pub default_post_format: String,
    #[serde(deserialize_with = "de::text")]
    pub name: String,
    #[serde(deserialize_with = "de::number")]
    pub likes: u64,
    /// Blogs the user may post to
    #[serde(deserialize_with = "de::list")]
    pub blogs: Vec<UserBlog>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserBlog {
    #[serde(deserialize_with = "de::text")]
    pub name: String,
    #[serde(deserialize_with = "de::text")]
    pub url: String,
    #[serde(deserialize_with = "de::text")]
    pub title: String,
    /// The user's primary blog
    #[serde(deserialize_with = "de::flag")]
    pub primary: bool,
    #[serde(deserialize_with = "de::number")]
    pub followers: u64,
    /// Autotweet setting: auto, Y or N
    #[serde(deserialize_with = "de::opt_string")]
    pub tweet: Option<String>,
    /// Facebook crosspost setting: Y or N
    #[serde(deserialize_with = "de::opt_string")]
    pub facebook: Option<String>,
    /// public or private
    #[serde(rename = "type", deserialize_with = "de::opt_string")]
    pub kind: Option<String>,
}

/// `/user/following` payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserFollowing {
    #[serde(deserialize_with = "de::number")]
    pub total_blogs: u64,
    #[serde(deserialize_with = "de::list")]
    pub blogs: Vec<FollowedBlog>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FollowedBlog {
    #[serde(deserialize_with = "de::text")]
    pub name: String,
    #[serde(deserialize_with = "de::text")]
    pub url: String,
    #[serde(deserialize_with = "de::opt_timestamp")]
    pub updated: Option<Timestamp>,
    #[serde(deserialize_with = "de::text")]
    pub title: String,
    #[serde(deserialize_with = "de::text")]
    pub description: String,
}

impl Tumblr {
    /// Account information for the user owning the credentials
    pub fn user_info(&self) -> Result<UserInfo> {
        let url = self.endpoint(&["user", "info"])?;
        self.info(url)
    }

    /// The user's dashboard.
    ///
    /// `params`: `limit` (1-20), `offset`, `type`, `since_id`, `reblog_info`, `notes_info`
    pub fn user_dashboard(&self, params: &Params) -> Result<PostList> {
        let url = self.endpoint(&["user", "dashboard"])?;
        self.info(with_query(url, &merge_params(params, &[])))
    }

    /// Posts the user has liked.
    ///
    /// `params`: `limit` (1-20), `offset`, `before` / `after` (timestamps)
    pub fn user_likes(&self, params: &Params) -> Result<Likes> {
        let url = self.endpoint(&["user", "likes"])?;
        self.info(with_query(url, &merge_params(params, &[])))
    }

    /// Blogs the user follows.
    ///
    /// `params`: `limit` (1-20), `offset`
    pub fn user_following(&self, params: &Params) -> Result<UserFollowing> {
        let url = self.endpoint(&["user", "following"])?;
        self.info(with_query(url, &merge_params(params, &[])))
    }

    /// Follow a blog, given as blogname.tumblr.com or a custom domain
    pub fn user_follow(&self, blog_url: &str) -> Result<Meta> {
        self.user_action("follow", &[("url", blog_url.to_string())])
    }

    /// Stop following a blog
    pub fn user_unfollow(&self, blog_url: &str) -> Result<Meta> {
        self.user_action("unfollow", &[("url", blog_url.to_string())])
    }

    /// Like a post
    pub fn user_like(&self, id: u64, reblog_key: &str) -> Result<Meta> {
        self.user_action(
            "like",
            &[("id", id.to_string()), ("reblog_key", reblog_key.to_string())],
        )
    }

    /// Remove a like
    pub fn user_unlike(&self, id: u64, reblog_key: &str) -> Result<Meta> {
        self.user_action(
            "unlike",
            &[("id", id.to_string()), ("reblog_key", reblog_key.to_string())],
        )
    }

    fn user_action(&self, action: &str, required: &[(&str, String)]) -> Result<Meta> {
        let url = self.endpoint(&["user", action])?;
        let envelope = self.action(url, &merge_params(&Params::new(), required))?;
        Ok(envelope.meta)
    }
}
