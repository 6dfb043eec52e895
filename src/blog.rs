use crate::de;
use crate::error::Result;
use crate::post::Post;
use crate::response::Params;
use crate::rest::{merge_params, with_query, Tumblr};
use crate::time::Timestamp;
use serde::Deserialize;

/// Size used by [`Tumblr::blog_avatar`]
pub const DEFAULT_AVATAR_SIZE: u32 = 64;

/// `/info` payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BlogInfo {
    pub blog: Blog,
}

/// High-level blog metadata
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Blog {
    /// The display title of the blog
    #[serde(deserialize_with = "de::text")]
    pub title: String,
    /// The short blog name that appears before tumblr.com in a standard blog hostname
    #[serde(deserialize_with = "de::text")]
    pub name: String,
    #[serde(deserialize_with = "de::opt_string")]
    pub url: Option<String>,
    /// The total number of posts to this blog
    #[serde(rename = "posts", deserialize_with = "de::number")]
    pub post_count: u64,
    /// The time of the most recent post
    #[serde(deserialize_with = "de::opt_timestamp")]
    pub updated: Option<Timestamp>,
    #[serde(deserialize_with = "de::text")]
    pub description: String,
    /// Whether the blog allows questions
    #[serde(deserialize_with = "de::flag")]
    pub ask: bool,
    #[serde(deserialize_with = "de::flag")]
    pub ask_anon: bool,
    #[serde(deserialize_with = "de::number")]
    pub likes: u64,
    /// Whether the calling user's primary blog blocks this one
    #[serde(deserialize_with = "de::flag")]
    pub is_blocked_from_primary: bool,
}

/// `/likes` payload, shared by the blog and user likes endpoints
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Likes {
    #[serde(deserialize_with = "de::list")]
    pub liked_posts: Vec<Post>,
    #[serde(deserialize_with = "de::number")]
    pub liked_count: u64,
}

/// `/followers` payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BlogFollowers {
    #[serde(deserialize_with = "de::number")]
    pub total_users: u64,
    #[serde(deserialize_with = "de::list")]
    pub users: Vec<Follower>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Follower {
    #[serde(deserialize_with = "de::text")]
    pub name: String,
    /// Whether the caller follows this user back
    #[serde(deserialize_with = "de::flag")]
    pub following: bool,
    /// URL of the user's primary blog
    #[serde(deserialize_with = "de::text")]
    pub url: String,
    #[serde(deserialize_with = "de::opt_timestamp")]
    pub updated: Option<Timestamp>,
}

/// `/posts` payload: the blog object plus one page of posts
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BlogPosts {
    pub blog: Blog,
    #[serde(deserialize_with = "de::list")]
    pub posts: Vec<Post>,
    /// Total posts matching the request, for paging
    #[serde(deserialize_with = "de::number")]
    pub total_posts: u64,
}

/// Bare list of posts (queue, dashboard)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PostList {
    #[serde(deserialize_with = "de::list")]
    pub posts: Vec<Post>,
}

impl Tumblr {
    /// General information about a blog: title, number of posts, etc.
    ///
    /// # Arguments
    /// * `blog_hostname` - standard or custom blog hostname (e.g. example.tumblr.com, example.com)
    pub fn blog_info(&self, blog_hostname: &str) -> Result<BlogInfo> {
        let url = self.blog_endpoint(blog_hostname, "info")?;
        let query = merge_params(&Params::new(), &[("api_key", self.api_key().to_string())]);
        self.info(with_query(url, &query))
    }

    /// The blog's avatar image at the default size (64)
    pub fn blog_avatar(&self, blog_hostname: &str) -> Result<Vec<u8>> {
        self.blog_avatar_with_size(blog_hostname, DEFAULT_AVATAR_SIZE)
    }

    /// The blog's avatar image at a given square size.
    /// The API accepts 16, 24, 30, 40, 48, 64, 96, 128 and 512.
    pub fn blog_avatar_with_size(&self, blog_hostname: &str, size: u32) -> Result<Vec<u8>> {
        let url = self.blog_endpoint(blog_hostname, &format!("avatar/{}", size))?;
        self.raw_get(url)
    }

    /// Publicly exposed likes of a blog.
    ///
    /// `params`: `limit` (1-20), `offset`, `before` / `after` (timestamps)
    pub fn blog_likes(&self, blog_hostname: &str, params: &Params) -> Result<Likes> {
        let url = self.blog_endpoint(blog_hostname, "likes")?;
        let query = merge_params(params, &[("api_key", self.api_key().to_string())]);
        self.info(with_query(url, &query))
    }

    /// Followers of a blog the caller owns.
    ///
    /// `params`: `limit` (1-20), `offset`
    pub fn blog_followers(&self, blog_hostname: &str, params: &Params) -> Result<BlogFollowers> {
        let url = self.blog_endpoint(blog_hostname, "followers")?;
        self.info(with_query(url, &merge_params(params, &[])))
    }

    /// Published posts of a blog.
    ///
    /// `params`: `type`, `id`, `tag`, `limit` (1-20), `offset`, `reblog_info`,
    /// `notes_info`, `filter` (text or raw)
    pub fn blog_posts(&self, blog_hostname: &str, params: &Params) -> Result<BlogPosts> {
        let url = self.blog_endpoint(blog_hostname, "posts")?;
        let query = merge_params(params, &[("api_key", self.api_key().to_string())]);
        self.info(with_query(url, &query))
    }

    /// Queued posts of a blog the caller owns.
    ///
    /// `params`: `offset`, `limit` (1-20), `filter`
    pub fn blog_queued_posts(&self, blog_hostname: &str, params: &Params) -> Result<PostList> {
        let url = self.blog_endpoint(blog_hostname, "posts/queue")?;
        self.info(with_query(url, &merge_params(params, &[])))
    }
}
