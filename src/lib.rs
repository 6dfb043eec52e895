//! # tumblr - Tumblr v2 API client for Rust
//!
//! A blocking client for the Tumblr REST API. Requests are signed with
//! OAuth 1.0a (HMAC-SHA1) and responses are decoded from the API's
//! `{meta, response}` envelope into typed structures.
//!
//! ## Features
//!
//! - Blog endpoints: info, avatar, likes, followers, posts, queue
//! - Post creation, editing, reblogging and deletion
//! - User endpoints: info, dashboard, likes, following, follow/unfollow, like/unlike
//! - Tagged-post search
//! - Three-legged OAuth flow to obtain access tokens
//! - Lenient decoding: fields the API sometimes sends as `false` decode as absent
//!
//! ## Basic Usage
//!
//! ```no_run
//! use tumblr::{Params, Tumblr};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Tumblr::new("consumer_key", "consumer_secret", "token", "token_secret")?;
//!
//!     let info = client.blog_info("staff.tumblr.com")?;
//!     println!("{} has {} posts", info.blog.name, info.blog.post_count);
//!
//!     let mut params = Params::new();
//!     params.insert("limit".to_string(), "5".to_string());
//!     for post in client.tagged("gif", &params)? {
//!         println!("{} {}", post.id, post.post_url);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Every endpoint returns [`Result`]. A reply whose envelope status is not
//! 200/201 becomes [`TumblrError::Api`]; transport and decode failures are
//! reported as their own variants.
//!
//! ```no_run
//! use tumblr::{Tumblr, TumblrError};
//!
//! let client = Tumblr::new("ck", "cs", "tk", "ts")?;
//! match client.blog_info("no-such-blog.tumblr.com") {
//!     Err(e) if e.is_not_found() => println!("no such blog"),
//!     Err(e) => return Err(e),
//!     Ok(info) => println!("{}", info.blog.title),
//! }
//! # Ok::<(), TumblrError>(())
//! ```

pub mod authorize;
pub mod blog;
pub mod client;
pub mod credentials;
mod de;
pub mod error;
pub mod oauth;
pub mod post;
pub mod response;
pub mod rest;
pub mod tagged;
pub mod time;
pub mod user;

// Re-export main types for convenience
pub use authorize::Authorizer;
pub use blog::{
    Blog, BlogFollowers, BlogInfo, BlogPosts, Follower, Likes, PostList, DEFAULT_AVATAR_SIZE,
};
pub use client::Config;
pub use credentials::{Credentials, TokenPair};
pub use error::{Result, TumblrError};
pub use post::{DialogueLine, Photo, PhotoSize, Player, Post, PostRef, PostType, VideoPlayer};
pub use response::{Envelope, Meta, Params};
pub use rest::Tumblr;
pub use time::Timestamp;
pub use user::{FollowedBlog, User, UserBlog, UserFollowing, UserInfo};
