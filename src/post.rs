//! Posts: the shared post shape and the write endpoints of a blog.

use crate::de;
use crate::error::Result;
use crate::response::{Envelope, Meta, Params};
use crate::rest::{merge_params, Tumblr};
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// The `type` discriminant of a post
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Text,
    Photo,
    Quote,
    Link,
    Chat,
    Audio,
    Video,
    Answer,
    #[default]
    #[serde(other)]
    Unknown,
}

/// A post of any type.
///
/// Fields that belong to another post type are simply absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Post {
    /// The short name used to uniquely identify a blog
    #[serde(deserialize_with = "de::text")]
    pub blog_name: String,
    #[serde(deserialize_with = "de::number")]
    pub id: u64,
    #[serde(deserialize_with = "de::text")]
    pub post_url: String,
    #[serde(rename = "type", deserialize_with = "de::or_default")]
    pub kind: PostType,
    #[serde(deserialize_with = "de::opt_timestamp")]
    pub timestamp: Option<Timestamp>,
    /// The GMT date and time of the post, as a string
    #[serde(deserialize_with = "de::text")]
    pub date: String,
    /// html or markdown
    #[serde(deserialize_with = "de::text")]
    pub format: String,
    /// The key used to reblog or like this post
    #[serde(deserialize_with = "de::text")]
    pub reblog_key: String,
    #[serde(deserialize_with = "de::list")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "de::flag")]
    pub bookmarklet: bool,
    #[serde(deserialize_with = "de::flag")]
    pub mobile: bool,
    #[serde(deserialize_with = "de::opt_string")]
    pub source_url: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub source_title: Option<String>,
    #[serde(deserialize_with = "de::flag")]
    pub liked: bool,
    #[serde(deserialize_with = "de::text")]
    pub state: String,
    #[serde(deserialize_with = "de::opt_string")]
    pub slug: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub short_url: Option<String>,
    #[serde(deserialize_with = "de::opt_u64")]
    pub note_count: Option<u64>,
    /// Set on posts returned by the likes endpoints; use for `before`/`after` paging
    #[serde(deserialize_with = "de::opt_timestamp")]
    pub liked_timestamp: Option<Timestamp>,
    /// Set on posts of featured tags; use for `before` paging of tagged results
    #[serde(deserialize_with = "de::opt_timestamp")]
    pub featured_timestamp: Option<Timestamp>,

    // Text posts
    #[serde(deserialize_with = "de::opt_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub body: Option<String>,

    // Photo posts (caption is shared with audio and video)
    #[serde(deserialize_with = "de::opt_string")]
    pub caption: Option<String>,
    #[serde(deserialize_with = "de::list")]
    pub photos: Vec<Photo>,

    // Quote posts
    #[serde(deserialize_with = "de::opt_string")]
    pub text: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub source: Option<String>,

    // Link posts
    #[serde(deserialize_with = "de::opt_string")]
    pub url: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub author: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub excerpt: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub publisher: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub description: Option<String>,

    // Chat posts
    #[serde(deserialize_with = "de::list")]
    pub dialogue: Vec<DialogueLine>,

    // Audio and video posts
    pub player: Option<Player>,
    #[serde(rename = "plays", deserialize_with = "de::opt_u64")]
    pub play_count: Option<u64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub album_art: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub artist: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub album: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub track_name: Option<String>,
    #[serde(deserialize_with = "de::opt_u64")]
    pub track_number: Option<u64>,
    #[serde(deserialize_with = "de::opt_u64")]
    pub year: Option<u64>,

    // Answer posts
    #[serde(deserialize_with = "de::opt_string")]
    pub asking_name: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub asking_url: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub question: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub answer: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Photo {
    #[serde(deserialize_with = "de::opt_string")]
    pub caption: Option<String>,
    #[serde(deserialize_with = "de::or_default")]
    pub original_size: PhotoSize,
    #[serde(deserialize_with = "de::list")]
    pub alt_sizes: Vec<PhotoSize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PhotoSize {
    #[serde(deserialize_with = "de::number")]
    pub width: u64,
    #[serde(deserialize_with = "de::number")]
    pub height: u64,
    #[serde(deserialize_with = "de::text")]
    pub url: String,
}

/// One line of a chat post
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DialogueLine {
    #[serde(deserialize_with = "de::text")]
    pub name: String,
    #[serde(deserialize_with = "de::text")]
    pub label: String,
    #[serde(deserialize_with = "de::text")]
    pub phrase: String,
}

/// The `player` field: an embed string on audio posts,
/// a list of sized embeds on video posts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Player {
    Embed(String),
    Video(Vec<VideoPlayer>),
    /// `false` or any other shape
    Other(serde_json::Value),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VideoPlayer {
    #[serde(deserialize_with = "de::number")]
    pub width: u64,
    #[serde(deserialize_with = "de::text")]
    pub embed_code: String,
}

/// Result of a successful write on a post.
///
/// The write has already succeeded when this is returned; `id` is only
/// `None` when the server acknowledged it without echoing a post id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRef {
    /// Id of the post that was created or touched
    pub id: Option<u64>,
    pub meta: Meta,
}

impl PostRef {
    fn from_envelope(envelope: &Envelope) -> Self {
        PostRef {
            id: envelope
                .get_id("id_string")
                .or_else(|| envelope.get_id("id")),
            meta: envelope.meta.clone(),
        }
    }

    /// Use `id` when the server did not echo one
    fn or_id(mut self, id: u64) -> Self {
        self.id.get_or_insert(id);
        self
    }
}

impl Tumblr {
    /// Create a post on a blog.
    ///
    /// # Arguments
    /// * `blog_hostname` - standard or custom blog hostname (e.g. example.tumblr.com)
    /// * `params` - post fields: `type` (text, photo, quote, link, chat, audio,
    ///   video), `state`, `tags`, `tweet`, `date`, `format`, `slug`, and the
    ///   type-specific fields (`title`/`body`, `caption`/`link`/`source`,
    ///   `quote`, `url`/`description`, `conversation`, `external_url`, `embed`)
    pub fn post(&self, blog_hostname: &str, params: &Params) -> Result<PostRef> {
        let url = self.blog_endpoint(blog_hostname, "post")?;
        let envelope = self.action(url, &merge_params(params, &[]))?;
        Ok(PostRef::from_envelope(&envelope))
    }

    /// Edit an existing post. `id` is always sent and overrides any `id` in `params`.
    pub fn post_edit(&self, blog_hostname: &str, id: u64, params: &Params) -> Result<PostRef> {
        let url = self.blog_endpoint(blog_hostname, "post/edit")?;
        let form = merge_params(params, &[("id", id.to_string())]);
        let envelope = self.action(url, &form)?;
        Ok(PostRef::from_envelope(&envelope).or_id(id))
    }

    /// Reblog a post onto a blog. `params` accepts the post fields plus `comment`.
    pub fn post_reblog(
        &self,
        blog_hostname: &str,
        id: u64,
        reblog_key: &str,
        params: &Params,
    ) -> Result<PostRef> {
        let url = self.blog_endpoint(blog_hostname, "post/reblog")?;
        let form = merge_params(
            params,
            &[("id", id.to_string()), ("reblog_key", reblog_key.to_string())],
        );
        let envelope = self.action(url, &form)?;
        Ok(PostRef::from_envelope(&envelope))
    }

    /// Delete a post
    pub fn post_delete(&self, blog_hostname: &str, id: u64) -> Result<PostRef> {
        let url = self.blog_endpoint(blog_hostname, "post/delete")?;
        let form = merge_params(&Params::new(), &[("id", id.to_string())]);
        let envelope = self.action(url, &form)?;
        Ok(PostRef::from_envelope(&envelope).or_id(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_post() {
        let json = r#"{
            "blog_name": "citriccomics",
            "id": 3507845453,
            "post_url": "https://citriccomics.tumblr.com/post/3507845453",
            "type": "text",
            "timestamp": 1298665620,
            "date": "2011-02-25 20:27:00 GMT",
            "format": "html",
            "reblog_key": "b0baQtsl",
            "tags": ["tumblrize", "milky dog"],
            "note_count": 14,
            "title": "New Comic Update",
            "body": "<p>Hello</p>",
            "source_url": false,
            "source_title": false
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.kind, PostType::Text);
        assert_eq!(post.id, 3507845453);
        assert_eq!(post.timestamp.unwrap().unix(), 1298665620);
        assert_eq!(post.tags.len(), 2);
        assert_eq!(post.title.as_deref(), Some("New Comic Update"));
        assert_eq!(post.source_url, None);
        assert_eq!(post.source_title, None);
        assert_eq!(post.note_count, Some(14));
    }

    #[test]
    fn test_photo_post() {
        let json = r#"{
            "blog_name": "derekg",
            "id": 7431599279,
            "type": "photo",
            "caption": "<p>Arcade Fire</p>",
            "photos": [{
                "caption": "",
                "alt_sizes": [
                    {"width": 1280, "height": 722, "url": "https://example.com/1280.jpg"},
                    {"width": 500, "height": 282, "url": "https://example.com/500.jpg"}
                ],
                "original_size": {"width": 1280, "height": 722, "url": "https://example.com/1280.jpg"}
            }]
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.kind, PostType::Photo);
        assert_eq!(post.photos.len(), 1);
        assert_eq!(post.photos[0].caption, None);
        assert_eq!(post.photos[0].original_size.width, 1280);
        assert_eq!(post.photos[0].alt_sizes[1].url, "https://example.com/500.jpg");
    }

    #[test]
    fn test_audio_and_video_players() {
        let audio: Post = serde_json::from_str(
            r#"{"type": "audio", "player": "<embed src=\"a.swf\">", "plays": 4, "artist": "Band", "year": false}"#,
        )
        .unwrap();
        assert_eq!(audio.kind, PostType::Audio);
        assert_eq!(audio.player, Some(Player::Embed("<embed src=\"a.swf\">".to_string())));
        assert_eq!(audio.play_count, Some(4));
        assert_eq!(audio.year, None);

        let video: Post = serde_json::from_str(
            r#"{"type": "video", "player": [{"width": 250, "embed_code": "<iframe></iframe>"}]}"#,
        )
        .unwrap();
        match video.player {
            Some(Player::Video(players)) => {
                assert_eq!(players[0].width, 250);
                assert_eq!(players[0].embed_code, "<iframe></iframe>");
            }
            other => panic!("expected video players, got {:?}", other),
        }
    }

    #[test]
    fn test_chat_and_answer_posts() {
        let chat: Post = serde_json::from_str(
            r#"{"type": "chat", "dialogue": [{"name": "Tumblr", "label": "Tumblr:", "phrase": "Hi"}]}"#,
        )
        .unwrap();
        assert_eq!(chat.dialogue[0].label, "Tumblr:");

        let answer: Post = serde_json::from_str(
            r#"{"type": "answer", "asking_name": "anon", "question": "Why?", "answer": "Because."}"#,
        )
        .unwrap();
        assert_eq!(answer.kind, PostType::Answer);
        assert_eq!(answer.question.as_deref(), Some("Why?"));
    }

    #[test]
    fn test_unknown_type() {
        let post: Post = serde_json::from_str(r#"{"type": "blocks", "id": "17"}"#).unwrap();
        assert_eq!(post.kind, PostType::Unknown);
        assert_eq!(post.id, 17);
    }

    #[test]
    fn test_odd_flags_and_timestamps() {
        let json = r#"{
            "type": "photo",
            "id": 1,
            "timestamp": "",
            "liked_timestamp": false,
            "featured_timestamp": null,
            "liked": null,
            "bookmarklet": false,
            "mobile": "",
            "photos": [{"original_size": false, "alt_sizes": false}]
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.timestamp, None);
        assert_eq!(post.liked_timestamp, None);
        assert_eq!(post.featured_timestamp, None);
        assert!(!post.liked);
        assert!(!post.bookmarklet);
        assert!(!post.mobile);
        assert_eq!(post.photos[0].original_size, PhotoSize::default());
        assert!(post.photos[0].alt_sizes.is_empty());
    }

    #[test]
    fn test_type_of_wrong_shape_is_unknown() {
        let post: Post = serde_json::from_str(r#"{"type": false, "id": 5}"#).unwrap();
        assert_eq!(post.kind, PostType::Unknown);
        assert_eq!(post.id, 5);
    }

    #[test]
    fn test_post_ref_from_envelope() {
        let envelope: Envelope = serde_json::from_str(
            r#"{"meta": {"status": 201, "msg": "Created"}, "response": {"id": "1234"}}"#,
        )
        .unwrap();
        let post = PostRef::from_envelope(&envelope);
        assert_eq!(post.id, Some(1234));
        assert_eq!(post.meta.status, 201);
    }

    #[test]
    fn test_post_ref_without_id() {
        let envelope: Envelope = serde_json::from_str(
            r#"{"meta": {"status": 201, "msg": "Created"}, "response": []}"#,
        )
        .unwrap();
        let post = PostRef::from_envelope(&envelope);
        assert_eq!(post.id, None);
        assert_eq!(post.meta.msg, "Created");
        assert_eq!(post.or_id(99).id, Some(99));
    }
}
