use crate::error::Result;
use crate::post::Post;
use crate::response::Params;
use crate::rest::{merge_params, with_query, Tumblr};

impl Tumblr {
    /// Posts tagged with `tag`, across all blogs.
    ///
    /// `params`: `before` (timestamp; for featured tags page with the posts'
    /// `featured_timestamp`), `limit` (1-20), `filter` (text or raw)
    pub fn tagged(&self, tag: &str, params: &Params) -> Result<Vec<Post>> {
        let url = self.endpoint(&["tagged"])?;
        let query = merge_params(
            params,
            &[("tag", tag.to_string()), ("api_key", self.api_key().to_string())],
        );
        self.info(with_query(url, &query))
    }
}
