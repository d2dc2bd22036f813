use serde::{Deserialize, Serialize};

use super::GalleryInfo;

/// 帖子列表中的一行
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    /// 页面显示的帖子编号（可能不是数字）
    pub number: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub reply_count: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    /// `title` 属性中的完整时间
    pub date: String,
    /// 列表中显示的简短时间
    pub timestamp: String,
    pub views: String,
    pub recommends: String,
}

impl Default for Post {
    fn default() -> Self {
        Self {
            number: None,
            title: None,
            url: None,
            reply_count: "0".to_string(),
            author: None,
            date: String::new(),
            timestamp: String::new(),
            views: "0".to_string(),
            recommends: "0".to_string(),
        }
    }
}

/// 作者信息，属性缺失时为空字符串
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Author {
    pub name: String,
    pub id: String,
    pub ip: String,
}

/// 帖子列表查询结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostsResult {
    pub gallery_info: GalleryInfo,
    pub posts: Vec<Post>,
    pub meta: PostsMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostsMeta {
    pub page: u32,
    pub list_num: u32,
    pub gallery_id: String,
    pub post_count: usize,
}

impl PostsResult {
    pub fn new(gallery_id: &str, page: u32, list_num: u32, gallery_info: GalleryInfo, posts: Vec<Post>) -> Self {
        let meta = PostsMeta {
            page,
            list_num,
            gallery_id: gallery_id.to_string(),
            post_count: posts.len(),
        };
        Self {
            gallery_info,
            posts,
            meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_defaults() {
        let post = Post::default();
        assert_eq!(post.reply_count, "0");
        assert_eq!(post.views, "0");
        assert_eq!(post.recommends, "0");
        assert!(post.date.is_empty());
        assert!(post.author.is_none());
    }

    #[test]
    fn test_post_without_author_omits_key() {
        let value = serde_json::to_value(Post::default()).unwrap();
        assert!(value.get("author").is_none());
        assert_eq!(value["reply_count"], "0");
        assert!(value["number"].is_null());
    }

    #[test]
    fn test_posts_result_counts_posts() {
        let posts = vec![Post::default(), Post::default()];
        let result = PostsResult::new("example", 2, 30, GalleryInfo::default(), posts);
        assert_eq!(result.meta.post_count, 2);
        assert_eq!(result.meta.page, 2);
        assert_eq!(result.meta.list_num, 30);
        assert_eq!(result.meta.gallery_id, "example");
    }
}
