//! 列表页 HTML 提取
//!
//! 每个字段独立查找，选择器匹配不到时退回默认值，不会让整页提取失败。

use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

use crate::models::{Author, GalleryDetails, GalleryInfo, Post, PostsResult, RelatedGallery};

/// 置顶公告行的编号
pub const NOTICE_MARKER: &str = "공지";
/// 问卷行的编号
pub const SURVEY_MARKER: &str = "설문";

lazy_static! {
    // 画廊信息
    static ref GALLERY_TITLE: Selector = selector(".gallname");
    static ref GALLERY_MANAGERS: Selector = selector(".gall-info .manager-info");
    static ref GALLERY_CREATION_DATE: Selector = selector(".gall-info .creation-date");
    static ref GALLERY_DESCRIPTION: Selector = selector(".gallery_info .txt");
    static ref RELATED_GALLERIES: Selector = selector(".related_link a");

    // 帖子行
    static ref POST_ROW: Selector = selector(".gall_list .us-post");
    static ref POST_NUMBER: Selector = selector(".gall_num");
    static ref POST_TITLE: Selector = selector(".gall_tit a:first-child");
    static ref POST_REPLY_COUNT: Selector = selector(".gall_tit .reply_num");
    static ref POST_WRITER: Selector = selector(".gall_writer");
    static ref POST_DATE: Selector = selector(".gall_date");
    static ref POST_VIEWS: Selector = selector(".gall_count");
    static ref POST_RECOMMENDS: Selector = selector(".gall_recommend");
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {}: {:?}", css, e))
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn select_first<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

fn select_text(scope: ElementRef, selector: &Selector) -> Option<String> {
    select_first(scope, selector).map(element_text)
}

fn attr_or_empty(element: ElementRef, name: &str) -> String {
    element.value().attr(name).unwrap_or_default().to_string()
}

/// 提取画廊信息
///
/// `detailed` 为 true 时额外提取简介和相关画廊。
pub fn extract_gallery_info(doc: &Html, detailed: bool) -> GalleryInfo {
    let root = doc.root_element();

    let details = detailed.then(|| GalleryDetails {
        description: select_text(root, &GALLERY_DESCRIPTION),
        related_galleries: root
            .select(&RELATED_GALLERIES)
            .map(|link| RelatedGallery {
                name: element_text(link),
                url: link.value().attr("href").map(str::to_string),
            })
            .collect(),
    });

    GalleryInfo {
        title: select_text(root, &GALLERY_TITLE),
        managers: root.select(&GALLERY_MANAGERS).map(element_text).collect(),
        creation_date: select_text(root, &GALLERY_CREATION_DATE),
        details,
    }
}

/// 是否为公告/问卷等非普通帖子
pub fn is_pinned_marker(number: &str) -> bool {
    number == NOTICE_MARKER || number == SURVEY_MARKER
}

/// 按文档顺序提取帖子，跳过公告和问卷行
pub fn extract_posts(doc: &Html) -> Vec<Post> {
    doc.select(&POST_ROW).filter_map(extract_post).collect()
}

fn extract_post(row: ElementRef) -> Option<Post> {
    let number = select_text(row, &POST_NUMBER);
    if number.as_deref().is_some_and(is_pinned_marker) {
        return None;
    }

    let title_element = select_first(row, &POST_TITLE);

    let reply_count = select_text(row, &POST_REPLY_COUNT)
        .map(|text| text.trim_matches(|c| c == '[' || c == ']').to_string())
        .unwrap_or_else(|| "0".to_string());

    let author = select_first(row, &POST_WRITER).map(|writer| Author {
        name: attr_or_empty(writer, "data-nick"),
        id: attr_or_empty(writer, "data-uid"),
        ip: attr_or_empty(writer, "data-ip"),
    });

    let date_element = select_first(row, &POST_DATE);

    Some(Post {
        number,
        title: title_element.map(element_text),
        url: title_element
            .and_then(|a| a.value().attr("href"))
            .map(str::to_string),
        reply_count,
        author,
        date: date_element.map(|e| attr_or_empty(e, "title")).unwrap_or_default(),
        timestamp: date_element.map(element_text).unwrap_or_default(),
        views: select_text(row, &POST_VIEWS).unwrap_or_else(|| "0".to_string()),
        recommends: select_text(row, &POST_RECOMMENDS).unwrap_or_else(|| "0".to_string()),
    })
}

/// 解析列表页并组装帖子列表结果
pub fn build_posts_result(html: &str, gallery_id: &str, page: u32, list_num: u32) -> PostsResult {
    let doc = Html::parse_document(html);
    let gallery_info = extract_gallery_info(&doc, false);
    let posts = extract_posts(&doc);
    PostsResult::new(gallery_id, page, list_num, gallery_info, posts)
}

/// 解析列表页并提取详细画廊信息
pub fn build_gallery_info(html: &str) -> GalleryInfo {
    let doc = Html::parse_document(html);
    extract_gallery_info(&doc, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING_HTML: &str = r#"
<html><body>
<div class="page_head"><h2><a href="/mgallery/board/lists/?id=example" class="gallname"> Example </a></h2></div>
<div class="gall-info">
  <span class="manager-info">alice</span>
  <span class="manager-info">bob</span>
  <span class="creation-date">2021.03.04</span>
</div>
<div class="gallery_info"><p class="txt">  An example gallery  </p></div>
<div class="related_link">
  <a href="/mgallery/board/lists/?id=other">Other</a>
  <a>Unlinked</a>
</div>
<table class="gall_list"><tbody>
  <tr class="ub-content us-post">
    <td class="gall_num">공지</td>
    <td class="gall_tit"><a href="/notice">Rules</a></td>
  </tr>
  <tr class="ub-content us-post">
    <td class="gall_num">설문</td>
    <td class="gall_tit"><a href="/survey">Poll</a></td>
  </tr>
  <tr class="ub-content us-post">
    <td class="gall_num">123</td>
    <td class="gall_tit"><a href="/mgallery/board/view/?id=example&amp;no=123">First post</a> <a class="reply_numbox"><span class="reply_num">[5]</span></a></td>
    <td class="gall_writer" data-nick="nick" data-uid="uid1" data-ip=""><span class="nickname">nick</span></td>
    <td class="gall_date" title="2024-05-01 12:34:56">12:34</td>
    <td class="gall_count">100</td>
    <td class="gall_recommend">3</td>
  </tr>
  <tr class="ub-content us-post">
    <td class="gall_num">122</td>
    <td class="gall_writer" data-nick="anon" data-ip="1.2"></td>
  </tr>
</tbody></table>
</body></html>
"#;

    #[test]
    fn test_extract_basic_gallery_info() {
        let doc = Html::parse_document(LISTING_HTML);
        let info = extract_gallery_info(&doc, false);

        assert_eq!(info.title.as_deref(), Some("Example"));
        assert_eq!(info.managers, vec!["alice".to_string(), "bob".to_string()]);
        assert_eq!(info.creation_date.as_deref(), Some("2021.03.04"));
        assert!(info.details.is_none());
    }

    #[test]
    fn test_extract_detailed_gallery_info() {
        let info = build_gallery_info(LISTING_HTML);
        let details = info.details.expect("detailed info");

        assert_eq!(details.description.as_deref(), Some("An example gallery"));
        assert_eq!(
            details.related_galleries,
            vec![
                RelatedGallery {
                    name: "Other".to_string(),
                    url: Some("/mgallery/board/lists/?id=other".to_string()),
                },
                RelatedGallery {
                    name: "Unlinked".to_string(),
                    url: None,
                },
            ]
        );
    }

    #[test]
    fn test_gallery_info_defaults_on_unknown_page() {
        let doc = Html::parse_document("<html><body><p>maintenance</p></body></html>");
        let info = extract_gallery_info(&doc, true);

        assert!(info.title.is_none());
        assert!(info.managers.is_empty());
        assert!(info.creation_date.is_none());
        let details = info.details.unwrap();
        assert!(details.description.is_none());
        assert!(details.related_galleries.is_empty());
    }

    #[test]
    fn test_extract_posts_skips_notice_and_survey() {
        let doc = Html::parse_document(LISTING_HTML);
        let posts = extract_posts(&doc);

        assert_eq!(posts.len(), 2);
        assert!(posts
            .iter()
            .all(|p| !p.number.as_deref().is_some_and(is_pinned_marker)));
    }

    #[test]
    fn test_extract_full_post_row() {
        let doc = Html::parse_document(LISTING_HTML);
        let post = &extract_posts(&doc)[0];

        assert_eq!(post.number.as_deref(), Some("123"));
        assert_eq!(post.title.as_deref(), Some("First post"));
        assert_eq!(post.url.as_deref(), Some("/mgallery/board/view/?id=example&no=123"));
        assert_eq!(post.reply_count, "5");
        assert_eq!(
            post.author,
            Some(Author {
                name: "nick".to_string(),
                id: "uid1".to_string(),
                ip: String::new(),
            })
        );
        assert_eq!(post.date, "2024-05-01 12:34:56");
        assert_eq!(post.timestamp, "12:34");
        assert_eq!(post.views, "100");
        assert_eq!(post.recommends, "3");
    }

    #[test]
    fn test_sparse_row_falls_back_to_defaults() {
        let doc = Html::parse_document(LISTING_HTML);
        let post = &extract_posts(&doc)[1];

        assert_eq!(post.number.as_deref(), Some("122"));
        assert!(post.title.is_none());
        assert!(post.url.is_none());
        assert_eq!(post.reply_count, "0");
        // 缺失的属性为空字符串
        assert_eq!(
            post.author,
            Some(Author {
                name: "anon".to_string(),
                id: String::new(),
                ip: "1.2".to_string(),
            })
        );
        assert_eq!(post.date, "");
        assert_eq!(post.timestamp, "");
        assert_eq!(post.views, "0");
        assert_eq!(post.recommends, "0");
    }

    #[test]
    fn test_row_without_writer_has_no_author() {
        let html = r#"<table class="gall_list"><tr class="us-post">
            <td class="gall_num">7</td>
            <td class="gall_tit"><a href="/view/7">Seven</a></td>
        </tr></table>"#;
        let posts = extract_posts(&Html::parse_document(html));

        assert_eq!(posts.len(), 1);
        assert_eq!(
            posts[0],
            Post {
                number: Some("7".to_string()),
                title: Some("Seven".to_string()),
                url: Some("/view/7".to_string()),
                ..Post::default()
            }
        );
    }

    #[test]
    fn test_row_without_number_is_kept() {
        let html = r#"<table class="gall_list"><tr class="us-post"><td class="gall_count">9</td></tr></table>"#;
        let posts = extract_posts(&Html::parse_document(html));

        assert_eq!(posts.len(), 1);
        assert!(posts[0].number.is_none());
        assert_eq!(posts[0].views, "9");
    }

    #[test]
    fn test_rows_outside_listing_are_ignored() {
        let html = r#"<table class="other"><tr class="us-post"><td class="gall_num">1</td></tr></table>"#;
        assert!(extract_posts(&Html::parse_document(html)).is_empty());
    }

    #[test]
    fn test_build_posts_result_meta() {
        let result = build_posts_result(LISTING_HTML, "example", 1, 50);

        assert_eq!(result.gallery_info.title.as_deref(), Some("Example"));
        assert!(result.gallery_info.details.is_none());
        assert_eq!(result.posts.len(), 2);
        assert_eq!(result.meta.post_count, 2);
        assert_eq!(result.meta.gallery_id, "example");
        assert_eq!(result.meta.page, 1);
        assert_eq!(result.meta.list_num, 50);
    }
}
