use crate::blog::model::Blog;
use crate::utils::html::strip_tags;

/// Category sentinel meaning "no category filter"
pub const CATEGORY_ALL: &str = "All";

/// Categories offered by the listing view, sentinel first
pub const BLOG_CATEGORIES: [&str; 7] = [
    CATEGORY_ALL,
    "ABM",
    "Advertising",
    "Content Creation",
    "Demand Generation",
    "Intent Data",
    "Sales",
];

/// Apply the free-text query to a blog set.
///
/// A trimmed-empty query matches everything. Otherwise a blog is kept when
/// the lowercase query appears in its lowercase title, category, or
/// tag-stripped description. Input order is preserved.
pub fn search_blogs(blogs: &[Blog], query: &str) -> Vec<Blog> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return blogs.to_vec();
    }
    blogs
        .iter()
        .filter(|blog| {
            blog.title.to_lowercase().contains(&needle)
                || blog.category.to_lowercase().contains(&needle)
                || strip_tags(&blog.description).to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Restrict a blog set to one category; [`CATEGORY_ALL`] keeps everything.
pub fn filter_by_category(blogs: &[Blog], category: &str) -> Vec<Blog> {
    if category == CATEGORY_ALL {
        return blogs.to_vec();
    }
    blogs
        .iter()
        .filter(|blog| blog.category == category)
        .cloned()
        .collect()
}

/// The visible subset for the listing view: category filter applied to the
/// search result, in stable fetch order.
pub fn visible_blogs(blogs: &[Blog], query: &str, category: &str) -> Vec<Blog> {
    filter_by_category(&search_blogs(blogs, query), category)
}
