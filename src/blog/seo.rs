use serde_json::{Value, json};

use crate::blog::model::Blog;
use crate::comment::model::Comment;
use crate::utils::html::{excerpt, strip_tags};

/// Build the JSON-LD `BlogPosting` document for a blog page.
pub fn structured_data(blog: &Blog, comments: &[Comment], base_url: &str) -> Value {
    let base = base_url.trim_end_matches('/');
    let blog_url = format!("{}/blogs/{}", base, blog.slug);
    let plain = strip_tags(&blog.description);

    json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": blog.title,
        "description": excerpt(&blog.description, 160),
        "image": blog.image,
        "author": {
            "@type": "Person",
            "name": blog.author.as_deref().unwrap_or("Admin"),
        },
        "publisher": {
            "@type": "Organization",
            "name": blog.company,
            "logo": {
                "@type": "ImageObject",
                "url": format!("{}/logo.png", base),
            },
        },
        "datePublished": blog.created_at,
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": blog_url,
        },
        "url": blog_url,
        "articleSection": blog.category,
        "keywords": [blog.category.as_str(), "blog", "article"],
        "wordCount": plain.split_whitespace().count(),
        "commentCount": comments.len(),
        "comment": comments
            .iter()
            .map(|comment| json!({
                "@type": "Comment",
                "author": { "@type": "Person", "name": comment.name },
                "text": comment.content,
                "dateCreated": comment.created_at,
            }))
            .collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog() -> Blog {
        Blog {
            id: "64b0f1".to_string(),
            title: "Intro to ABM".to_string(),
            description: "<p>Account-based marketing works</p>".to_string(),
            category: "ABM".to_string(),
            image: Some("https://cdn.example.com/abm.jpg".to_string()),
            author: None,
            created_at: None,
            is_published: Some(true),
            slug: "intro-abm".to_string(),
            company: "acme".to_string(),
        }
    }

    fn comment() -> Comment {
        Comment {
            id: "c1".to_string(),
            name: "Sam".to_string(),
            content: "Great read".to_string(),
            created_at: None,
        }
    }

    #[test]
    fn builds_blog_posting_document() {
        let doc = structured_data(&blog(), &[comment()], "https://blog.example.com/");

        assert_eq!(doc["@type"], "BlogPosting");
        assert_eq!(doc["headline"], "Intro to ABM");
        assert_eq!(doc["url"], "https://blog.example.com/blogs/intro-abm");
        assert_eq!(doc["description"], "Account-based marketing works");
        assert_eq!(doc["wordCount"], 4);
        assert_eq!(doc["commentCount"], 1);
        assert_eq!(doc["comment"][0]["author"]["name"], "Sam");
    }

    #[test]
    fn missing_author_falls_back_to_admin() {
        let doc = structured_data(&blog(), &[], "https://blog.example.com");
        assert_eq!(doc["author"]["name"], "Admin");
    }
}
