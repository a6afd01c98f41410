use reqwest::Url;

/// Social platforms the share buttons target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    Facebook,
    Twitter,
    LinkedIn,
    GooglePlus,
}

/// Build the share-dialog URL for a platform.
pub fn share_url(platform: SharePlatform, base_url: &str, slug: &str, title: &str) -> Option<Url> {
    let blog_url = format!("{}/blogs/{}", base_url.trim_end_matches('/'), slug);
    let url = match platform {
        SharePlatform::Facebook => Url::parse_with_params(
            "https://www.facebook.com/sharer/sharer.php",
            &[("u", blog_url.as_str()), ("quote", title)],
        ),
        SharePlatform::Twitter => Url::parse_with_params(
            "https://twitter.com/intent/tweet",
            &[
                ("text", title),
                ("url", blog_url.as_str()),
                ("hashtags", "blog,article"),
            ],
        ),
        SharePlatform::LinkedIn => Url::parse_with_params(
            "https://www.linkedin.com/sharing/share-offsite/",
            &[("url", blog_url.as_str())],
        ),
        SharePlatform::GooglePlus => Url::parse_with_params(
            "https://plus.google.com/share",
            &[("url", blog_url.as_str())],
        ),
    };
    url.ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twitter_url_carries_title_and_link() {
        let url = share_url(
            SharePlatform::Twitter,
            "https://blog.example.com",
            "intro-abm",
            "Intro to ABM",
        )
        .unwrap();

        assert_eq!(url.host_str(), Some("twitter.com"));
        let query = url.query().unwrap();
        assert!(query.contains("text=Intro+to+ABM") || query.contains("text=Intro%20to%20ABM"));
        assert!(query.contains("intro-abm"));
    }

    #[test]
    fn linkedin_url_points_at_the_blog_page() {
        let url = share_url(
            SharePlatform::LinkedIn,
            "https://blog.example.com/",
            "intro-abm",
            "Intro to ABM",
        )
        .unwrap();

        assert_eq!(url.host_str(), Some("www.linkedin.com"));
        assert!(url.query().unwrap().contains("blogs%2Fintro-abm"));
    }
}
