use std::time::Duration;

use log::error;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::blog::filter::{CATEGORY_ALL, filter_by_category, search_blogs};
use crate::blog::model::Blog;
use crate::blog::service::BlogService;
use crate::utils::debounce::Debouncer;

/// How long query input must settle before the search is applied
pub const SEARCH_SETTLE_DELAY: Duration = Duration::from_millis(300);

/// State owned by one listing view instance.
///
/// The view keeps its own copy of the fetched blogs and the current search
/// results; nothing is shared across views. Query text is applied through
/// the debouncer, category selection applies immediately.
pub struct BlogListView {
    service: BlogService,
    blogs: Vec<Blog>,
    search_results: Vec<Blog>,
    menu: String,
    input: String,
    is_loading: bool,
    debouncer: Debouncer,
    settled_queries: UnboundedReceiver<String>,
}

impl BlogListView {
    pub fn new(service: BlogService) -> Self {
        let (debouncer, settled_queries) = Debouncer::new(SEARCH_SETTLE_DELAY);
        BlogListView {
            service,
            blogs: Vec::new(),
            search_results: Vec::new(),
            menu: CATEGORY_ALL.to_string(),
            input: String::new(),
            is_loading: true,
            debouncer,
            settled_queries,
        }
    }

    /// Fetch the listing. A failed fetch degrades to an empty collection;
    /// the view stays interactive and renders its empty state.
    pub async fn load(&mut self) {
        self.is_loading = true;
        match self.service.fetch_blogs().await {
            Ok(blogs) => {
                self.search_results = blogs.clone();
                self.blogs = blogs;
            }
            Err(e) => {
                error!("Error fetching blogs: {}", e);
                self.blogs = Vec::new();
                self.search_results = Vec::new();
            }
        }
        self.is_loading = false;

        // A query already settled before the fetch landed still applies
        let input = self.input.clone();
        self.apply_search(&input);
    }

    /// Record a keystroke. The search itself runs only once the input has
    /// settled for [`SEARCH_SETTLE_DELAY`]; intermediate keystrokes restart
    /// the window without recomputing anything.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.debouncer.submit(text.to_string());
    }

    /// Await the next settled query and apply it.
    ///
    /// Intended for the host event loop. Returns the applied query, or
    /// `None` if the debounce channel has closed.
    pub async fn apply_next_settled(&mut self) -> Option<String> {
        let query = self.settled_queries.recv().await?;
        self.apply_search(&query);
        Some(query)
    }

    /// Apply all queries that have already settled, without blocking.
    pub fn apply_settled(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(query) = self.settled_queries.try_recv() {
            self.apply_search(&query);
            applied += 1;
        }
        applied
    }

    /// Run a settled query against the full blog set.
    pub fn apply_search(&mut self, query: &str) {
        self.search_results = search_blogs(&self.blogs, query);
    }

    /// Category selection applies immediately, without debounce.
    pub fn select_category(&mut self, category: &str) {
        self.menu = category.to_string();
    }

    /// The currently displayed subset: settled search results restricted to
    /// the selected category, in fetch order.
    pub fn visible(&self) -> Vec<Blog> {
        filter_by_category(&self.search_results, &self.menu)
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn category(&self) -> &str {
        &self.menu
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn blogs(&self) -> &[Blog] {
        &self.blogs
    }

    /// Message shown when the visible set is empty.
    pub fn empty_state_message(&self) -> String {
        if self.input.trim().is_empty() {
            "No articles available in this category.".to_string()
        } else {
            format!(
                "No results match \"{}\". Try adjusting your search.",
                self.input
            )
        }
    }

    /// Cancel any pending debounce task. Called on unmount so a stale
    /// search cannot fire afterwards.
    pub fn teardown(&mut self) {
        self.debouncer.cancel();
    }
}
