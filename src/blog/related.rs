use crate::blog::model::Blog;

/// Upper bound on "continue reading" suggestions
pub const MAX_RELATED: usize = 3;

/// Select up to [`MAX_RELATED`] other blogs sharing the active blog's
/// category.
///
/// Candidates must belong to the active blog's company and must not be
/// explicitly unpublished; the active blog itself is excluded by slug. The
/// first matches in fetch order win, there is no ranking.
pub fn select_related(active: &Blog, all: &[Blog]) -> Vec<Blog> {
    all.iter()
        .filter(|candidate| {
            candidate.category == active.category
                && candidate.slug != active.slug
                && candidate.is_published != Some(false)
                && candidate.company == active.company
        })
        .take(MAX_RELATED)
        .cloned()
        .collect()
}
