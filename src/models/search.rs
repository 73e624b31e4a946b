use crate::api::{RecipeSource, RecipeSummary};
use crate::error::Error;

/// A search query and its ordered result set
#[derive(Debug, Default)]
pub struct Search {
    pub query: String,
    results: Vec<RecipeSummary>,
}

impl Search {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            results: Vec::new(),
        }
    }

    /// Fetch results from the recipe source, replacing any previous ones.
    /// Network failures surface to the caller untouched; no retry.
    pub async fn get_results(&mut self, source: &dyn RecipeSource) -> Result<(), Error> {
        self.results = source.search(&self.query).await?;
        Ok(())
    }

    pub fn results(&self) -> &[RecipeSummary] {
        &self.results
    }

    /// One page of results, 1-based. An out-of-range page is empty.
    pub fn page(&self, page: usize, per_page: usize) -> &[RecipeSummary] {
        if page == 0 || per_page == 0 {
            return &[];
        }
        let start = (page - 1) * per_page;
        if start >= self.results.len() {
            return &[];
        }
        let end = (start + per_page).min(self.results.len());
        &self.results[start..end]
    }

    pub fn total_pages(&self, per_page: usize) -> usize {
        if per_page == 0 {
            return 0;
        }
        self.results.len().div_ceil(per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summaries(n: usize) -> Vec<RecipeSummary> {
        (0..n)
            .map(|i| RecipeSummary {
                id: format!("r{i}"),
                title: format!("Recipe {i}"),
                author: "Test Kitchen".to_string(),
                image_url: String::new(),
            })
            .collect()
    }

    fn search_with(n: usize) -> Search {
        let mut search = Search::new("pizza");
        search.results = summaries(n);
        search
    }

    #[test]
    fn test_page_slicing() {
        let search = search_with(25);
        assert_eq!(search.page(1, 10).len(), 10);
        assert_eq!(search.page(3, 10).len(), 5);
        assert_eq!(search.page(1, 10)[0].id, "r0");
        assert_eq!(search.page(2, 10)[0].id, "r10");
    }

    #[test]
    fn test_page_out_of_range_is_empty() {
        let search = search_with(5);
        assert!(search.page(2, 10).is_empty());
        assert!(search.page(0, 10).is_empty());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(search_with(25).total_pages(10), 3);
        assert_eq!(search_with(30).total_pages(10), 3);
        assert_eq!(search_with(0).total_pages(10), 0);
    }
}
