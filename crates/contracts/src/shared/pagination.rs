use serde::{Deserialize, Serialize};

/// Paginated envelope returned by list endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub count: usize,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn total_pages(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        self.count.div_ceil(page_size)
    }
}

/// Some list endpoints are not paginated and answer with a bare array
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Paged(Page<T>),
    Plain(Vec<T>),
}

impl<T> ListResponse<T> {
    pub fn into_page(self) -> Page<T> {
        match self {
            Self::Paged(page) => page,
            Self::Plain(results) => Page {
                count: results.len(),
                next: None,
                previous: None,
                results,
            },
        }
    }

    /// Page `page` (1-based) of `page_size` rows. An envelope is already one
    /// page; a bare array holds the whole collection and is sliced here.
    pub fn into_page_window(self, page: usize, page_size: usize) -> Page<T> {
        match self {
            Self::Paged(page) => page,
            Self::Plain(all) => {
                let count = all.len();
                let start = page.saturating_sub(1).saturating_mul(page_size);
                Page {
                    count,
                    next: None,
                    previous: None,
                    results: all.into_iter().skip(start).take(page_size).collect(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_envelope_and_bare_array() {
        let paged: ListResponse<Value> =
            serde_json::from_str(r#"{"count": 30, "next": "?page=2", "results": [{"id": 1}]}"#)
                .unwrap();
        let page = paged.into_page();
        assert_eq!(page.count, 30);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.total_pages(12), 3);

        let plain: ListResponse<Value> = serde_json::from_str(r#"[{"id": 1}, {"id": 2}]"#).unwrap();
        let page = plain.into_page();
        assert_eq!(page.count, 2);
        assert_eq!(page.next, None);
    }

    #[test]
    fn test_bare_array_is_sliced_to_the_page() {
        let all: Vec<u32> = (1..=30).collect();

        let second = ListResponse::Plain(all.clone()).into_page_window(2, 12);
        assert_eq!(second.count, 30);
        assert_eq!(second.results, (13..=24).collect::<Vec<_>>());
        assert_eq!(second.total_pages(12), 3);

        let last = ListResponse::Plain(all.clone()).into_page_window(3, 12);
        assert_eq!(last.results, (25..=30).collect::<Vec<_>>());

        let past_end = ListResponse::Plain(all).into_page_window(4, 12);
        assert!(past_end.results.is_empty());
        assert_eq!(past_end.count, 30);
    }

    #[test]
    fn test_envelope_page_is_kept_as_sent() {
        let paged: ListResponse<u32> =
            serde_json::from_str(r#"{"count": 30, "results": [13, 14]}"#).unwrap();
        let page = paged.into_page_window(2, 12);
        assert_eq!(page.count, 30);
        assert_eq!(page.results, vec![13, 14]);
    }
}
