/**
 * Question Handler Types
 *
 * Request bodies, query parameters, and the pagination envelope for the
 * /questions endpoints, plus the page-math helpers the handlers share.
 */

use serde::{Deserialize, Serialize};

use crate::questions::db::{Question, QuestionStatus};

/// Default page size for the paginated listing
pub const DEFAULT_PAGE_LIMIT: i64 = 10;
/// Largest page size a client may request
pub const MAX_PAGE_LIMIT: i64 = 100;
/// Default result count for hot/related rankings
pub const DEFAULT_RANKING_LIMIT: i64 = 5;

/// Create question request
#[derive(Deserialize, Serialize, Debug)]
pub struct CreateQuestionRequest {
    pub title: String,
    pub description: String,
    /// Defaults to OPEN when omitted
    #[serde(default)]
    pub status: QuestionStatus,
}

/// Update question request
///
/// Full overwrite of the mutable fields.
#[derive(Deserialize, Serialize, Debug)]
pub struct UpdateQuestionRequest {
    pub title: String,
    pub description: String,
    pub status: QuestionStatus,
}

/// Query parameters for GET /questions/paginated
#[derive(Deserialize, Debug, Default)]
pub struct PageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PageParams {
    /// Normalize raw query input to a valid (page, limit) pair
    ///
    /// Missing or out-of-range values are clamped rather than rejected:
    /// page is at least 1, limit falls in [1, 100].
    pub fn normalize(&self) -> (i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let limit = self
            .limit
            .unwrap_or(DEFAULT_PAGE_LIMIT)
            .clamp(1, MAX_PAGE_LIMIT);
        (page, limit)
    }
}

/// Query parameters for GET /questions/search
#[derive(Deserialize, Debug)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Query parameters for the hot and related rankings
#[derive(Deserialize, Debug, Default)]
pub struct RankingParams {
    pub limit: Option<i64>,
}

impl RankingParams {
    pub fn normalize(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_RANKING_LIMIT).max(1)
    }
}

/// Paginated question listing envelope
#[derive(Serialize, Deserialize, Debug)]
pub struct PaginatedQuestions {
    pub questions: Vec<Question>,
    /// Full matching count, not the page size
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl PaginatedQuestions {
    pub fn new(questions: Vec<Question>, total: i64, page: i64, limit: i64) -> Self {
        Self {
            questions,
            total,
            page,
            limit,
            total_pages: total_pages(total, limit),
        }
    }
}

/// `ceil(total / limit)` without floating point
pub fn total_pages(total: i64, limit: i64) -> i64 {
    (total + limit - 1) / limit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(15, 10), 2);
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(21, 10), 3);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 1), 1);
    }

    #[test]
    fn test_page_params_defaults() {
        let params = PageParams::default();
        assert_eq!(params.normalize(), (1, DEFAULT_PAGE_LIMIT));
    }

    #[test]
    fn test_page_params_clamping() {
        let params = PageParams {
            page: Some(0),
            limit: Some(500),
        };
        assert_eq!(params.normalize(), (1, MAX_PAGE_LIMIT));

        let params = PageParams {
            page: Some(-3),
            limit: Some(0),
        };
        assert_eq!(params.normalize(), (1, 1));
    }

    #[test]
    fn test_page_params_in_range_untouched() {
        let params = PageParams {
            page: Some(2),
            limit: Some(25),
        };
        assert_eq!(params.normalize(), (2, 25));
    }

    #[test]
    fn test_ranking_params_floor() {
        assert_eq!(RankingParams { limit: Some(0) }.normalize(), 1);
        assert_eq!(RankingParams { limit: None }.normalize(), DEFAULT_RANKING_LIMIT);
        assert_eq!(RankingParams { limit: Some(8) }.normalize(), 8);
    }

    #[test]
    fn test_create_request_status_defaults_open() {
        let request: CreateQuestionRequest =
            serde_json::from_str(r#"{"title": "How?", "description": "desc"}"#).unwrap();
        assert_eq!(request.status, crate::questions::db::QuestionStatus::Open);
    }
}
