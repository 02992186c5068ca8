use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl Pagination {
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1).saturating_mul(per_page);
        (page, per_page, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_clamps_page_and_size() {
        assert_eq!(Pagination::default().normalize(), (1, 20, 0));
        let pagination = Pagination {
            page: Some(0),
            per_page: Some(500),
        };
        assert_eq!(pagination.normalize(), (1, 100, 0));
        let pagination = Pagination {
            page: Some(3),
            per_page: Some(10),
        };
        assert_eq!(pagination.normalize(), (3, 10, 20));
        let pagination = Pagination {
            page: Some(i64::MAX),
            per_page: Some(100),
        };
        assert_eq!(pagination.normalize(), (i64::MAX, 100, i64::MAX));
    }
}
