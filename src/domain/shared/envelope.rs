use serde::{Deserialize, Serialize};

/// `{success, message, data, total}` list wrapper used by the backend
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Vec<T>,
    pub total: i64,
}

/// Acknowledgement returned by state-changing endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// A page of records together with the backend's total count
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
}

impl<T> From<ListResponse<T>> for Page<T> {
    fn from(response: ListResponse<T>) -> Self {
        Self {
            items: response.data,
            total: response.total,
        }
    }
}

/// skip/limit pagination, backend defaults 0/100
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub skip: u32,
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { skip: 0, limit: 100 }
    }
}
