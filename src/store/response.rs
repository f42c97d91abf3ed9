use crate::api::ApiError;

/// Loading state of a piece of remote data.
///
#[derive(Clone, Debug, PartialEq)]
pub enum ApiResponse<T> {
    Pending,
    Resolved(T),
    Rejected(Option<ApiError>),
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        ApiResponse::Pending
    }
}

impl<T> ApiResponse<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, ApiResponse::Pending)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, ApiResponse::Resolved(_))
    }

    /// Returns the data when resolved.
    ///
    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResponse::Resolved(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            ApiResponse::Rejected(error) => error.as_ref(),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> ApiResponse<&T> {
        match self {
            ApiResponse::Pending => ApiResponse::Pending,
            ApiResponse::Resolved(data) => ApiResponse::Resolved(data),
            ApiResponse::Rejected(error) => ApiResponse::Rejected(error.clone()),
        }
    }
}

impl<T> From<Result<T, ApiError>> for ApiResponse<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => ApiResponse::Resolved(data),
            Err(error) => ApiResponse::Rejected(Some(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_pending() {
        let response: ApiResponse<u32> = ApiResponse::default();
        assert!(response.is_pending());
        assert_eq!(response.data(), None);
    }

    #[test]
    fn from_result() {
        let response: ApiResponse<u32> = Ok(3).into();
        assert_eq!(response.data(), Some(&3));

        let error = ApiError::Request("offline".to_string());
        let response: ApiResponse<u32> = Err(error.clone()).into();
        assert_eq!(response.error(), Some(&error));
        assert!(!response.is_resolved());
    }
}
