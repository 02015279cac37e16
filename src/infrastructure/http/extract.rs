//! 带校验的请求提取器
//!
//! 包装 axum 的 `Json`、`Query`、`Path`，反序列化失败和 `validator` 规则失败都返回 422

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use super::error::ApiError;

fn check<T: Validate>(value: T) -> Result<T, ApiError> {
    value
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;
    Ok(value)
}

/// 校验过的 JSON 请求体
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::Validation(e.body_text()))?;
        Ok(Self(check(value)?))
    }
}

/// 校验过的查询串
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::Validation(e.body_text()))?;
        Ok(Self(check(value)?))
    }
}

/// 校验过的路径参数
pub struct ValidatedPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::Validation(e.body_text()))?;
        Ok(Self(check(value)?))
    }
}

/// `/:id` 形式的 UUID 路径参数
#[derive(Debug, Deserialize, Validate)]
pub struct IdParams {
    pub id: Uuid,
}

/// 解析逗号分隔的 UUID 列表，空段忽略
pub fn parse_id_list(field: &str, raw: Option<&str>) -> Result<Vec<Uuid>, ApiError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            Uuid::parse_str(s)
                .map_err(|_| ApiError::Validation(format!("{field}: invalid id '{s}'")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_list() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        assert!(parse_id_list("categoryIds", None).unwrap().is_empty());
        assert!(parse_id_list("categoryIds", Some("")).unwrap().is_empty());
        assert_eq!(
            parse_id_list("categoryIds", Some(&format!("{a}, {b},"))).unwrap(),
            vec![a, b]
        );
        assert!(matches!(
            parse_id_list("tagIds", Some("nope")),
            Err(ApiError::Validation(_))
        ));
    }
}
