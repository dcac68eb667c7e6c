//! Find (filtered listing) requests.
//!
//! A find request addresses `GET {base_url}/object/{schema}/find/all` and
//! carries everything in the query string:
//!
//! | Parameter | Source | Present when |
//! |-----------|--------|--------------|
//! | `query` | rendered [`Query`] | a filter is set |
//! | `freetext` | free-text search terms | set |
//! | `pnum` | page number (1-based) | always |
//! | `psize` | page size, or the configured default | always |
//! | `orderBy` | sort field | set |
//! | `isAsc` | sort direction | `orderBy` is set |
//! | `fields` | comma-separated projection | non-empty |

use appacitive_core::{SchemaName, SdkConfig, SdkError};
use appacitive_query::Query;
use http::header::ACCEPT;
use http::{Method, Request};
use tracing::debug;
use typed_builder::TypedBuilder;

use crate::error::{RequestError, RequestResult};

/// Header naming the environment a request is addressed to.
pub const ENVIRONMENT_HEADER: &str = "Appacitive-Environment";

/// A filtered listing of objects of one schema.
///
/// # Examples
///
/// ```
/// use appacitive_core::{SchemaName, SdkConfig};
/// use appacitive_http::FindRequest;
/// use appacitive_query::field;
///
/// let request = FindRequest::builder()
///     .schema(SchemaName::new("user")?)
///     .query(field("age")?.greater_than(18)?)
///     .build();
/// let url = request.url(&SdkConfig::default())?;
/// assert_eq!(
///     url,
///     "https://apis.appacitive.com/v1.0/object/user/find/all?query=age+%3E+18&pnum=1&psize=20"
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, TypedBuilder)]
pub struct FindRequest {
    /// Schema whose objects are listed.
    pub schema: SchemaName,

    /// Filter expression.
    #[builder(default, setter(strip_option))]
    pub query: Option<Query>,

    /// 1-based page number.
    #[builder(default = 1)]
    pub page_number: u32,

    /// Page size; falls back to [`SdkConfig::default_page_size`].
    #[builder(default, setter(strip_option))]
    pub page_size: Option<u32>,

    /// Field to sort by.
    #[builder(default, setter(strip_option, into))]
    pub order_by: Option<String>,

    /// Sort ascending instead of descending.
    #[builder(default = false)]
    pub ascending: bool,

    /// Fields to return; empty returns every field.
    #[builder(default)]
    pub fields: Vec<String>,

    /// Free-text search terms.
    #[builder(default, setter(strip_option, into))]
    pub free_text: Option<String>,
}

impl FindRequest {
    /// Query-string pairs in wire order, before encoding.
    pub fn query_pairs(&self, config: &SdkConfig) -> RequestResult<Vec<(&'static str, String)>> {
        if self.page_number == 0 {
            return Err(RequestError::InvalidPaging(
                "page number starts at 1".to_owned(),
            ));
        }
        let page_size = self.page_size.unwrap_or(config.default_page_size);
        if page_size == 0 || page_size > config.max_page_size {
            return Err(RequestError::InvalidPaging(format!(
                "page size {page_size} outside 1..={}",
                config.max_page_size
            )));
        }

        let mut pairs = Vec::with_capacity(7);
        if let Some(query) = &self.query {
            pairs.push(("query", query.render()));
        }
        if let Some(text) = &self.free_text {
            pairs.push(("freetext", text.clone()));
        }
        pairs.push(("pnum", self.page_number.to_string()));
        pairs.push(("psize", page_size.to_string()));
        if let Some(order_by) = &self.order_by {
            pairs.push(("orderBy", order_by.clone()));
            pairs.push(("isAsc", self.ascending.to_string()));
        }
        if !self.fields.is_empty() {
            pairs.push(("fields", self.fields.join(",")));
        }
        Ok(pairs)
    }

    /// Absolute URL of the request.
    pub fn url(&self, config: &SdkConfig) -> RequestResult<String> {
        let base = config.base_url.trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(SdkError::Config(format!(
                "base URL '{}' must start with http:// or https://",
                config.base_url
            ))
            .into());
        }

        let pairs = self.query_pairs(config)?;
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&pairs)
            .finish();
        let url = format!("{base}/object/{}/find/all?{encoded}", self.schema);

        debug!(
            schema = %self.schema,
            depth = self.query.as_ref().map_or(0, Query::depth),
            predicates = self.query.as_ref().map_or(0, Query::predicate_count),
            "built find request url"
        );
        Ok(url)
    }

    /// A bodiless `GET` request ready for the transport layer.
    pub fn to_http_request(&self, config: &SdkConfig) -> RequestResult<Request<()>> {
        let url = self.url(config)?;
        let request = Request::builder()
            .method(Method::GET)
            .uri(url)
            .header(ACCEPT, "application/json")
            .header(ENVIRONMENT_HEADER, config.environment.as_str())
            .body(())?;
        Ok(request)
    }
}
