//! Find requests carrying rendered filters.

#[cfg(test)]
mod tests {
    use appacitive_core::SchemaName;
    use appacitive_http::{FindRequest, RequestResult};
    use appacitive_query::field;
    use chrono::{TimeZone, Utc};

    use crate::test_config;

    fn adults_in(cities: &[&str]) -> RequestResult<FindRequest> {
        let query = field("age")?
            .greater_than_or_equal_to(18)?
            .and(field("city")?.is_in(cities.iter().copied())?);
        Ok(FindRequest::builder()
            .schema(SchemaName::new("user")?)
            .query(query)
            .order_by("age")
            .ascending(true)
            .build())
    }

    #[test]
    fn test_should_build_find_url_with_filter() -> anyhow::Result<()> {
        let url = adults_in(&["NY", "LA"])?.url(&test_config())?;
        assert_eq!(
            url,
            "http://localhost:9090/v1.0/object/user/find/all\
             ?query=%28age+%3E%3D+18%29+and+%28city+in+%27NY%27%2C%27LA%27%29\
             &pnum=1&psize=20&orderBy=age&isAsc=true"
        );
        Ok(())
    }

    #[test]
    fn test_should_surface_query_errors_as_request_errors() {
        let err = adults_in(&[]).unwrap_err();
        assert!(err.to_string().contains("needs at least one value"));
    }

    #[test]
    fn test_should_carry_timestamp_filter() -> anyhow::Result<()> {
        let since = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let request = FindRequest::builder()
            .schema(SchemaName::new("order")?)
            .query(field("__utcdatecreated")?.greater_than(since)?)
            .page_size(100)
            .build();
        let pairs = request.query_pairs(&test_config())?;
        assert_eq!(
            pairs[0],
            ("query", "__utcdatecreated > 2024-06-01T00:00:00.0000000Z".to_owned())
        );
        assert_eq!(pairs[2], ("psize", "100".to_owned()));
        Ok(())
    }

    #[test]
    fn test_should_embed_filter_in_json_body() -> anyhow::Result<()> {
        let query = field("status")?.equal_to("active")?.negate();
        let body = serde_json::json!({ "schema": "user", "query": query });
        assert_eq!(body.to_string(), r#"{"query":"not (status = 'active')","schema":"user"}"#);
        Ok(())
    }

    #[test]
    fn test_should_build_http_request_for_transport() -> anyhow::Result<()> {
        let request = adults_in(&["SF"])?.to_http_request(&test_config())?;
        assert_eq!(request.method(), "GET");
        assert_eq!(request.uri().host(), Some("localhost"));
        assert!(
            request
                .uri()
                .query()
                .is_some_and(|q| q.starts_with("query=%28age+%3E%3D+18%29"))
        );
        Ok(())
    }
}
