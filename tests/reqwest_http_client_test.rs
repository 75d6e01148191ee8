#[cfg(test)]
mod reqwest_http_client {

    use std::time::Duration;

    use bytes::Bytes;

    use post_client::http_client::error::Error;
    use post_client::http_client::http_client::HttpClient;
    use post_client::http_client::reqwest_http_client::ReqwestHttpClient;
    use post_client::http_client::request::{Headers, Request};

    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn post_to(url: String, headers: Headers, body: &'static str) -> Request {
        Request {
            url,
            headers,
            body: Bytes::from(body),
            timeout: Duration::from_secs(5),
        }
    }

    #[tokio::test]
    async fn should_post_the_body_and_capture_the_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/data"))
            .and(header("Content-Type", "application/json"))
            .and(header("X-Custom-Header", "test-value"))
            .and(body_string(r#"{"key":"value"}"#))
            .respond_with(
                ResponseTemplate::new(201)
                    .insert_header("X-Request-Id", "12345")
                    .set_body_string("Created"),
            )
            .mount(&mock_server)
            .await;

        let http_client = ReqwestHttpClient::default();

        let response = http_client
            .post(post_to(
                format!("{}/api/data", mock_server.uri()),
                Headers::from([
                    ("Content-Type", "application/json"),
                    ("X-Custom-Header", "test-value"),
                ]),
                r#"{"key":"value"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status, 201);
        assert_eq!(response.body, "Created");
        assert_eq!(response.headers.get("x-request-id").unwrap(), "12345");
        assert_eq!(response.final_url, format!("{}/api/data", mock_server.uri()));
    }

    #[tokio::test]
    async fn should_follow_redirects_and_record_the_final_url() {
        let mock_server = MockServer::start().await;
        let target = format!("{}/new", mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/old"))
            .respond_with(ResponseTemplate::new(302).insert_header("Location", target.as_str()))
            .mount(&mock_server)
            .await;

        Mock::given(path("/new"))
            .respond_with(ResponseTemplate::new(200).set_body_string("moved"))
            .mount(&mock_server)
            .await;

        let http_client = ReqwestHttpClient::default();

        let response = http_client
            .post(post_to(
                format!("{}/old", mock_server.uri()),
                Headers::default(),
                "{}",
            ))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, "moved");
        assert_eq!(response.final_url, target);
    }

    #[tokio::test]
    async fn should_keep_every_value_of_a_repeated_header() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/cookies"))
            .respond_with(
                ResponseTemplate::new(200)
                    .append_header("Set-Cookie", "a=1")
                    .append_header("Set-Cookie", "b=2"),
            )
            .mount(&mock_server)
            .await;

        let http_client = ReqwestHttpClient::default();

        let response = http_client
            .post(post_to(
                format!("{}/cookies", mock_server.uri()),
                Headers::default(),
                "{}",
            ))
            .await
            .unwrap();

        assert_eq!(
            response.headers.get("set-cookie"),
            Some(&"a=1, b=2".to_string())
        );
    }

    #[tokio::test]
    async fn should_use_the_policies_of_a_custom_client() {
        let mock_server = MockServer::start().await;
        let old = format!("{}/old", mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/old"))
            .respond_with(
                ResponseTemplate::new(302)
                    .insert_header("Location", format!("{}/new", mock_server.uri()).as_str()),
            )
            .mount(&mock_server)
            .await;

        let http_client = ReqwestHttpClient::new(
            reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::none())
                .build()
                .unwrap(),
        );

        let response = http_client
            .post(post_to(old.clone(), Headers::default(), "{}"))
            .await
            .unwrap();

        assert_eq!(response.status, 302);
        assert_eq!(response.final_url, old);
    }

    #[tokio::test]
    async fn should_detect_a_connection_error() {
        let http_client = ReqwestHttpClient::default();

        let result = http_client
            .post(post_to(
                "http://127.0.0.1:1/post".to_string(),
                Headers::default(),
                "{}",
            ))
            .await;

        assert!(matches!(result.unwrap_err(), Error::Connect(_)));
    }

    #[tokio::test]
    async fn should_detect_a_timeout_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&mock_server)
            .await;

        let http_client = ReqwestHttpClient::default();

        let mut request = post_to(
            format!("{}/slow", mock_server.uri()),
            Headers::default(),
            "{}",
        );
        request.timeout = Duration::from_millis(20);

        let result = http_client.post(request).await;

        let error = result.unwrap_err();
        assert!(error.is_timeout());
        assert!(error.to_string().starts_with("Request timed out"));
    }

    #[tokio::test]
    async fn should_reject_a_malformed_url() {
        let http_client = ReqwestHttpClient::default();

        let result = http_client
            .post(post_to(
                "not a url".to_string(),
                Headers::default(),
                "{}",
            ))
            .await;

        assert!(matches!(result.unwrap_err(), Error::InvalidRequest(_)));
    }
}
