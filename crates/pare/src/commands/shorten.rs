//! Shorten command - create a short link.

use std::io::Write;

use clap::Args;
use pare_client::{ApiResponse, PareClient, ShortenRequest};

use super::{Context, Outcome, parse_url};
use crate::error::{CliError, CliResult};

/// Arguments for the shorten command.
#[derive(Args, Debug)]
pub struct ShortenArgs {
    /// Code to shorten to (random if unspecified)
    #[arg(long)]
    pub code: Option<String>,

    /// User-defined metadata
    #[arg(long)]
    pub meta: Option<String>,

    /// URL to shorten
    #[arg(value_parser = parse_url)]
    pub url: String,
}

impl ShortenArgs {
    fn into_request(self) -> ShortenRequest {
        let mut request = ShortenRequest::new(self.url);
        if let Some(code) = self.code {
            request = request.with_shortcode(code);
        }
        if let Some(meta) = self.meta {
            request = request.with_meta(meta);
        }
        request
    }
}

/// Run the shorten command.
pub fn run(args: ShortenArgs, ctx: &Context, out: &mut impl Write) -> CliResult<Outcome> {
    tracing::debug!(url = %args.url, "shorten");
    let request = args.into_request();
    let client = PareClient::from_config(&ctx.config)?;

    match client.links().shorten(&request)? {
        ApiResponse::Success(response) => {
            writeln!(out, "{}", response.short_url)?;
            Ok(Outcome::Done)
        }
        ApiResponse::Status(409) => {
            writeln!(out, "conflict")?;
            Ok(Outcome::Conflict)
        }
        ApiResponse::Status(status) => Err(CliError::UnexpectedStatus(status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{blocking, context};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn args(url: &str, code: Option<&str>, meta: Option<&str>) -> ShortenArgs {
        ShortenArgs {
            code: code.map(String::from),
            meta: meta.map(String::from),
            url: url.to_string(),
        }
    }

    async fn run_against(server: &MockServer, args: ShortenArgs) -> (CliResult<Outcome>, String) {
        let ctx = context(&server.uri());
        blocking(move || {
            let mut out = Vec::new();
            let result = run(args, &ctx, &mut out);
            (result, String::from_utf8(out).unwrap())
        })
        .await
    }

    #[test]
    fn test_empty_code_and_meta_are_omitted() {
        let request = args("http://a.com", Some(""), Some("")).into_request();
        assert_eq!(request.shortcode, None);
        assert_eq!(request.meta, None);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_prints_short_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/shorten"))
            .and(header("x-api-key", "k1"))
            .and(body_json(json!({"url": "http://a.com"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"short_url": "https://s.example/abc"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let (result, stdout) = run_against(&server, args("http://a.com", None, None)).await;
        assert_eq!(result.unwrap(), Outcome::Done);
        assert_eq!(stdout, "https://s.example/abc\n");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_sends_requested_code() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/shorten"))
            .and(body_json(json!({"url": "http://a.com", "code": "foo"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"short_url": "https://s.example/foo"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let (result, stdout) = run_against(&server, args("http://a.com", Some("foo"), None)).await;
        assert_eq!(result.unwrap(), Outcome::Done);
        assert_eq!(stdout, "https://s.example/foo\n");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_conflict_is_reported_not_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/shorten"))
            .respond_with(ResponseTemplate::new(409).set_body_string("code already in use"))
            .mount(&server)
            .await;

        let (result, stdout) =
            run_against(&server, args("http://a.com", Some("taken"), None)).await;
        let outcome = result.unwrap();
        assert_eq!(outcome, Outcome::Conflict);
        assert_ne!(outcome.exit_code(), 0);
        assert_eq!(stdout, "conflict\n");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_other_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/shorten"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let (result, stdout) = run_against(&server, args("http://a.com", None, None)).await;
        assert!(matches!(result, Err(CliError::UnexpectedStatus(500))));
        assert!(stdout.is_empty());
    }

    #[test]
    fn test_missing_server_is_config_error() {
        let mut out = Vec::new();
        let err = run(args("http://a.com", None, None), &context(""), &mut out).unwrap_err();
        assert_eq!(err.exit_code(), crate::exitcode::CONFIG);
        assert!(out.is_empty());
    }
}
