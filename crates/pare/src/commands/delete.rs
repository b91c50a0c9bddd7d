//! Delete command - remove a shortcode.

use std::io::Write;

use clap::Args;
use pare_client::{ApiResponse, DeleteStatus, PareClient};

use super::{Context, Outcome};
use crate::error::{CliError, CliResult};

/// Arguments for the delete command.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Return non-zero exit if code didn't exist
    #[arg(long)]
    pub fail_no_exist: bool,

    /// Code to delete
    pub code: String,
}

/// Run the delete command.
pub fn run(args: DeleteArgs, ctx: &Context, out: &mut impl Write) -> CliResult<Outcome> {
    tracing::debug!(code = %args.code, "delete");
    let client = PareClient::from_config(&ctx.config)?;

    let response = match client.links().delete(&args.code)? {
        ApiResponse::Success(response) => response,
        ApiResponse::Status(status) => return Err(CliError::UnexpectedStatus(status)),
    };

    writeln!(out, "{}/{}", response.code, response.status)?;
    if args.fail_no_exist && response.status == DeleteStatus::NoExist {
        return Ok(Outcome::NoExist);
    }
    Ok(Outcome::Done)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{blocking, context};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn server_replying(status: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/delete"))
            .and(body_json(json!({"code": "abc"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"code": "abc", "status": status})),
            )
            .mount(&server)
            .await;
        server
    }

    async fn delete(server: &MockServer, fail_no_exist: bool) -> (CliResult<Outcome>, String) {
        let ctx = context(&server.uri());
        blocking(move || {
            let args = DeleteArgs {
                fail_no_exist,
                code: "abc".to_string(),
            };
            let mut out = Vec::new();
            let result = run(args, &ctx, &mut out);
            (result, String::from_utf8(out).unwrap())
        })
        .await
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_deleted_succeeds_regardless_of_flag() {
        let server = server_replying("deleted").await;

        let (result, stdout) = delete(&server, false).await;
        assert_eq!(result.unwrap(), Outcome::Done);
        assert_eq!(stdout, "abc/deleted\n");

        let (result, _) = delete(&server, true).await;
        assert_eq!(result.unwrap(), Outcome::Done);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_noexist_without_flag_succeeds() {
        let server = server_replying("noexist").await;

        let (result, stdout) = delete(&server, false).await;
        assert_eq!(result.unwrap(), Outcome::Done);
        assert_eq!(stdout, "abc/noexist\n");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_noexist_with_flag_exits_one() {
        let server = server_replying("noexist").await;

        let (result, stdout) = delete(&server, true).await;
        let outcome = result.unwrap();
        assert_eq!(outcome, Outcome::NoExist);
        assert_eq!(outcome.exit_code(), 1);
        assert_eq!(stdout, "abc/noexist\n");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_unknown_status_is_printed() {
        let server = server_replying("pending").await;

        let (result, stdout) = delete(&server, true).await;
        assert_eq!(result.unwrap(), Outcome::Done);
        assert_eq!(stdout, "abc/pending\n");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_non_200_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/delete"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let (result, stdout) = delete(&server, true).await;
        assert!(matches!(result, Err(CliError::UnexpectedStatus(404))));
        assert!(stdout.is_empty());
    }
}
