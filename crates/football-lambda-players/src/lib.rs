//! AWS Lambda function serving the player resource.
//!
//! API Gateway forwards every request on the players route here. The HTTP verb
//! selects one of the gateway operations; the outcome is wrapped into a proxy
//! response with the fixed CORS headers.

#![deny(warnings)]

use http::{Method, StatusCode};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};

use football_lambda_shared::{
    error_response, init_gateway, init_tracing, method_not_allowed, response, LambdaConfig,
    ProxyRequest, ProxyResponse,
};
use football_lib::{ItemStore, PlayerGateway};

/// Entry point used by the Lambda runtime.
pub async fn run() -> Result<(), Error> {
    init_tracing();

    let config = LambdaConfig::from_env()?;
    let gateway = init_gateway(&config).await;

    let gateway = &gateway;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(gateway, event).await
    }))
    .await
}

/// Lambda handler invoked per request.
///
/// Never fails: an undecodable event is answered with a 400 envelope.
pub async fn handler<S: ItemStore>(
    gateway: &PlayerGateway<S>,
    event: LambdaEvent<Value>,
) -> Result<ProxyResponse, Error> {
    let request_id = event.context.request_id.clone();

    let request: ProxyRequest = match serde_json::from_value(event.payload) {
        Ok(req) => req,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "failed to parse request");
            return Ok(error_response(format!("Invalid request: {}", e)));
        }
    };

    info!(
        request_id = %request_id,
        method = %request.http_method,
        path = request.path.as_deref().unwrap_or_default(),
        player_id = request.id_param(),
        "handling players request"
    );

    Ok(dispatch(gateway, &request, &request_id).await)
}

/// Route `request` by verb to the matching gateway operation.
pub async fn dispatch<S: ItemStore>(
    gateway: &PlayerGateway<S>,
    request: &ProxyRequest,
    request_id: &str,
) -> ProxyResponse {
    let Ok(method) = Method::from_bytes(request.http_method.as_bytes()) else {
        warn!(request_id = %request_id, method = %request.http_method, "unparseable method");
        return method_not_allowed();
    };

    let outcome = match method {
        Method::GET => {
            let id = request.id_param();
            if id.is_empty() {
                gateway
                    .get_players()
                    .await
                    .map(|players| response(StatusCode::OK, &players))
            } else {
                gateway
                    .get_player(id)
                    .await
                    .map(|player| response(StatusCode::OK, &player))
            }
        }
        Method::POST => gateway
            .create_player(&request.body_text())
            .await
            .map(|player| response(StatusCode::CREATED, &player)),
        Method::PUT => gateway
            .update_player(&request.body_text())
            .await
            .map(|player| response(StatusCode::OK, &player)),
        Method::DELETE => gateway
            .delete_player(request.id_param())
            .await
            .map(|()| response(StatusCode::OK, &())),
        other => {
            warn!(request_id = %request_id, method = %other, "method not allowed");
            return method_not_allowed();
        }
    };

    match outcome {
        Ok(resp) => {
            info!(
                request_id = %request_id,
                method = %method,
                status = resp.status_code,
                "request completed"
            );
            resp
        }
        Err(e) => {
            warn!(
                request_id = %request_id,
                method = %method,
                kind = %e.kind(),
                error = %e,
                "player operation failed"
            );
            error_response(e.to_string())
        }
    }
}
