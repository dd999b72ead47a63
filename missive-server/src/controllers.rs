use async_graphql::http::{parse_query_string, GraphiQLSource};
use async_graphql::parser::{parse_query, types::{DocumentOperations, OperationType}};
use async_graphql::{BatchRequest, BatchResponse, Request, ServerError};
use axum::{extract::{Extension, RawQuery}, http::StatusCode, response::{Html, IntoResponse, Response}, Json};
use missive_core::HealthResponse;
use std::sync::Arc;

use crate::{AppState, GRAPHQL_PATH};

/// Handler per POST /graphql: singola richiesta o batch.
/// Gli errori dei resolver finiscono nel campo `errors` della risposta, lo status resta 200.
pub async fn graphql(
    Extension(state): Extension<Arc<AppState>>,
    Json(req): Json<BatchRequest>,
) -> Json<BatchResponse> {
    Json(state.schema.execute_batch(req).await)
}

/// Handler per GET /graphql.
/// Con `?query=...` esegue la richiesta (solo query, le mutation vogliono POST);
/// senza query string serve l'esploratore GraphiQL, se abilitato.
pub async fn graphql_get(Extension(state): Extension<Arc<AppState>>, RawQuery(raw): RawQuery) -> Response {
    if let Some(raw) = raw.filter(|r| !r.is_empty()) {
        let req = match parse_query_string(&raw) {
            Ok(req) => req,
            Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
        };
        if is_mutation(&req) {
            return error_response(
                StatusCode::METHOD_NOT_ALLOWED,
                "Can only perform a mutation operation from a POST request.",
            );
        }
        return Json(state.schema.execute(req).await).into_response();
    }

    if !state.graphiql {
        return StatusCode::NOT_FOUND.into_response();
    }
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish()).into_response()
}

// Operazione selezionata (per nome se ce ne sono più d'una) di tipo mutation?
// Un documento non valido passa: sarà il motore a riportare l'errore.
fn is_mutation(req: &Request) -> bool {
    let Ok(doc) = parse_query(&req.query) else {
        return false;
    };
    let op = match &doc.operations {
        DocumentOperations::Single(op) => Some(op),
        DocumentOperations::Multiple(ops) => match req.operation_name.as_deref() {
            Some(name) => ops.get(name),
            None if ops.len() == 1 => ops.values().next(),
            None => None,
        },
    };
    op.is_some_and(|op| op.node.ty == OperationType::Mutation)
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = async_graphql::Response::from_errors(vec![ServerError::new(message, None)]);
    (status, Json(body)).into_response()
}

/// Handler per GET /health
pub async fn health(Extension(state): Extension<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.store.len()))
}
