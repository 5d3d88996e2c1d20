//! HTTP lambda: POST a plan as JSON, receive the summary, chart and projection

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use retirement_planner::service::handle_request;

async fn function_handler(event: Request) -> Result<Response<Body>, Error> {
    let response = handle_request(event.body());

    let reply = Response::builder()
        .status(response.status)
        .header("content-type", "application/json")
        .body(Body::Text(response.body))?;
    Ok(reply)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    run(service_fn(function_handler)).await
}
