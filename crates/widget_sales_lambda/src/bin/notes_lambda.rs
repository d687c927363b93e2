use lambda_runtime::{service_fn, Error};
use widget_sales_lambda::handlers::notes::handle_request;
use widget_sales_lambda::logging::init_logging;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();
    lambda_runtime::run(service_fn(handle_request)).await
}
