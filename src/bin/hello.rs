use hello_echo::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    let config = AppConfig::from_env()?;
    hello_echo::setup_logging(&config);
    lambda_runtime::run(lambda_runtime::service_fn(hello_echo::hello::handler)).await
}
