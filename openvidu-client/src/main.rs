use anyhow::Result;
use openvidu_client::{ClientConfig, ReqwestHttpClient, Session, TokenOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "openvidu_client=info".into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    // 命令行参数: [ROLE] [DATA]
    let mut args = std::env::args().skip(1);
    let mut builder = TokenOptions::builder();
    if let Some(role) = args.next() {
        builder = builder.role_name(&role)?;
    }
    if let Some(data) = args.next() {
        builder = builder.data(data);
    }
    let token_options = builder.build();

    // 加载配置
    let config = ClientConfig::load()?;
    tracing::info!("Connecting to OpenVidu server at {}", config.base_url);

    let session = Session::new(ReqwestHttpClient::new(config)?).await?;
    let token = session.generate_token(Some(token_options)).await?;

    println!("session: {}", session);
    println!("token: {}", token);

    Ok(())
}
