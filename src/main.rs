use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use user_registration::app::registration::handler::AppState;
use user_registration::build_router;
use user_registration::infrastructure::{config, logger::Logger};
use user_registration::RegistrationDesk;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load_config().context("加载配置失败")?;
    Logger::init(&config.logging);

    match config::config_file() {
        Some(path) => info!("从配置文件加载: {}", path),
        None => info!("未找到配置文件，使用默认配置"),
    }
    info!("启动用户注册服务...");

    let state = AppState::new(RegistrationDesk::new());
    let app = build_router(state, config.http.timeout());

    let addr = config.http.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 注册服务运行在 http://{}", addr);
    info!("📖 可用的路由:");
    info!("   GET    /                 - 注册页面");
    info!("   POST   /                 - 提交注册表单");
    info!("   GET    /api/form         - 当前表单草稿");
    info!("   PUT    /api/form/:field  - 修改单个字段");
    info!("   DELETE /api/form         - 清空表单");
    info!("   POST   /api/form/submit  - 提交表单草稿");
    info!("   GET    /api/users        - 已注册用户列表");
    info!("   GET    /health           - 健康检查");

    axum::serve(listener, app).await.context("服务器运行失败")?;

    Ok(())
}
