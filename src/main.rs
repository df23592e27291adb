use scraptrade::errors::ScrapTradeError;
use scraptrade::{config, runtime, system};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    config::init_config();
    let app_config = config::get_config();

    // guard 必须存活到进程退出，否则缓冲中的日志会丢
    let _log_guard = system::logging::init_logging(&app_config);

    if let Err(e) = runtime::modes::server::run_server().await {
        if let Some(err) = e.downcast_ref::<ScrapTradeError>() {
            eprintln!("{}", err.format_colored());
        }
        return Err(e);
    }

    Ok(())
}
