use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let state = quill_server::init()?;
    let binding_addr = state.server_config.bind_addr.clone();
    let router = quill_server::app(state);

    let listener = TcpListener::bind(&binding_addr).await?;
    info!("listening on {binding_addr}");
    axum::serve(listener, router).await?;
    Ok(())
}
