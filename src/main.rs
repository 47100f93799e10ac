use logos_event_log::app;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::main().await
}
