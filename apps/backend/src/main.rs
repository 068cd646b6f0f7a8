#[tokio::main]
async fn main() -> anyhow::Result<()> {
    card_collection_backend::run().await
}
