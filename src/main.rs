#[tokio::main]
async fn main() -> anyhow::Result<()> {
    movie_records::run().await
}
