#[tokio::main]
async fn main() {
    resort_backend::run().await;
}
