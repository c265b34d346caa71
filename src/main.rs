#[tokio::main]
async fn main() {
    travel_site::run().await;
}
