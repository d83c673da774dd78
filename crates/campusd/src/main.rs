#[tokio::main]
async fn main() {
    campusd::start_server().await;
}
