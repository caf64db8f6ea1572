#[tokio::main]
async fn main() {
    if let Err(e) = chirpy::run().await {
        eprintln!("{:?}", e);
        std::process::exit(1);
    }
}
