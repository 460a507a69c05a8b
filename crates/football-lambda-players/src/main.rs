use lambda_runtime::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    football_lambda_players::run().await
}
