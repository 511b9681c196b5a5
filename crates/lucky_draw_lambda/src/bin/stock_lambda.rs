use aws_sdk_s3::primitives::ByteStream;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;

use lucky_draw_core::storage_keys::{stock_object_key, STOCK_STORE_PREFIX};
use lucky_draw_lambda::adapters::object_store::ObjectStore;
use lucky_draw_lambda::handlers::stock::{handle_stock_event, StockHandlerConfig};

struct S3ObjectStore {
    bucket: String,
    s3_client: aws_sdk_s3::Client,
}

impl ObjectStore for S3ObjectStore {
    fn read_object(&self, key: &str) -> Result<Option<Vec<u8>>, String> {
        let bucket = self.bucket.clone();
        let object_key = key.to_string();
        let client = self.s3_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let output = match client
                    .get_object()
                    .bucket(bucket)
                    .key(object_key)
                    .send()
                    .await
                {
                    Ok(value) => value,
                    Err(error) => {
                        let service_error = error.into_service_error();
                        if service_error.is_no_such_key() {
                            return Ok(None);
                        }
                        return Err(format!("failed to read object from s3: {service_error}"));
                    }
                };

                output
                    .body
                    .collect()
                    .await
                    .map(|data| Some(data.into_bytes().to_vec()))
                    .map_err(|error| format!("failed to read object body from s3: {error}"))
            })
        })
    }

    fn write_object(&self, key: &str, body: &[u8]) -> Result<(), String> {
        let bucket = self.bucket.clone();
        let object_key = key.to_string();
        let body_bytes = body.to_vec();
        let client = self.s3_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_object()
                    .bucket(bucket)
                    .key(object_key)
                    .body(ByteStream::from(body_bytes))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("failed to write object to s3: {error}"))
            })
        })
    }
}

async fn handle_request(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let bucket = std::env::var("STOCK_BUCKET")
        .map_err(|_| Error::from("STOCK_BUCKET must be configured"))?;
    let prefix =
        std::env::var("STOCK_PREFIX").unwrap_or_else(|_| STOCK_STORE_PREFIX.to_string());
    let admin_token = std::env::var("ADMIN_TOKEN").ok();

    let config = StockHandlerConfig {
        snapshot_key: stock_object_key(&prefix),
        admin_token,
    };

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = S3ObjectStore {
        bucket,
        s3_client: aws_sdk_s3::Client::new(&aws_config),
    };

    let mut rng = StdRng::from_entropy();
    let response = handle_stock_event(&event.payload, &config, &store, &mut rng);
    serde_json::to_value(response)
        .map_err(|error| Error::from(format!("failed to serialize api response: {error}")))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
