//! Command-line parsing and dispatch onto the API services.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context};
use pickup_api::{ApiClient, CreateBookingData, OrderId, PhotoAttachment, ProductId};
use serde_json::Value;
use tracing::info;

pub const USAGE: &str = "\
Usage: pickup <command>

Commands:
  orders                      List bookings derived from all orders
  order <order-id>            Show the details of one order
  order-raw <order-id>        Show one order as the backend returns it
  profile                     Show the customer profile
  book --waste-type <type> --address <address> --pickup-time <time>
       [--notes <notes>] [--photo <path>]
                              Create a pickup booking
  products                    List catalogue products
  product <product-id>        Show one product
  pricing                     List pricing plans
  services                    List offered services
  help                        Show this message

Environment:
  PICKUP_API_BASE_URL         Backend origin (default http://localhost:5000)
  PICKUP_LOG_FORMAT           'json' for JSON logs on stderr
  OTEL_EXPORTER_OTLP_ENDPOINT Export traces to this OTLP collector
  RUST_LOG                    Log filter (default info)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Orders,
    Order(OrderId),
    OrderRaw(OrderId),
    Profile,
    Book(BookArgs),
    Products,
    Product(ProductId),
    Pricing,
    Services,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookArgs {
    pub waste_type: String,
    pub address: String,
    pub pickup_time: String,
    pub notes: Option<String>,
    pub photo: Option<PathBuf>,
}

impl Command {
    /// Parses the arguments that follow the program name.
    pub fn parse<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let Some(name) = args.next() else {
            return Ok(Self::Help);
        };
        let rest: Vec<String> = args.collect();

        let command = match name.as_str() {
            "orders" => Self::Orders,
            "order" => Self::Order(order_id(&rest)?),
            "order-raw" => Self::OrderRaw(order_id(&rest)?),
            "profile" => Self::Profile,
            "book" => Self::Book(book_args(&rest)?),
            "products" => Self::Products,
            "product" => {
                let raw = single(&rest, "product-id")?;
                let id = raw
                    .parse::<ProductId>()
                    .with_context(|| format!("invalid product id '{raw}'"))?;
                Self::Product(id)
            }
            "pricing" => Self::Pricing,
            "services" => Self::Services,
            "help" | "-h" | "--help" => Self::Help,
            other => bail!("unknown command '{other}'\n\n{USAGE}"),
        };

        Ok(command)
    }
}

fn single<'a>(rest: &'a [String], what: &str) -> anyhow::Result<&'a str> {
    match rest {
        [value] => Ok(value.as_str()),
        [] => bail!("missing <{what}>\n\n{USAGE}"),
        _ => bail!("expected exactly one <{what}>\n\n{USAGE}"),
    }
}

fn order_id(rest: &[String]) -> anyhow::Result<OrderId> {
    let raw = single(rest, "order-id")?;
    OrderId::new(raw).ok_or_else(|| anyhow!("order id must not be empty"))
}

fn book_args(rest: &[String]) -> anyhow::Result<BookArgs> {
    let mut parsed = BookArgs::default();
    let mut iter = rest.iter();

    while let Some(flag) = iter.next() {
        let value = iter
            .next()
            .cloned()
            .ok_or_else(|| anyhow!("missing value for {flag}"))?;

        match flag.as_str() {
            "--waste-type" => parsed.waste_type = value,
            "--address" => parsed.address = value,
            "--pickup-time" => parsed.pickup_time = value,
            "--notes" => parsed.notes = Some(value),
            "--photo" => parsed.photo = Some(PathBuf::from(value)),
            other => bail!("unknown option '{other}' for book\n\n{USAGE}"),
        }
    }

    for (value, flag) in [
        (&parsed.waste_type, "--waste-type"),
        (&parsed.address, "--address"),
        (&parsed.pickup_time, "--pickup-time"),
    ] {
        if value.is_empty() {
            bail!("book requires {flag}\n\n{USAGE}");
        }
    }

    Ok(parsed)
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Runs `command` and returns its output as pretty-printed JSON.
pub async fn execute(command: Command, client: &ApiClient) -> anyhow::Result<String> {
    let value: Value = match command {
        Command::Orders => serde_json::to_value(client.orders().get_all_orders().await?)?,
        Command::Order(id) => serde_json::to_value(client.orders().get_order_details(&id).await?)?,
        Command::OrderRaw(id) => serde_json::to_value(client.orders().get_order_by_id(&id).await?)?,
        Command::Profile => serde_json::to_value(client.users().get_profile().await?)?,
        Command::Book(args) => {
            let data = booking_data(args).await?;
            serde_json::to_value(client.bookings().create_booking(data).await?)?
        }
        Command::Products => serde_json::to_value(client.products().get_all_products().await?)?,
        Command::Product(id) => serde_json::to_value(client.products().get_product_details(id).await?)?,
        Command::Pricing => serde_json::to_value(client.pricing().get_pricing().await?)?,
        Command::Services => serde_json::to_value(client.pricing().get_services().await?)?,
        Command::Help => return Ok(USAGE.to_string()),
    };

    Ok(serde_json::to_string_pretty(&value)?)
}

async fn booking_data(args: BookArgs) -> anyhow::Result<CreateBookingData> {
    let photo = match args.photo {
        Some(path) => Some(load_photo(&path).await?),
        None => None,
    };

    Ok(CreateBookingData {
        waste_type: args.waste_type,
        address: args.address,
        pickup_time: args.pickup_time,
        notes: args.notes,
        photo,
    })
}

async fn load_photo(path: &Path) -> anyhow::Result<PhotoAttachment> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read photo {}", path.display()))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "photo".to_string());

    info!(file = %file_name, bytes = bytes.len(), "Attaching photo");

    Ok(PhotoAttachment {
        content_type: media_type(path).map(str::to_string),
        file_name,
        bytes,
    })
}

fn media_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "heic" => Some("image/heic"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pickup_api::{ApiConfig, HttpResponse, MockHttpTransport, RequestBody};
    use serde_json::json;

    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<Command> {
        Command::parse(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn no_arguments_means_help() {
        assert_eq!(parse(&[]).expect("parse"), Command::Help);
        assert_eq!(parse(&["--help"]).expect("parse"), Command::Help);
    }

    #[test]
    fn order_commands_take_one_id() {
        let id = OrderId::new("1700000000").expect("non-empty");
        assert_eq!(parse(&["order", "1700000000"]).expect("parse"), Command::Order(id.clone()));
        assert_eq!(parse(&["order-raw", "1700000000"]).expect("parse"), Command::OrderRaw(id));

        let err = parse(&["order"]).expect_err("missing id");
        assert!(err.to_string().starts_with("missing <order-id>"));
        assert!(parse(&["order", "a", "b"]).is_err());
    }

    #[test]
    fn product_id_must_be_numeric() {
        assert_eq!(parse(&["product", "7"]).expect("parse"), Command::Product(ProductId::new(7)));
        let err = parse(&["product", "seven"]).expect_err("not numeric");
        assert!(err.to_string().contains("invalid product id 'seven'"));
    }

    #[test]
    fn book_parses_required_and_optional_flags() {
        let command = parse(&[
            "book",
            "--waste-type",
            "e-waste",
            "--address",
            "12 Elm St",
            "--pickup-time",
            "2024-01-01T10:00",
            "--photo",
            "bin.jpg",
        ])
        .expect("parse");

        assert_eq!(
            command,
            Command::Book(BookArgs {
                waste_type: "e-waste".into(),
                address: "12 Elm St".into(),
                pickup_time: "2024-01-01T10:00".into(),
                notes: None,
                photo: Some(PathBuf::from("bin.jpg")),
            })
        );
    }

    #[test]
    fn book_rejects_missing_required_flags() {
        let err = parse(&["book", "--waste-type", "e-waste", "--address", "12 Elm St"]).expect_err("missing time");
        assert!(err.to_string().starts_with("book requires --pickup-time"));

        assert!(parse(&["book", "--waste-type"]).is_err());
        assert!(parse(&["book", "--colour", "red"]).is_err());
    }

    #[test]
    fn unknown_commands_are_rejected() {
        let err = parse(&["drivers"]).expect_err("unknown");
        assert!(err.to_string().starts_with("unknown command 'drivers'"));
    }

    #[test]
    fn media_type_follows_extension() {
        assert_eq!(media_type(Path::new("a/b/PHOTO.JPG")), Some("image/jpeg"));
        assert_eq!(media_type(Path::new("bin.png")), Some("image/png"));
        assert_eq!(media_type(Path::new("notes.txt")), None);
        assert_eq!(media_type(Path::new("noext")), None);
    }

    fn client_returning(body: serde_json::Value) -> ApiClient {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(move |_| Ok(HttpResponse::new(200, "OK", body.to_string())));
        ApiClient::new(ApiConfig::default(), Arc::new(transport))
    }

    #[tokio::test]
    async fn orders_command_prints_mapped_bookings() {
        let client = client_returning(json!([{
            "pickupId": "1700000000",
            "wasteType": "e-waste",
            "pickupTime": "10:00",
            "pickupDate": "2024-01-01",
            "userLocation": "12 Elm St",
            "cost": "₹100.0",
            "pickupRating": 4.0,
            "userId": 1,
            "driverId": 2
        }]));

        let output = execute(Command::Orders, &client).await.expect("execute");
        let printed: Value = serde_json::from_str(&output).expect("json");

        assert_eq!(
            printed,
            json!([{
                "id": "1700000000",
                "status": "Completed",
                "date": "2024-01-01",
                "time": "10:00",
                "address": "12 Elm St",
                "service": "e-waste"
            }])
        );
    }

    #[tokio::test]
    async fn book_command_attaches_the_photo_file() {
        let path = std::env::temp_dir().join(format!("pickup-cli-test-{}.png", std::process::id()));
        tokio::fs::write(&path, b"PNGDATA").await.expect("write photo");

        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .withf(|req| match &req.body {
                RequestBody::Multipart(form) => form.file("photo").is_some_and(|photo| {
                    photo.bytes == b"PNGDATA".to_vec() && photo.content_type.as_deref() == Some("image/png")
                }),
                _ => false,
            })
            .times(1)
            .returning(|_| {
                let body = json!({"success": true, "bookingId": "1", "message": "Booking created successfully!"});
                Ok(HttpResponse::new(200, "OK", body.to_string()))
            });
        let client = ApiClient::new(ApiConfig::default(), Arc::new(transport));

        let args = BookArgs {
            waste_type: "e-waste".into(),
            address: "12 Elm St".into(),
            pickup_time: "2024-01-01T10:00".into(),
            notes: None,
            photo: Some(path.clone()),
        };
        let output = execute(Command::Book(args), &client).await;
        tokio::fs::remove_file(&path).await.ok();

        let printed: Value = serde_json::from_str(&output.expect("execute")).expect("json");
        assert_eq!(printed["bookingId"], "1");
    }

    #[tokio::test]
    async fn missing_photo_file_fails_before_any_request() {
        let transport = MockHttpTransport::new();
        let client = ApiClient::new(ApiConfig::default(), Arc::new(transport));

        let args = BookArgs {
            waste_type: "e-waste".into(),
            address: "12 Elm St".into(),
            pickup_time: "2024-01-01T10:00".into(),
            notes: None,
            photo: Some(PathBuf::from("/definitely/not/here.png")),
        };

        let err = execute(Command::Book(args), &client).await.expect_err("missing file");
        assert!(err.to_string().contains("failed to read photo"));
    }
}
